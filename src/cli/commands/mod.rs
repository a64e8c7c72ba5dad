pub mod generate;
pub mod helper;
pub mod init;
pub mod list;

mod command_result;

pub use command_result::*;
