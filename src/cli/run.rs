use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init, list::list},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with per-file outcomes and error counts
/// - `Err` if the command cannot start (e.g., invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
