//! Core pipeline: extraction, report emission and input scanning.
//!
//! - `extract`: tokenize qualifying markup lines into identifier records
//! - `emit`: render and write the flat and grouped reports
//! - `scan`: expand file and directory inputs into markup files

pub mod emit;
pub mod extract;
pub mod scan;

pub use emit::{GroupedIndex, OutputPaths, render_flat, render_grouped, write_reports};
pub use extract::{Extraction, IdentifierRecord, LineErrorKind, MalformedLine, extract, parse_line};
pub use scan::{ScanResult, scan_inputs};
