use std::path::PathBuf;

use crate::core::{Extraction, OutputPaths};

use super::super::args::OutputFormat;

/// What happened to one markup file.
#[derive(Debug)]
pub enum FileStatus {
    /// Both reports were written.
    Written(OutputPaths),
    /// Reports were derived but not written (`--dry-run`).
    Planned(OutputPaths),
    /// Malformed lines: `generate` in strict mode wrote nothing, `list`
    /// still lists the well-formed records.
    Rejected,
    /// Extracted for listing only.
    Listed,
    /// Reading, path derivation or writing failed.
    Failed(anyhow::Error),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Empty when the file could not be read.
    pub extraction: Extraction,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn failed(path: PathBuf, err: anyhow::Error) -> Self {
        Self {
            path,
            extraction: Extraction::default(),
            status: FileStatus::Failed(err),
        }
    }
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub files: Vec<FileOutcome>,
    pub skip_malformed: bool,
    /// Directory entries that could not be accessed while scanning.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub files: Vec<FileOutcome>,
    pub format: OutputFormat,
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    List(ListSummary),
    Init(InitSummary),
}

/// Result of running fxids commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files that failed with an I/O or path error, plus a failed init.
    pub error_count: usize,
    /// Files with malformed lines (not written by `generate`, flagged by `list`).
    pub rejected_count: usize,
}

impl CommandResult {
    pub fn from_summary(summary: CommandSummary) -> Self {
        let files: &[FileOutcome] = match &summary {
            CommandSummary::Generate(s) => &s.files,
            CommandSummary::List(s) => &s.files,
            CommandSummary::Init(_) => &[],
        };

        let mut error_count = files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed(_)))
            .count();
        let rejected_count = files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Rejected))
            .count();

        if let CommandSummary::Init(ref init) = summary
            && init.error.is_some()
        {
            error_count += 1;
        }

        Self {
            summary,
            error_count,
            rejected_count,
        }
    }
}
