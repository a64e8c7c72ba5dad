use anyhow::Result;
use rayon::prelude::*;

use super::super::args::ListCommand;
use super::{
    CommandResult, CommandSummary, FileOutcome, FileStatus, ListSummary,
    helper::{read_extraction, resolve_config, scan},
};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let config = resolve_config(&cmd.common)?;
    let scan_result = scan(&cmd.common, &config);

    let files: Vec<FileOutcome> = scan_result
        .files
        .par_iter()
        .map(|path| match read_extraction(path, &config.marker) {
            Ok(extraction) => FileOutcome {
                path: path.clone(),
                status: if extraction.is_clean() {
                    FileStatus::Listed
                } else {
                    FileStatus::Rejected
                },
                extraction,
            },
            Err(err) => FileOutcome::failed(path.clone(), err),
        })
        .collect();

    Ok(CommandResult::from_summary(CommandSummary::List(
        ListSummary {
            files,
            format: cmd.format,
            skipped_count: scan_result.skipped_count,
        },
    )))
}
