use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use super::super::args::GenerateCommand;
use super::{
    CommandResult, CommandSummary, FileOutcome, FileStatus, GenerateSummary,
    helper::{read_extraction, resolve_config, scan},
};
use crate::config::Config;
use crate::core::{OutputPaths, write_reports};

/// Generate the flat and grouped reports for every markup file.
///
/// Files are processed in parallel and independently: a failure in one
/// file does not stop the others. Outcomes keep the input order.
pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let config = resolve_config(&cmd.common)?;
    let scan_result = scan(&cmd.common, &config);
    let planned = plan_outputs(&scan_result.files, &config);

    let files: Vec<FileOutcome> = planned
        .into_par_iter()
        .map(|(path, paths)| match paths {
            Ok(paths) => generate_file(path, paths, &config, cmd.dry_run, cmd.skip_malformed),
            Err(err) => FileOutcome::failed(path.to_path_buf(), err),
        })
        .collect();

    Ok(CommandResult::from_summary(CommandSummary::Generate(
        GenerateSummary {
            files,
            skip_malformed: cmd.skip_malformed,
            skipped_count: scan_result.skipped_count,
        },
    )))
}

/// Derive report paths for every file, in input order.
///
/// A file whose report would land on a path already claimed by an earlier
/// file gets an error instead, so no two files write the same report.
fn plan_outputs<'a>(
    files: &'a [PathBuf],
    config: &Config,
) -> Vec<(&'a Path, Result<OutputPaths>)> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    files
        .iter()
        .map(|path| {
            let paths = OutputPaths::derive(
                path,
                &config.source_suffix,
                &config.flat_suffix,
                &config.grouped_suffix,
            )
            .and_then(|paths| {
                for target in [&paths.flat, &paths.grouped] {
                    if let Some(owner) = claimed.get(target) {
                        bail!(
                            "Report {} is already generated from {}",
                            target.display(),
                            owner.display()
                        );
                    }
                }
                claimed.insert(paths.flat.clone(), path.as_path());
                claimed.insert(paths.grouped.clone(), path.as_path());
                Ok(paths)
            });
            (path.as_path(), paths)
        })
        .collect()
}

fn generate_file(
    path: &Path,
    paths: OutputPaths,
    config: &Config,
    dry_run: bool,
    skip_malformed: bool,
) -> FileOutcome {
    let extraction = match read_extraction(path, &config.marker) {
        Ok(extraction) => extraction,
        Err(err) => return FileOutcome::failed(path.to_path_buf(), err),
    };

    let status = if !extraction.is_clean() && !skip_malformed {
        FileStatus::Rejected
    } else if dry_run {
        FileStatus::Planned(paths)
    } else {
        match write_reports(&extraction.records, &config.annotation, &paths) {
            Ok(()) => FileStatus::Written(paths),
            Err(err) => FileStatus::Failed(err),
        }
    };

    FileOutcome {
        path: path.to_path_buf(),
        extraction,
        status,
    }
}
