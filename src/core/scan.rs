use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of expanding the command-line inputs.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Markup files in input order; directory contents sorted by file name.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be accessed.
    pub skipped_count: usize,
}

/// Expand inputs into markup files.
///
/// Files are taken as given, even when they lack `source_suffix` or do not
/// exist (reading them reports the error). Directories are walked
/// recursively for files whose name ends with `source_suffix`, skipping
/// `ignore_patterns`.
pub fn scan_inputs(
    inputs: &[PathBuf],
    source_suffix: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    for input in inputs {
        if !input.is_dir() {
            if seen.insert(input.clone()) {
                result.files.push(input.clone());
            }
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            let relative = path.strip_prefix(input).unwrap_or(path);
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| relative.starts_with(ignore_path))
            {
                continue;
            }
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file()
                && is_markup_file(path, source_suffix)
                && seen.insert(path.to_path_buf())
            {
                result.files.push(path.to_path_buf());
            }
        }
    }

    result
}

fn is_markup_file(path: &Path, source_suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(source_suffix))
        .unwrap_or(false)
}
