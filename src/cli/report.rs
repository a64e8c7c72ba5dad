//! Report formatting and printing utilities.
//!
//! Successful work goes to stdout, warnings and errors to stderr. Every
//! printer has a `_to` variant taking explicit writers for testing.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::commands::{
    CommandResult, CommandSummary, FileOutcome, FileStatus, GenerateSummary, InitSummary,
    ListSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{GroupedIndex, IdentifierRecord, MalformedLine};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, out, err),
        CommandSummary::List(summary) => print_list(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

// ============================================================
// generate
// ============================================================

fn print_generate<O: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for file in &summary.files {
        print_malformed(file, summary.skip_malformed, err);

        match &file.status {
            FileStatus::Written(paths) => {
                let _ = writeln!(
                    out,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    describe(file).green()
                );
                if verbose {
                    let _ = writeln!(out, "    wrote {}", paths.flat.display());
                    let _ = writeln!(out, "    wrote {}", paths.grouped.display());
                }
            }
            FileStatus::Planned(paths) => {
                let _ = writeln!(out, "{} (dry run)", describe(file));
                let _ = writeln!(out, "    would write {}", paths.flat.display());
                let _ = writeln!(out, "    would write {}", paths.grouped.display());
            }
            FileStatus::Rejected => {
                let _ = writeln!(
                    err,
                    "{} {}: {} malformed {}, reports not written (use {} to write anyway)",
                    FAILURE_MARK.red(),
                    file.path.display(),
                    file.extraction.malformed.len(),
                    plural(file.extraction.malformed.len(), "line", "lines"),
                    "--skip-malformed".cyan()
                );
            }
            FileStatus::Failed(e) => print_failure(&file.path, e, err),
            FileStatus::Listed => {}
        }
    }

    print_skipped(summary.skipped_count, err);

    if summary.files.is_empty() {
        let _ = writeln!(
            err,
            "{} no markup files found in the given inputs",
            "warning:".bold().yellow()
        );
    }
}

fn describe(file: &FileOutcome) -> String {
    let records = file.extraction.records.len();
    let types = GroupedIndex::from_records(&file.extraction.records).len();
    format!(
        "{}: {} {} in {} {}",
        file.path.display(),
        records,
        plural(records, "identifier", "identifiers"),
        types,
        plural(types, "type", "types")
    )
}

// ============================================================
// list
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMalformedLine {
    line: usize,
    reason: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFileListing<'a> {
    file: String,
    records: &'a [IdentifierRecord],
    grouped: GroupedIndex,
    malformed: Vec<JsonMalformedLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_list<O: Write, E: Write>(summary: &ListSummary, out: &mut O, err: &mut E) {
    match summary.format {
        OutputFormat::Json => print_list_json(&summary.files, out),
        OutputFormat::Text => {
            for file in &summary.files {
                print_malformed(file, false, err);
                if let FileStatus::Failed(e) = &file.status {
                    print_failure(&file.path, e, err);
                    continue;
                }
                print_table(&file.path, &file.extraction.records, out);
            }
        }
    }
    print_skipped(summary.skipped_count, err);
}

fn print_list_json<O: Write>(files: &[FileOutcome], out: &mut O) {
    let listings: Vec<JsonFileListing<'_>> = files
        .iter()
        .map(|file| JsonFileListing {
            file: file.path.display().to_string(),
            records: &file.extraction.records,
            grouped: GroupedIndex::from_records(&file.extraction.records),
            malformed: file
                .extraction
                .malformed
                .iter()
                .map(|m| JsonMalformedLine {
                    line: m.line,
                    reason: m.kind.to_string(),
                })
                .collect(),
            error: match &file.status {
                FileStatus::Failed(e) => Some(format!("{:#}", e)),
                _ => None,
            },
        })
        .collect();

    match serde_json::to_string_pretty(&listings) {
        Ok(json) => {
            let _ = writeln!(out, "{}", json);
        }
        Err(e) => {
            let _ = writeln!(out, "{{\"error\": \"{}\"}}", e);
        }
    }
}

/// Print records as an aligned `line  type  identifier` table.
fn print_table<O: Write>(path: &Path, records: &[IdentifierRecord], out: &mut O) {
    let _ = writeln!(out, "{}", path.display().to_string().bold());
    if records.is_empty() {
        let _ = writeln!(out, "  (no identifiers)");
        return;
    }

    let line_width = records
        .iter()
        .map(|r| r.line.to_string().len())
        .max()
        .unwrap_or(1);
    let type_width = records
        .iter()
        .map(|r| r.component_type.width())
        .max()
        .unwrap_or(0);

    for record in records {
        let padding = " ".repeat(type_width - record.component_type.width());
        let _ = writeln!(
            out,
            "  {:>line_width$}  {}{}  {}",
            record.line,
            record.component_type.cyan(),
            padding,
            record.identifier,
            line_width = line_width
        );
    }
}

// ============================================================
// init
// ============================================================

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "Error: {}", error);
        return;
    }
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_malformed<E: Write>(file: &FileOutcome, lenient: bool, err: &mut E) {
    for malformed in &file.extraction.malformed {
        print_malformed_line(&file.path, malformed, lenient, err);
    }
}

fn print_malformed_line<E: Write>(path: &Path, malformed: &MalformedLine, lenient: bool, err: &mut E) {
    let severity = if lenient {
        "warning".bold().yellow()
    } else {
        "error".bold().red()
    };
    let _ = writeln!(
        err,
        "{}: {}:{}: {}",
        severity,
        path.display(),
        malformed.line,
        malformed.kind
    );
}

fn print_failure<E: Write>(path: &Path, e: &anyhow::Error, err: &mut E) {
    let _ = writeln!(
        err,
        "{} {}: {:#}",
        "error:".bold().red(),
        path.display(),
        e
    );
}

fn print_skipped<E: Write>(count: usize, err: &mut E) {
    if count > 0 {
        let _ = writeln!(
            err,
            "{} {} {} could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            plural(count, "path", "paths"),
            "-v".cyan()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
