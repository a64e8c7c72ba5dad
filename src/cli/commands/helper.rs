use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::{Extraction, ScanResult, extract, scan_inputs};

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;

    if common.verbose {
        match &loaded.path {
            Some(path) => eprintln!("{} {}", "config:".bold(), path.display()),
            None => eprintln!("{} using defaults", "config:".bold()),
        }
    }

    let mut config = loaded.config;
    if let Some(marker) = &common.marker {
        config.marker = marker.clone();
    }
    if let Some(annotation) = &common.annotation {
        config.annotation = annotation.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn scan(common: &CommonArgs, config: &Config) -> ScanResult {
    scan_inputs(
        &common.inputs,
        &config.source_suffix,
        &config.ignores,
        common.verbose,
    )
}

pub fn read_extraction(path: &Path, marker: &str) -> Result<Extraction> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markup file: {}", path.display()))?;
    Ok(extract(&content, marker))
}
