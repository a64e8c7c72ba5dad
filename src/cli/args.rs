//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write the flat and grouped field-declaration reports
//! - `list`: Print extracted identifiers without writing anything
//! - `init`: Initialize an fxids configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read markup files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Markup files or directories to scan
    #[arg(required = true, env = "FXIDS_INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Identifier-attribute marker (overrides config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// Annotation line written before each declaration (overrides config file)
    #[arg(long)]
    pub annotation: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Extract and report without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Report malformed lines as warnings and still write reports
    #[arg(long)]
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate @FXML field declarations next to each markup file
    Generate(GenerateCommand),
    /// Print the identifiers found in markup files
    List(ListCommand),
    /// Initialize a new .fxidsrc.json configuration file
    Init,
}
