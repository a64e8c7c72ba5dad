//! fxids - @FXML field generator for FXML layouts
//!
//! fxids scans FXML files for `fx:id` attributes and generates the matching
//! `@FXML` field declarations for a JavaFX controller, in two layouts: one
//! declaration per identifier, and one declaration per component type.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and report generation pipeline

pub mod cli;
pub mod config;
pub mod core;
