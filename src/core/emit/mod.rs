//! Report rendering and writing.
//!
//! Two reports are produced per markup file:
//!
//! - flat: one annotated declaration per record, in source order
//! - grouped: one annotated declaration per component type, in first-seen
//!   order, listing that type's identifiers comma-separated
//!
//! ```text
//! @FXML                       @FXML
//! Button submitBtn;           Button submitBtn, cancelBtn;
//! @FXML                       @FXML
//! Button cancelBtn;           Label titleLbl;
//! @FXML
//! Label titleLbl;
//! ```

mod paths;

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use super::extract::IdentifierRecord;

pub use paths::OutputPaths;

/// Default annotation line written before every declaration.
pub const DEFAULT_ANNOTATION: &str = "@FXML";

/// Identifiers of one component type, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGroup {
    pub component_type: String,
    pub identifiers: Vec<String>,
}

/// Component type to identifiers, keyed in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedIndex {
    groups: Vec<TypeGroup>,
    positions: HashMap<String, usize>,
}

impl GroupedIndex {
    pub fn from_records(records: &[IdentifierRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.push(&record.component_type, &record.identifier);
        }
        index
    }

    fn push(&mut self, component_type: &str, identifier: &str) {
        let position = match self.positions.get(component_type) {
            Some(&position) => position,
            None => {
                self.groups.push(TypeGroup {
                    component_type: component_type.to_string(),
                    identifiers: Vec::new(),
                });
                let position = self.groups.len() - 1;
                self.positions.insert(component_type.to_string(), position);
                position
            }
        };
        self.groups[position]
            .identifiers
            .push(identifier.to_string());
    }

    pub fn groups(&self) -> &[TypeGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for GroupedIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.groups.serialize(serializer)
    }
}

pub fn render_flat(records: &[IdentifierRecord], annotation: &str) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(annotation);
        out.push('\n');
        out.push_str(&format!("{} {};\n", record.component_type, record.identifier));
    }
    out
}

pub fn render_grouped(index: &GroupedIndex, annotation: &str) -> String {
    let mut out = String::new();
    for group in index.groups() {
        out.push_str(annotation);
        out.push('\n');
        out.push_str(&format!(
            "{} {};\n",
            group.component_type,
            group.identifiers.join(", ")
        ));
    }
    out
}

/// Write both reports. The flat report is written first; if the grouped
/// write fails the flat report stays on disk.
pub fn write_reports(
    records: &[IdentifierRecord],
    annotation: &str,
    paths: &OutputPaths,
) -> Result<()> {
    write_report(&paths.flat, &render_flat(records, annotation))?;
    let index = GroupedIndex::from_records(records);
    write_report(&paths.grouped, &render_grouped(&index, annotation))?;
    Ok(())
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write report: {}", path.display()))
}
