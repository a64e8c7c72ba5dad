//! Identifier extraction from markup text.
//!
//! A line qualifies when it contains the identifier-attribute marker
//! (`fx:id` by default). Every qualifying line is tokenized as a single-line
//! element; the tag name becomes the component type and the marker
//! attribute's value becomes the identifier.
//!
//! Qualifying lines that do not tokenize are collected as [`MalformedLine`]s
//! rather than aborting, so callers decide whether they are fatal.

mod tokenizer;

use std::fmt;

use serde::Serialize;

use tokenizer::{AttributeValue, ElementTokenizer};

/// Default identifier-attribute marker for FXML.
pub const DEFAULT_MARKER: &str = "fx:id";

/// One declared component identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierRecord {
    pub component_type: String,
    pub identifier: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Why a qualifying line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    MissingOpeningBracket,
    MissingComponentType,
    MissingIdentifierAttribute,
    UnquotedValue,
    UnterminatedValue,
    UnescapedQuote,
    EmptyIdentifier,
    InvalidIdentifier(String),
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineErrorKind::MissingOpeningBracket => write!(f, "line does not start with '<'"),
            LineErrorKind::MissingComponentType => write!(f, "element has no tag name"),
            LineErrorKind::MissingIdentifierAttribute => {
                write!(f, "marker found but no matching attribute on the element")
            }
            LineErrorKind::UnquotedValue => write!(f, "identifier value is not quoted"),
            LineErrorKind::UnterminatedValue => write!(f, "attribute value has no closing quote"),
            LineErrorKind::UnescapedQuote => {
                write!(f, "attribute value contains an unescaped quote")
            }
            LineErrorKind::EmptyIdentifier => write!(f, "identifier value is empty"),
            LineErrorKind::InvalidIdentifier(value) => {
                write!(f, "identifier \"{}\" contains a quote, '&' or whitespace", value)
            }
        }
    }
}

/// A qualifying line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line: usize,
    pub kind: LineErrorKind,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for MalformedLine {}

/// Result of scanning one markup file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Records in source line order.
    pub records: Vec<IdentifierRecord>,
    /// Qualifying lines that were rejected, in source line order.
    pub malformed: Vec<MalformedLine>,
}

impl Extraction {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Extract identifier records from the full text of a markup file.
pub fn extract(content: &str, marker: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if !line.contains(marker) {
            continue;
        }
        match parse_line(line, marker) {
            Ok((component_type, identifier)) => extraction.records.push(IdentifierRecord {
                component_type,
                identifier,
                line: index + 1,
            }),
            Err(kind) => extraction.malformed.push(MalformedLine {
                line: index + 1,
                kind,
            }),
        }
    }

    extraction
}

/// Parse one trimmed qualifying line into `(component_type, identifier)`.
///
/// # Examples
///
/// ```
/// use fxids::core::parse_line;
///
/// let parsed = parse_line(r#"<Button fx:id="submitBtn" text="Go"/>"#, "fx:id").unwrap();
/// assert_eq!(parsed, ("Button".to_string(), "submitBtn".to_string()));
/// assert!(parse_line(r#"<Button fx:id="a"b"/>"#, "fx:id").is_err());
/// ```
pub fn parse_line(line: &str, marker: &str) -> Result<(String, String), LineErrorKind> {
    let mut tokenizer = ElementTokenizer::new(line)?;
    let component_type = tokenizer.tag_name()?;

    while let Some(attr) = tokenizer.next_attribute()? {
        if attr.name != marker {
            continue;
        }
        let value = match attr.value {
            Some(AttributeValue::Quoted(value)) => value,
            Some(AttributeValue::Bare(_)) | None => return Err(LineErrorKind::UnquotedValue),
        };
        validate_identifier(value)?;
        return Ok((component_type.to_string(), value.to_string()));
    }

    Err(LineErrorKind::MissingIdentifierAttribute)
}

/// Escaped quotes and entities are not supported; such values are rejected
/// instead of being truncated.
fn validate_identifier(value: &str) -> Result<(), LineErrorKind> {
    if value.is_empty() {
        return Err(LineErrorKind::EmptyIdentifier);
    }
    if value
        .chars()
        .any(|c| c == '"' || c == '\'' || c == '&' || c.is_whitespace())
    {
        return Err(LineErrorKind::InvalidIdentifier(value.to_string()));
    }
    Ok(())
}
