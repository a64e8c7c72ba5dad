//! Tokenizer for a single-line markup element.
//!
//! Only the opening tag of the first element on the line is inspected:
//!
//! ```text
//! <Button fx:id="submitBtn" text='Go' disable />
//!  ^^^^^^ ^^^^^ ^^^^^^^^^^^ ^^^^ ^^^^ ^^^^^^^
//!  tag    name  value       name val  boolean attribute
//! ```

use super::LineErrorKind;

/// A parsed attribute. `value` is `None` for value-less attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: Option<AttributeValue<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// Value delimited by `"` or `'`, without the delimiters.
    Quoted(&'a str),
    /// Bare value running up to the next whitespace, `/` or `>`.
    Bare(&'a str),
}

/// Cursor over the bytes of one trimmed line.
///
/// All delimiters are ASCII, so slicing at their byte offsets is always on a
/// char boundary.
pub struct ElementTokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> ElementTokenizer<'a> {
    /// Start tokenizing `line`, consuming the leading `<`.
    pub fn new(line: &'a str) -> Result<Self, LineErrorKind> {
        if !line.starts_with('<') {
            return Err(LineErrorKind::MissingOpeningBracket);
        }
        Ok(Self { src: line, pos: 1 })
    }

    /// Read the tag name, which becomes the component type.
    pub fn tag_name(&mut self) -> Result<&'a str, LineErrorKind> {
        let name = self.take_while(|b| !is_name_terminator(b));
        if name.is_empty() {
            return Err(LineErrorKind::MissingComponentType);
        }
        Ok(name)
    }

    /// Read the next attribute, or `None` once the tag is closed or the line ends.
    pub fn next_attribute(&mut self) -> Result<Option<Attribute<'a>>, LineErrorKind> {
        self.skip_whitespace();
        match self.peek() {
            None | Some(b'>') | Some(b'/') => return Ok(None),
            Some(_) => {}
        }

        let name = self.take_while(|b| !is_name_terminator(b) && b != b'=');
        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            return Ok(Some(Attribute { name, value: None }));
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                let Some(len) = self.src[start..].bytes().position(|b| b == quote) else {
                    return Err(LineErrorKind::UnterminatedValue);
                };
                self.pos = start + len + 1;
                if self.peek().is_some_and(|b| !is_name_terminator(b)) {
                    return Err(LineErrorKind::UnescapedQuote);
                }
                AttributeValue::Quoted(&self.src[start..start + len])
            }
            _ => AttributeValue::Bare(self.take_while(|b| !is_name_terminator(b))),
        };

        Ok(Some(Attribute {
            name,
            value: Some(value),
        }))
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        self.take_while(|b| b.is_ascii_whitespace());
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.src.as_bytes()[start..]
            .iter()
            .position(|&b| !pred(b))
            .unwrap_or(self.src.len() - start);
        self.pos = start + len;
        &self.src[start..self.pos]
    }
}

fn is_name_terminator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'/' || b == b'>'
}
