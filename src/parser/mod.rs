// Author: Dustin Pilgrim
// License: MIT

use std::cell::RefCell;
use std::path::PathBuf;

use log::{debug, trace, warn};

use crate::ast::{Document, Page, Value};
use crate::decoder::Decoder;
use crate::lexer::{classify, leading_spaces, next_substantive, strip_inline_comment, LineKind};
use crate::LpmlError;

mod block;
pub(crate) mod document;
mod merge;
mod multiline;
mod value;

pub use merge::merge_mappings;
pub use multiline::{chomp, collect_multiline};
pub use value::parse_scalar;

/// Indentation state threaded through block parsing.
///
/// `width` is adaptive: it grows to whatever deeper indentation a block first
/// meets, rather than following a fixed unit per nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    pub level: usize,
    pub width: usize,
}

impl Indent {
    fn deeper(self, width: usize) -> Self {
        Indent { level: self.level + 1, width }
    }
}

/// Parsing context for one page of a document.
pub(crate) struct Parser<'a> {
    pub(crate) decoder: &'a Decoder,
    pub(crate) document: &'a Document,
    pub(crate) page: &'a str,
    /// Files currently being decoded through merges, outermost first.
    pub(crate) files: &'a RefCell<Vec<PathBuf>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        decoder: &'a Decoder,
        document: &'a Document,
        page: &'a Page,
        files: &'a RefCell<Vec<PathBuf>>,
    ) -> Self {
        Self {
            decoder,
            document,
            page: &page.title,
            files,
        }
    }

    /// Parse a whole page body from indentation zero.
    pub(crate) fn parse_lines(&self, lines: &[&str]) -> Result<Value, LpmlError> {
        let (value, next) = block::parse_block(self, lines, 0, Indent::default())?;

        let rest = next_substantive(lines, next);
        if rest < lines.len() {
            if self.decoder.options().strict {
                return Err(self.syntax_error(
                    rest + 1,
                    format!("Line is outdented past the top-level block: '{}'", lines[rest].trim()),
                    Some("Top-level keys must share the indentation of the first key".into()),
                    101,
                ));
            }
            warn!(
                "page '{}': ignoring {} line(s) from line {} that fall outside the top-level block",
                self.page,
                lines.len() - rest,
                rest + 1
            );
        }

        Ok(value)
    }

    pub(crate) fn syntax_error(&self, line: usize, message: String, hint: Option<String>, code: u32) -> LpmlError {
        LpmlError::SyntaxError {
            message,
            page: self.page.to_string(),
            line,
            hint,
            code: Some(code),
        }
    }

    pub(crate) fn structural_error(&self, line: usize, message: String, hint: Option<String>, code: u32) -> LpmlError {
        LpmlError::StructuralError {
            message,
            page: self.page.to_string(),
            line,
            hint,
            code: Some(code),
        }
    }
}
