//! Source text of a loaded module.

use std::path::{Path, PathBuf};
use tla_ir::{LineIndex, Span};
use tla_parse::ParseError;

/// One module file as it was parsed into the current snapshot.
#[derive(Debug)]
pub struct SourceFile {
    path: Option<PathBuf>,
    text: String,
    line_index: LineIndex,
    errors: Vec<ParseError>,
}

impl SourceFile {
    pub(crate) fn new(path: Option<PathBuf>, text: String, errors: Vec<ParseError>) -> Self {
        let line_index = LineIndex::new(&text);
        SourceFile {
            path,
            text,
            line_index,
            errors,
        }
    }

    /// File the text was read from; `None` for embedded and in-memory
    /// sources.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Text covered by `span`, empty if out of range.
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or_default()
    }
}
