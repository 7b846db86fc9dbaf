//! Source Line Store: the source text, addressable by 1-based line.

use crate::error::{DocError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines `start..=end` (1-based) joined with `\n`.
    pub fn range(&self, start: usize, end: usize) -> Result<String> {
        if start == 0 || start > end || end > self.lines.len() {
            return Err(DocError::MalformedExtent {
                start,
                end,
                available: self.lines.len(),
            });
        }
        Ok(self.lines[start - 1..end].join("\n"))
    }
}
