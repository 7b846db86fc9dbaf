//! Markdown renderer.
//!
//! Per documented declaration: heading, fenced C++ excerpt, prose, blank
//! line. Markdown comments are emitted as their formatted body alone.

use crate::comment::format_comment;
use crate::error::Result;
use crate::heading::heading;
use crate::model::{Association, Record};
use crate::render::Renderer;

const FENCE: &str = "```";
const FENCE_LANGUAGE: &str = "C++";

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[Record<'_>]) -> Result<Option<String>> {
        if records.is_empty() {
            return Ok(None);
        }

        let mut lines: Vec<String> = Vec::new();
        for record in records {
            match record {
                Record::Markdown(token) => lines.push(format_comment(&token.raw_text)),
                Record::Documented(assoc) => render_association(&mut lines, assoc),
            }
        }
        Ok(Some(lines.join("\n")))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_association(lines: &mut Vec<String>, assoc: &Association) {
    if let Some(decl) = assoc.declaration {
        lines.push(heading(decl));
    }
    lines.push(format!("{FENCE}{FENCE_LANGUAGE}"));
    lines.push(assoc.source_text.clone());
    lines.push(FENCE.to_string());
    lines.push(format_comment(&assoc.annotation.raw_text));
    lines.push(String::new());
}
