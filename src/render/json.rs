//! JSON renderer: the resolved records as a machine-readable document.

use crate::comment::format_comment;
use crate::error::Result;
use crate::heading::heading;
use crate::model::{DeclKind, Record};
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonEntry<'a> {
    Markdown {
        text: String,
    },
    Declaration {
        heading: Option<String>,
        declaration: Option<JsonDeclaration<'a>>,
        source: &'a str,
        prose: String,
    },
}

#[derive(Serialize)]
struct JsonDeclaration<'a> {
    kind: DeclKind,
    name: &'a str,
    line: usize,
}

impl Renderer for JsonRenderer {
    fn render(&self, records: &[Record<'_>]) -> Result<Option<String>> {
        if records.is_empty() {
            return Ok(None);
        }

        let entries = records
            .iter()
            .map(|record| match record {
                Record::Markdown(token) => JsonEntry::Markdown {
                    text: format_comment(&token.raw_text),
                },
                Record::Documented(assoc) => JsonEntry::Declaration {
                    heading: assoc.declaration.map(heading),
                    declaration: assoc.declaration.map(|decl| JsonDeclaration {
                        kind: decl.kind,
                        name: &decl.name,
                        line: decl.start_line,
                    }),
                    source: &assoc.source_text,
                    prose: format_comment(&assoc.annotation.raw_text),
                },
            })
            .collect();

        let mut out = serde_json::to_string_pretty(&JsonDocument { entries })?;
        out.push('\n');
        Ok(Some(out))
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
