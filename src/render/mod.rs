//! Document renderers, selected by format name.

pub mod json;
pub mod markdown;

use crate::error::{DocError, Result};
use crate::model::Record;

/// Renders resolved records into a document.
///
/// `Ok(None)` means there was nothing to render; callers skip writing.
pub trait Renderer {
    fn render(&self, records: &[Record<'_>]) -> Result<Option<String>>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(DocError::UnknownFormat(format.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("markdown").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("html").err().unwrap();
        assert!(err.to_string().starts_with("unknown format: html"));
    }
}
