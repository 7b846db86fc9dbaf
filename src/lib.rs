//! docit: generate markdown documentation from doc-commented C++ headers.
//!
//! A source unit (declaration tree, comment tokens, source lines) goes
//! through a fixed pipeline:
//!
//! 1. [`scope::select`] keeps the public declarations of one namespace.
//! 2. [`stream::merge`] interleaves them with the relevant comments by line.
//! 3. [`resolve::resolve`] pairs each doc comment with the declaration it
//!    precedes and rebuilds that declaration's source excerpt.
//! 4. A [`render::Renderer`] turns the records into a document.

pub mod annotation;
pub mod comment;
pub mod error;
pub mod frontend;
pub mod heading;
pub mod logging;
pub mod model;
pub mod render;
pub mod resolve;
pub mod scope;
pub mod source;
pub mod stream;

use error::Result;
use model::SourceUnit;
use render::markdown::MarkdownRenderer;
use render::Renderer;
use tracing::debug;

/// Markdown document for the namespace `scope`, or `None` when nothing in it
/// is documented.
pub fn generate_document(unit: &SourceUnit, scope: &str) -> Result<Option<String>> {
    generate_with(unit, scope, &MarkdownRenderer)
}

/// Same pipeline as [`generate_document`] with a caller-chosen renderer.
pub fn generate_with(
    unit: &SourceUnit,
    scope: &str,
    renderer: &dyn Renderer,
) -> Result<Option<String>> {
    let declarations = scope::select(&unit.tree, scope);
    debug!(scope, selected = declarations.len(), "selected declarations");

    let stream = stream::merge(&declarations, &unit.comments);
    let records = resolve::resolve(&stream, &unit.lines)?;
    debug!(records = records.len(), "resolved annotations");

    renderer.render(&records)
}
