//! Stream Merger: one line-ordered walk over declarations and annotations.

use crate::annotation;
use crate::model::{Annotation, AnnotationKind, DeclarationNode, StreamItem};

/// Merge declarations with the documentation and markdown annotations.
///
/// Irrelevant comments are dropped. The sort is stable and annotations are
/// queued ahead of declarations, so a comment sharing a line with a
/// declaration stays in front of it.
pub fn merge<'a>(
    declarations: &[&'a DeclarationNode],
    annotations: &'a [Annotation],
) -> Vec<StreamItem<'a>> {
    let mut items: Vec<StreamItem<'a>> = annotations
        .iter()
        .filter_map(|token| match annotation::classify(token) {
            AnnotationKind::Irrelevant => None,
            kind => Some(StreamItem::Annotation(token, kind)),
        })
        .collect();
    items.extend(declarations.iter().map(|&decl| StreamItem::Declaration(decl)));
    items.sort_by_key(StreamItem::line);
    items
}
