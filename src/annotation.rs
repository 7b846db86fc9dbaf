//! Annotation Classifier.

use crate::model::{Annotation, AnnotationKind};

/// Opening sequence of a documentation comment.
pub const DOC_OPENER: &str = "/**";

/// Marker that switches a comment to verbatim embedding.
pub const MARKDOWN_MARKER: &str = "[[markdown]]";

pub fn is_documentation(raw_text: &str) -> bool {
    raw_text.starts_with(DOC_OPENER)
}

pub fn is_markdown(raw_text: &str) -> bool {
    raw_text.contains(MARKDOWN_MARKER)
}

/// Classify a comment token. The markdown marker wins over the doc opener,
/// so a `/** [[markdown]] ... */` block is embedded rather than associated.
pub fn classify(token: &Annotation) -> AnnotationKind {
    if is_markdown(&token.raw_text) {
        AnnotationKind::MarkdownLiteral
    } else if is_documentation(&token.raw_text) {
        AnnotationKind::Documentation
    } else {
        AnnotationKind::Irrelevant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> AnnotationKind {
        classify(&Annotation::new(text, 1))
    }

    #[test]
    fn doc_comment() {
        assert_eq!(kind("/**\n * @brief x\n */"), AnnotationKind::Documentation);
        assert_eq!(kind("/** one liner */"), AnnotationKind::Documentation);
    }

    #[test]
    fn markdown_wins_over_doc() {
        assert_eq!(
            kind("/**\n * [[markdown]]\n * # Title\n */"),
            AnnotationKind::MarkdownLiteral
        );
        assert_eq!(kind("// [[markdown]]"), AnnotationKind::MarkdownLiteral);
    }

    #[test]
    fn plain_comments_are_irrelevant() {
        assert_eq!(kind("// note"), AnnotationKind::Irrelevant);
        assert_eq!(kind("/* block */"), AnnotationKind::Irrelevant);
        assert_eq!(kind(" /** not at start */"), AnnotationKind::Irrelevant);
        assert_eq!(kind("/*!\n * qt style\n */"), AnnotationKind::Irrelevant);
    }
}
