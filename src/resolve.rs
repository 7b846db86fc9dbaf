//! Association Resolver: pair each documentation comment with the
//! declaration it precedes and rebuild the source excerpt shown under it.

use crate::error::Result;
use crate::model::{Annotation, AnnotationKind, Association, DeclKind, Record, StreamItem};
use crate::source::SourceLines;
use tracing::warn;

/// Walk the merged stream once and emit a record per annotation.
///
/// Markdown annotations pass through untouched. A documentation annotation
/// scans forward over template parameters and other annotations until the
/// first real declaration; everything scanned, the match included, ends up
/// in the excerpt.
pub fn resolve<'a>(stream: &[StreamItem<'a>], lines: &SourceLines) -> Result<Vec<Record<'a>>> {
    let mut records = Vec::new();

    for (index, item) in stream.iter().enumerate() {
        let StreamItem::Annotation(token, kind) = *item else {
            continue;
        };
        match kind {
            AnnotationKind::MarkdownLiteral => records.push(Record::Markdown(token)),
            AnnotationKind::Documentation => {
                let association = associate(token, &stream[index + 1..], lines)?;
                records.push(Record::Documented(association));
            }
            AnnotationKind::Irrelevant => {}
        }
    }

    Ok(records)
}

fn associate<'a>(
    annotation: &'a Annotation,
    following: &[StreamItem<'a>],
    lines: &SourceLines,
) -> Result<Association<'a>> {
    let mut excerpt = Excerpt::default();
    let mut declaration = None;

    for item in following {
        excerpt.push(extent(item), lines)?;
        if let StreamItem::Declaration(decl) = *item {
            if decl.kind != DeclKind::TemplateTypeParameter {
                declaration = Some(decl);
                break;
            }
        }
    }

    if declaration.is_none() {
        warn!(
            line = annotation.line,
            "documentation comment is not followed by a declaration"
        );
    }

    Ok(Association {
        annotation,
        declaration,
        source_text: excerpt.finish(),
    })
}

/// Lines an item contributes to an excerpt.
///
/// Records only show their opening signature line; everything else shows
/// its full extent.
fn extent(item: &StreamItem) -> (usize, usize) {
    match *item {
        StreamItem::Declaration(decl) if decl.kind.is_record() => (decl.start_line, decl.start_line),
        StreamItem::Declaration(decl) => (decl.start_line, decl.end_line),
        StreamItem::Annotation(token, _) => (token.line, token.end_line),
    }
}

/// Text of every scanned node, in encounter order. Template parameters
/// sharing a header line each contribute that line.
#[derive(Default)]
struct Excerpt {
    parts: Vec<String>,
}

impl Excerpt {
    fn push(&mut self, (start, end): (usize, usize), lines: &SourceLines) -> Result<()> {
        self.parts.push(lines.range(start, end)?.trim().to_string());
        Ok(())
    }

    /// Join the parts and strip every line's indentation.
    fn finish(self) -> String {
        self.parts
            .join("\n")
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
