//! Heading Classifier: depth-prefixed, kind-labelled heading for a declaration.

use crate::model::{DeclKind, DeclarationNode};

/// Character repeated once per heading level.
pub const LEVEL_MARKER: char = '#';

/// Heading line for `decl`, e.g. ``##Static Function `compute` ``.
///
/// One level for the declaration itself plus one per enclosing record.
pub fn heading(decl: &DeclarationNode) -> String {
    let depth = 1 + decl.parents.iter().filter(|p| p.kind.is_record()).count();

    let mut heading: String = std::iter::repeat(LEVEL_MARKER).take(depth).collect();
    heading.push_str(label(decl));
    heading.push_str(" `");
    heading.push_str(&decl.name);
    heading.push('`');
    heading
}

/// Kind label; empty for kinds without one (aliases, fields, namespaces...).
pub fn label(decl: &DeclarationNode) -> &'static str {
    match decl.kind {
        kind if kind.is_function_like() => {
            if decl.flags.is_static_method {
                "Static Function"
            } else {
                "Function"
            }
        }
        DeclKind::Constructor => {
            if decl.flags.is_copy_constructor {
                "Copy Constructor"
            } else if decl.flags.is_move_constructor {
                "Move Constructor"
            } else {
                "Constructor"
            }
        }
        kind if kind.is_record() => "Struct",
        DeclKind::Union => "Union",
        _ => "",
    }
}
