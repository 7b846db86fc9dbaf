//! Scope Filter: select the public declarations inside a named namespace.

use crate::model::{DeclKind, DeclarationNode, TranslationUnit};

/// Leading character that hides a declaration from the generated docs.
pub const PRIVATE_MARKER: char = '_';

pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_MARKER)
}

/// Pre-order selection of every non-private declaration nested anywhere
/// inside a namespace called `scope`.
///
/// The namespace itself is not selected. Once inside, nested namespaces of
/// any name keep the gate open.
pub fn select<'a>(unit: &'a TranslationUnit, scope: &str) -> Vec<&'a DeclarationNode> {
    let mut selected = Vec::new();
    for node in &unit.children {
        visit(node, scope, false, &mut selected);
    }
    selected
}

fn visit<'a>(
    node: &'a DeclarationNode,
    scope: &str,
    inside: bool,
    selected: &mut Vec<&'a DeclarationNode>,
) {
    if inside && !is_private(&node.name) {
        selected.push(node);
    }

    let inside = inside || (node.kind == DeclKind::Namespace && node.name == scope);
    for child in &node.children {
        visit(child, scope, inside, selected);
    }
}
