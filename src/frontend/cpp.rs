//! C++ declaration and comment provider built on tree-sitter.
//!
//! Produces the declaration tree (namespaces, records, functions, template
//! parameters, members) and the comment tokens of one source file. Bodies of
//! functions are not descended into.

use super::macros;
use crate::error::{DocError, Result};
use crate::model::{
    Annotation, DeclFlags, DeclKind, DeclarationNode, Enclosing, SourceUnit, TranslationUnit,
};
use crate::source::SourceLines;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

// First constructor parameter of a copy (`&`) or move (`&&`) constructor:
// `const Vec<T>& other`, `Vec const &`, `Vec&& other`.
static RE_SELF_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:const\s+)?(?:volatile\s+)?([A-Za-z_][\w:]*)\s*(?:<[^&]*>)?",
        r"(?:\s*\bconst\b)?\s*(&&?)\s*(?:[A-Za-z_]\w*)?$"
    ))
    .unwrap()
});

/// Parse C++ source text into a [`SourceUnit`].
pub fn parse(text: &str) -> Result<SourceUnit> {
    parse_with(text, &[])
}

/// Parse with extra export macro names to ignore (see [`macros`]).
///
/// Only the parser sees the blanked text; names, excerpts and comments come
/// from `text` as written.
pub fn parse_with(text: &str, export_macros: &[String]) -> Result<SourceUnit> {
    let prepared = macros::neutralize(text, export_macros);

    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_cpp::LANGUAGE.into())?;
    let tree = parser.parse(&prepared, None).ok_or(DocError::Parse)?;
    let root = tree.root_node();

    if root.has_error() {
        warn!("source has syntax errors; declarations near them may be missing");
    }

    let builder = TreeBuilder { source: text };
    let mut children = Vec::new();
    builder.visit_items(root, &Context::default(), &mut children);
    let comments = collect_comments(root, text);

    debug!(
        top_level = children.len(),
        comments = comments.len(),
        "parsed source unit"
    );

    Ok(SourceUnit {
        tree: TranslationUnit { children },
        comments,
        lines: SourceLines::new(text),
    })
}

/// Enclosing declarations of the node being visited.
#[derive(Debug, Clone, Default)]
struct Context {
    /// Innermost first.
    parents: Vec<Enclosing>,
    /// Name of the directly enclosing record, for constructor detection.
    record: Option<String>,
}

impl Context {
    fn enter(&self, kind: DeclKind, name: &str) -> Context {
        let mut parents = Vec::with_capacity(self.parents.len() + 1);
        parents.push(Enclosing {
            kind,
            name: name.to_string(),
        });
        parents.extend(self.parents.iter().cloned());

        let record = (kind.is_record() || kind == DeclKind::Union).then(|| name.to_string());
        Context { parents, record }
    }
}

/// Template header wrapping the item being visited.
#[derive(Debug, Clone, Copy)]
struct TemplateHead {
    /// `false` for explicit specializations (`template<>`).
    has_params: bool,
}

impl TemplateHead {
    fn is_generic(head: Option<TemplateHead>) -> bool {
        head.is_some_and(|h| h.has_params)
    }
}

struct TreeBuilder<'s> {
    source: &'s str,
}

impl<'s> TreeBuilder<'s> {
    fn text(&self, node: Node) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn declaration_node(
        &self,
        kind: DeclKind,
        name: &str,
        syntax: Node,
        ctx: &Context,
    ) -> DeclarationNode {
        let (start, end) = line_span(syntax);
        let mut decl = DeclarationNode::new(kind, name, start, end);
        decl.parents = ctx.parents.clone();
        decl
    }

    /// Visit every item directly inside a container (translation unit,
    /// namespace body, class body, preprocessor block).
    fn visit_items(&self, container: Node, ctx: &Context, out: &mut Vec<DeclarationNode>) {
        let mut cursor = container.walk();
        for child in container.named_children(&mut cursor) {
            self.visit_item(child, ctx, None, out);
        }
    }

    fn visit_item(
        &self,
        node: Node,
        ctx: &Context,
        template: Option<TemplateHead>,
        out: &mut Vec<DeclarationNode>,
    ) {
        match node.kind() {
            "namespace_definition" => self.namespace(node, ctx, out),
            "class_specifier" | "struct_specifier" | "union_specifier" => {
                self.record(node, ctx, template, out)
            }
            "enum_specifier" => self.enumeration(node, ctx, out),
            "function_definition" => {
                if let Some(declarator) = node
                    .child_by_field_name("declarator")
                    .and_then(find_function_declarator)
                {
                    self.function(node, declarator, ctx, template, out);
                }
            }
            "declaration" | "field_declaration" => self.declaration(node, ctx, template, out),
            "template_declaration" => self.template(node, ctx, out),
            "alias_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    out.push(self.declaration_node(DeclKind::Other, self.text(name), node, ctx));
                }
            }
            "type_definition" => self.type_definition(node, ctx, out),
            "linkage_specification" => {
                if let Some(body) = node.child_by_field_name("body") {
                    if body.kind() == "declaration_list" {
                        self.visit_items(body, ctx, out);
                    } else {
                        self.visit_item(body, ctx, None, out);
                    }
                }
            }
            "preproc_if" | "preproc_ifdef" | "preproc_else" | "preproc_elif" | "preproc_elifdef"
            | "declaration_list" => self.visit_items(node, ctx, out),
            _ => {}
        }
    }

    fn namespace(&self, node: Node, ctx: &Context, out: &mut Vec<DeclarationNode>) {
        // `namespace a::b { }` declares both `a` and `b`.
        let names: Vec<&str> = match node.child_by_field_name("name") {
            Some(name) => self.text(name).split("::").map(str::trim).collect(),
            None => vec![""],
        };
        if let Some(decl) = self.nested_namespace(node, &names, ctx) {
            out.push(decl);
        }
    }

    fn nested_namespace(
        &self,
        node: Node,
        names: &[&str],
        ctx: &Context,
    ) -> Option<DeclarationNode> {
        let (name, rest) = names.split_first()?;
        let mut decl = self.declaration_node(DeclKind::Namespace, name, node, ctx);
        let inner = ctx.enter(DeclKind::Namespace, name);

        if let Some(child) = self.nested_namespace(node, rest, &inner) {
            decl.children.push(child);
        } else if let Some(body) = node.child_by_field_name("body") {
            self.visit_items(body, &inner, &mut decl.children);
        }
        Some(decl)
    }

    fn record(
        &self,
        node: Node,
        ctx: &Context,
        template: Option<TemplateHead>,
        out: &mut Vec<DeclarationNode>,
    ) {
        let name_node = node.child_by_field_name("name");
        let name = name_node.map(|n| self.bare_name(n)).unwrap_or_default();

        let kind = match node.kind() {
            "union_specifier" => DeclKind::Union,
            _ if TemplateHead::is_generic(template) => {
                if name_node.is_some_and(|n| n.kind() == "template_type") {
                    DeclKind::ClassTemplatePartialSpecialization
                } else {
                    DeclKind::ClassTemplate
                }
            }
            "class_specifier" => DeclKind::Class,
            _ => DeclKind::Struct,
        };

        let mut decl = self.declaration_node(kind, &name, node, ctx);
        if let Some(body) = node.child_by_field_name("body") {
            self.visit_items(body, &ctx.enter(kind, &name), &mut decl.children);
        }
        out.push(decl);
    }

    fn enumeration(&self, node: Node, ctx: &Context, out: &mut Vec<DeclarationNode>) {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.bare_name(n))
            .unwrap_or_default();
        let mut decl = self.declaration_node(DeclKind::Other, &name, node, ctx);

        if let Some(body) = node.child_by_field_name("body") {
            let inner = ctx.enter(DeclKind::Other, &name);
            let mut cursor = body.walk();
            for enumerator in body.named_children(&mut cursor) {
                if enumerator.kind() != "enumerator" {
                    continue;
                }
                if let Some(constant) = enumerator.child_by_field_name("name") {
                    decl.children.push(self.declaration_node(
                        DeclKind::Other,
                        self.text(constant),
                        enumerator,
                        &inner,
                    ));
                }
            }
        }
        out.push(decl);
    }

    /// `declaration` and `field_declaration`: functions, variables, members,
    /// and records declared through their type specifier.
    fn declaration(
        &self,
        node: Node,
        ctx: &Context,
        template: Option<TemplateHead>,
        out: &mut Vec<DeclarationNode>,
    ) {
        let mut cursor = node.walk();
        let declarators: Vec<Node> = node.children_by_field_name("declarator", &mut cursor).collect();

        if let Some(ty) = node.child_by_field_name("type") {
            let defines_type = ty.child_by_field_name("body").is_some() || declarators.is_empty();
            if defines_type && is_type_specifier(ty) {
                self.visit_item(ty, ctx, template, out);
            }
        }

        for declarator in declarators {
            if let Some(function) = find_function_declarator(declarator) {
                self.function(node, function, ctx, template, out);
            } else {
                let name = self.declarator_name(declarator);
                if !name.is_empty() {
                    out.push(self.declaration_node(DeclKind::Other, &name, node, ctx));
                }
            }
        }
    }

    fn type_definition(&self, node: Node, ctx: &Context, out: &mut Vec<DeclarationNode>) {
        if let Some(ty) = node.child_by_field_name("type") {
            if is_type_specifier(ty) && ty.child_by_field_name("body").is_some() {
                self.visit_item(ty, ctx, None, out);
            }
        }
        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            let name = self.declarator_name(declarator);
            if !name.is_empty() {
                out.push(self.declaration_node(DeclKind::Other, &name, node, ctx));
            }
        }
    }

    /// Template parameters become pseudo-declarations placed right before the
    /// templated item.
    fn template(&self, node: Node, ctx: &Context, out: &mut Vec<DeclarationNode>) {
        let mut has_params = false;
        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for param in params.named_children(&mut cursor) {
                if param.kind() == "comment" {
                    continue;
                }
                has_params = true;
                let name = self.template_parameter_name(param);
                out.push(self.declaration_node(DeclKind::TemplateTypeParameter, &name, param, ctx));
            }
        }

        let head = TemplateHead { has_params };
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if matches!(child.kind(), "template_parameter_list" | "requires_clause" | "comment") {
                continue;
            }
            self.visit_item(child, ctx, Some(head), out);
        }
    }

    fn function(
        &self,
        node: Node,
        declarator: Node,
        ctx: &Context,
        template: Option<TemplateHead>,
        out: &mut Vec<DeclarationNode>,
    ) {
        let target = declarator.child_by_field_name("declarator");
        let (name, qualifier) = match target {
            Some(target) if declarator.kind() == "function_declarator" => self.function_name(target),
            _ => (self.operator_cast_name(declarator), None),
        };
        if name.is_empty() {
            return;
        }

        let owner = qualifier.as_deref().or(ctx.record.as_deref());
        let is_constructor = owner.is_some_and(|owner| owner == name);
        let is_destructor = name.starts_with('~');

        let kind = if is_destructor {
            DeclKind::Other
        } else if TemplateHead::is_generic(template) {
            DeclKind::FunctionTemplate
        } else if is_constructor {
            DeclKind::Constructor
        } else if ctx.record.is_some() {
            DeclKind::Method
        } else {
            DeclKind::Function
        };

        let mut decl = self.declaration_node(kind, &name, node, ctx);
        decl.flags = DeclFlags {
            is_static_method: ctx.record.is_some() && has_static_storage(node, self.source),
            ..self.constructor_flags(kind, &name, declarator)
        };
        out.push(decl);
    }

    fn constructor_flags(&self, kind: DeclKind, class: &str, declarator: Node) -> DeclFlags {
        let mut flags = DeclFlags::default();
        if kind != DeclKind::Constructor {
            return flags;
        }
        let Some(params) = declarator.child_by_field_name("parameters") else {
            return flags;
        };

        let mut cursor = params.walk();
        let params: Vec<Node> = params
            .named_children(&mut cursor)
            .filter(|p| p.kind() != "comment")
            .collect();
        let Some((first, rest)) = params.split_first() else {
            return flags;
        };
        if first.kind() != "parameter_declaration"
            || rest.iter().any(|p| p.kind() != "optional_parameter_declaration")
        {
            return flags;
        }

        if let Some(caps) = RE_SELF_REFERENCE.captures(self.text(*first).trim()) {
            let ty = caps[1].rsplit("::").next().unwrap_or_default();
            if ty == class {
                flags.is_copy_constructor = &caps[2] == "&";
                flags.is_move_constructor = &caps[2] == "&&";
            }
        }
        flags
    }

    /// Name of a function declarator target plus its class/namespace
    /// qualifier, if written out of line.
    fn function_name(&self, target: Node) -> (String, Option<String>) {
        match target.kind() {
            "qualified_identifier" => {
                let qualifier = target
                    .child_by_field_name("scope")
                    .map(|scope| self.bare_name(scope));
                let name = target
                    .child_by_field_name("name")
                    .map(|name| self.function_name(name).0)
                    .unwrap_or_default();
                (name, qualifier)
            }
            "template_function" => (self.bare_name(target), None),
            _ => (self.text(target).trim().to_string(), None),
        }
    }

    /// `operator bool() const` → `operator bool`
    fn operator_cast_name(&self, node: Node) -> String {
        let text = self.text(node);
        text.split('(').next().unwrap_or(text).trim().to_string()
    }

    /// Identifier without template arguments or leading qualifiers.
    fn bare_name(&self, node: Node) -> String {
        match node.kind() {
            "qualified_identifier" | "template_type" | "template_function" => node
                .child_by_field_name("name")
                .map(|name| self.bare_name(name))
                .unwrap_or_default(),
            _ => self.text(node).trim().to_string(),
        }
    }

    fn declarator_name(&self, node: Node) -> String {
        match node.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "operator_name"
            | "destructor_name" => self.text(node).to_string(),
            "qualified_identifier" | "template_function" => self.bare_name(node),
            _ => match inner_declarator(node) {
                Some(inner) => self.declarator_name(inner),
                None => String::new(),
            },
        }
    }

    fn template_parameter_name(&self, param: Node) -> String {
        if let Some(name) = param.child_by_field_name("name") {
            return self.text(name).to_string();
        }
        if let Some(declarator) = param.child_by_field_name("declarator") {
            return self.declarator_name(declarator);
        }
        let mut cursor = param.walk();
        let found = param
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "type_identifier" | "identifier"))
            .map(|c| self.text(c).to_string());
        found.unwrap_or_default()
    }
}

/// Walk the declarator chain (`*f()`, `&f()`, attributes) down to the
/// function declarator, if the declarator declares a function at all.
fn find_function_declarator(node: Node) -> Option<Node> {
    match node.kind() {
        "function_declarator" => {
            // `void (*fp)(int)` declares a pointer variable.
            let target = node.child_by_field_name("declarator")?;
            (target.kind() != "parenthesized_declarator").then_some(node)
        }
        "operator_cast" => Some(node),
        "pointer_declarator" | "reference_declarator" | "attributed_declarator" => {
            inner_declarator(node).and_then(find_function_declarator)
        }
        _ => None,
    }
}

fn inner_declarator(node: Node) -> Option<Node> {
    if let Some(inner) = node.child_by_field_name("declarator") {
        return Some(inner);
    }
    // `reference_declarator` keeps its operand unnamed.
    let mut cursor = node.walk();
    let last = node.named_children(&mut cursor).last();
    last
}

fn is_type_specifier(node: Node) -> bool {
    matches!(
        node.kind(),
        "class_specifier" | "struct_specifier" | "union_specifier" | "enum_specifier"
    )
}

fn has_static_storage(node: Node, source: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| c.kind() == "storage_class_specifier" && &source[c.byte_range()] == "static");
    found
}

/// 1-based inclusive line span of a syntax node.
fn line_span(node: Node) -> (usize, usize) {
    let start = node.start_position();
    let end = node.end_position();
    let last = if end.column == 0 && end.row > start.row {
        end.row
    } else {
        end.row + 1
    };
    (start.row + 1, last)
}

/// Every comment token in the file, in source order.
fn collect_comments(root: Node, source: &str) -> Vec<Annotation> {
    let mut comments = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.kind() == "comment" {
            let (line, end_line) = line_span(node);
            comments.push(Annotation {
                raw_text: source[node.byte_range()].to_string(),
                line,
                end_line,
            });
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(nodes: &[DeclarationNode]) -> Vec<&DeclarationNode> {
        let mut all = Vec::new();
        for node in nodes {
            all.push(node);
            all.extend(flatten(&node.children));
        }
        all
    }

    fn find<'a>(unit: &'a SourceUnit, name: &str) -> &'a DeclarationNode {
        flatten(&unit.tree.children)
            .into_iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("no declaration named {name}"))
    }

    #[test]
    fn namespace_and_free_function() {
        let unit = parse("namespace ns {\n/**\n * @brief Returns zero\n */\nint zero();\n}\n").unwrap();
        let ns = &unit.tree.children[0];
        assert_eq!(ns.kind, DeclKind::Namespace);
        assert_eq!(ns.name, "ns");

        let zero = find(&unit, "zero");
        assert_eq!(zero.kind, DeclKind::Function);
        assert_eq!((zero.start_line, zero.end_line), (5, 5));
        assert_eq!(zero.parents[0].kind, DeclKind::Namespace);

        assert_eq!(unit.comments.len(), 1);
        assert_eq!(unit.comments[0].line, 2);
        assert_eq!(unit.comments[0].end_line, 4);
        assert!(unit.comments[0].raw_text.starts_with("/**"));
    }

    #[test]
    fn class_template_members() {
        let src = "\
namespace ns
{
\ttemplate<typename T, typename A>
\tstruct Vec
\t{
\t\tVec();
\t\tVec(const Vec<T>& other);
\t\tVec(Vec&& other, int extra = 0);
\t\t~Vec();

\t\tstatic Vec
\t\tof(const T& value);

\t\tint
\t\tcount() const
\t\t{
\t\t\treturn n;
\t\t}

\t\tint n;
\t};
}
";
        let unit = parse(src).unwrap();
        let all = flatten(&unit.tree.children);

        let params: Vec<_> = all
            .iter()
            .filter(|d| d.kind == DeclKind::TemplateTypeParameter)
            .map(|d| (d.name.as_str(), d.start_line))
            .collect();
        assert_eq!(params, vec![("T", 3), ("A", 3)]);

        let vec = find(&unit, "Vec");
        assert_eq!(vec.kind, DeclKind::ClassTemplate);
        assert_eq!(vec.start_line, 4);
        assert_eq!(vec.end_line, 21);

        let ctors: Vec<_> = all
            .iter()
            .filter(|d| d.kind == DeclKind::Constructor)
            .map(|d| (d.start_line, d.flags.is_copy_constructor, d.flags.is_move_constructor))
            .collect();
        assert_eq!(ctors, vec![(6, false, false), (7, true, false), (8, false, true)]);

        let dtor = find(&unit, "~Vec");
        assert_eq!(dtor.kind, DeclKind::Other);

        let of = find(&unit, "of");
        assert_eq!(of.kind, DeclKind::Method);
        assert!(of.flags.is_static_method);
        assert_eq!((of.start_line, of.end_line), (11, 12));
        assert_eq!(of.parents[0].kind, DeclKind::ClassTemplate);

        let count = find(&unit, "count");
        assert_eq!(count.kind, DeclKind::Method);
        assert!(!count.flags.is_static_method);
        assert_eq!((count.start_line, count.end_line), (14, 18));

        let n = find(&unit, "n");
        assert_eq!(n.kind, DeclKind::Other);
    }

    #[test]
    fn function_template_starts_after_header() {
        let src = "namespace ns {\ntemplate<typename T>\nT\nmax(T a, T b)\n{\n\treturn a < b ? b : a;\n}\n}\n";
        let unit = parse(src).unwrap();
        let max = find(&unit, "max");
        assert_eq!(max.kind, DeclKind::FunctionTemplate);
        assert_eq!((max.start_line, max.end_line), (3, 7));
        assert_eq!(find(&unit, "T").start_line, 2);
    }

    #[test]
    fn partial_specialization() {
        let src = "namespace ns {\ntemplate<typename T>\nstruct Box<T*>\n{\n};\n}\n";
        let unit = parse(src).unwrap();
        let spec = find(&unit, "Box");
        assert_eq!(spec.kind, DeclKind::ClassTemplatePartialSpecialization);
    }

    #[test]
    fn static_free_function_is_not_a_static_method() {
        let unit = parse("namespace ns {\nstatic int helper();\n}\n").unwrap();
        let helper = find(&unit, "helper");
        assert_eq!(helper.kind, DeclKind::Function);
        assert!(!helper.flags.is_static_method);
    }

    #[test]
    fn nested_namespace_specifier() {
        let unit = parse("namespace a::b {\nvoid f();\n}\n").unwrap();
        let a = &unit.tree.children[0];
        assert_eq!(a.name, "a");
        assert_eq!(a.children[0].name, "b");
        assert_eq!(a.children[0].children[0].name, "f");
        let f = find(&unit, "f");
        assert_eq!(f.parents.len(), 2);
        assert_eq!(f.parents[0].name, "b");
    }

    #[test]
    fn unions_enums_and_aliases() {
        let src = "\
namespace ns {
union Cell
{
\tint as_int;
\tfloat as_float;
};
enum class Color { Red, Green };
using Index = unsigned long;
}
";
        let unit = parse(src).unwrap();
        let cell = find(&unit, "Cell");
        assert_eq!(cell.kind, DeclKind::Union);
        assert_eq!((cell.start_line, cell.end_line), (2, 6));
        assert_eq!(find(&unit, "as_int").parents[0].kind, DeclKind::Union);
        assert_eq!(find(&unit, "Color").kind, DeclKind::Other);
        assert_eq!(find(&unit, "Green").kind, DeclKind::Other);
        assert_eq!(find(&unit, "Index").kind, DeclKind::Other);
    }

    #[test]
    fn out_of_line_constructor() {
        let unit = parse("namespace ns {\nList::List(const List& other)\n{\n}\n}\n").unwrap();
        let ctor = find(&unit, "List");
        assert_eq!(ctor.kind, DeclKind::Constructor);
        assert!(ctor.flags.is_copy_constructor);
    }

    #[test]
    fn export_macro_members() {
        let src = "\
namespace cppr
{
\tstruct OS
\t{
\t\tAPI_CPPR Owner<byte>
\t\tvirtual_alloc(usize size);

\t\tAPI_CPPR Result<File, OS_ERROR>
\t\tfile_open(const char* name);

\t\tAPI_CPPR ~OS();
\t};
}
";
        let unit = parse(src).unwrap();
        let all = flatten(&unit.tree.children);
        assert!(all.iter().all(|d| d.name != "byte" && d.name != "OS_ERROR"));

        let alloc = find(&unit, "virtual_alloc");
        assert_eq!(alloc.kind, DeclKind::Method);
        assert_eq!((alloc.start_line, alloc.end_line), (5, 6));
        assert_eq!(alloc.parents[0].name, "OS");

        let open = find(&unit, "file_open");
        assert_eq!(open.kind, DeclKind::Method);
        assert_eq!((open.start_line, open.end_line), (8, 9));

        assert_eq!(find(&unit, "~OS").kind, DeclKind::Other);
    }

    #[test]
    fn configured_export_macro() {
        let src = "namespace ns {\nmylib_export int\nanswer();\n}\n";
        let unit = parse_with(src, &["mylib_export".to_string()]).unwrap();
        let answer = find(&unit, "answer");
        assert_eq!(answer.kind, DeclKind::Function);
        assert_eq!((answer.start_line, answer.end_line), (2, 3));
    }

    #[test]
    fn function_bodies_are_opaque() {
        let unit = parse("namespace ns {\nvoid f()\n{\n\tint local = 0;\n\t// note\n}\n}\n").unwrap();
        assert!(flatten(&unit.tree.children).iter().all(|d| d.name != "local"));
        assert_eq!(unit.comments.len(), 1);
        assert_eq!(unit.comments[0].line, 5);
    }
}
