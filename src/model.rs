//! Data model shared by the provider, the association engine and the renderers.

use crate::source::SourceLines;
use serde::Serialize;

/// Declaration kinds the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclKind {
    Function,
    Method,
    Constructor,
    FunctionTemplate,
    Struct,
    Class,
    ClassTemplate,
    ClassTemplatePartialSpecialization,
    Union,
    /// Any template parameter (type, non-type or template-template).
    TemplateTypeParameter,
    Namespace,
    Other,
}

impl DeclKind {
    /// Record-like kinds: these reconstruct only their signature line and
    /// deepen the heading level of everything nested inside them.
    pub fn is_record(self) -> bool {
        matches!(
            self,
            DeclKind::Struct
                | DeclKind::Class
                | DeclKind::ClassTemplate
                | DeclKind::ClassTemplatePartialSpecialization
        )
    }

    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            DeclKind::Function | DeclKind::Method | DeclKind::FunctionTemplate
        )
    }
}

/// Method/constructor properties reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclFlags {
    pub is_static_method: bool,
    pub is_copy_constructor: bool,
    pub is_move_constructor: bool,
}

/// Summary of an enclosing declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosing {
    pub kind: DeclKind,
    pub name: String,
}

/// A declaration in the provider's tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationNode {
    pub kind: DeclKind,
    /// Spelling of the declared name (may be empty).
    pub name: String,
    /// 1-based first line of the declaration.
    pub start_line: usize,
    /// 1-based last line, inclusive.
    pub end_line: usize,
    /// Enclosing declarations, innermost first.
    pub parents: Vec<Enclosing>,
    pub flags: DeclFlags,
    pub children: Vec<DeclarationNode>,
}

impl DeclarationNode {
    pub fn new(kind: DeclKind, name: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            start_line,
            end_line,
            parents: Vec::new(),
            flags: DeclFlags::default(),
            children: Vec::new(),
        }
    }
}

/// Root of the declaration tree for one source unit.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    pub children: Vec<DeclarationNode>,
}

/// A comment token as lexed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Full token text including delimiters.
    pub raw_text: String,
    /// 1-based line the token starts on.
    pub line: usize,
    /// 1-based line the token ends on.
    pub end_line: usize,
}

impl Annotation {
    /// Build a token whose end line follows from the newlines in its text.
    pub fn new(raw_text: impl Into<String>, line: usize) -> Self {
        let raw_text = raw_text.into();
        let end_line = line + raw_text.matches('\n').count();
        Self {
            raw_text,
            line,
            end_line,
        }
    }
}

/// Classification of a comment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `/**` comment describing the declaration that follows it.
    Documentation,
    /// Comment carrying `[[markdown]]`, embedded as-is.
    MarkdownLiteral,
    Irrelevant,
}

/// One entry of the merged, line-ordered walk.
#[derive(Debug, Clone, Copy)]
pub enum StreamItem<'a> {
    Declaration(&'a DeclarationNode),
    Annotation(&'a Annotation, AnnotationKind),
}

impl StreamItem<'_> {
    pub fn line(&self) -> usize {
        match self {
            StreamItem::Declaration(decl) => decl.start_line,
            StreamItem::Annotation(token, _) => token.line,
        }
    }
}

/// A documentation comment paired with what it documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Association<'a> {
    pub annotation: &'a Annotation,
    /// `None` when the stream ended before any real declaration.
    pub declaration: Option<&'a DeclarationNode>,
    /// Reconstructed source of every scanned node, one trimmed line each.
    pub source_text: String,
}

/// Resolver output, in stream order.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    Documented(Association<'a>),
    Markdown(&'a Annotation),
}

/// Everything the engine needs to know about one parsed file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub tree: TranslationUnit,
    pub comments: Vec<Annotation>,
    pub lines: SourceLines,
}
