//! Error types for document generation.

/// Errors that abort document generation.
///
/// Unmatched annotations, an absent target namespace and an empty document
/// are ordinary outcomes and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// A declaration or comment extent points outside the source text.
    #[error("line range {start}..={end} is outside the source ({available} lines)")]
    MalformedExtent {
        start: usize,
        end: usize,
        available: usize,
    },

    #[error("failed to load the C++ grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree")]
    Parse,

    #[error("unknown format: {0}. Use markdown or json")]
    UnknownFormat(String),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocError>;
