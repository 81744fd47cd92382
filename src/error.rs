// File: src/error.rs

/// Errors surfaced to the caller of a glossary or upload operation.
/// Neither is fatal: the in-memory glossary stays usable after both.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimplifyError {
    /// Glossary storage could not be read, parsed or written
    #[error("Glossary storage error: {0}")]
    Persistence(String),
    /// Uploaded bytes were not valid base64 or not valid UTF-8 text
    #[error("Failed to decode upload: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SimplifyError>;
