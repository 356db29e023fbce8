use thiserror::Error;

/// Errors returned by the clustering engine and the phrase extractor.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Vocabulary size cannot support the documents being clustered.
    #[error(
        "invalid vocabulary size {vocabulary_size}: {non_empty_documents} documents contain tokens"
    )]
    InvalidVocabularySize {
        /// Vocabulary size passed to `fit`.
        vocabulary_size: usize,
        /// Number of documents with at least one token.
        non_empty_documents: usize,
    },

    /// Tagging or chunking failed for a single text.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A cluster score was not a finite number.
    #[error("non-finite cluster score: {detail}")]
    Numerical {
        /// Which document and what went wrong.
        detail: String,
    },

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
