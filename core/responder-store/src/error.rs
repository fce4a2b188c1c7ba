//! Error types for the question store.

use responder_types::{AnswerId, QuestionId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No question with this id.
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// The question exists but has no answer with this id.
    #[error("answer {answer_id} not found on question {question_id}")]
    AnswerNotFound {
        question_id: QuestionId,
        answer_id: AnswerId,
    },

    /// Input rejected before any I/O took place.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document was read but is not a valid question array.
    #[error("corrupt document {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The updated document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The updated document could not be written; the mutation did not take effect.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse classification of a [`StoreError`], used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    StorageFailure,
}

impl StoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::QuestionNotFound(_) | Self::AnswerNotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::Read { .. }
            | Self::Corrupt { .. }
            | Self::Serialization(_)
            | Self::Write { .. } => ErrorKind::StorageFailure,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
