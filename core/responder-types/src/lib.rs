//! Core type definitions for the responder question store.
//!
//! This crate defines the data model shared by the store and the HTTP layer:
//! - Question and answer identifiers (random UUID v4 strings)
//! - The `Question` / `Answer` records as they appear in the JSON document
//! - Input payloads for creating questions and answers, with validation
//! - Parsing and rendering of the whole document

mod document;
mod ids;
mod question;

pub use document::{Document, parse_document, render_document, render_document_pretty};
pub use ids::{AnswerId, QuestionId};
pub use question::{Answer, NewAnswer, NewQuestion, Question};

/// Errors raised when a question or answer payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("author is required")]
    MissingAuthor,

    #[error("summary is required")]
    MissingSummary,
}
