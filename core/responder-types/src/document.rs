//! The store document: every question, in insertion order, as one JSON array.

use crate::Question;

/// All questions held by a store, in insertion order.
pub type Document = Vec<Question>;

/// Parses document text.
///
/// Empty or whitespace-only text is an empty document.
pub fn parse_document(text: &str) -> Result<Document, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Document::new());
    }
    serde_json::from_str(text)
}

/// Renders a document as compact JSON.
pub fn render_document(questions: &[Question]) -> Result<String, serde_json::Error> {
    serde_json::to_string(questions)
}

/// Renders a document as indented JSON.
pub fn render_document_pretty(questions: &[Question]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(questions)
}
