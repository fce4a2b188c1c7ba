//! Question and answer records, plus the payloads used to create them.

use crate::{AnswerId, QuestionId, ValidationError};
use serde::{Deserialize, Serialize};

/// A question stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub author: String,
    pub summary: String,
    /// Older documents may omit this field; it reads as empty.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Builds a question with no answers from validated input.
    #[must_use]
    pub fn new(id: QuestionId, author: String, summary: String) -> Self {
        Self {
            id,
            author,
            summary,
            answers: Vec::new(),
        }
    }

    /// Looks up one of this question's answers.
    #[must_use]
    pub fn answer(&self, answer_id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.id == answer_id)
    }
}

/// An answer nested under a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub author: String,
    pub summary: String,
}

impl Answer {
    #[must_use]
    pub fn new(id: AnswerId, author: String, summary: String) -> Self {
        Self { id, author, summary }
    }
}

/// Payload for posting a question.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported by [`NewQuestion::validate`] instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewQuestion {
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            summary: Some(summary.into()),
        }
    }

    /// Checks that author and summary are present and non-empty, returning
    /// them in that order.
    pub fn validate(self) -> Result<(String, String), ValidationError> {
        validate_fields(self.author, self.summary)
    }
}

/// Payload for posting an answer to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewAnswer {
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            summary: Some(summary.into()),
        }
    }

    pub fn validate(self) -> Result<(String, String), ValidationError> {
        validate_fields(self.author, self.summary)
    }
}

fn validate_fields(
    author: Option<String>,
    summary: Option<String>,
) -> Result<(String, String), ValidationError> {
    let author = author
        .filter(|a| !a.is_empty())
        .ok_or(ValidationError::MissingAuthor)?;
    let summary = summary
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingSummary)?;
    Ok((author, summary))
}
