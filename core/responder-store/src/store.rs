//! The question repository backed by a single JSON document.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use responder_types::{
    Answer, AnswerId, Document, NewAnswer, NewQuestion, Question, QuestionId, parse_document,
    render_document, render_document_pretty,
};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Reads and writes the question document.
///
/// Share it behind an `Arc`. Reads go straight to disk; `add_question` and
/// `add_answer` hold the write lock across their read-modify-write so that
/// concurrent adds on the same store never drop each other's entries.
/// Separate stores (or processes) pointed at the same file are not
/// coordinated.
pub struct QuestionStore {
    config: StoreConfig,
    write_lock: Mutex<()>,
}

impl QuestionStore {
    /// Opens a store over the document at `path` with default settings.
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty document and is created by the first add.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_config(StoreConfig::new(path))
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    // ── Questions ────────────────────────────────────────────────

    /// Returns every question in document order.
    pub async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.load().await
    }

    /// Number of questions in the document.
    pub async fn question_count(&self) -> StoreResult<usize> {
        Ok(self.load().await?.len())
    }

    pub async fn get_question(&self, question_id: &QuestionId) -> StoreResult<Question> {
        self.load()
            .await?
            .into_iter()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| StoreError::QuestionNotFound(question_id.clone()))
    }

    /// Validates `input`, appends a new question with no answers and
    /// returns its generated id.
    pub async fn add_question(&self, input: NewQuestion) -> StoreResult<QuestionId> {
        let (author, summary) = input.validate().map_err(|e| {
            warn!(error = %e, "Rejected question input");
            StoreError::from(e)
        })?;

        let id = QuestionId::generate();
        let question = Question::new(id.clone(), author, summary);

        let _guard = self.write_lock.lock().await;
        let mut questions = self.load().await?;
        questions.push(question);
        self.persist(&questions).await?;

        info!(question_id = %id, total = questions.len(), "Question added");
        Ok(id)
    }

    // ── Answers ──────────────────────────────────────────────────

    /// Returns the answers of a question in insertion order.
    pub async fn get_answers(&self, question_id: &QuestionId) -> StoreResult<Vec<Answer>> {
        Ok(self.get_question(question_id).await?.answers)
    }

    pub async fn get_answer(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> StoreResult<Answer> {
        let question = self.get_question(question_id).await?;
        question
            .answer(answer_id)
            .cloned()
            .ok_or_else(|| StoreError::AnswerNotFound {
                question_id: question_id.clone(),
                answer_id: answer_id.clone(),
            })
    }

    /// Validates `input` and appends it to the question's answers.
    ///
    /// Input is checked before the document is touched. An unknown question
    /// leaves the file unwritten.
    pub async fn add_answer(
        &self,
        question_id: &QuestionId,
        input: NewAnswer,
    ) -> StoreResult<AnswerId> {
        let (author, summary) = input.validate().map_err(|e| {
            warn!(question_id = %question_id, error = %e, "Rejected answer input");
            StoreError::from(e)
        })?;

        let _guard = self.write_lock.lock().await;
        let mut questions = self.load().await?;
        let question = questions
            .iter_mut()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| StoreError::QuestionNotFound(question_id.clone()))?;

        let id = AnswerId::generate();
        question.answers.push(Answer::new(id.clone(), author, summary));
        self.persist(&questions).await?;

        info!(question_id = %question_id, answer_id = %id, "Answer added");
        Ok(id)
    }

    // ── Document I/O ─────────────────────────────────────────────

    async fn load(&self) -> StoreResult<Document> {
        let path = &self.config.path;
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Document missing, treating as empty");
                return Ok(Document::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };

        let questions = parse_document(&text).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), questions = questions.len(), "Document loaded");
        Ok(questions)
    }

    /// Stages the document next to the target and renames it into place.
    ///
    /// The staged file is synced before the rename so the target is never
    /// replaced by a file whose contents have not reached the disk.
    async fn persist(&self, questions: &[Question]) -> StoreResult<()> {
        let text = if self.config.pretty {
            render_document_pretty(questions)?
        } else {
            render_document(questions)?
        };

        let path = &self.config.path;
        let staging = self.config.staging_path();
        let written = match stage(&staging, text.as_bytes()).await {
            Ok(()) => tokio::fs::rename(&staging, path).await,
            Err(e) => Err(e),
        };

        if let Err(source) = written {
            warn!(path = %path.display(), error = %source, "Failed to write document");
            // The staged copy may not exist; nothing to do if removal fails.
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StoreError::Write {
                path: path.clone(),
                source,
            });
        }
        Ok(())
    }
}

async fn stage(staging: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(staging).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}
