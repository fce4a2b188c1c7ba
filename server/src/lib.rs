//! HTTP API for the responder question store.
//!
//! Handlers only translate between requests and [`QuestionStore`] calls:
//! not-found outcomes become 404, rejected input 422, storage failures 500.

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use responder_store::{ErrorKind, QuestionStore, StoreError};
use responder_types::{Answer, AnswerId, NewAnswer, NewQuestion, Question, QuestionId};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

/// A store error paired with the message shown to the client.
///
/// Bodies are a bare JSON string.
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// Error from a mutating call, which can also reject its input.
    fn from_write(err: StoreError, invalid: &'static str, failed: &'static str) -> Self {
        match err.kind() {
            ErrorKind::ValidationFailed => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: invalid,
            },
            _ => Self::from_store(err, failed),
        }
    }

    /// Error from a lookup, which only fails with not-found or storage errors.
    fn lookup(err: StoreError) -> Self {
        Self::from_store(err, "Failed to read questions.")
    }

    fn from_store(err: StoreError, failed: &'static str) -> Self {
        match err {
            StoreError::QuestionNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: "Question not found.",
            },
            StoreError::AnswerNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: "Answer not found.",
            },
            err => {
                error!(error = %err, "Store operation failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: failed,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.message)).into_response()
    }
}

async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to responder!".to_string(),
    })
}

async fn list_questions_handler(
    State(store): State<Arc<QuestionStore>>,
) -> Result<Json<Vec<Question>>, ApiError> {
    store.list_questions().await.map(Json).map_err(ApiError::lookup)
}

async fn get_question_handler(
    State(store): State<Arc<QuestionStore>>,
    Path(question_id): Path<QuestionId>,
) -> Result<Json<Question>, ApiError> {
    store
        .get_question(&question_id)
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

async fn add_question_handler(
    State(store): State<Arc<QuestionStore>>,
    Json(input): Json<NewQuestion>,
) -> Result<(StatusCode, Json<QuestionId>), ApiError> {
    let id = store.add_question(input).await.map_err(|e| {
        ApiError::from_write(
            e,
            "Author and question contents are required.",
            "Failed to add question.",
        )
    })?;
    Ok((StatusCode::CREATED, Json(id)))
}

async fn get_answers_handler(
    State(store): State<Arc<QuestionStore>>,
    Path(question_id): Path<QuestionId>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    store
        .get_answers(&question_id)
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

async fn add_answer_handler(
    State(store): State<Arc<QuestionStore>>,
    Path(question_id): Path<QuestionId>,
    Json(input): Json<NewAnswer>,
) -> Result<(StatusCode, Json<AnswerId>), ApiError> {
    let id = store.add_answer(&question_id, input).await.map_err(|e| {
        ApiError::from_write(
            e,
            "Author and answer contents are required.",
            "Failed to add answer.",
        )
    })?;
    Ok((StatusCode::CREATED, Json(id)))
}

async fn get_answer_handler(
    State(store): State<Arc<QuestionStore>>,
    Path((question_id, answer_id)): Path<(QuestionId, AnswerId)>,
) -> Result<Json<Answer>, ApiError> {
    store
        .get_answer(&question_id, &answer_id)
        .await
        .map(Json)
        .map_err(ApiError::lookup)
}

/// Build the HTTP API router over the given store.
pub fn build_router(store: Arc<QuestionStore>) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route(
            "/questions",
            get(list_questions_handler).post(add_question_handler),
        )
        .route("/questions/{question_id}", get(get_question_handler))
        .route(
            "/questions/{question_id}/answers",
            get(get_answers_handler).post(add_answer_handler),
        )
        .route(
            "/questions/{question_id}/answers/{answer_id}",
            get(get_answer_handler),
        )
        .with_state(store)
}
