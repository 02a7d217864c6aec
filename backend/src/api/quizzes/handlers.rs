//! Handler for quiz play.
//!
//! The client carries the quiz session: every call names the quiz category and
//! the questions already served, and receives the next question or
//! `{success: false, question: null}` once the quiz is exhausted.

use std::collections::BTreeSet;

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trivia_adapters::Question;

use crate::api::parse_json;
use crate::errors::AppError;
use crate::services::quiz::{QuizCategory, QuizSession};
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(deserialize_with = "utils::deserialize_id_set")]
    pub previous_questions: BTreeSet<i64>,
    pub quiz_category: QuizCategoryRef,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    #[serde(deserialize_with = "utils::deserialize_quiz_category")]
    pub id: QuizCategory,
}

impl From<QuizRequest> for QuizSession {
    fn from(request: QuizRequest) -> Self {
        QuizSession::new(request.quiz_category.id, request.previous_questions)
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizResponse>, AppError> {
    let request: QuizRequest = parse_json(&body, |e| {
        warn!(error = %e, "Malformed quiz request");
        AppError::NotFound
    })?;
    let session = QuizSession::from(request);

    let candidates = state.store.questions(&session.candidate_query()).await?;
    let next = session.next(&candidates, state.quiz_selection);

    debug!(
        category = ?session.category,
        served = session.served.len(),
        candidates = candidates.len(),
        next = ?next.map(|q| q.id),
        "Quiz step"
    );

    Ok(Json(match next {
        Some(question) => QuizResponse {
            success: true,
            question: Some(question.clone()),
            total_questions: Some(candidates.len()),
        },
        None => QuizResponse {
            success: false,
            question: None,
            total_questions: None,
        },
    }))
}
