//! Handler functions for the questions API.
//!
//! Listing treats an empty page as not found, while a search that matches
//! nothing is still a success with an empty list. Store failures on search,
//! creation and deletion are reported as unprocessable.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};
use trivia_adapters::{CategoryOrder, QuestionOrder, QuestionQuery};

use super::models::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionsPost, QuestionsResponse,
    SearchResponse,
};
use crate::api::{category_map, parse_json, path_id};
use crate::errors::AppError;
use crate::services::pagination::{paginate, Page};
use crate::state::AppState;

pub async fn list_questions(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<QuestionsResponse>, AppError> {
    let categories = state
        .store
        .categories(CategoryOrder::Id)
        .await
        .map_err(AppError::internal)?;
    let selection = state
        .store
        .questions(&QuestionQuery::ordered_by(QuestionOrder::Id))
        .await
        .map_err(AppError::internal)?;

    let questions = paginate(&selection, page).to_vec();
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        current_categorie: 0,
        categories: category_map(categories),
    }))
}

pub async fn post_question(
    State(state): State<AppState>,
    page: Page,
    body: Bytes,
) -> Result<Response, AppError> {
    let body: Value = parse_json(&body, |e| AppError::bad_request(e.to_string()))?;

    match QuestionsPost::from_body(body)? {
        QuestionsPost::Search(term) => search_questions(&state, &term, page)
            .await
            .map(IntoResponse::into_response),
        QuestionsPost::Create(request) => create_question(&state, request)
            .await
            .map(IntoResponse::into_response),
    }
}

async fn search_questions(
    state: &AppState,
    term: &str,
    page: Page,
) -> Result<Json<SearchResponse>, AppError> {
    let query = QuestionQuery::ordered_by(QuestionOrder::Category).matching(term);
    let selection = state.store.questions(&query).await?;
    debug!(term, matches = selection.len(), "Searched questions");

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&selection, page).to_vec(),
        total_questions: selection.len(),
    }))
}

async fn create_question(
    state: &AppState,
    request: CreateQuestionRequest,
) -> Result<Json<CreatedResponse>, AppError> {
    let new_question = request.validate()?;

    let question = state.store.insert_question(new_question).await?;
    let total_questions = state.store.count_questions().await?;
    info!(question_id = question.id, category = question.category, "Created question");

    Ok(Json(CreatedResponse {
        success: true,
        id: question.id,
        total_questions,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    page: Page,
) -> Result<Json<DeletedResponse>, AppError> {
    let question_id = path_id(&question_id)?;

    state.store.delete_question(question_id).await?;
    info!(question_id, "Deleted question");

    let selection = state
        .store
        .questions(&QuestionQuery::ordered_by(QuestionOrder::Category))
        .await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        questions: paginate(&selection, page).to_vec(),
        total_questions: selection.len() as u64,
    }))
}
