//! Handler functions for the categories API.
//!
//! Both endpoints are read-only listings: an empty result is reported as
//! not found, and a store failure is a server fault.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;
use trivia_adapters::{CategoryOrder, Question, QuestionOrder, QuestionQuery};

use crate::api::{category_map, path_id};
use crate::errors::AppError;
use crate::services::pagination::{paginate, Page};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .store
        .categories(CategoryOrder::Type)
        .await
        .map_err(AppError::internal)?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = category_map(categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

pub async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    page: Page,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category_id = path_id(&category_id)?;

    let query = QuestionQuery::ordered_by(QuestionOrder::Difficulty).in_category(category_id);
    let selection = state
        .store
        .questions(&query)
        .await
        .map_err(AppError::internal)?;

    let questions = paginate(&selection, page).to_vec();
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }
    debug!(category_id, page = page.number(), count = questions.len(), "Listing category questions");

    // Counts the page, not the whole category.
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
