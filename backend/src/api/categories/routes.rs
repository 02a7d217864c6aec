//! Defines the HTTP routes for category data.

use axum::{routing::get, Router};

use super::handlers::{category_questions, list_categories};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:category_id/questions", get(category_questions))
}
