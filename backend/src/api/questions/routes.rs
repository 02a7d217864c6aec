//! Defines the HTTP routes for question data.
//!
//! `POST /questions` serves both search and creation; the body decides which.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{delete_question, list_questions, post_question};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(post_question))
        .route("/questions/:question_id", delete(delete_question))
}
