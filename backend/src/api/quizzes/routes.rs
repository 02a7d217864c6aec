//! Defines the HTTP route for quiz play.

use axum::{routing::post, Router};

use super::handlers::play_quiz;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
