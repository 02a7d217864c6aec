//! Trivia API backend.
//!
//! Serves trivia categories and questions out of a relational store, with
//! pagination, search, creation and deletion, plus a quiz mode that hands out
//! one question per call for a client-held session.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use state::AppState;

/// Builds the full router with every API route and the shared layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::categories::routes::router())
        .merge(api::questions::routes::router())
        .merge(api::quizzes::routes::router())
        .method_not_allowed_fallback(middleware::method_not_allowed)
        .fallback(middleware::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .with_state(state)
}
