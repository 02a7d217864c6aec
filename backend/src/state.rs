//! Shared application state.
//!
//! Holds the store client and the quiz selection policy, built once at startup
//! and handed to every handler through axum's `State` extractor.

use std::sync::Arc;

use trivia_adapters::TriviaStore;

use crate::services::quiz::SelectionPolicy;

/// Per-process handles shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub quiz_selection: SelectionPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, quiz_selection: SelectionPolicy) -> Self {
        Self {
            store,
            quiz_selection,
        }
    }
}
