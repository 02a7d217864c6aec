//! Module for the questions API.
//!
//! This module exposes paginated listing, search, creation and deletion of
//! trivia questions through HTTP endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
