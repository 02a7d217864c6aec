//! Module for the quiz API.

pub mod handlers;
pub mod routes;
