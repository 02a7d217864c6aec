//! Module for the categories API.
//!
//! Lists the categories and the questions filed under a single category.

pub mod handlers;
pub mod routes;
