//! Central module for organizing the application's API endpoints.
//!
//! This module acts as a top-level container for the API domains (categories,
//! questions and quizzes) and holds the request plumbing they share: the page
//! extractor and body parsing.

pub mod categories;
pub mod questions;
pub mod quizzes;

use std::{
    collections::{BTreeMap, HashMap},
    convert::Infallible,
};

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use trivia_adapters::Category;

use crate::errors::AppError;
use crate::services::pagination::Page;

/// Reads `?page=N`, falling back to the first page on anything malformed.
#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(params)| Page::parse(params.get("page").map(String::as_str)))
            .unwrap_or_default();
        Ok(page)
    }
}

/// Parses a JSON request body, reporting failures as `on_error`.
pub fn parse_json<T: DeserializeOwned>(
    body: &[u8],
    on_error: impl FnOnce(serde_json::Error) -> AppError,
) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(on_error)
}

/// `{id: type}` map of categories as clients expect it.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Parses an integer path segment; anything else names no resource.
pub fn path_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn page_of(uri: &str) -> Page {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        Page::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn page_comes_from_query_string() {
        assert_eq!(page_of("/questions?page=3").await.number(), 3);
        assert_eq!(page_of("/questions").await, Page::FIRST);
        assert_eq!(page_of("/questions?page=abc").await, Page::FIRST);
        assert_eq!(page_of("/questions?page=0").await, Page::FIRST);
        assert_eq!(page_of("/questions?page=-2&page=x").await, Page::FIRST);
    }

    #[test]
    fn path_id_rejects_non_integers() {
        assert_eq!(path_id("12").unwrap(), 12);
        assert!(matches!(path_id("twelve"), Err(AppError::NotFound)));
    }
}
