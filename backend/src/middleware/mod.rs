//! General-purpose middleware for the API.
//!
//! This module contains the layers and fallbacks applied to the whole router:
//! CORS, the JSON error envelope for unknown routes and wrong verbs, and panic
//! recovery.

use std::any::Any;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::errors::AppError;

pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

/// Answers a wrong verb on a known route. The router adds the `Allow` header.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
