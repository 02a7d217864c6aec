//! Module for core business logic services.
//!
//! These services hold the request-independent logic the handlers delegate
//! to: slicing ordered result sets into pages and sequencing quiz questions.

pub mod pagination;
pub mod quiz;
