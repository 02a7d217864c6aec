//! Core `adapters` crate for abstracting the trivia store.
//!
//! This crate defines the `TriviaStore` trait, which outlines the filtered and
//! ordered reads plus the insert and delete operations the API needs, and
//! provides the concrete implementations (Postgres, in-memory).

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use errors::StoreError;
pub use memory::InMemoryStore;
pub use models::{Category, CategoryOrder, NewQuestion, Question, QuestionOrder, QuestionQuery};
pub use postgres::PostgresStore;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Every category, in the requested order.
    async fn categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StoreError>;

    /// Questions accepted by `query`, ordered by `query.order` then id.
    async fn questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, StoreError>;

    async fn count_questions(&self) -> Result<u64, StoreError>;

    /// Stores a question and returns it with its assigned identifier.
    ///
    /// Fails with [`StoreError::UnknownCategory`] when the category does not exist.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Fails with [`StoreError::QuestionNotFound`] when nothing was deleted.
    async fn delete_question(&self, id: i64) -> Result<(), StoreError>;
}
