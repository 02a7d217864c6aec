//! In-memory adapter implementation of the trivia store.
//!
//! Keeps categories and questions behind an async `RwLock` and mirrors the
//! constraints of the relational schema (identifier assignment, the category
//! foreign key) so that callers observe the same failures as with Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{Category, CategoryOrder, NewQuestion, Question, QuestionOrder, QuestionQuery};
use crate::TriviaStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                categories: categories.into_iter().collect(),
                ..Inner::default()
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.inner.read().await.categories.clone();
        match order {
            CategoryOrder::Id => categories.sort_by_key(|c| c.id),
            CategoryOrder::Type => {
                categories.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)))
            }
        }
        Ok(categories)
    }

    async fn questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().await;

        // BTreeMap iteration already yields ascending ids, so a stable sort
        // keeps id as the tie-breaker.
        let mut questions: Vec<Question> = inner
            .questions
            .values()
            .filter(|q| query.accepts(q))
            .cloned()
            .collect();

        match query.order {
            QuestionOrder::Id => {}
            QuestionOrder::Category => questions.sort_by_key(|q| q.category),
            QuestionOrder::Difficulty => questions.sort_by_key(|q| q.difficulty),
        }

        Ok(questions)
    }

    async fn count_questions(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.questions.len() as u64)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.categories.iter().any(|c| c.id == question.category) {
            return Err(StoreError::UnknownCategory(question.category));
        }

        inner.last_id += 1;
        let question = question.with_id(inner.last_id);
        inner.questions.insert(question.id, question.clone());
        debug!("inserted question {}", question.id);

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        match self.inner.write().await.questions.remove(&id) {
            Some(_) => {
                debug!("deleted question {id}");
                Ok(())
            }
            None => Err(StoreError::QuestionNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64, difficulty: i32) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "42".to_string(),
            category,
            difficulty,
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore::with_categories([
            Category::new(1, "Science"),
            Category::new(2, "Art"),
            Category::new(3, "Geography"),
        ])
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = store();
        let first = store.insert_question(new_question("a", 1, 1)).await.unwrap();
        let second = store.insert_question(new_question("b", 1, 1)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count_questions().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_unknown_category() {
        let store = store();
        let result = store.insert_question(new_question("a", 99, 1)).await;

        assert!(matches!(result, Err(StoreError::UnknownCategory(99))));
        assert_eq!(store.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store();
        let first = store.insert_question(new_question("a", 1, 1)).await.unwrap();
        store.delete_question(first.id).await.unwrap();
        let second = store.insert_question(new_question("b", 1, 1)).await.unwrap();

        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn delete_missing_question_fails() {
        let store = store();
        let result = store.delete_question(1000).await;

        assert!(matches!(result, Err(StoreError::QuestionNotFound(1000))));
    }

    #[tokio::test]
    async fn categories_order_by_type() {
        let store = store();
        let kinds: Vec<String> = store
            .categories(CategoryOrder::Type)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();

        assert_eq!(kinds, ["Art", "Geography", "Science"]);
    }

    #[tokio::test]
    async fn difficulty_order_breaks_ties_by_id() {
        let store = store();
        store.insert_question(new_question("a", 1, 3)).await.unwrap();
        store.insert_question(new_question("b", 1, 1)).await.unwrap();
        store.insert_question(new_question("c", 1, 3)).await.unwrap();
        store.insert_question(new_question("d", 2, 1)).await.unwrap();

        let query = QuestionQuery::ordered_by(QuestionOrder::Difficulty).in_category(1);
        let ids: Vec<i64> = store
            .questions(&query)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();

        assert_eq!(ids, [2, 1, 3]);
    }
}
