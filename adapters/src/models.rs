//! Generic data models for the `adapters` crate.
//!
//! These models are the store-facing representation of trivia entities
//! (questions and categories) together with the query descriptions that any
//! adapter implementation understands, so the backend can talk to every store
//! through the same types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// A question that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrder {
    #[default]
    Id,
    Type,
}

/// Sort key for question listings. Every ordering falls back to ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionOrder {
    #[default]
    Id,
    Category,
    Difficulty,
}

/// Filter and ordering for a question read.
///
/// `search` is a case-insensitive substring match against the question text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionQuery {
    pub category: Option<i64>,
    pub search: Option<String>,
    pub order: QuestionOrder,
}

impl QuestionQuery {
    pub fn ordered_by(order: QuestionOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: i64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matching(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether `question` passes the filter part of this query.
    pub fn accepts(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }

        match &self.search {
            Some(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str, category: i64) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = QuestionQuery::default().matching("TITLE");
        assert!(query.accepts(&question(1, "Whose autobiography is entitled?", 4)));
        assert!(!query.accepts(&question(2, "What boxer's original name is Cassius?", 4)));
    }

    #[test]
    fn category_and_search_combine() {
        let query = QuestionQuery::default().in_category(2).matching("who");
        assert!(query.accepts(&question(1, "Who painted it?", 2)));
        assert!(!query.accepts(&question(2, "Who painted it?", 3)));
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let value = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "type": "Science"}));
    }
}
