//! Request and response bodies for the questions API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_adapters::{NewQuestion, Question};

use crate::errors::AppError;
use crate::utils;

/// What a `POST /questions` body asks for.
#[derive(Debug)]
pub enum QuestionsPost {
    Search(String),
    Create(CreateQuestionRequest),
}

impl QuestionsPost {
    /// A non-empty string `searchTerm` selects search; anything else is a
    /// creation request.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::bad_request("request body must be a JSON object"));
        }

        if let Some(Value::String(term)) = body.get("searchTerm") {
            if !term.is_empty() {
                return Ok(QuestionsPost::Search(term.clone()));
            }
        }

        serde_json::from_value(body)
            .map(QuestionsPost::Create)
            .map_err(|e| AppError::bad_request(e.to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

impl CreateQuestionRequest {
    /// Checks that every field is present, non-null and of a usable shape.
    pub fn validate(self) -> Result<NewQuestion, AppError> {
        let difficulty = required_integer(self.difficulty, "difficulty")?;

        Ok(NewQuestion {
            question: required_text(self.question, "question")?,
            answer: required_text(self.answer, "answer")?,
            category: required_integer(self.category, "category")?,
            difficulty: i32::try_from(difficulty)
                .map_err(|_| AppError::bad_request("difficulty is out of range"))?,
        })
    }
}

fn required_text(value: Option<Value>, field: &str) -> Result<String, AppError> {
    match value {
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(AppError::bad_request(format!("{field} must be a string"))),
        None => Err(AppError::bad_request(format!("{field} is required"))),
    }
}

fn required_integer(value: Option<Value>, field: &str) -> Result<i64, AppError> {
    let value = value.ok_or_else(|| AppError::bad_request(format!("{field} is required")))?;
    utils::integer(&value)
        .ok_or_else(|| AppError::bad_request(format!("{field} must be an integer")))
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_categorie: i64,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}
