//! Postgres adapter implementation of the trivia store.
//!
//! This file contains the pooled client wrapper, the SQL for every store
//! operation and the conversion from result rows into the crate's models.

use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use log::{debug, info};
use tokio_postgres::error::SqlState;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

use crate::errors::StoreError;
use crate::models::{Category, CategoryOrder, NewQuestion, Question, QuestionOrder, QuestionQuery};
use crate::TriviaStore;

const SCHEMA: &str = include_str!("schema.sql");

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct PostgresStore {
    pool: Pool,
}

impl PostgresStore {
    /// Builds a connection pool for `url` and checks that a connection can be
    /// acquired.
    pub async fn connect(url: &str, max_connections: usize) -> Result<Self, StoreError> {
        let mut cfg = Config::new();
        cfg.url = Some(url.to_string());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        cfg.pool = Some(PoolConfig::new(max_connections));

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|err| StoreError::Unavailable(format!("pool creation failed: {err}")))?;

        let _client = pool.get().await?;
        info!("connected to trivia database");

        Ok(Self { pool })
    }

    /// Creates the `categories` and `questions` tables when they are missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let client = self.pool.get().await?;
        client.batch_execute(SCHEMA).await?;
        debug!("trivia schema is in place");
        Ok(())
    }
}

fn question_from_row(row: &Row) -> Result<Question, StoreError> {
    Ok(Question {
        id: row.try_get("id")?,
        question: row.try_get("question")?,
        answer: row.try_get("answer")?,
        category: row.try_get("category")?,
        difficulty: row.try_get("difficulty")?,
    })
}

fn order_clause(order: QuestionOrder) -> &'static str {
    match order {
        QuestionOrder::Id => "id",
        QuestionOrder::Category => "category, id",
        QuestionOrder::Difficulty => "difficulty, id",
    }
}

/// Escapes LIKE wildcards so `term` matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TriviaStore for PostgresStore {
    async fn categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StoreError> {
        let client = self.pool.get().await?;
        let sql = match order {
            CategoryOrder::Id => "SELECT id, type FROM categories ORDER BY id",
            CategoryOrder::Type => "SELECT id, type FROM categories ORDER BY type, id",
        };

        client
            .query(sql, &[])
            .await?
            .iter()
            .map(|row| -> Result<Category, StoreError> {
                Ok(Category {
                    id: row.try_get("id")?,
                    kind: row.try_get("type")?,
                })
            })
            .collect()
    }

    async fn questions(&self, query: &QuestionQuery) -> Result<Vec<Question>, StoreError> {
        let client = self.pool.get().await?;

        let pattern = query.search.as_deref().map(like_pattern);
        let mut clauses = Vec::new();
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

        if let Some(category) = &query.category {
            params.push(category);
            clauses.push(format!("category = ${}", params.len()));
        }
        if let Some(pattern) = &pattern {
            params.push(pattern);
            clauses.push(format!("question ILIKE ${}", params.len()));
        }

        let mut sql = format!("SELECT {QUESTION_COLUMNS} FROM questions");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(order_clause(query.order));

        client
            .query(sql.as_str(), &params)
            .await?
            .iter()
            .map(question_from_row)
            .collect()
    }

    async fn count_questions(&self) -> Result<u64, StoreError> {
        let client = self.pool.get().await?;
        let count: i64 = client
            .query_one("SELECT COUNT(*) FROM questions", &[])
            .await?
            .try_get(0)?;
        Ok(count.max(0) as u64)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                "INSERT INTO questions (question, answer, category, difficulty) \
                 VALUES ($1, $2, $3, $4) RETURNING id",
                &[
                    &question.question,
                    &question.answer,
                    &question.category,
                    &question.difficulty,
                ],
            )
            .await
            .map_err(|err| {
                if err.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) {
                    StoreError::UnknownCategory(question.category)
                } else {
                    StoreError::Query(err)
                }
            })?;

        let id: i64 = row.try_get("id")?;
        debug!("inserted question {id}");
        Ok(question.with_id(id))
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let client = self.pool.get().await?;
        let deleted = client
            .execute("DELETE FROM questions WHERE id = $1", &[&id])
            .await?;

        if deleted == 0 {
            return Err(StoreError::QuestionNotFound(id));
        }
        debug!("deleted question {id}");
        Ok(())
    }
}
