//! Quiz sequencing.
//!
//! A quiz session is held by the client: it resends the quiz category and the
//! identifiers it has already been served on every call. From that, and the
//! candidate questions ordered by ascending id, the session picks the next
//! question or reports that the quiz is exhausted.
//!
//! Two selection policies exist. `Positional` indexes the candidates by the
//! number of questions already served, which is only correct while the served
//! identifiers form an in-order prefix of the candidates. `ExcludeServed`
//! returns the first candidate that has not been served yet.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use trivia_adapters::{Question, QuestionOrder, QuestionQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(i64),
}

impl QuizCategory {
    /// Category `0` is the "all categories" sentinel used by clients.
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            QuizCategory::All
        } else {
            QuizCategory::Only(id)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    #[default]
    Positional,
    ExcludeServed,
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(SelectionPolicy::Positional),
            "exclude-served" | "exclude_served" => Ok(SelectionPolicy::ExcludeServed),
            other => Err(format!(
                "unknown selection policy '{other}', expected 'positional' or 'exclude-served'"
            )),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Positional => f.write_str("positional"),
            SelectionPolicy::ExcludeServed => f.write_str("exclude-served"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub category: QuizCategory,
    pub served: BTreeSet<i64>,
}

impl QuizSession {
    pub fn new(category: QuizCategory, served: impl IntoIterator<Item = i64>) -> Self {
        Self {
            category,
            served: served.into_iter().collect(),
        }
    }

    /// The candidate set for this session: every question in the category,
    /// ordered by ascending id.
    pub fn candidate_query(&self) -> QuestionQuery {
        let query = QuestionQuery::ordered_by(QuestionOrder::Id);
        match self.category {
            QuizCategory::All => query,
            QuizCategory::Only(id) => query.in_category(id),
        }
    }

    /// Picks the next question from `candidates`, or `None` once the session
    /// is exhausted.
    pub fn next<'a>(&self, candidates: &'a [Question], policy: SelectionPolicy) -> Option<&'a Question> {
        match policy {
            SelectionPolicy::Positional => candidates.get(self.served.len()),
            SelectionPolicy::ExcludeServed => candidates
                .iter()
                .find(|question| !self.served.contains(&question.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn first_call_returns_lowest_id() {
        let questions = candidates(&[3, 8, 21]);
        let session = QuizSession::new(QuizCategory::All, []);

        for policy in [SelectionPolicy::Positional, SelectionPolicy::ExcludeServed] {
            assert_eq!(session.next(&questions, policy).map(|q| q.id), Some(3));
        }
    }

    #[test]
    fn walking_the_quiz_serves_every_question_then_exhausts() {
        let questions = candidates(&[2, 5, 9, 14]);

        for policy in [SelectionPolicy::Positional, SelectionPolicy::ExcludeServed] {
            let mut served = Vec::new();
            for _ in 0..questions.len() {
                let session = QuizSession::new(QuizCategory::All, served.clone());
                let next = session.next(&questions, policy).expect("question available");
                served.push(next.id);
            }
            assert_eq!(served, [2, 5, 9, 14]);

            let session = QuizSession::new(QuizCategory::All, served);
            assert!(session.next(&questions, policy).is_none());
        }
    }

    #[test]
    fn empty_candidate_set_is_exhausted() {
        let session = QuizSession::new(QuizCategory::Only(4), []);
        assert!(session.next(&[], SelectionPolicy::Positional).is_none());
        assert!(session.next(&[], SelectionPolicy::ExcludeServed).is_none());
    }

    #[test]
    fn positional_repeats_questions_when_served_set_is_not_a_prefix() {
        // Served ids 9 and 14 are not a prefix of the candidate ordering, so
        // indexing by count lands on 9 again.
        let questions = candidates(&[2, 5, 9, 14]);
        let session = QuizSession::new(QuizCategory::All, [9, 14]);

        assert_eq!(session.next(&questions, SelectionPolicy::Positional).map(|q| q.id), Some(9));
        assert_eq!(session.next(&questions, SelectionPolicy::ExcludeServed).map(|q| q.id), Some(2));
    }

    #[test]
    fn positional_ends_early_when_foreign_ids_were_served() {
        let questions = candidates(&[2, 5]);
        let session = QuizSession::new(QuizCategory::Only(1), [100, 101]);

        assert!(session.next(&questions, SelectionPolicy::Positional).is_none());
        assert_eq!(session.next(&questions, SelectionPolicy::ExcludeServed).map(|q| q.id), Some(2));
    }

    #[test]
    fn duplicate_served_ids_count_once() {
        let questions = candidates(&[2, 5, 9]);
        let session = QuizSession::new(QuizCategory::All, [2, 2, 2]);

        assert_eq!(session.served.len(), 1);
        assert_eq!(session.next(&questions, SelectionPolicy::Positional).map(|q| q.id), Some(5));
    }

    #[test]
    fn candidate_query_filters_by_category() {
        let all = QuizSession::new(QuizCategory::from_id(0), []).candidate_query();
        assert_eq!(all.category, None);
        assert_eq!(all.order, QuestionOrder::Id);

        let science = QuizSession::new(QuizCategory::from_id(1), []).candidate_query();
        assert_eq!(science.category, Some(1));
    }

    #[test]
    fn policy_parses_from_config_values() {
        assert_eq!("positional".parse::<SelectionPolicy>(), Ok(SelectionPolicy::Positional));
        assert_eq!("Exclude-Served".parse::<SelectionPolicy>(), Ok(SelectionPolicy::ExcludeServed));
        assert!("random".parse::<SelectionPolicy>().is_err());
    }
}
