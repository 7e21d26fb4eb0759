//! Trivia question value types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored trivia question.
///
/// The identifier is assigned by the persistence store on insert. The
/// category is kept as text because the store records it that way; when
/// meaningful it names an existing [`Category`](crate::domain::Category)
/// identifier, but the store does not enforce the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Store-assigned identifier.
    #[schema(example = 5)]
    pub id: i32,
    /// The question text shown to players.
    #[schema(example = "What is 2 + 2?")]
    pub question: String,
    /// The accepted answer text.
    #[schema(example = "4")]
    pub answer: String,
    /// Difficulty rating, 1 (easy) upwards.
    #[schema(example = 1)]
    pub difficulty: i32,
    /// Category identifier, stored as text.
    #[schema(example = "1")]
    pub category: String,
}

/// Validation failures raised while constructing a [`QuestionDraft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionDraftError {
    /// The question text was empty or whitespace-only.
    #[error("question text must not be empty")]
    EmptyQuestion,
    /// The answer text was empty or whitespace-only.
    #[error("answer text must not be empty")]
    EmptyAnswer,
    /// Difficulty must be a positive rating.
    #[error("difficulty must be at least 1, got {value}")]
    InvalidDifficulty {
        /// The rejected difficulty value.
        value: i32,
    },
}

/// A validated, not-yet-persisted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    question: String,
    answer: String,
    difficulty: i32,
    category: String,
}

impl QuestionDraft {
    /// Validate the parts of a new question.
    ///
    /// Question and answer text must be non-blank and difficulty positive.
    /// The category is accepted as-is; the store does not enforce that it
    /// references an existing category row.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i32,
        category: impl Into<String>,
    ) -> Result<Self, QuestionDraftError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuestionDraftError::EmptyQuestion);
        }
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionDraftError::EmptyAnswer);
        }
        if difficulty < 1 {
            return Err(QuestionDraftError::InvalidDifficulty { value: difficulty });
        }
        Ok(Self {
            question,
            answer,
            difficulty,
            category: category.into(),
        })
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The difficulty rating.
    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// The category identifier text.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Promote the draft to a stored question with a store-assigned id.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}
