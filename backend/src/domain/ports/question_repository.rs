//! Port abstraction for question persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Question, QuestionDraft};

/// Persistence errors raised by question repository adapters.
///
/// The variants are deliberately tagged so callers can map a missing row to
/// 404 while storage faults surface as 422/500, instead of collapsing every
/// failure into one status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionStoreError {
    /// Store connection could not be established or was lost.
    #[error("question store connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("question store query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
    /// The identifier does not resolve to a stored question.
    #[error("question {id} does not exist")]
    RowNotFound {
        /// The identifier that failed to resolve.
        id: i32,
    },
}

impl QuestionStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a missing-row error for the given identifier.
    pub fn row_not_found(id: i32) -> Self {
        Self::RowNotFound { id }
    }
}

/// Persistence port for trivia questions.
///
/// Implementations own identity assignment; `insert` returns the stored
/// question with its new identifier. All listing operations return results
/// ordered by ascending identifier.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a new question and return it with the store-assigned id.
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, QuestionStoreError>;

    /// Remove a question by identifier.
    ///
    /// Returns [`QuestionStoreError::RowNotFound`] when no row matches.
    async fn delete(&self, id: i32) -> Result<(), QuestionStoreError>;

    /// All questions ordered by identifier.
    async fn list_ordered(&self) -> Result<Vec<Question>, QuestionStoreError>;

    /// Questions whose text contains `term`, compared case-insensitively.
    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionStoreError>;

    /// Questions whose category field equals `category`, compared as text.
    async fn list_by_category(&self, category: &str)
    -> Result<Vec<Question>, QuestionStoreError>;

    /// Candidate questions for quiz selection.
    ///
    /// Restricted to `category` when one is given, always excluding the
    /// identifiers in `excluded`.
    async fn quiz_pool(
        &self,
        category: Option<&str>,
        excluded: &[i32],
    ) -> Result<Vec<Question>, QuestionStoreError>;
}
