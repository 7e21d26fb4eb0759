//! Port abstraction for category persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::Category;

/// Persistence errors raised by category repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryStoreError {
    /// Store connection could not be established or was lost.
    #[error("category store connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },
    /// Query failed during execution.
    #[error("category store query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
}

impl CategoryStoreError {
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
}

/// Read-only persistence port for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by identifier.
    async fn list_ordered(&self) -> Result<Vec<Category>, CategoryStoreError>;
}
