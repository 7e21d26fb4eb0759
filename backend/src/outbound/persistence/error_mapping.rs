//! Shared translation of pool and Diesel failures into store errors.

use tracing::debug;

use super::pool::PoolError;

/// Fold both pool error variants into a connection error constructor.
pub fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query or connection constructors.
///
/// Only a dropped connection counts as a connection error; everything
/// else, including constraint violations, is a query error.
pub fn map_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(
            error_type = %std::any::type_name_of_val(other),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection lost".to_owned())
        }
        other => query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::QuestionStoreError;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let error = map_pool_error(
            PoolError::checkout("timed out"),
            QuestionStoreError::connection,
        );
        assert!(matches!(
            error,
            QuestionStoreError::Connection { ref message } if message == "timed out"
        ));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        let error = map_diesel_error(
            diesel::result::Error::NotFound,
            QuestionStoreError::query,
            QuestionStoreError::connection,
        );
        assert!(matches!(error, QuestionStoreError::Query { .. }));
    }
}
