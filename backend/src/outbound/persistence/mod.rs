//! Diesel-backed persistence adapters for the trivia store.

pub mod diesel_category_repository;
pub mod diesel_question_repository;
pub mod error_mapping;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
