//! Domain ports: traits the outbound adapters implement.

mod category_repository;
mod memory;
mod question_repository;

pub use category_repository::{CategoryRepository, CategoryStoreError};
pub use memory::{InMemoryCategoryRepository, InMemoryQuestionRepository};
pub use question_repository::{QuestionRepository, QuestionStoreError};
