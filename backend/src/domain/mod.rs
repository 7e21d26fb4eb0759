//! Transport-agnostic trivia domain: value types, services, and ports.

mod category;
mod error;
mod question;
pub mod ports;
pub mod questions;
pub mod quiz;

pub use category::{Category, CategoryMap};
pub use error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use question::{Question, QuestionDraft, QuestionDraftError};
pub use questions::{CategoryListing, CreatedQuestion, QuestionListing, QuestionPage, QuestionQueryService};
pub use quiz::{QuizScope, QuizSelectionError, QuizSelector};
