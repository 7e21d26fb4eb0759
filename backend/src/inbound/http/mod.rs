//! HTTP adapter translating requests into domain service calls.

pub mod categories;
pub mod error;
pub mod questions;
pub mod quizzes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorEnvelope};
pub use state::HttpState;
