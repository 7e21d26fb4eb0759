//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`. It is built once
//! at process start and injected, replacing the module-level store handle a
//! naive implementation would reach for, and keeps handlers testable without
//! I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryQuestionRepository,
    QuestionRepository,
};
use crate::domain::{QuestionQueryService, QuizSelector};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Question listing, search, create, and delete operations.
    pub questions: Arc<QuestionQueryService>,
    /// Next-quiz-question selection.
    pub quiz: Arc<QuizSelector>,
}

impl HttpState {
    /// Construct state over the given repository ports.
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions: Arc::new(QuestionQueryService::new(
                question_repo.clone(),
                category_repo,
            )),
            quiz: Arc::new(QuizSelector::new(question_repo)),
        }
    }

    /// State over empty in-memory stores with the default category seed.
    ///
    /// Used by tests and as the server fallback when no database is
    /// configured.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryQuestionRepository::new()),
            Arc::new(InMemoryCategoryRepository::default()),
        )
    }
}
