//! Optional startup seeding.
//!
//! When the store holds no questions, a single placeholder question is
//! inserted so a fresh deployment renders a hint instead of an empty
//! board. Seeding is opt-in and runs once at startup; listing questions
//! never mutates the store.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{QuestionRepository, QuestionStoreError};
use crate::domain::{QuestionDraft, QuestionDraftError};

/// Failures while seeding the starter question.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The placeholder draft failed validation.
    #[error("starter question draft rejected: {0}")]
    Draft(#[from] QuestionDraftError),
    /// The store could not be read or written.
    #[error(transparent)]
    Store(#[from] QuestionStoreError),
}

/// Outcome of a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held questions; nothing was inserted.
    AlreadyPopulated,
    /// The placeholder question was inserted with the given id.
    Seeded { id: i32 },
}

fn starter_question() -> Result<QuestionDraft, QuestionDraftError> {
    QuestionDraft::new(
        "There seems to be no trivia!",
        "Go and add some!",
        1,
        "delete me",
    )
}

/// Insert the placeholder question when the store is empty.
///
/// # Errors
///
/// Returns [`SeedError`] when the store cannot be read or the insert
/// fails.
pub async fn seed_starter_question(
    questions: &Arc<dyn QuestionRepository>,
) -> Result<SeedOutcome, SeedError> {
    let existing = questions.list_ordered().await?;
    if !existing.is_empty() {
        info!(count = existing.len(), "store already populated, seeding skipped");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let inserted = questions.insert(starter_question()?).await?;
    info!(id = inserted.id, "starter question seeded");
    Ok(SeedOutcome::Seeded { id: inserted.id })
}
