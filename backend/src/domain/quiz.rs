//! Quiz selection: pick one unseen question at random.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::ports::{QuestionRepository, QuestionStoreError};
use crate::domain::{DomainError, Question};

/// Which questions are eligible for the next quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Any category (the client sends category id 0).
    Any,
    /// Only questions in the given category.
    Category(i32),
}

impl QuizScope {
    /// Interpret a client-supplied category id; 0 is the "any" sentinel.
    #[must_use]
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 { Self::Any } else { Self::Category(id) }
    }
}

/// Failures raised by quiz selection.
///
/// An empty pool is a first-class outcome: random choice over an empty
/// collection is undefined, so it is guarded before any pick happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizSelectionError {
    /// No unseen questions remain in the requested scope.
    #[error("no unseen questions remain in the quiz pool")]
    EmptyPool,
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] QuestionStoreError),
}

impl From<QuizSelectionError> for DomainError {
    fn from(error: QuizSelectionError) -> Self {
        match error {
            QuizSelectionError::EmptyPool => {
                Self::not_found("no unseen questions remain in the quiz pool")
            }
            QuizSelectionError::Store(QuestionStoreError::Connection { message }) => {
                Self::internal(format!("question store unavailable: {message}"))
            }
            QuizSelectionError::Store(QuestionStoreError::Query { message }) => {
                Self::unprocessable(format!("question store error: {message}"))
            }
            QuizSelectionError::Store(QuestionStoreError::RowNotFound { id }) => {
                Self::not_found(format!("question {id} does not exist"))
            }
        }
    }
}

/// Picks the next quiz question uniformly at random from the unseen pool.
#[derive(Clone)]
pub struct QuizSelector {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizSelector {
    /// Create a selector over the given repository.
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Pick one question in `scope` whose id is not in `previous_ids`.
    pub async fn next_question(
        &self,
        scope: QuizScope,
        previous_ids: &[i32],
    ) -> Result<Question, QuizSelectionError> {
        self.next_question_with_rng(scope, previous_ids, &mut rand::thread_rng())
            .await
    }

    /// [`Self::next_question`] with an injected RNG for deterministic tests.
    pub async fn next_question_with_rng<R>(
        &self,
        scope: QuizScope,
        previous_ids: &[i32],
        rng: &mut R,
    ) -> Result<Question, QuizSelectionError>
    where
        R: Rng + ?Sized,
    {
        let category = match scope {
            QuizScope::Any => None,
            QuizScope::Category(id) => Some(id.to_string()),
        };
        let pool = self
            .questions
            .quiz_pool(category.as_deref(), previous_ids)
            .await?;
        pool.choose(rng)
            .cloned()
            .ok_or(QuizSelectionError::EmptyPool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::QuestionDraft;
    use crate::domain::ports::InMemoryQuestionRepository;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    async fn selector_with_questions(count: usize, category: &str) -> QuizSelector {
        let repo = InMemoryQuestionRepository::new();
        for index in 0..count {
            repo.insert(
                QuestionDraft::new(format!("question {index}"), "answer", 1, category)
                    .expect("valid draft"),
            )
            .await
            .expect("insert");
        }
        QuizSelector::new(Arc::new(repo))
    }

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[case(1234)]
    #[tokio::test]
    async fn never_returns_a_previously_seen_question(#[case] seed: u64) {
        let selector = selector_with_questions(5, "1").await;
        let previous = vec![1, 2, 4];
        let mut rng = SmallRng::seed_from_u64(seed);

        let picked = selector
            .next_question_with_rng(QuizScope::Any, &previous, &mut rng)
            .await
            .expect("pool is non-empty");
        assert!(!previous.contains(&picked.id));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_pool_is_a_guarded_failure() {
        let selector = selector_with_questions(2, "1").await;
        let err = selector
            .next_question(QuizScope::Any, &[1, 2])
            .await
            .expect_err("everything has been seen");
        assert_eq!(err, QuizSelectionError::EmptyPool);
        assert_eq!(DomainError::from(err).code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn category_scope_restricts_the_pool() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(QuestionDraft::new("science", "a", 1, "1").expect("valid draft"))
            .await
            .expect("insert");
        repo.insert(QuestionDraft::new("art", "a", 1, "2").expect("valid draft"))
            .await
            .expect("insert");
        let selector = QuizSelector::new(Arc::new(repo));

        let picked = selector
            .next_question(QuizScope::Category(2), &[])
            .await
            .expect("art pool is non-empty");
        assert_eq!(picked.question, "art");
    }

    #[rstest]
    #[case(0, QuizScope::Any)]
    #[case(3, QuizScope::Category(3))]
    fn category_id_zero_is_the_any_sentinel(#[case] id: i32, #[case] expected: QuizScope) {
        assert_eq!(QuizScope::from_category_id(id), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn exhausting_the_pool_visits_every_question_once() {
        let selector = selector_with_questions(4, "1").await;
        let mut seen = Vec::new();
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..4 {
            let picked = selector
                .next_question_with_rng(QuizScope::Any, &seen, &mut rng)
                .await
                .expect("pool not yet exhausted");
            assert!(!seen.contains(&picked.id));
            seen.push(picked.id);
        }
        assert_eq!(
            selector
                .next_question_with_rng(QuizScope::Any, &seen, &mut rng)
                .await,
            Err(QuizSelectionError::EmptyPool)
        );
    }
}
