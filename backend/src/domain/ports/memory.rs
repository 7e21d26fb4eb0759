//! In-memory port implementations.
//!
//! Used by unit and HTTP-level tests, and wired by the server when no
//! database URL is configured so the API stays exercisable locally.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    CategoryRepository, CategoryStoreError, QuestionRepository, QuestionStoreError,
};
use crate::domain::{Category, Question, QuestionDraft};

/// Mutex poisoning only happens after a panic in another test thread; map it
/// to a store error instead of propagating the panic.
fn poisoned<E>(make: impl FnOnce(String) -> E) -> E {
    make("in-memory store lock poisoned".to_owned())
}

#[derive(Debug, Default)]
struct QuestionStoreState {
    questions: Vec<Question>,
    next_id: i32,
}

/// Thread-safe in-memory [`QuestionRepository`].
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    state: Mutex<QuestionStoreState>,
}

impl InMemoryQuestionRepository {
    /// An empty repository assigning ids from 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QuestionStoreState {
                questions: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// A repository pre-populated with `questions`.
    ///
    /// Ids continue from the highest seeded identifier.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(QuestionStoreState { questions, next_id }),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, QuestionStoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| poisoned(QuestionStoreError::query))?;
        state.next_id += 1;
        let question = draft.into_question(state.next_id);
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> Result<(), QuestionStoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| poisoned(QuestionStoreError::query))?;
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return Err(QuestionStoreError::row_not_found(id));
        }
        Ok(())
    }

    async fn list_ordered(&self) -> Result<Vec<Question>, QuestionStoreError> {
        let state = self
            .state
            .lock()
            .map_err(|_| poisoned(QuestionStoreError::query))?;
        let mut questions = state.questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, QuestionStoreError> {
        let needle = term.to_lowercase();
        let mut questions: Vec<Question> = self
            .list_ordered()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Question>, QuestionStoreError> {
        Ok(self
            .list_ordered()
            .await?
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }

    async fn quiz_pool(
        &self,
        category: Option<&str>,
        excluded: &[i32],
    ) -> Result<Vec<Question>, QuestionStoreError> {
        let base = match category {
            Some(category) => self.list_by_category(category).await?,
            None => self.list_ordered().await?,
        };
        Ok(base
            .into_iter()
            .filter(|q| !excluded.contains(&q.id))
            .collect())
    }
}

/// In-memory read-only [`CategoryRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepository {
    /// A repository holding exactly `categories`.
    #[must_use]
    pub fn with_categories(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.id);
        Self { categories }
    }
}

impl Default for InMemoryCategoryRepository {
    /// The canonical trivia categories seeded by the migrations.
    fn default() -> Self {
        let categories = [
            (1, "Science"),
            (2, "Art"),
            (3, "Geography"),
            (4, "History"),
            (5, "Entertainment"),
            (6, "Sports"),
        ]
        .into_iter()
        .map(|(id, kind)| Category {
            id,
            kind: kind.to_owned(),
        })
        .collect();
        Self::with_categories(categories)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_ordered(&self) -> Result<Vec<Category>, CategoryStoreError> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(question: &str, category: &str) -> QuestionDraft {
        QuestionDraft::new(question, "answer", 1, category).expect("valid draft")
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryQuestionRepository::new();
        let first = repo.insert(draft("q1", "1")).await.expect("insert");
        let second = repo.insert(draft("q2", "1")).await.expect("insert");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let repo = InMemoryQuestionRepository::new();
        let stored = repo.insert(draft("q1", "1")).await.expect("insert");
        repo.delete(stored.id).await.expect("first delete succeeds");
        assert_eq!(
            repo.delete(stored.id).await,
            Err(QuestionStoreError::row_not_found(stored.id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(draft("The African Elephant", "3"))
            .await
            .expect("insert");
        repo.insert(draft("Quantum mechanics", "1"))
            .await
            .expect("insert");

        let matches = repo.search("elephant").await.expect("search");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].question, "The African Elephant");
    }

    #[rstest]
    #[tokio::test]
    async fn quiz_pool_respects_category_and_exclusions() {
        let repo = InMemoryQuestionRepository::new();
        let science = repo.insert(draft("s1", "1")).await.expect("insert");
        repo.insert(draft("a1", "2")).await.expect("insert");
        let science_two = repo.insert(draft("s2", "1")).await.expect("insert");

        let pool = repo
            .quiz_pool(Some("1"), &[science.id])
            .await
            .expect("quiz pool");
        assert_eq!(pool, vec![science_two]);
    }

    #[rstest]
    #[tokio::test]
    async fn default_categories_match_the_seed() {
        let repo = InMemoryCategoryRepository::default();
        let categories = repo.list_ordered().await.expect("list");
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[5].kind, "Sports");
    }
}
