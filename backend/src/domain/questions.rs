//! Question query service: list, search, create, delete, list-by-category.
//!
//! Each operation fetches through the repository ports, paginates with the
//! shared `pagination` crate, and maps store errors onto the domain error
//! taxonomy. Reads are pure; seeding hint content lives in the explicit
//! startup step, not here.

use std::sync::Arc;

use pagination::{PageNumber, page_slice};

use crate::domain::ports::{
    CategoryRepository, CategoryStoreError, QuestionRepository, QuestionStoreError,
};
use crate::domain::{CategoryMap, DomainError, Question, QuestionDraft};

/// One page of questions plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// The questions on the requested page.
    pub questions: Vec<Question>,
    /// Total matching questions before pagination.
    pub total_questions: usize,
}

/// Result of the list-all operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    /// The paginated questions and total count.
    pub page: QuestionPage,
    /// All categories keyed by identifier.
    pub categories: CategoryMap,
}

/// Result of the create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    /// Identifier assigned to the new question.
    pub created: i32,
    /// A fresh listing of all questions, paginated.
    pub page: QuestionPage,
}

/// Result of the list-by-category operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    /// The paginated questions and total count.
    pub page: QuestionPage,
    /// The category identifier the listing was filtered by.
    pub current_category: i32,
}

fn map_question_store_error(error: QuestionStoreError) -> DomainError {
    match error {
        QuestionStoreError::Connection { message } => {
            DomainError::internal(format!("question store unavailable: {message}"))
        }
        QuestionStoreError::Query { message } => {
            DomainError::unprocessable(format!("question store error: {message}"))
        }
        QuestionStoreError::RowNotFound { id } => {
            DomainError::not_found(format!("question {id} does not exist"))
        }
    }
}

fn map_category_store_error(error: CategoryStoreError) -> DomainError {
    match error {
        CategoryStoreError::Connection { message } => {
            DomainError::internal(format!("category store unavailable: {message}"))
        }
        CategoryStoreError::Query { message } => {
            DomainError::unprocessable(format!("category store error: {message}"))
        }
    }
}

fn paginate(questions: Vec<Question>, page: PageNumber) -> QuestionPage {
    let total_questions = questions.len();
    let questions = page_slice(page, &questions).to_vec();
    QuestionPage {
        questions,
        total_questions,
    }
}

/// Query service over the question and category ports.
#[derive(Clone)]
pub struct QuestionQueryService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionQueryService {
    /// Create a new service over the given repositories.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// All categories keyed by identifier.
    pub async fn categories(&self) -> Result<CategoryMap, DomainError> {
        let categories = self
            .categories
            .list_ordered()
            .await
            .map_err(map_category_store_error)?;
        Ok(CategoryMap::from(categories))
    }

    /// All questions ordered by id, paginated, paired with all categories.
    pub async fn list_all(&self, page: PageNumber) -> Result<QuestionListing, DomainError> {
        let questions = self
            .questions
            .list_ordered()
            .await
            .map_err(map_question_store_error)?;
        let categories = self.categories().await?;
        Ok(QuestionListing {
            page: paginate(questions, page),
            categories,
        })
    }

    /// Questions whose text contains `term` case-insensitively, paginated.
    ///
    /// `total_questions` counts every match, not just the returned page.
    pub async fn search(
        &self,
        term: &str,
        page: PageNumber,
    ) -> Result<QuestionPage, DomainError> {
        let matches = self
            .questions
            .search(term)
            .await
            .map_err(map_question_store_error)?;
        Ok(paginate(matches, page))
    }

    /// Insert a new question, returning its id and a fresh listing.
    pub async fn create(
        &self,
        draft: QuestionDraft,
        page: PageNumber,
    ) -> Result<CreatedQuestion, DomainError> {
        let created = self
            .questions
            .insert(draft)
            .await
            .map_err(map_question_store_error)?;
        let questions = self
            .questions
            .list_ordered()
            .await
            .map_err(map_question_store_error)?;
        Ok(CreatedQuestion {
            created: created.id,
            page: paginate(questions, page),
        })
    }

    /// Delete a question by identifier.
    ///
    /// An unknown identifier maps to NotFound; storage faults keep their own
    /// codes so callers can tell the cases apart.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.questions
            .delete(id)
            .await
            .map_err(map_question_store_error)
    }

    /// Questions in the given category (compared as text), paginated.
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: PageNumber,
    ) -> Result<CategoryListing, DomainError> {
        let questions = self
            .questions
            .list_by_category(&category_id.to_string())
            .await
            .map_err(map_question_store_error)?;
        Ok(CategoryListing {
            page: paginate(questions, page),
            current_category: category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{InMemoryCategoryRepository, InMemoryQuestionRepository};
    use async_trait::async_trait;
    use rstest::rstest;

    fn service_with(repo: InMemoryQuestionRepository) -> QuestionQueryService {
        QuestionQueryService::new(
            Arc::new(repo),
            Arc::new(InMemoryCategoryRepository::default()),
        )
    }

    fn draft(question: &str, category: &str) -> QuestionDraft {
        QuestionDraft::new(question, "answer", 1, category).expect("valid draft")
    }

    async fn seeded_service(count: usize) -> QuestionQueryService {
        let repo = InMemoryQuestionRepository::new();
        for index in 0..count {
            repo.insert(draft(&format!("question {index}"), "1"))
                .await
                .expect("insert");
        }
        service_with(repo)
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_paginates_and_reports_the_full_total() {
        let service = seeded_service(25).await;

        let first = service.list_all(PageNumber::FIRST).await.expect("list");
        assert_eq!(first.page.questions.len(), 10);
        assert_eq!(first.page.total_questions, 25);
        assert_eq!(first.categories.len(), 6);

        let third = service
            .list_all(PageNumber::new(3).expect("valid page"))
            .await
            .expect("list");
        assert_eq!(third.page.questions.len(), 5);
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_past_the_end_is_empty_not_an_error() {
        let service = seeded_service(3).await;
        let listing = service
            .list_all(PageNumber::new(9).expect("valid page"))
            .await
            .expect("list");
        assert!(listing.page.questions.is_empty());
        assert_eq!(listing.page.total_questions, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_on_an_empty_store_stays_empty() {
        // Listing is a pure read; hint content only comes from the explicit
        // seed step.
        let service = seeded_service(0).await;
        let listing = service.list_all(PageNumber::FIRST).await.expect("list");
        assert!(listing.page.questions.is_empty());
        let again = service.list_all(PageNumber::FIRST).await.expect("list");
        assert_eq!(again.page.total_questions, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn search_total_counts_all_matches() {
        let repo = InMemoryQuestionRepository::new();
        for index in 0..12 {
            repo.insert(draft(&format!("An Elephant fact {index}"), "1"))
                .await
                .expect("insert");
        }
        repo.insert(draft("Unrelated", "1")).await.expect("insert");
        let service = service_with(repo);

        let page = service
            .search("elephant", PageNumber::FIRST)
            .await
            .expect("search");
        assert_eq!(page.questions.len(), 10);
        assert_eq!(page.total_questions, 12);
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_list_round_trips_exactly_once() {
        let service = seeded_service(0).await;
        let created = service
            .create(draft("What is 2 + 2?", "1"), PageNumber::FIRST)
            .await
            .expect("create");

        let listing = service.list_all(PageNumber::FIRST).await.expect("list");
        let matching: Vec<_> = listing
            .page
            .questions
            .iter()
            .filter(|q| q.id == created.created)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].question, "What is 2 + 2?");
        assert_eq!(created.page.total_questions, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_twice_yields_success_then_not_found() {
        let repo = InMemoryQuestionRepository::new();
        let stored = repo.insert(draft("q", "1")).await.expect("insert");
        let service = service_with(repo);

        service.delete(stored.id).await.expect("first delete");
        let err = service
            .delete(stored.id)
            .await
            .expect_err("second delete fails");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn list_by_category_filters_by_text_comparison() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(draft("science q", "1")).await.expect("insert");
        repo.insert(draft("art q", "2")).await.expect("insert");
        let service = service_with(repo);

        let listing = service
            .list_by_category(2, PageNumber::FIRST)
            .await
            .expect("list by category");
        assert_eq!(listing.page.total_questions, 1);
        assert_eq!(listing.page.questions[0].question, "art q");
        assert_eq!(listing.current_category, 2);
    }

    struct FailingQuestionRepository(QuestionStoreError);

    #[async_trait]
    impl QuestionRepository for FailingQuestionRepository {
        async fn insert(&self, _draft: QuestionDraft) -> Result<Question, QuestionStoreError> {
            Err(self.0.clone())
        }

        async fn delete(&self, _id: i32) -> Result<(), QuestionStoreError> {
            Err(self.0.clone())
        }

        async fn list_ordered(&self) -> Result<Vec<Question>, QuestionStoreError> {
            Err(self.0.clone())
        }

        async fn search(&self, _term: &str) -> Result<Vec<Question>, QuestionStoreError> {
            Err(self.0.clone())
        }

        async fn list_by_category(
            &self,
            _category: &str,
        ) -> Result<Vec<Question>, QuestionStoreError> {
            Err(self.0.clone())
        }

        async fn quiz_pool(
            &self,
            _category: Option<&str>,
            _excluded: &[i32],
        ) -> Result<Vec<Question>, QuestionStoreError> {
            Err(self.0.clone())
        }
    }

    #[rstest]
    #[case(QuestionStoreError::query("constraint violated"), ErrorCode::UnprocessableEntity)]
    #[case(QuestionStoreError::connection("refused"), ErrorCode::InternalError)]
    #[case(QuestionStoreError::row_not_found(4), ErrorCode::NotFound)]
    #[tokio::test]
    async fn store_failures_keep_their_distinct_codes(
        #[case] store_error: QuestionStoreError,
        #[case] expected: ErrorCode,
    ) {
        let service = QuestionQueryService::new(
            Arc::new(FailingQuestionRepository(store_error)),
            Arc::new(InMemoryCategoryRepository::default()),
        );
        let err = service.delete(4).await.expect_err("delete fails");
        assert_eq!(err.code(), expected);
    }
}
