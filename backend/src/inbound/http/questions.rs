//! Question endpoints: paginated listing, search/create, delete, and
//! listing by category.
//!
//! ```text
//! GET /questions?page=N
//! POST /questions {"question": ..., "answer": ..., "difficulty": 1, "category": 1}
//! POST /questions {"searchTerm": "elephant"}
//! DELETE /questions/{id}
//! GET /categories/{category_id}/questions
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use pagination::PageNumber;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CategoryMap, DomainError, Question, QuestionDraft};
use crate::inbound::http::error::{ApiError, ErrorEnvelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query string carrying the optional 1-based page number.
///
/// The raw value is kept as text so malformed input fails through the
/// standard envelope instead of actix's default deserialization error.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    /// Requested page, defaulting to 1.
    pub page: Option<String>,
}

impl PageQuery {
    /// Parse the requested page, defaulting to the first.
    pub fn requested_page(&self) -> ApiResult<PageNumber> {
        match self.page.as_deref() {
            None => Ok(PageNumber::FIRST),
            Some(raw) => raw
                .parse()
                .map_err(|err: pagination::PageNumberError| ApiError::bad_request(err.to_string())),
        }
    }
}

/// A category reference that clients may send as a number or as text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryField {
    /// Numeric identifier form.
    Id(i32),
    /// Text form, stored verbatim.
    Text(String),
}

impl CategoryField {
    fn into_text(self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// Body of `POST /questions`: a search when `searchTerm` is present and
/// non-empty, otherwise a create.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPostRequest {
    /// Free-text search term; presence selects the search operation.
    pub search_term: Option<String>,
    /// Question text for the create operation.
    pub question: Option<String>,
    /// Answer text for the create operation.
    pub answer: Option<String>,
    /// Difficulty rating for the create operation.
    pub difficulty: Option<i32>,
    /// Category reference for the create operation.
    pub category: Option<CategoryField>,
}

/// Response payload for `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    /// Always `true` on success.
    pub success: bool,
    /// The questions on the requested page.
    pub questions: Vec<Question>,
    /// Total questions before pagination.
    pub total_questions: usize,
    /// All categories keyed by identifier.
    pub categories: CategoryMap,
}

/// Response payload for the search branch of `POST /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Matching questions on the requested page.
    pub questions: Vec<Question>,
    /// Total matches before pagination.
    pub total_questions: usize,
    /// Search is not scoped to a category.
    pub current_category: Option<i32>,
}

/// Response payload for the create branch of `POST /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Identifier assigned to the new question.
    pub created: i32,
    /// A fresh listing of all questions, paginated.
    pub questions: Vec<Question>,
    /// Total questions after the insert.
    pub total_questions: usize,
    /// Confirmation message.
    pub message: String,
}

/// Response payload for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
}

/// Response payload for `GET /categories/{category_id}/questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Questions in the category, on the requested page.
    pub questions: Vec<Question>,
    /// Total questions in the category.
    pub total_questions: usize,
    /// The category the listing was filtered by.
    pub current_category: i32,
}

/// Paginated listing of all questions, paired with all categories.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed page number", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let page = query.requested_page()?;
    let listing = state.questions.list_all(page).await?;
    Ok(web::Json(QuestionListResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total_questions,
        categories: listing.categories,
    }))
}

/// Create a question, or search when `searchTerm` is present.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = QuestionPostRequest,
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 201, description = "Question created", body = CreateResponse),
        (status = 400, description = "Malformed request", body = ErrorEnvelope),
        (status = 422, description = "Invalid question or store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "postQuestion"
)]
#[post("/questions")]
pub async fn post_question(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<QuestionPostRequest>,
) -> ApiResult<HttpResponse> {
    let page = query.requested_page()?;
    let request = payload.into_inner();

    if let Some(term) = request.search_term.as_deref().filter(|t| !t.is_empty()) {
        let results = state.questions.search(term, page).await?;
        return Ok(HttpResponse::Ok().json(SearchResponse {
            success: true,
            questions: results.questions,
            total_questions: results.total_questions,
            current_category: None,
        }));
    }

    let draft = QuestionDraft::new(
        request.question.unwrap_or_default(),
        request.answer.unwrap_or_default(),
        request.difficulty.unwrap_or(0),
        request
            .category
            .map(CategoryField::into_text)
            .unwrap_or_default(),
    )
    .map_err(|err| ApiError::from(DomainError::unprocessable(err.to_string())))?;

    let created = state.questions.create(draft, page).await?;
    Ok(HttpResponse::Created().json(CreateResponse {
        success: true,
        created: created.created,
        questions: created.page.questions,
        total_questions: created.page.total_questions,
        message: "successfully added the trivia question".to_owned(),
    }))
}

/// Delete a question by identifier.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeleteResponse),
        (status = 404, description = "Unknown identifier", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let id = path.into_inner();
    state.questions.delete(id).await?;
    Ok(web::Json(DeleteResponse {
        success: true,
        message: "trivia question has been deleted".to_owned(),
    }))
}

/// Paginated listing of the questions in one category.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category identifier"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Malformed page number", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestionsByCategory"
)]
#[get("/categories/{category_id}/questions")]
pub async fn list_questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<CategoryQuestionsResponse>> {
    let page = query.requested_page()?;
    let listing = state
        .questions
        .list_by_category(path.into_inner(), page)
        .await?;
    Ok(web::Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total_questions,
        current_category: listing.current_category,
    }))
}
