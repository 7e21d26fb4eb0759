//! Quiz endpoint: draw one random question that the player has not yet
//! seen, optionally scoped to a category.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, Question, QuizScope};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorEnvelope};
use crate::inbound::http::state::HttpState;

/// Category selector sent by the quiz client.
///
/// An identifier of `0` means "all categories". The identifier is
/// accepted both as a number and as its text form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category identifier, `0` for all.
    pub id: CategoryId,
}

/// A category identifier that clients may send as a number or as text.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryId {
    /// Numeric form.
    Number(i32),
    /// Text form, parsed as a number.
    Text(String),
}

impl CategoryId {
    fn resolve(&self) -> ApiResult<i32> {
        match self {
            Self::Number(id) => Ok(*id),
            Self::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApiError::bad_request(format!("not a category id: {raw:?}"))),
        }
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct QuizRequest {
    /// Identifiers of questions already played this round.
    pub previous_questions: Option<Vec<i32>>,
    /// Category to draw from.
    pub quiz_category: Option<QuizCategory>,
}

/// Response payload for `POST /quizzes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    /// Always `true` on success.
    pub success: bool,
    /// The drawn question.
    pub question: Question,
}

/// Draw the next quiz question.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A question the player has not seen", body = QuizResponse),
        (status = 400, description = "Missing quiz parameters", body = ErrorEnvelope),
        (status = 404, description = "No questions left to draw", body = ErrorEnvelope),
        (status = 422, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "playQuiz"
)]
#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequest>,
) -> ApiResult<web::Json<QuizResponse>> {
    let request = payload.into_inner();
    let (previous, category) = match (request.previous_questions, request.quiz_category) {
        (Some(previous), Some(category)) => (previous, category),
        _ => {
            return Err(ApiError::from(DomainError::invalid_request(
                "previous_questions and quiz_category are both required",
            )));
        }
    };
    let scope = QuizScope::from_category_id(category.id.resolve()?);
    let question = state
        .quiz
        .next_question(scope, &previous)
        .await
        .map_err(DomainError::from)?;
    Ok(web::Json(QuizResponse {
        success: true,
        question,
    }))
}
