//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every HTTP
//! endpoint and the schemas they exchange. Swagger UI serves the
//! document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::categories::CategoriesResponse;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{
    CategoryQuestionsResponse, CreateResponse, DeleteResponse, QuestionListResponse,
    QuestionPostRequest, SearchResponse,
};
use crate::inbound::http::quizzes::{QuizRequest, QuizResponse};
use crate::domain::{ErrorCode, Question};

/// OpenAPI document for the trivia API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "HTTP interface for browsing, managing, and playing trivia questions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::post_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::list_questions_by_category,
        crate::inbound::http::quizzes::play_quiz,
    ),
    components(schemas(
        Question,
        CategoriesResponse,
        ErrorCode,
        ErrorEnvelope,
        QuestionPostRequest,
        QuestionListResponse,
        SearchResponse,
        CreateResponse,
        DeleteResponse,
        CategoryQuestionsResponse,
        QuizRequest,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Browse question categories"),
        (name = "questions", description = "Manage and search trivia questions"),
        (name = "quizzes", description = "Play quiz rounds")
    )
)]
pub struct ApiDoc;
