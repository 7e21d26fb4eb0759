//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::AppSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::categories::list_categories;
use backend::inbound::http::questions::{
    delete_question, list_questions, list_questions_by_category, post_question,
};
use backend::inbound::http::quizzes::play_quiz;
use backend::inbound::http::{ApiError, HttpState};
use backend::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

/// Build the HTTP state from the configured pool, or fall back to the
/// in-memory store when none is configured.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselQuestionRepository::new(pool.clone())),
            Arc::new(DieselCategoryRepository::new(pool.clone())),
        ),
        None => HttpState::in_memory(),
    };
    web::Data::new(state)
}

async fn unmatched_route() -> Result<HttpResponse, ApiError> {
    Err(ApiError::for_status(StatusCode::NOT_FOUND))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());

    let app = App::new()
        .app_data(http_state)
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        .wrap(Trace)
        .service(list_categories)
        .service(list_questions)
        .service(post_question)
        .service(delete_question)
        .service(list_questions_by_category)
        .service(play_quiz)
        .default_service(web::route().to(unmatched_route));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn unmatched_routes_return_the_error_envelope() {
        let app =
            actix_test::init_service(build_app(web::Data::new(HttpState::in_memory()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&actix_test::read_body(response).await)
            .expect("JSON body");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
    }

    #[actix_web::test]
    async fn malformed_json_bodies_return_the_error_envelope() {
        let app =
            actix_test::init_service(build_app(web::Data::new(HttpState::in_memory()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/quizzes")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&actix_test::read_body(response).await)
            .expect("JSON body");
        assert_eq!(body["error"], 400);
    }

    #[actix_web::test]
    async fn responses_carry_a_trace_id() {
        let app =
            actix_test::init_service(build_app(web::Data::new(HttpState::in_memory()))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/categories").to_request(),
        )
        .await;
        assert!(response.headers().contains_key("trace-id"));
    }
}
