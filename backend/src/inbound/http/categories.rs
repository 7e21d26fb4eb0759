//! Category read endpoint.
//!
//! ```text
//! GET /categories
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CategoryMap;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Response payload for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Always `true` on success.
    #[schema(example = true)]
    pub success: bool,
    /// Categories keyed by identifier, e.g. `{"1": "Science"}`.
    pub categories: CategoryMap,
}

/// List all categories keyed by identifier.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Unexpected server fault", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let categories = state.questions.categories().await?;
    Ok(web::Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn categories_serialize_as_an_id_keyed_object() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::in_memory()))
                .service(list_categories),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/categories").to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON body");
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
    }
}
