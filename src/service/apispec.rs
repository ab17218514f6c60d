//! OpenAPI description of the service, served at `/apispec_1.json`.
//!
//! The document is generated from the `#[utoipa::path]` declarations on the
//! handlers, so it follows the routes as they change.

use axum::{extract::State, Json};
use utoipa::OpenApi;

use crate::server::AppState;

pub const APISPEC_ROUTE: &str = "/apispec_1.json";

#[derive(OpenApi)]
#[openapi(
    info(description = "Mock flight search and booking endpoints. Set raise to trigger an error."),
    paths(
        super::health::health,
        super::health::home,
        super::flights::get_flights,
        super::flights::post_flight,
        super::airlines::get_airlines
    ),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "flights", description = "Flight lookup and booking"),
        (name = "airlines", description = "Airline listing")
    )
)]
pub struct ApiDoc;

/// Build the API description document, titled with the service name.
pub fn api_spec(title: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = title.to_string();
    doc
}

/// Handle `GET /apispec_1.json`.
pub async fn get_api_spec(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(api_spec(&state.config.service_name))
}
