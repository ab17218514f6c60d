//! HTTP handlers and route table for the flights service.

pub mod airlines;
pub mod apispec;
pub mod flights;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::middleware::request_id_layer;
use crate::server::AppState;

/// Create the router with every route, permissive CORS and request correlation.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(health::home))
        .route(flights::LOOKUP_ROUTE, get(flights::get_flights))
        .route(flights::BOOKING_ROUTE, post(flights::post_flight))
        .route(airlines::AIRLINES_ROUTE, get(airlines::get_airlines))
        .route(apispec::APISPEC_ROUTE, get(apispec::get_api_spec))
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Outermost, so the request span covers CORS handling too
        .layer(middleware::from_fn(request_id_layer))
}
