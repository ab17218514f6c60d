//! Airline listing handler.
//!
//! Unlike the flight routes, `raise` here is a boolean: only `raise=true`
//! triggers the failure, and a non-boolean value is rejected with 400 by the
//! query extractor.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::HandlerError;
use crate::observability::metrics::record_injected_failure;

pub const AIRLINES_ROUTE: &str = "/airlines";

/// Airlines served by `GET /airlines`.
pub const AIRLINE_CODES: [&str; 3] = ["AA", "DL", "UA"];

#[derive(Debug, Default, Deserialize)]
pub struct AirlinesQuery {
    #[serde(default)]
    pub raise: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AirlinesList {
    #[schema(example = json!(["AA", "DL", "UA"]))]
    pub airlines: Vec<String>,
}

pub fn list_airlines(query: AirlinesQuery) -> Result<AirlinesList, HandlerError> {
    tracing::info!(raise = query.raise, "Airlines endpoint called");

    if query.raise {
        tracing::error!("Exception intentionally raised in airlines endpoint");
        record_injected_failure(AIRLINES_ROUTE);
        return Err(HandlerError::injected(AIRLINES_ROUTE, "true"));
    }

    tracing::info!(count = AIRLINE_CODES.len(), "Returning airlines");
    Ok(AirlinesList {
        airlines: AIRLINE_CODES.iter().map(|code| code.to_string()).collect(),
    })
}

/// Handle `GET /airlines`.
#[utoipa::path(
    get,
    path = "/airlines",
    tag = "airlines",
    params(("raise" = Option<bool>, Query, description = "true triggers a 500; non-boolean values get a 400")),
    responses(
        (status = 200, description = "The airline codes", body = AirlinesList),
        (status = 400, description = "raise is not a boolean"),
        (status = 500, description = "Raised on request", body = String, content_type = "text/plain")
    )
)]
pub async fn get_airlines(
    Query(query): Query<AirlinesQuery>,
) -> Result<Json<AirlinesList>, HandlerError> {
    list_airlines(query).map(Json)
}
