//! Flight lookup and booking handlers.
//!
//! Both operations accept any input strings and echo them back. A non-empty
//! `raise` query parameter makes the call fail with
//! [`HandlerError::InjectedFailure`], which the transport turns into a 500.
//!
//! Query strings are read as raw pairs so that a repeated key resolves to its
//! first value instead of rejecting the request.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use utoipa::ToSchema;

use crate::error::HandlerError;
use crate::observability::metrics::{
    bounded_label, record_booking, record_injected_failure, record_lookup,
};
use crate::random::IdGenerator;
use crate::server::AppState;

pub const LOOKUP_ROUTE: &str = "/flights/{airline}";
pub const BOOKING_ROUTE: &str = "/flight";

/// Demo airline codes. Not enforced; other values are counted as `other`.
pub const AIRLINES: [&str; 3] = ["AA", "UA", "DL"];

/// Demo flight numbers. Not enforced; other values are counted as `other`.
pub const FLIGHT_NUMBERS: [&str; 6] = ["101", "202", "303", "404", "505", "606"];

/// Raw `key=value` pairs of a query string, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, if any.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub airline: String,
    pub fail_code: Option<String>,
}

impl FlightQuery {
    pub fn from_pairs(airline: String, pairs: &[(String, String)]) -> Self {
        Self {
            airline,
            fail_code: first_value(pairs, "raise"),
        }
    }
}

/// One synthetic flight, serialized as `{"<airline>": [<flight_number>]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightResult {
    pub airline: String,
    pub flight_number: u16,
}

impl Serialize for FlightResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.airline, &[self.flight_number])?;
        map.end()
    }
}

/// Query string of `POST /flight`. Missing names are echoed back as `null`.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub passenger_name: Option<String>,
    pub flight_num: Option<String>,
    pub fail_code: Option<String>,
}

impl BookingRequest {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            passenger_name: first_value(pairs, "passenger_name"),
            flight_num: first_value(pairs, "flight_num"),
            fail_code: first_value(pairs, "raise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingResult {
    #[schema(example = "John Doe")]
    pub passenger_name: Option<String>,
    #[schema(example = "101")]
    pub flight_num: Option<String>,
    #[schema(minimum = 100, maximum = 999)]
    pub booking_id: u16,
}

/// Any non-empty value triggers the failure; its content is not interpreted.
fn trigger(fail_code: Option<&str>) -> Option<&str> {
    fail_code.filter(|code| !code.is_empty())
}

/// Look up one synthetic flight for `query.airline`.
pub fn lookup_flight(ids: &IdGenerator, query: FlightQuery) -> Result<FlightResult, HandlerError> {
    tracing::info!(
        airline = %query.airline,
        raise = ?query.fail_code,
        "Get flights endpoint called"
    );

    if let Some(code) = trigger(query.fail_code.as_deref()) {
        tracing::error!(
            airline = %query.airline,
            "Exception intentionally raised in flights endpoint"
        );
        record_injected_failure(LOOKUP_ROUTE);
        return Err(HandlerError::injected(LOOKUP_ROUTE, code));
    }

    let flight_number = ids.next_id();
    tracing::info!(flight_number, airline = %query.airline, "Returning flight");
    record_lookup(bounded_label(&query.airline, &AIRLINES));

    Ok(FlightResult {
        airline: query.airline,
        flight_number,
    })
}

/// Confirm a synthetic booking.
pub fn book_flight(ids: &IdGenerator, request: BookingRequest) -> Result<BookingResult, HandlerError> {
    tracing::info!(
        passenger = ?request.passenger_name,
        flight_num = ?request.flight_num,
        raise = ?request.fail_code,
        "Book flight endpoint called"
    );

    if let Some(code) = trigger(request.fail_code.as_deref()) {
        tracing::error!(
            passenger = ?request.passenger_name,
            "Exception intentionally raised in book flight endpoint"
        );
        record_injected_failure(BOOKING_ROUTE);
        return Err(HandlerError::injected(BOOKING_ROUTE, code));
    }

    let booking_id = ids.next_id();
    tracing::info!(
        flight_num = ?request.flight_num,
        passenger = ?request.passenger_name,
        booking_id,
        "Booked flight"
    );
    record_booking(bounded_label(
        request.flight_num.as_deref().unwrap_or_default(),
        &FLIGHT_NUMBERS,
    ));

    Ok(BookingResult {
        passenger_name: request.passenger_name,
        flight_num: request.flight_num,
        booking_id,
    })
}

/// Handle `GET /flights/{airline}`.
#[utoipa::path(
    get,
    path = "/flights/{airline}",
    tag = "flights",
    params(
        ("airline" = String, Path, description = "Airline code, e.g. AA, UA or DL. Not validated"),
        ("raise" = Option<String>, Query, description = "Any non-empty value triggers a 500")
    ),
    responses(
        (status = 200, description = "One synthetic flight number for the airline",
            body = std::collections::HashMap<String, Vec<u16>>),
        (status = 500, description = "Raised on request", body = String, content_type = "text/plain")
    )
)]
pub async fn get_flights(
    State(state): State<AppState>,
    Path(airline): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<FlightResult>, HandlerError> {
    lookup_flight(&state.ids, FlightQuery::from_pairs(airline, &pairs)).map(Json)
}

/// Handle `POST /flight`.
#[utoipa::path(
    post,
    path = "/flight",
    tag = "flights",
    params(
        ("passenger_name" = Option<String>, Query, description = "Passenger, e.g. John Doe. Echoed back"),
        ("flight_num" = Option<String>, Query, description = "Flight number, e.g. 101. Echoed back"),
        ("raise" = Option<String>, Query, description = "Any non-empty value triggers a 500")
    ),
    responses(
        (status = 200, description = "Booked a flight for the passenger", body = BookingResult),
        (status = 500, description = "Raised on request", body = String, content_type = "text/plain")
    )
)]
pub async fn post_flight(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<BookingResult>, HandlerError> {
    book_flight(&state.ids, BookingRequest::from_pairs(&pairs)).map(Json)
}
