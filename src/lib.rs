//! Flights: a mock flight search and booking service.
//!
//! The service exists to exercise observability pipelines. Flight numbers and
//! booking IDs are random integers, and any route can be made to fail on
//! demand through its `raise` query parameter.
//!
//! # Architecture
//!
//! - **HTTP**: axum router with permissive CORS and per-request spans
//! - **Logging**: `tracing` events bridged to an OTLP/HTTP collector in batches
//! - **Failure injection**: a dedicated error variant surfacing as a 500
//!
//! # Modules
//!
//! - [`config`]: CLI and environment configuration
//! - [`error`]: Handler errors and their HTTP mapping
//! - [`middleware`]: Request ID span
//! - [`observability`]: Log, span and metric export setup
//! - [`random`]: Synthetic identifier generation
//! - [`server`]: HTTP server setup
//! - [`service`]: Route handlers

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions, // service::flights::FLIGHT_NUMBERS is fine
    clippy::must_use_candidate,      // Not all functions need #[must_use]
    clippy::missing_errors_doc,      // Error docs can be verbose
    clippy::missing_panics_doc       // Panic docs can be verbose
)]

pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod random;
pub mod server;
pub mod service;

pub use config::Config;
pub use error::HandlerError;
pub use server::{run_server, AppState};
pub use service::create_router;
