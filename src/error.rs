//! Request handler errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Raised on purpose through the `raise` query parameter.
    #[error("Encountered {code} error")]
    InjectedFailure { route: &'static str, code: String },
}

impl HandlerError {
    pub fn injected(route: &'static str, code: impl Into<String>) -> Self {
        Self::InjectedFailure {
            route,
            code: code.into(),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match &self {
            HandlerError::InjectedFailure { route, .. } => {
                tracing::error!(route, error = %self, "Unhandled error in request handler");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
