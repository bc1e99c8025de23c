//! The error type shared by every endpoint.
//!
//! Domain outcomes map onto fixed status codes. Anything else is an
//! [`ApiError::Internal`]: its cause is logged and the caller only sees a
//! generic message.

use aide::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{Level, event};

/// The body of every error response
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// A human-readable explanation of why the request failed
    pub reason: String,
}

/// The kinds of things a request can refer to that may not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// An organization, by id
    Organization,
    /// A tender, by id
    Tender,
    /// A bid, by id
    Bid,
    /// An archived version of a tender or bid
    Version,
    /// The author of a set of bids, by username or organization name
    Author,
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Organization => "organization",
            Self::Tender => "tender",
            Self::Bid => "bid",
            Self::Version => "version",
            Self::Author => "author",
        })
    }
}

/// Why a request failed
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A referenced entity does not exist (404)
    #[error("{0} not found")]
    NotFound(Resource),

    /// The supplied username does not name an employee (401)
    #[error("user does not exist or is invalid")]
    Unauthenticated,

    /// The caller may not perform this action (403)
    #[error("insufficient rights to perform this action")]
    Forbidden,

    /// A status change to the current status (400)
    #[error("the new status cannot be the same as the current one")]
    NoopTransition,

    /// The request is syntactically broken or names an impossible value (400)
    #[error("{0}")]
    BadRequest(String),

    /// The request does not have the expected shape (422)
    #[error("{0}")]
    Validation(String),

    /// Anything unexpected, usually a storage failure (500)
    #[error("internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wrap an unexpected error
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(err))
    }

    /// The status code the error is answered with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NoopTransition | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match self {
            Self::Internal(err) => {
                event!(Level::ERROR, error = %err, "request failed");
                "server problem".to_owned()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { reason })).into_response()
    }
}

impl OperationOutput for ApiError {
    type Inner = ErrorResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = ApiError::internal(std::io::Error::other("disk on fire"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = ApiError::NotFound(Resource::Tender);
        assert_eq!(err.to_string(), "tender not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
