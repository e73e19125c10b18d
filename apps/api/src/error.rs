//! Error handling for the Fanclub API HTTP surface
//!
//! GraphQL resolvers report their errors through async-graphql's own error
//! type; this module covers the plain HTTP routes (health checks) with a
//! thiserror hierarchy and automatic status code mapping via Axum's
//! IntoResponse trait.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// API error type for HTTP route handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Database details stay server-side
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                "database error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            code: self.code(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience result alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::NotFound {
            resource_type: "user",
            id: "abc".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code(), "NOT_FOUND");

        let internal = ApiError::Internal("boom".to_string());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
