// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling for the tools hub server
//!
//! Provides the server error type and its mapping onto HTTP responses. The
//! boundary rule is simple: invalid input is rejected with 400 before any
//! provider is contacted, a missing domain entity is 404, an exhausted
//! fallback chain is 502, and everything else is a 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use upstream::{CatalogError, ResolveError};

/// Result type alias for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur during server operations
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration loading or validation failed
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Failed to bind to the configured address
    #[error("failed to bind to address {address}")]
    Bind {
        /// The address that could not be bound
        address: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Server failed during startup
    #[error("server startup failed")]
    Startup {
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A capability was configured without providers
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Request input was rejected before contacting any provider
    #[error("{0}")]
    Validation(String),

    /// Provider resolution failed
    #[error(transparent)]
    Upstream(#[from] ResolveError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(ResolveError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Upstream(ResolveError::Exhausted { .. }) => StatusCode::BAD_GATEWAY,
            Self::Config { .. }
            | Self::Bind { .. }
            | Self::Startup { .. }
            | Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use provider_core::AttemptError;
    use upstream::AttemptRecord;

    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ServerError::Validation("city must not be empty".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ServerError::Upstream(ResolveError::NotFound {
            message: "city not found".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exhausted_maps_to_bad_gateway() {
        let error = ServerError::Upstream(ResolveError::Exhausted {
            capability: "ip",
            attempts: vec![AttemptRecord {
                provider: "ipapi".to_string(),
                reason: AttemptError::Timeout,
            }],
        });
        assert_eq!(error.to_string(), "all providers failed for ip: ipapi: request timed out");
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn config_error_maps_to_internal_server_error() {
        let response = ServerError::Config {
            message: "bad port".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
