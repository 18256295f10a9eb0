// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the tools hub server,
//! including configuration, the capability catalog, the shared fetcher, and
//! coordinated cancellation.

use std::{sync::Arc, time::Instant};

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use upstream::{Capability, Catalog, Fetcher, Resolved, ResolveError};
use utoipa::ToSchema;

use crate::{
    config::{Environment, ServerConfig},
    error::{ServerError, ServerResult},
    metrics,
};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// The capability catalog, built once at startup
    catalog: Arc<Catalog>,
    /// Shared HTTP client for provider attempts
    fetcher: Fetcher,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `catalog` - Validated capability catalog
    /// * `fetcher` - Shared HTTP client for provider attempts
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        catalog: Arc<Catalog>,
        fetcher: Fetcher,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            catalog,
            fetcher,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The capability catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a capability with metrics around the attempt
    ///
    /// Thin wrapper over [`Capability::resolve`] that counts the request and
    /// records its duration with the resolution outcome.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] as [`ServerError::Upstream`].
    pub async fn resolve<P, T>(
        &self,
        capability: &Capability<P, T>,
        params: &P,
    ) -> ServerResult<Resolved<T>> {
        metrics::inc_tool_requests(capability.name());

        let started = Instant::now();
        let outcome = capability.resolve(&self.fetcher, params).await;
        let result = match &outcome {
            Ok(_) => "success",
            Err(ResolveError::NotFound { .. }) => "not_found",
            Err(ResolveError::Exhausted { .. }) => "exhausted",
        };
        metrics::observe_resolution_duration(
            capability.name(),
            result,
            started.elapsed().as_secs_f64(),
        );

        outcome.map_err(ServerError::from)
    }

    /// Perform health check operations
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck {
            status: HealthStatus::Up,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            capabilities: self
                .catalog
                .capability_names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Health status of a service or dependency
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational or has critical failures
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },

    /// Service is operational but experiencing performance issues or partial failures
    Degraded {
        /// Human-readable explanation of the degradation condition
        reason: Box<str>,
    },
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Names of the configured capabilities
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use upstream::CatalogConfig;

    use super::*;

    fn test_state() -> ServerState {
        let config = ServerConfig::for_testing();
        let catalog = Arc::new(Catalog::from_config(&CatalogConfig::default()).unwrap());
        let fetcher = Fetcher::new().unwrap();
        ServerState::new(config, catalog, fetcher, CancellationToken::new())
    }

    #[test]
    fn server_state_creation() {
        let state = test_state();
        assert!(!state.cancellation_token.is_cancelled());
    }

    #[test]
    fn server_state_with_cancellation_token() {
        let config = ServerConfig::for_testing();
        let catalog = Arc::new(Catalog::from_config(&CatalogConfig::default()).unwrap());
        let fetcher = Fetcher::new().unwrap();
        let token = CancellationToken::new();
        let state = ServerState::new(config, catalog, fetcher, token.clone());

        assert!(!state.cancellation_token.is_cancelled());

        // Test that the tokens are linked
        token.cancel();
        assert!(state.cancellation_token.is_cancelled());
    }

    #[test]
    fn health_check_reports_every_capability() {
        let state = test_state();
        let health = state.health_check();

        assert_eq!(health.status, HealthStatus::Up);
        assert_eq!(health.environment, Environment::Testing);
        assert!(health.capabilities.iter().any(|name| name == "weather"));
        assert_eq!(health.capabilities.len(), 8);
    }
}
