// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Tools Hub Server Implementation
//!
//! This crate provides the main HTTP server for the public APIs tools hub,
//! built with Axum and designed for production use with comprehensive
//! configuration, middleware, and graceful shutdown capabilities.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`error`]: Error types and HTTP response handling with proper status codes
//! - [`state`]: Shared application state management with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`metrics`]: Prometheus metrics and the metrics export endpoint
//! - [`docs`] / [`openapi`]: `OpenAPI` specification and Swagger UI endpoints
//!
//! # Key Features
//!
//! - **Provider Fallback**: Every tool endpoint delegates to a capability with
//!   an ordered provider list, returning the first usable answer
//! - **Graceful Shutdown**: Coordinated termination using `CancellationToken`
//! - **Health Monitoring**: Reports the configured capabilities along with
//!   version and environment information
//! - **Comprehensive Middleware**: Request tracing, CORS, timeouts, and error handling

pub mod config;
pub mod docs;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
