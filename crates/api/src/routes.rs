// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the tools hub server.

pub mod handlers;

use axum::{Router, routing::get};
use handlers::{
    cat_handler, dog_handler, exchange_handler, health_handler, hello_handler, ip_handler,
    joke_handler, lorem_handler, qr_handler, quote_handler, root_handler, shorten_handler,
    tools_handler, uuid_handler, weather_handler,
};

use crate::{
    metrics::metrics_handler,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes
pub fn create_routes() -> Router<ServerState> {
    // Health and service endpoints are kept apart from the tool surface for
    // monitoring purposes
    let service_routes = Router::new()
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/health", get(health_handler));

    // Documentation and observability endpoints
    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui))
        .route("/metrics", get(metrics_handler));

    // Tool endpoints
    let tool_routes = Router::new()
        .route("/api/tools", get(tools_handler))
        .route("/api/ip", get(ip_handler))
        .route("/api/joke", get(joke_handler))
        .route("/api/quote", get(quote_handler))
        .route("/api/weather", get(weather_handler))
        .route("/api/exchange", get(exchange_handler))
        .route("/api/shorten", get(shorten_handler))
        .route("/api/lorem", get(lorem_handler))
        .route("/api/dog", get(dog_handler))
        .route("/api/cat", get(cat_handler))
        .route("/api/qr", get(qr_handler))
        .route("/api/uuid", get(uuid_handler));

    Router::new()
        .merge(service_routes)
        .merge(docs_routes)
        .merge(tool_routes)
}
