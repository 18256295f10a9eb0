// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` document definition
//!
//! Collects every annotated handler into a single `OpenAPI` document served
//! by the [`crate::openapi`] endpoints.

use utoipa::OpenApi;

use crate::routes::handlers;

/// `OpenAPI` documentation for the tools hub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Public APIs Tools Hub",
        description = "Unified HTTP surface over a collection of public data APIs with ordered provider fallback."
    ),
    paths(
        handlers::root_handler,
        handlers::hello_handler,
        handlers::health_handler,
        handlers::tools_handler,
        handlers::ip_handler,
        handlers::joke_handler,
        handlers::quote_handler,
        handlers::weather_handler,
        handlers::exchange_handler,
        handlers::shorten_handler,
        handlers::lorem_handler,
        handlers::dog_handler,
        handlers::cat_handler,
        handlers::qr_handler,
        handlers::uuid_handler,
    ),
    tags(
        (name = "service", description = "Service banner and greeting endpoints"),
        (name = "health", description = "Health monitoring"),
        (name = "tools", description = "Tool endpoints backed by public data APIs")
    )
)]
pub struct ApiDoc;
