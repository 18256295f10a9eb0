// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides HTTP request handlers for the tools hub server. Each
//! tool endpoint validates its input first, then delegates to its capability's
//! fallback resolver; redirect tools and the UUID generator short-circuit
//! without touching the resolver at all.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use provider_core::{IpReport, ShortLink};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::form_urlencoded;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::ServerError,
    state::{HealthCheck, ServerState},
};

/// Root endpoint handler
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    summary = "Service banner",
    responses((status = 200, description = "Service is running"))
)]
pub async fn root_handler() -> Json<Value> {
    Json(json!({"message": "Public APIs Tools Hub Backend Running"}))
}

/// Hello endpoint handler
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "service",
    summary = "Hello endpoint",
    responses((status = 200, description = "Greeting message"))
)]
pub async fn hello_handler() -> Json<Value> {
    Json(json!({"message": "Hello from the backend API!"}))
}

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the service including version, environment information, and the names of all configured capabilities.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check())
}

/// Metadata describing one tool endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Stable identifier for the tool
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description of what the tool does
    pub description: &'static str,
    /// Endpoint path (or URL template for external tools)
    pub endpoint: &'static str,
    /// Grouping category
    pub category: &'static str,
}

/// Tools metadata endpoint handler
#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "tools",
    summary = "List available tools",
    responses((status = 200, description = "Metadata for every tool endpoint"))
)]
pub async fn tools_handler() -> Json<Value> {
    let tools = vec![
        ToolInfo {
            slug: "ip-lookup",
            name: "IP Lookup",
            description: "Find your public IP and geolocation details",
            endpoint: "/api/ip",
            category: "Networking",
        },
        ToolInfo {
            slug: "url-shortener",
            name: "URL Shortener",
            description: "Shorten long links using TinyURL",
            endpoint: "/api/shorten",
            category: "Links",
        },
        ToolInfo {
            slug: "qr-generator",
            name: "QR Code Generator",
            description: "Create a QR code from any text or URL",
            endpoint: "/api/qr",
            category: "Utilities",
        },
        ToolInfo {
            slug: "exchange-rates",
            name: "Exchange Rates",
            description: "Get latest exchange rates (exchangerate.host)",
            endpoint: "/api/exchange",
            category: "Finance",
        },
        ToolInfo {
            slug: "weather",
            name: "Weather",
            description: "Current weather by city (Open-Meteo)",
            endpoint: "/api/weather",
            category: "Weather",
        },
        ToolInfo {
            slug: "random-joke",
            name: "Random Joke",
            description: "Get a random joke",
            endpoint: "/api/joke",
            category: "Fun",
        },
        ToolInfo {
            slug: "random-quote",
            name: "Random Quote",
            description: "Get an inspirational quote",
            endpoint: "/api/quote",
            category: "Fun",
        },
        ToolInfo {
            slug: "cat-image",
            name: "Random Cat Image",
            description: "Grab a cute cat photo",
            endpoint: "/api/cat",
            category: "Images",
        },
        ToolInfo {
            slug: "dog-image",
            name: "Random Dog Image",
            description: "Grab a cute dog photo",
            endpoint: "/api/dog",
            category: "Images",
        },
        ToolInfo {
            slug: "uuid",
            name: "UUID Generator",
            description: "Generate a v4 UUID",
            endpoint: "/api/uuid",
            category: "Utilities",
        },
        ToolInfo {
            slug: "lorem-ipsum",
            name: "Lorem Ipsum",
            description: "Generate placeholder text",
            endpoint: "/api/lorem",
            category: "Content",
        },
        ToolInfo {
            slug: "placeholder-image",
            name: "Placeholder Image URL",
            description: "Get on-the-fly placeholder image (Picsum)",
            endpoint: "https://picsum.photos/seed/{seed}/{w}/{h}",
            category: "Images",
        },
    ];
    Json(json!({ "tools": tools }))
}

/// Public IP lookup
///
/// Walks the configured IP sources in priority order and returns the first
/// usable answer along with the source it came from.
#[utoipa::path(
    get,
    path = "/api/ip",
    tag = "tools",
    summary = "Public IP and geolocation lookup",
    responses(
        (status = 200, description = "IP details from the first responsive source"),
        (status = 502, description = "All sources failed", body = String)
    )
)]
pub async fn ip_handler(State(state): State<ServerState>) -> Result<Json<IpReport>, ServerError> {
    let resolved = state.resolve(&state.catalog().ip, &()).await?;
    Ok(Json(IpReport {
        source: resolved.endpoint,
        data: resolved.data,
    }))
}

/// Random joke
#[utoipa::path(
    get,
    path = "/api/joke",
    tag = "tools",
    summary = "Random joke",
    responses(
        (status = 200, description = "A joke as a single text field"),
        (status = 502, description = "All joke providers failed", body = String)
    )
)]
pub async fn joke_handler(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let resolved = state.resolve(&state.catalog().joke, &()).await?;
    Ok(Json(resolved.data))
}

/// Random inspirational quote
#[utoipa::path(
    get,
    path = "/api/quote",
    tag = "tools",
    summary = "Random inspirational quote",
    responses(
        (status = 200, description = "Quote content and author"),
        (status = 502, description = "Quote provider failed", body = String)
    )
)]
pub async fn quote_handler(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let resolved = state.resolve(&state.catalog().quote, &()).await?;
    Ok(Json(resolved.data))
}

/// Query parameters for the weather endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct WeatherParams {
    /// City name to look up
    pub city: String,
}

/// Current weather by city
///
/// Geocodes the city first, then fetches the current forecast for the
/// resolved coordinates. An unknown city is a 404, not a provider failure.
#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "tools",
    summary = "Current weather by city",
    params(WeatherParams),
    responses(
        (status = 200, description = "Current weather with the resolved location"),
        (status = 400, description = "Missing or blank city", body = String),
        (status = 404, description = "City not found", body = String),
        (status = 502, description = "Weather provider failed", body = String)
    )
)]
pub async fn weather_handler(
    State(state): State<ServerState>,
    Query(params): Query<WeatherParams>,
) -> Result<impl IntoResponse, ServerError> {
    let city = validate_city(&params.city)?;
    let resolved = state.resolve(&state.catalog().weather, &city).await?;
    Ok(Json(resolved.data))
}

/// Query parameters for the exchange rates endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ExchangeParams {
    /// Base currency code
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_base() -> String {
    "USD".to_string()
}

/// Latest exchange rates
#[utoipa::path(
    get,
    path = "/api/exchange",
    tag = "tools",
    summary = "Latest exchange rates for a base currency",
    params(ExchangeParams),
    responses(
        (status = 200, description = "Latest rates for the base currency"),
        (status = 400, description = "Invalid base currency", body = String),
        (status = 502, description = "Exchange rate provider failed", body = String)
    )
)]
pub async fn exchange_handler(
    State(state): State<ServerState>,
    Query(params): Query<ExchangeParams>,
) -> Result<Json<Value>, ServerError> {
    let base = validate_base(&params.base)?;
    let resolved = state.resolve(&state.catalog().exchange, &base).await?;
    Ok(Json(resolved.data))
}

/// Query parameters for the URL shortener endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ShortenParams {
    /// URL to shorten
    pub url: String,
}

/// URL shortener
#[utoipa::path(
    get,
    path = "/api/shorten",
    tag = "tools",
    summary = "Shorten a URL",
    params(ShortenParams),
    responses(
        (status = 200, description = "Original and shortened URL"),
        (status = 400, description = "Not an http(s) URL", body = String),
        (status = 502, description = "Shortener failed", body = String)
    )
)]
pub async fn shorten_handler(
    State(state): State<ServerState>,
    Query(params): Query<ShortenParams>,
) -> Result<Json<ShortLink>, ServerError> {
    let original = validate_url(&params.url)?;
    let resolved = state.resolve(&state.catalog().shorten, &original).await?;
    Ok(Json(ShortLink {
        original,
        short: resolved.data,
    }))
}

/// Query parameters for the lorem ipsum endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct LoremParams {
    /// Number of paragraphs to generate
    #[serde(default = "default_paragraphs")]
    pub paragraphs: u8,
}

fn default_paragraphs() -> u8 {
    2
}

/// Placeholder text generator
#[utoipa::path(
    get,
    path = "/api/lorem",
    tag = "tools",
    summary = "Generate placeholder text",
    params(LoremParams),
    responses(
        (status = 200, description = "Placeholder paragraphs"),
        (status = 400, description = "Paragraph count out of range", body = String)
    )
)]
pub async fn lorem_handler(
    State(state): State<ServerState>,
    Query(params): Query<LoremParams>,
) -> Result<impl IntoResponse, ServerError> {
    let paragraphs = validate_paragraphs(params.paragraphs)?;
    let resolved = state.resolve(&state.catalog().lorem, &paragraphs).await?;
    Ok(Json(resolved.data))
}

/// Random dog image
#[utoipa::path(
    get,
    path = "/api/dog",
    tag = "tools",
    summary = "Random dog image",
    responses(
        (status = 200, description = "Dog image URL from dog.ceo"),
        (status = 502, description = "Image provider failed", body = String)
    )
)]
pub async fn dog_handler(State(state): State<ServerState>) -> Result<Json<Value>, ServerError> {
    let resolved = state.resolve(&state.catalog().dog, &()).await?;
    Ok(Json(resolved.data))
}

/// Random cat image
#[utoipa::path(
    get,
    path = "/api/cat",
    tag = "tools",
    summary = "Random cat image",
    responses((status = 307, description = "Redirect to a cat photo"))
)]
pub async fn cat_handler() -> Redirect {
    Redirect::temporary("https://cataas.com/cat?type=small")
}

/// Query parameters for the QR code endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct QrParams {
    /// Text or URL to encode
    pub text: String,
}

/// QR code generator
#[utoipa::path(
    get,
    path = "/api/qr",
    tag = "tools",
    summary = "Generate a QR code",
    params(QrParams),
    responses(
        (status = 307, description = "Redirect to the rendered QR code image"),
        (status = 400, description = "Empty text", body = String)
    )
)]
pub async fn qr_handler(Query(params): Query<QrParams>) -> Result<Redirect, ServerError> {
    if params.text.trim().is_empty() {
        return Err(ServerError::Validation("text must not be empty".to_string()));
    }
    let encoded: String =
        form_urlencoded::byte_serialize(params.text.as_bytes()).collect();
    let target =
        format!("https://api.qrserver.com/v1/create-qr-code/?size=220x220&data={encoded}");
    Ok(Redirect::temporary(&target))
}

/// UUID generator
#[utoipa::path(
    get,
    path = "/api/uuid",
    tag = "tools",
    summary = "Generate a v4 UUID",
    responses((status = 200, description = "A freshly generated UUID"))
)]
pub async fn uuid_handler() -> Json<Value> {
    Json(json!({"uuid": Uuid::new_v4()}))
}

/// Reject a blank city before any provider is contacted
fn validate_city(city: &str) -> Result<String, ServerError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(ServerError::Validation("city must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Require a plausible ISO 4217 currency code
fn validate_base(base: &str) -> Result<String, ServerError> {
    let trimmed = base.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ServerError::Validation(format!(
            "base must be a three-letter currency code, got {base:?}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require an absolute http(s) URL
fn validate_url(url: &str) -> Result<String, ServerError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ServerError::Validation(
            "url must start with http:// or https://".to_string(),
        ));
    }
    Ok(url.to_string())
}

/// Keep paragraph counts within the range the generator supports
fn validate_paragraphs(paragraphs: u8) -> Result<u8, ServerError> {
    if !(1..=10).contains(&paragraphs) {
        return Err(ServerError::Validation(
            "paragraphs must be between 1 and 10".to_string(),
        ));
    }
    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_city_is_rejected() {
        assert!(validate_city("  ").is_err());
        assert_eq!(validate_city(" Lisbon ").unwrap(), "Lisbon");
    }

    #[test]
    fn base_must_be_a_three_letter_code() {
        assert!(validate_base("").is_err());
        assert!(validate_base("dollars").is_err());
        assert!(validate_base("U2D").is_err());
        assert_eq!(validate_base("usd").unwrap(), "usd");
        assert_eq!(validate_base(" EUR ").unwrap(), "EUR");
    }

    #[test]
    fn shorten_requires_an_absolute_url() {
        assert!(validate_url("notaurl").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("https://example.com/page").is_ok());
    }

    #[test]
    fn paragraph_count_is_bounded() {
        assert!(validate_paragraphs(0).is_err());
        assert!(validate_paragraphs(11).is_err());
        assert_eq!(validate_paragraphs(10).unwrap(), 10);
    }

    #[tokio::test]
    async fn uuid_handler_produces_a_v4_uuid() {
        let Json(body) = uuid_handler().await;
        let rendered = body["uuid"].as_str().unwrap();
        assert_eq!(rendered.len(), 36);
        assert!(Uuid::parse_str(rendered).is_ok());
    }
}
