// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical output schemas
//!
//! Each tool capability promises callers a fixed output shape, independent of
//! which upstream provider fulfilled the request. Capabilities whose canonical
//! output is the provider's JSON body as-is (exchange rates, dog images) use
//! `serde_json::Value` directly and are not listed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical IP lookup result: the winning source and its normalized body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpReport {
    /// Endpoint of the provider that answered
    pub source: String,
    /// Normalized response body; non-JSON bodies become `{"raw": <text>}`
    pub data: Value,
}

/// Canonical joke: a single text regardless of the provider's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeText {
    /// Joke text; two-part jokes are joined with a single space
    pub text: String,
}

/// Canonical quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body
    pub content: String,
    /// Attributed author
    pub author: String,
}

/// Canonical placeholder text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoremText {
    /// Paragraphs separated by blank lines
    pub text: String,
}

/// Canonical shortened link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    /// URL the caller asked to shorten
    pub original: String,
    /// Shortened URL returned by the provider
    pub short: String,
}

/// Location resolved by the geocoding step of the weather capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Resolved place name
    pub name: Option<String>,
    /// Country of the resolved place
    pub country: Option<String>,
    /// Latitude used for the forecast call
    pub lat: f64,
    /// Longitude used for the forecast call
    pub lon: f64,
}

/// Canonical weather report: the forecast body plus the resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Forecast body as returned by the provider
    #[serde(flatten)]
    pub forecast: Value,
    /// Location the forecast was resolved for
    pub location: LocationInfo,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn weather_report_flattens_forecast() {
        let report = WeatherReport {
            forecast: json!({"current_weather": {"temperature": 21.5}}),
            location: LocationInfo {
                name: Some("Lisbon".to_string()),
                country: Some("Portugal".to_string()),
                lat: 38.72,
                lon: -9.14,
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["current_weather"]["temperature"], json!(21.5));
        assert_eq!(value["location"]["name"], json!("Lisbon"));
        assert_eq!(value["location"]["lat"], json!(38.72));
    }

    #[test]
    fn ip_report_shape() {
        let report = IpReport {
            source: "https://ipwho.is/".to_string(),
            data: json!({"ip": "203.0.113.7"}),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["source"], json!("https://ipwho.is/"));
        assert_eq!(value["data"]["ip"], json!("203.0.113.7"));
    }
}
