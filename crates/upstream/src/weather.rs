// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Current weather capability (Open-Meteo)
//!
//! A composite capability: the city name is geocoded to coordinates first,
//! then current conditions are fetched for those coordinates. Both steps run
//! inside one chained provider descriptor, so a geocoding failure aborts the
//! forecast call. Geocoding that returns zero results is a `NotFound` — a
//! missing city, not a provider malfunction — and no alternative provider
//! could resolve it.

use std::time::Duration;

use provider_core::{
    AttemptError, EndpointFn, FetchPlan, FollowFn, FollowUp, LocationInfo, ProviderDescriptor,
    RawResponse, WeatherReport,
};
use serde_json::Value;
use url::form_urlencoded;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the weather capability from the geocoding and forecast base URLs
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(
    geocoding_url: &str,
    forecast_url: &str,
) -> Result<Capability<String, WeatherReport>, CatalogError> {
    let geocode = geocoding_url.to_string();
    let forecast = forecast_url.to_string();

    let first: EndpointFn<String> = Box::new(move |city: &String| {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("name", city)
            .append_pair("count", "1")
            .append_pair("language", "en")
            .append_pair("format", "json")
            .finish();
        format!("{geocode}?{query}")
    });

    let follow: FollowFn = Box::new(move |body| follow_geocoding(&forecast, body));

    Capability::new(
        "weather",
        vec![ProviderDescriptor::new(
            "open-meteo",
            FetchPlan::Chained { first, follow },
            CALL_TIMEOUT,
            normalize,
        )],
    )
}

/// Derive the forecast call from the geocoding body
///
/// The first geocoding hit is carried into the final response context so the
/// normalizer can attach the resolved location to the report.
fn follow_geocoding(forecast_url: &str, body: &Value) -> Result<FollowUp, AttemptError> {
    let Some(hit) = body
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
    else {
        return Err(AttemptError::NotFound {
            message: "city not found".to_string(),
        });
    };

    let lat = require_f64(hit, "latitude")?;
    let lon = require_f64(hit, "longitude")?;

    Ok(FollowUp {
        endpoint: format!("{forecast_url}?latitude={lat}&longitude={lon}&current_weather=true"),
        context: hit.clone(),
    })
}

fn normalize(response: &RawResponse) -> Result<WeatherReport, AttemptError> {
    let forecast = response.json()?;
    let hit = response
        .context
        .as_ref()
        .ok_or_else(|| AttemptError::NormalizationFailed {
            message: "missing geocoding context".to_string(),
        })?;

    Ok(WeatherReport {
        forecast,
        location: LocationInfo {
            name: hit.get("name").and_then(Value::as_str).map(ToString::to_string),
            country: hit
                .get("country")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            lat: require_f64(hit, "latitude")?,
            lon: require_f64(hit, "longitude")?,
        },
    })
}

fn require_f64(body: &Value, field: &str) -> Result<f64, AttemptError> {
    body.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| AttemptError::NormalizationFailed {
            message: format!("missing numeric field `{field}`"),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn zero_geocoding_results_is_not_found() {
        let err = follow_geocoding("https://api.open-meteo.com/v1/forecast", &json!({"results": []}))
            .unwrap_err();
        assert!(matches!(err, AttemptError::NotFound { .. }));

        let err =
            follow_geocoding("https://api.open-meteo.com/v1/forecast", &json!({})).unwrap_err();
        assert!(matches!(err, AttemptError::NotFound { .. }));
    }

    #[test]
    fn follow_builds_forecast_endpoint_and_carries_the_hit() {
        let body = json!({"results": [{
            "name": "Lisbon",
            "country": "Portugal",
            "latitude": 38.72,
            "longitude": -9.14
        }]});

        let follow_up = follow_geocoding("https://api.open-meteo.com/v1/forecast", &body).unwrap();
        assert_eq!(
            follow_up.endpoint,
            "https://api.open-meteo.com/v1/forecast?latitude=38.72&longitude=-9.14&current_weather=true"
        );
        assert_eq!(follow_up.context["name"], json!("Lisbon"));
    }

    #[test]
    fn geocoding_hit_without_coordinates_fails_normalization() {
        let err = follow_geocoding(
            "https://api.open-meteo.com/v1/forecast",
            &json!({"results": [{"name": "Lisbon"}]}),
        )
        .unwrap_err();
        assert!(matches!(err, AttemptError::NormalizationFailed { .. }));
    }

    #[test]
    fn report_merges_forecast_and_location() {
        let response = RawResponse {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            status: 200,
            content_type: Some("application/json".to_string()),
            body: r#"{"current_weather": {"temperature": 21.5}}"#.to_string(),
            context: Some(json!({
                "name": "Lisbon",
                "country": "Portugal",
                "latitude": 38.72,
                "longitude": -9.14
            })),
        };

        let report = normalize(&response).unwrap();
        assert_eq!(report.location.name.as_deref(), Some("Lisbon"));
        assert_eq!(report.location.lat, 38.72);
        assert_eq!(
            report.forecast["current_weather"]["temperature"],
            json!(21.5)
        );
    }
}
