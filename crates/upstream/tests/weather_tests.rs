// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the composite weather capability

use provider_core::AttemptError;
use serde_json::json;
use upstream::{Fetcher, resolver::ResolveError, weather};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn zero_geocoding_results_short_circuits_to_not_found() {
    let geocoding = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&geocoding)
        .await;
    // The forecast sub-call must never be issued for an unknown city.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&forecast)
        .await;

    let capability = weather::capability(
        &format!("{}/v1/search", geocoding.uri()),
        &format!("{}/v1/forecast", forecast.uri()),
    )
    .unwrap();
    let fetcher = Fetcher::new().unwrap();

    let error = capability
        .resolve(&fetcher, &"Atlantis".to_string())
        .await
        .unwrap_err();
    match error {
        ResolveError::NotFound { message } => assert_eq!(message, "city not found"),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn forecast_is_merged_with_the_resolved_location() {
    let geocoding = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Lisbon"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [{
            "name": "Lisbon",
            "country": "Portugal",
            "latitude": 38.72,
            "longitude": -9.14
        }]})))
        .mount(&geocoding)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "38.72"))
        .and(query_param("longitude", "-9.14"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {"temperature": 21.5, "windspeed": 11.0}
        })))
        .mount(&forecast)
        .await;

    let capability = weather::capability(
        &format!("{}/v1/search", geocoding.uri()),
        &format!("{}/v1/forecast", forecast.uri()),
    )
    .unwrap();
    let fetcher = Fetcher::new().unwrap();

    let resolved = capability
        .resolve(&fetcher, &"Lisbon".to_string())
        .await
        .unwrap();
    assert_eq!(resolved.provider, "open-meteo");
    assert_eq!(resolved.data.location.name.as_deref(), Some("Lisbon"));
    assert_eq!(resolved.data.location.country.as_deref(), Some("Portugal"));
    assert_eq!(
        resolved.data.forecast["current_weather"]["temperature"],
        json!(21.5)
    );
}

#[tokio::test]
async fn geocoding_error_exhausts_the_single_provider() {
    let geocoding = MockServer::start().await;
    let forecast = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&geocoding)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&forecast)
        .await;

    let capability = weather::capability(
        &format!("{}/v1/search", geocoding.uri()),
        &format!("{}/v1/forecast", forecast.uri()),
    )
    .unwrap();
    let fetcher = Fetcher::new().unwrap();

    let error = capability
        .resolve(&fetcher, &"Lisbon".to_string())
        .await
        .unwrap_err();
    match error {
        ResolveError::Exhausted { attempts, .. } => {
            assert_eq!(attempts.len(), 1);
            assert_eq!(attempts[0].provider, "open-meteo");
            assert_eq!(
                attempts[0].reason,
                AttemptError::PredicateRejected { status: 502 }
            );
        }
        other => panic!("expected Exhausted, got: {other:?}"),
    }
}
