// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Public IP lookup capability
//!
//! Tries several free geolocation sources in priority order. The canonical
//! output wraps the normalized body together with the endpoint that answered;
//! sources that reply with a non-JSON body are normalized to `{"raw": <text>}`.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, ProviderDescriptor, RawResponse};
use serde_json::{Value, json};

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(8);

/// Build the IP lookup capability from its ordered source URLs
///
/// Each source is identified by its URL, which also becomes the `source`
/// field of the canonical [`provider_core::IpReport`].
///
/// # Errors
///
/// Returns [`CatalogError::NoProviders`] if `sources` is empty.
pub fn capability(sources: &[String]) -> Result<Capability<(), Value>, CatalogError> {
    let providers = sources
        .iter()
        .map(|source| {
            let endpoint = source.clone();
            ProviderDescriptor::new(
                source.clone(),
                FetchPlan::Single(Box::new(move |_: &()| endpoint.clone())),
                CALL_TIMEOUT,
                normalize,
            )
        })
        .collect();

    Capability::new("ip", providers)
}

fn normalize(response: &RawResponse) -> Result<Value, AttemptError> {
    if response.is_json() {
        response.json()
    } else {
        Ok(json!({ "raw": response.body }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: &str, body: &str) -> RawResponse {
        RawResponse {
            endpoint: "https://ipwho.is/".to_string(),
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.to_string(),
            context: None,
        }
    }

    #[test]
    fn json_body_passes_through() {
        let data = normalize(&response("application/json", r#"{"ip":"203.0.113.7"}"#)).unwrap();
        assert_eq!(data["ip"], json!("203.0.113.7"));
    }

    #[test]
    fn plain_text_body_is_wrapped_as_raw() {
        let data = normalize(&response("text/plain", "203.0.113.7")).unwrap();
        assert_eq!(data, json!({"raw": "203.0.113.7"}));
    }

    #[test]
    fn declared_json_that_fails_to_parse_is_a_normalization_failure() {
        let err = normalize(&response("application/json", "oops")).unwrap_err();
        assert!(matches!(err, AttemptError::NormalizationFailed { .. }));
    }
}
