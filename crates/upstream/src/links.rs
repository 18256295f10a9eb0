// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! URL shortening capability (TinyURL)
//!
//! TinyURL's create API replies with the shortened URL as plain text, so the
//! normalizer works on the trimmed body instead of JSON.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, ProviderDescriptor, RawResponse};
use url::form_urlencoded;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shorten capability; the parameter is the URL to shorten
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(tinyurl_url: &str) -> Result<Capability<String, String>, CatalogError> {
    let base_url = tinyurl_url.to_string();

    Capability::new(
        "shorten",
        vec![ProviderDescriptor::new(
            "tinyurl",
            FetchPlan::Single(Box::new(move |original: &String| {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("url", original)
                    .finish();
                format!("{base_url}?{query}")
            })),
            CALL_TIMEOUT,
            normalize,
        )],
    )
}

fn normalize(response: &RawResponse) -> Result<String, AttemptError> {
    let short = response.body.trim();
    if short.is_empty() || !short.starts_with("http") {
        return Err(AttemptError::NormalizationFailed {
            message: "expected a shortened URL in the response body".to_string(),
        });
    }
    Ok(short.to_string())
}
