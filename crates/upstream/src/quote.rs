// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Inspirational quote capability (quotable.io)

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, ProviderDescriptor, Quote, RawResponse};
use serde_json::Value;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(8);

/// Build the quote capability
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(quotable_url: &str) -> Result<Capability<(), Quote>, CatalogError> {
    let endpoint = quotable_url.to_string();

    Capability::new(
        "quote",
        vec![ProviderDescriptor::new(
            "quotable",
            FetchPlan::Single(Box::new(move |_: &()| endpoint.clone())),
            CALL_TIMEOUT,
            normalize,
        )],
    )
}

fn normalize(response: &RawResponse) -> Result<Quote, AttemptError> {
    let body = response.json()?;
    let content = require_str(&body, "content")?;
    let author = require_str(&body, "author")?;
    Ok(Quote {
        content: content.to_string(),
        author: author.to_string(),
    })
}

fn require_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, AttemptError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AttemptError::NormalizationFailed {
            message: format!("missing string field `{field}`"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> RawResponse {
        RawResponse {
            endpoint: "https://api.quotable.io/random".to_string(),
            status: 200,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
            context: None,
        }
    }

    #[test]
    fn quote_with_both_fields_normalizes() {
        let quote = normalize(&response(
            r#"{"content": "Stay hungry.", "author": "S. Jobs"}"#,
        ))
        .unwrap();
        assert_eq!(quote.content, "Stay hungry.");
        assert_eq!(quote.author, "S. Jobs");
    }

    #[test]
    fn missing_author_is_a_normalization_failure() {
        let err = normalize(&response(r#"{"content": "Stay hungry."}"#)).unwrap_err();
        assert!(matches!(err, AttemptError::NormalizationFailed { .. }));
    }
}
