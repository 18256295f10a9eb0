// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Random joke capability
//!
//! Two providers with different body shapes, normalized to a single `text`
//! field: official-joke-api replies with `setup`/`punchline`, jokeapi.dev
//! (single mode) with a `joke` field. The per-provider body-shape check lives
//! in the success predicate, so a provider that answers 200 with an
//! unexpected shape falls through to the next one.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, JokeText, ProviderDescriptor, RawResponse};
use serde_json::Value;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(8);

/// Build the joke capability: official-joke-api first, jokeapi.dev second
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(
    official_url: &str,
    jokeapi_url: &str,
) -> Result<Capability<(), JokeText>, CatalogError> {
    let official = official_url.to_string();
    let single = jokeapi_url.to_string();

    Capability::new(
        "joke",
        vec![
            ProviderDescriptor::new(
                "official-joke-api",
                FetchPlan::Single(Box::new(move |_: &()| official.clone())),
                CALL_TIMEOUT,
                normalize_two_part,
            )
            .with_predicate(has_setup_and_punchline),
            ProviderDescriptor::new(
                "jokeapi",
                FetchPlan::Single(Box::new(move |_: &()| single.clone())),
                CALL_TIMEOUT,
                normalize_single,
            )
            .with_predicate(has_joke),
        ],
    )
}

fn has_setup_and_punchline(response: &RawResponse) -> bool {
    response.is_success()
        && response
            .json()
            .is_ok_and(|body| body.get("setup").is_some() && body.get("punchline").is_some())
}

fn has_joke(response: &RawResponse) -> bool {
    response.is_success() && response.json().is_ok_and(|body| body.get("joke").is_some())
}

fn normalize_two_part(response: &RawResponse) -> Result<JokeText, AttemptError> {
    let body = response.json()?;
    let setup = require_str(&body, "setup")?;
    let punchline = require_str(&body, "punchline")?;
    Ok(JokeText {
        text: format!("{setup} {punchline}"),
    })
}

fn normalize_single(response: &RawResponse) -> Result<JokeText, AttemptError> {
    let body = response.json()?;
    let joke = require_str(&body, "joke")?;
    Ok(JokeText {
        text: joke.to_string(),
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
            endpoint: "https://official-joke-api.appspot.com/random_joke".to_string(),
            status: 200,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
            context: None,
        }
    }

    #[test]
    fn two_part_joke_is_joined_with_a_space() {
        let joke =
            normalize_two_part(&response(r#"{"setup": "Why?", "punchline": "Because."}"#)).unwrap();
        assert_eq!(joke.text, "Why? Because.");
    }

    #[test]
    fn single_joke_is_used_directly() {
        let joke = normalize_single(&response(r#"{"joke": "One-liner."}"#)).unwrap();
        assert_eq!(joke.text, "One-liner.");
    }

    #[test]
    fn predicate_rejects_missing_punchline() {
        assert!(!has_setup_and_punchline(&response(r#"{"setup": "Why?"}"#)));
        assert!(has_setup_and_punchline(&response(
            r#"{"setup": "Why?", "punchline": "Because."}"#
        )));
    }

    #[test]
    fn predicate_rejects_error_status_even_with_matching_body() {
        let mut rejected = response(r#"{"joke": "One-liner."}"#);
        rejected.status = 500;
        assert!(!has_joke(&rejected));
    }

    #[test]
    fn non_string_field_fails_normalization() {
        let err = normalize_single(&response(r#"{"joke": 7}"#)).unwrap_err();
        assert!(matches!(err, AttemptError::NormalizationFailed { .. }));
    }
}
