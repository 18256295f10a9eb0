// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Exchange rates capability (exchangerate.host)
//!
//! Single-provider capability; the canonical output is the provider's JSON
//! body as-is. The base currency code is uppercased into the endpoint, the
//! way the consuming frontend expects it.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, ProviderDescriptor, RawResponse};
use serde_json::Value;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the exchange rates capability; the parameter is the base currency
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(exchangerate_url: &str) -> Result<Capability<String, Value>, CatalogError> {
    let base_url = exchangerate_url.to_string();

    Capability::new(
        "exchange",
        vec![ProviderDescriptor::new(
            "exchangerate.host",
            FetchPlan::Single(Box::new(move |base: &String| {
                format!("{base_url}?base={}", base.to_uppercase())
            })),
            CALL_TIMEOUT,
            normalize,
        )],
    )
}

fn normalize(response: &RawResponse) -> Result<Value, AttemptError> {
    let body = response.json()?;
    if body.is_object() {
        Ok(body)
    } else {
        Err(AttemptError::NormalizationFailed {
            message: "expected a JSON object of rates".to_string(),
        })
    }
}
