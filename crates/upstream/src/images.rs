// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Random dog image capability (dog.ceo)

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, ProviderDescriptor, RawResponse};
use serde_json::Value;

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(8);

/// Build the dog image capability
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(dogceo_url: &str) -> Result<Capability<(), Value>, CatalogError> {
    let endpoint = dogceo_url.to_string();

    Capability::new(
        "dog",
        vec![ProviderDescriptor::new(
            "dog.ceo",
            FetchPlan::Single(Box::new(move |_: &()| endpoint.clone())),
            CALL_TIMEOUT,
            normalize,
        )],
    )
}

fn normalize(response: &RawResponse) -> Result<Value, AttemptError> {
    let body = response.json()?;
    if body.get("message").is_some() {
        Ok(body)
    } else {
        Err(AttemptError::NormalizationFailed {
            message: "missing `message` field with the image URL".to_string(),
        })
    }
}
