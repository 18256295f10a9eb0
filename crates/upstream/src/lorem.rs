// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Placeholder text capability
//!
//! loripsum.net first, then a locally generated placeholder as the
//! lowest-priority provider. Modeling the local generator as a first-class
//! descriptor keeps the degraded path visible in the attempt log instead of
//! hiding it in a separate code path, and callers still get a plain success
//! when the remote source is down.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, LoremText, ProviderDescriptor, RawResponse};

use crate::resolver::{Capability, CatalogError};

const CALL_TIMEOUT: Duration = Duration::from_secs(8);

const PLACEHOLDER_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
const SENTENCES_PER_PARAGRAPH: usize = 30;

/// Build the lorem capability; the parameter is the paragraph count (1-10,
/// validated at the boundary)
///
/// # Errors
///
/// Returns [`CatalogError`] if construction fails.
pub fn capability(loripsum_url: &str) -> Result<Capability<u8, LoremText>, CatalogError> {
    let base_url = loripsum_url.to_string();

    Capability::new(
        "lorem",
        vec![
            ProviderDescriptor::new(
                "loripsum",
                FetchPlan::Single(Box::new(move |paragraphs: &u8| {
                    format!("{base_url}/{paragraphs}/short/plaintext")
                })),
                CALL_TIMEOUT,
                normalize,
            ),
            ProviderDescriptor::new(
                "local-generator",
                FetchPlan::Local(Box::new(|paragraphs: &u8| placeholder(*paragraphs))),
                CALL_TIMEOUT,
                normalize,
            ),
        ],
    )
}

fn normalize(response: &RawResponse) -> Result<LoremText, AttemptError> {
    if response.body.trim().is_empty() {
        return Err(AttemptError::NormalizationFailed {
            message: "empty placeholder text body".to_string(),
        });
    }
    Ok(LoremText {
        text: response.body.clone(),
    })
}

fn placeholder(paragraphs: u8) -> String {
    let paragraph = PLACEHOLDER_SENTENCE
        .repeat(SENTENCES_PER_PARAGRAPH)
        .trim_end()
        .to_string();
    vec![paragraph; usize::from(paragraphs)].join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_produces_requested_paragraph_count() {
        assert_eq!(placeholder(1).split("\n\n").count(), 1);
        assert_eq!(placeholder(4).split("\n\n").count(), 4);
    }

    #[test]
    fn placeholder_paragraphs_are_non_empty() {
        assert!(placeholder(2)
            .split("\n\n")
            .all(|paragraph| paragraph.starts_with("Lorem ipsum")));
    }

    #[test]
    fn empty_body_fails_normalization() {
        let response = RawResponse {
            endpoint: "https://loripsum.net/api/2/short/plaintext".to_string(),
            status: 200,
            content_type: Some("text/plain".to_string()),
            body: "  \n".to_string(),
            context: None,
        };
        assert!(matches!(
            normalize(&response).unwrap_err(),
            AttemptError::NormalizationFailed { .. }
        ));
    }
}
