// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded HTTP fetcher
//!
//! Performs the network side of one provider attempt: a single GET (or the
//! ordered two-call sequence of a chained plan) with a hard per-call bound.
//! The bound is enforced with `tokio::time::timeout`, which drops the
//! in-flight request future on expiry so the resolver can move on to the
//! next provider without leaking the call.
//!
//! The fetcher classifies only transport-level failures (`Timeout`,
//! `Transport`); whether a received response is usable is the descriptor's
//! success predicate's call, one level up.

use std::time::Duration;

use provider_core::{AttemptError, FetchPlan, FollowUp, RawResponse};
use reqwest::{Client, header};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Shared HTTP client for all provider attempts
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with a shared connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent("tools-hub/0.1.0").build()?;
        Ok(Self { client })
    }

    /// Execute one provider's fetch plan with the descriptor's timeout
    ///
    /// For chained plans the first call must return a success status and a
    /// JSON body before the second call is issued; a failure in the first
    /// call aborts the sequence. Each call gets the full bound.
    ///
    /// # Errors
    ///
    /// Returns an [`AttemptError`] classified as `Timeout`, `Transport`, or,
    /// for chained lookups, `PredicateRejected`/`NotFound` from the first step.
    pub async fn execute<P>(
        &self,
        plan: &FetchPlan<P>,
        params: &P,
        bound: Duration,
    ) -> Result<RawResponse, AttemptError> {
        match plan {
            FetchPlan::Single(endpoint) => self.call(endpoint(params), bound, None).await,
            FetchPlan::Chained { first, follow } => {
                let lookup = self.call(first(params), bound, None).await?;
                if !lookup.is_success() {
                    return Err(AttemptError::PredicateRejected {
                        status: lookup.status,
                    });
                }
                let body = lookup.json()?;
                let FollowUp { endpoint, context } = follow(&body)?;
                self.call(endpoint, bound, Some(context)).await
            }
            FetchPlan::Local(generate) => Ok(RawResponse {
                endpoint: "local".to_string(),
                status: 200,
                content_type: Some("text/plain".to_string()),
                body: generate(params),
                context: None,
            }),
        }
    }

    async fn call(
        &self,
        endpoint: String,
        bound: Duration,
        context: Option<Value>,
    ) -> Result<RawResponse, AttemptError> {
        debug!(%endpoint, "fetching upstream provider");

        let response = timeout(bound, self.client.get(&endpoint).send())
            .await
            .map_err(|_| {
                warn!(
                    %endpoint,
                    bound_ms = u64::try_from(bound.as_millis()).unwrap_or(u64::MAX),
                    "upstream call exceeded its bound"
                );
                AttemptError::Timeout
            })?
            .map_err(|e| AttemptError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        // Reading the body is part of the same bounded attempt.
        let body = timeout(bound, response.text())
            .await
            .map_err(|_| AttemptError::Timeout)?
            .map_err(|e| AttemptError::Transport {
                message: e.to_string(),
            })?;

        Ok(RawResponse {
            endpoint,
            status,
            content_type,
            body,
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use provider_core::BodyFn;

    use super::*;

    #[tokio::test]
    async fn local_plan_never_touches_the_network() {
        let fetcher = Fetcher::new().unwrap();
        let generate: BodyFn<u8> = Box::new(|count: &u8| format!("{count} paragraphs"));
        let plan = FetchPlan::Local(generate);

        let raw = fetcher
            .execute(&plan, &3, Duration::from_millis(1))
            .await
            .unwrap();

        assert_eq!(raw.status, 200);
        assert_eq!(raw.body, "3 paragraphs");
        assert_eq!(raw.endpoint, "local");
    }

    #[tokio::test]
    async fn transport_failure_is_classified_as_transport() {
        let fetcher = Fetcher::new().unwrap();
        // Reserved TLD, connection is refused or unresolvable without waiting
        // for the bound.
        let plan: FetchPlan<()> =
            FetchPlan::Single(Box::new(|_: &()| "http://tools-hub-test.invalid/".to_string()));

        let err = fetcher
            .execute(&plan, &(), Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, AttemptError::Transport { .. }));
    }
}
