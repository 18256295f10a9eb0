// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Provider descriptor model for upstream data sources
//!
//! This crate provides the building blocks shared by every tool capability:
//! the static description of one upstream provider, the raw response shape
//! handed from the fetcher to predicates and normalizers, and the failure
//! taxonomy for a single provider attempt.
//!
//! # Core Abstractions
//!
//! - **[`ProviderDescriptor`]**: endpoint template, per-call timeout, success
//!   predicate and normalizer for one upstream source
//! - **[`FetchPlan`]**: how the fetcher reaches the provider — a single call,
//!   an ordered two-call chain, or locally generated content
//! - **[`RawResponse`]**: transport-level result of a call, prior to any
//!   status or body-shape judgment
//! - **[`AttemptError`]**: classified failure reasons for one attempt
//!
//! Descriptors are immutable and built once at startup; priority within a
//! capability is their position in the capability's provider list.

use std::{fmt, time::Duration};

use serde_json::Value;
use thiserror::Error;

pub mod types;

pub use types::*;

/// Raw result of one upstream call at the transport level.
///
/// Status-code and body-shape judgment deliberately does not happen here;
/// that is the job of the descriptor's success predicate and normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// Fully substituted endpoint the body was fetched from
    pub endpoint: String,
    /// HTTP status code (200 for locally generated content)
    pub status: u16,
    /// Value of the `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Response body as text
    pub body: String,
    /// Intermediate data carried over from the first call of a chained plan
    pub context: Option<Value>,
}

impl RawResponse {
    /// Whether the HTTP status is in the success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the provider declared a JSON body
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("json"))
    }

    /// Parse the body as JSON
    ///
    /// # Errors
    ///
    /// Returns [`AttemptError::NormalizationFailed`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, AttemptError> {
        serde_json::from_str(&self.body).map_err(|e| AttemptError::NormalizationFailed {
            message: format!("body is not valid JSON: {e}"),
        })
    }
}

/// Classified failure of a single provider attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    /// Connection, DNS or TLS level failure
    #[error("transport error: {message}")]
    Transport {
        /// Underlying transport error description
        message: String,
    },

    /// The call exceeded the descriptor's bound. The configured bound is an
    /// implementation detail and is logged rather than rendered here.
    #[error("request timed out")]
    Timeout,

    /// Response received but judged unusable by the provider's success predicate
    #[error("unusable response (HTTP {status})")]
    PredicateRejected {
        /// Status code of the rejected response
        status: u16,
    },

    /// Usable response that lacked the fields the normalizer expected
    #[error("normalization failed: {message}")]
    NormalizationFailed {
        /// What was missing or malformed
        message: String,
    },

    /// Domain-level absence (e.g. unknown city); not a provider malfunction
    #[error("{message}")]
    NotFound {
        /// Human-readable description of the missing entity
        message: String,
    },
}

/// Decides whether a transport-level response is usable for a provider
pub type SuccessPredicate = fn(&RawResponse) -> bool;

/// Maps a predicate-accepted response into a capability's canonical output
pub type Normalizer<T> = fn(&RawResponse) -> Result<T, AttemptError>;

/// Builds a fully substituted endpoint from validated request parameters
pub type EndpointFn<P> = Box<dyn Fn(&P) -> String + Send + Sync>;

/// Generates a response body locally, without any network call
pub type BodyFn<P> = Box<dyn Fn(&P) -> String + Send + Sync>;

/// Derives the second call of a chained plan from the first call's body
pub type FollowFn = Box<dyn Fn(&Value) -> Result<FollowUp, AttemptError> + Send + Sync>;

/// Second step of a chained fetch plan
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    /// Fully substituted endpoint for the second call
    pub endpoint: String,
    /// Data from the first call carried into the final [`RawResponse::context`]
    pub context: Value,
}

/// How the fetcher reaches one provider
pub enum FetchPlan<P> {
    /// One bounded call against a templated endpoint
    Single(EndpointFn<P>),
    /// Ordered two-call sequence; a failure in the first call aborts the
    /// second. Both calls share the descriptor's timeout bound.
    Chained {
        /// Endpoint of the lookup call
        first: EndpointFn<P>,
        /// Derives the second endpoint (or a [`AttemptError::NotFound`]) from
        /// the lookup body
        follow: FollowFn,
    },
    /// Locally generated body; always succeeds at the transport level
    Local(BodyFn<P>),
}

impl<P> fmt::Debug for FetchPlan<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(_) => f.write_str("FetchPlan::Single"),
            Self::Chained { .. } => f.write_str("FetchPlan::Chained"),
            Self::Local(_) => f.write_str("FetchPlan::Local"),
        }
    }
}

/// Static definition of one upstream data source for a capability
pub struct ProviderDescriptor<P, T> {
    id: String,
    plan: FetchPlan<P>,
    timeout: Duration,
    accepts: SuccessPredicate,
    normalize: Normalizer<T>,
}

impl<P, T> ProviderDescriptor<P, T> {
    /// Create a descriptor with the default success predicate (HTTP 2xx)
    pub fn new(
        id: impl Into<String>,
        plan: FetchPlan<P>,
        timeout: Duration,
        normalize: Normalizer<T>,
    ) -> Self {
        Self {
            id: id.into(),
            plan,
            timeout,
            accepts: status_ok,
            normalize,
        }
    }

    /// Replace the success predicate with a provider-specific rule
    pub fn with_predicate(mut self, accepts: SuccessPredicate) -> Self {
        self.accepts = accepts;
        self
    }

    /// Identifier of this provider within its capability
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch plan for this provider
    pub fn plan(&self) -> &FetchPlan<P> {
        &self.plan
    }

    /// Per-call timeout bound
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Apply the success predicate to a transport-level response
    pub fn accepts(&self, response: &RawResponse) -> bool {
        (self.accepts)(response)
    }

    /// Apply the normalizer to a predicate-accepted response
    ///
    /// # Errors
    ///
    /// Returns the normalizer's [`AttemptError`] when the response lacks the
    /// expected fields.
    pub fn normalize(&self, response: &RawResponse) -> Result<T, AttemptError> {
        (self.normalize)(response)
    }
}

impl<P, T> fmt::Debug for ProviderDescriptor<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("id", &self.id)
            .field("plan", &self.plan)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Default success predicate: the HTTP status is in the 2xx range
pub fn status_ok(response: &RawResponse) -> bool {
    response.is_success()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        RawResponse {
            endpoint: "http://example.invalid/".to_string(),
            status,
            content_type: content_type.map(ToString::to_string),
            body: body.to_string(),
            context: None,
        }
    }

    #[test]
    fn status_range_judgment() {
        assert!(response(200, None, "").is_success());
        assert!(response(204, None, "").is_success());
        assert!(!response(301, None, "").is_success());
        assert!(!response(404, None, "").is_success());
        assert!(!response(502, None, "").is_success());
    }

    #[test]
    fn json_content_type_detection() {
        assert!(response(200, Some("application/json"), "{}").is_json());
        assert!(response(200, Some("application/json; charset=utf-8"), "{}").is_json());
        assert!(!response(200, Some("text/plain"), "hi").is_json());
        assert!(!response(200, None, "hi").is_json());
    }

    #[test]
    fn json_parse_failure_is_normalization_failure() {
        let err = response(200, Some("application/json"), "not json")
            .json()
            .unwrap_err();
        assert!(matches!(err, AttemptError::NormalizationFailed { .. }));
    }

    #[test]
    fn descriptor_defaults_to_status_predicate() {
        let descriptor: ProviderDescriptor<(), Value> = ProviderDescriptor::new(
            "example",
            FetchPlan::Single(Box::new(|_: &()| "http://example.invalid/".to_string())),
            Duration::from_secs(1),
            RawResponse::json,
        );
        assert!(descriptor.accepts(&response(200, None, "{}")));
        assert!(!descriptor.accepts(&response(500, None, "{}")));
    }

    #[test]
    fn custom_predicate_overrides_default() {
        fn never(_: &RawResponse) -> bool {
            false
        }

        let descriptor: ProviderDescriptor<(), Value> = ProviderDescriptor::new(
            "example",
            FetchPlan::Single(Box::new(|_: &()| "http://example.invalid/".to_string())),
            Duration::from_secs(1),
            RawResponse::json,
        )
        .with_predicate(never);
        assert!(!descriptor.accepts(&response(200, None, "{}")));
    }

    #[test]
    fn attempt_error_display_omits_timeout_bound() {
        assert_eq!(AttemptError::Timeout.to_string(), "request timed out");
        assert_eq!(
            AttemptError::PredicateRejected { status: 503 }.to_string(),
            "unusable response (HTTP 503)"
        );
    }
}
