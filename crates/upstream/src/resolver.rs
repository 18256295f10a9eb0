// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fallback orchestration across a capability's providers
//!
//! A [`Capability`] owns a deterministic, priority-ordered list of provider
//! descriptors. Resolution walks the list strictly sequentially: a later
//! provider is never started before an earlier one has definitively failed,
//! and the first provider to pass both its success predicate and its
//! normalizer wins — never the "best" of several successes. Failures are
//! recovered locally and only escalate once the whole list is exhausted,
//! with every attempt's reason preserved in order.
//!
//! `NotFound` is the one exception: it describes a missing domain entity, not
//! a provider malfunction, so no alternative provider can resolve it and it
//! escalates immediately.
//!
//! All per-request state lives on the caller's stack; descriptors are shared
//! read-only, so concurrent resolutions need no coordination. Dropping the
//! resolution future (caller disconnect) cancels the in-flight fetch and
//! stops further attempts.

use provider_core::{AttemptError, ProviderDescriptor};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fetch::Fetcher;

/// One logical data-retrieval operation with its ordered provider list
#[derive(Debug)]
pub struct Capability<P, T> {
    name: &'static str,
    providers: Vec<ProviderDescriptor<P, T>>,
}

/// Configuration-time error for capability construction
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A capability without providers is a configuration error, caught at
    /// startup rather than at request time
    #[error("capability {name} has no configured providers")]
    NoProviders {
        /// Name of the misconfigured capability
        name: &'static str,
    },
}

/// Successful resolution: the canonical data and which provider produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    /// Canonical output for the capability
    pub data: T,
    /// Identifier of the winning provider
    pub provider: String,
    /// Fully substituted endpoint the data came from
    pub endpoint: String,
}

/// One failed provider attempt, in attempt order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// Identifier of the provider that failed
    pub provider: String,
    /// Why it failed
    pub reason: AttemptError,
}

/// Final error of a capability resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Domain-level absence; escalated without trying further providers
    #[error("{message}")]
    NotFound {
        /// Human-readable description of the missing entity
        message: String,
    },

    /// Every provider in the capability's list failed
    #[error("all providers failed for {capability}: {}", render_attempts(attempts))]
    Exhausted {
        /// Capability whose list was exhausted
        capability: &'static str,
        /// Per-provider failures, in attempt order
        attempts: Vec<AttemptRecord>,
    },
}

/// Render per-provider failures as one boundary-facing diagnostic
fn render_attempts(attempts: &[AttemptRecord]) -> String {
    attempts
        .iter()
        .map(|attempt| format!("{}: {}", attempt.provider, attempt.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl<P, T> Capability<P, T> {
    /// Create a capability from its priority-ordered provider list
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoProviders`] for an empty list; this runs at
    /// startup so the error never surfaces at request time.
    pub fn new(
        name: &'static str,
        providers: Vec<ProviderDescriptor<P, T>>,
    ) -> Result<Self, CatalogError> {
        if providers.is_empty() {
            return Err(CatalogError::NoProviders { name });
        }
        Ok(Self { name, providers })
    }

    /// Capability name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of configured providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Resolve the capability by trying providers in priority order
    ///
    /// Stops at the first provider whose response passes both the success
    /// predicate and the normalizer. Provider order is fixed at construction
    /// and never reordered here.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] as soon as any attempt reports a
    /// missing domain entity, or [`ResolveError::Exhausted`] with every
    /// attempt's failure once the list is used up.
    pub async fn resolve(&self, fetcher: &Fetcher, params: &P) -> Result<Resolved<T>, ResolveError> {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for descriptor in &self.providers {
            debug!(
                capability = self.name,
                provider = descriptor.id(),
                "trying provider"
            );

            let raw = match fetcher
                .execute(descriptor.plan(), params, descriptor.timeout())
                .await
            {
                Ok(raw) => raw,
                Err(AttemptError::NotFound { message }) => {
                    debug!(
                        capability = self.name,
                        provider = descriptor.id(),
                        "lookup found no matching entity"
                    );
                    return Err(ResolveError::NotFound { message });
                }
                Err(reason) => {
                    warn!(
                        capability = self.name,
                        provider = descriptor.id(),
                        %reason,
                        "provider call failed"
                    );
                    attempts.push(AttemptRecord {
                        provider: descriptor.id().to_string(),
                        reason,
                    });
                    continue;
                }
            };

            if !descriptor.accepts(&raw) {
                warn!(
                    capability = self.name,
                    provider = descriptor.id(),
                    status = raw.status,
                    "provider response rejected by success predicate"
                );
                attempts.push(AttemptRecord {
                    provider: descriptor.id().to_string(),
                    reason: AttemptError::PredicateRejected { status: raw.status },
                });
                continue;
            }

            match descriptor.normalize(&raw) {
                Ok(data) => {
                    info!(
                        capability = self.name,
                        provider = descriptor.id(),
                        "capability resolved"
                    );
                    return Ok(Resolved {
                        data,
                        provider: descriptor.id().to_string(),
                        endpoint: raw.endpoint,
                    });
                }
                Err(AttemptError::NotFound { message }) => {
                    return Err(ResolveError::NotFound { message });
                }
                Err(reason) => {
                    warn!(
                        capability = self.name,
                        provider = descriptor.id(),
                        %reason,
                        "provider response failed normalization"
                    );
                    attempts.push(AttemptRecord {
                        provider: descriptor.id().to_string(),
                        reason,
                    });
                }
            }
        }

        Err(ResolveError::Exhausted {
            capability: self.name,
            attempts,
        })
    }
}
