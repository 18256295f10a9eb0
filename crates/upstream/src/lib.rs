// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream provider integrations with ordered fallback resolution
//!
//! This crate implements the provider fallback pattern used by the tool
//! endpoints: each capability owns an ordered list of provider descriptors,
//! and the resolver tries them strictly sequentially, returning the first
//! provider whose response passes both its success predicate and its
//! normalizer, or an aggregated failure once the list is exhausted.
//!
//! # Architecture
//!
//! - **Fetcher**: [`fetch::Fetcher`] — one bounded network call per attempt
//! - **Resolver**: [`resolver::Capability`] — priority-ordered fallback with
//!   short-circuit on first success
//! - **Catalog**: [`catalog::Catalog`] — the static table of every capability,
//!   built once at startup and consumed read-only thereafter
//! - **Capabilities**: [`ip`], [`joke`], [`quote`], [`weather`], [`exchange`],
//!   [`links`], [`lorem`], [`images`] — per-tool descriptor lists and
//!   normalizers

pub mod catalog;
pub mod exchange;
pub mod fetch;
pub mod images;
pub mod ip;
pub mod joke;
pub mod links;
pub mod lorem;
pub mod quote;
pub mod resolver;
pub mod weather;

pub use catalog::{Catalog, CatalogConfig};
pub use fetch::Fetcher;
pub use resolver::{AttemptRecord, Capability, CatalogError, Resolved, ResolveError};
