// ABOUTME: Main library entry point for the Keystone OIDC storage mapping layer
// ABOUTME: Translates relational storage aggregates to/from protocol-engine domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

#![deny(unsafe_code)]

//! # Keystone OIDC Storage Mappers
//!
//! The mapping layer between the Keystone authorization server's relational
//! storage representation and the in-memory domain models consumed by the
//! protocol engine: clients, API resources, identity resources, API scopes,
//! and persisted grants.
//!
//! The storage backend hands this crate fully-loaded row aggregates (a root
//! row plus its child-table rows); the protocol engine hands it fully
//! populated domain models. Every operation is a synchronous, side-effect-free
//! transformation over the values passed in — the one exception is
//! [`mappers::grants::update_entity`], which deliberately mutates an existing
//! storage row in place so a tracked row can be refreshed without fabricating
//! a new storage identity.
//!
//! ## Mapping contract
//!
//! - Absent (`None`) child collections on read become empty domain containers,
//!   never a null-like value; empty domain containers on write become
//!   `Some(vec![])` so storage always receives an addable collection.
//! - Unordered attributes (claims, scopes, secrets, CORS origins, provider
//!   restrictions) use sets; order-sensitive attributes (redirect URIs,
//!   allowed grant types) use sequences and survive round trips in order.
//! - Integer-coded enum columns convert through closed enumerations; an
//!   out-of-range code is an invalid-input error, never a silent default.
//! - `None` aggregate in yields `None` aggregate out for every constructive
//!   mapper — propagation, not an error.
//!
//! ## Example
//!
//! ```rust
//! use keystone_oidc_storage::entities;
//! use keystone_oidc_storage::mappers::client;
//!
//! # fn main() -> keystone_oidc_storage::errors::AppResult<()> {
//! let row = entities::Client {
//!     client_id: "web-app".into(),
//!     ..entities::Client::default()
//! };
//!
//! let model = client::to_model(Some(&row))?.ok_or_else(|| {
//!     keystone_oidc_storage::errors::AppError::internal("missing client")
//! })?;
//! assert_eq!(model.client_id, "web-app");
//! assert!(model.redirect_uris.is_empty());
//! # Ok(())
//! # }
//! ```

/// Application error types shared across the storage layer
pub mod errors;

/// Domain models consumed by the protocol engine
pub mod models;

/// Relational storage aggregates (root rows plus child-table rows)
pub mod entities;

/// Entity/model mappers, one module per aggregate family
pub mod mappers;
