// ABOUTME: Entity/model mappers, one module per aggregate family
// ABOUTME: Null-propagating constructive mapping plus the grant in-place update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

//! Mapping between storage aggregates and domain aggregates.
//!
//! Constructive mappers take `Option<&T>` and propagate `None` unchanged —
//! an absent aggregate is not an error. On read, absent child collections
//! become empty domain containers; on write, every child collection is
//! materialized (`Some`, possibly empty) so the storage layer always receives
//! an addable collection.

pub mod api_resource;
pub mod client;
pub mod enums;
pub mod grants;
pub mod identity_resource;
pub mod scope;
pub mod signing_algorithms;

/// View an optional child-row collection as a slice, treating an unloaded
/// (NULL) collection as empty.
fn child_rows<T>(rows: Option<&Vec<T>>) -> &[T] {
    rows.map_or(&[], Vec::as_slice)
}
