// ABOUTME: Relational storage aggregates: root rows plus child-table rows
// ABOUTME: Normalized shapes owned by the storage engine, transformed in flight here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

//! Storage-side row aggregates.
//!
//! Each root carries an `i64` surrogate key assigned by the storage engine
//! (`0` on freshly mapped rows) and one `Option<Vec<_>>` per child table.
//! `None` means the child collection was never loaded or is NULL at the
//! storage layer; mappers treat it as empty on read and never produce it on
//! write.

mod client;
mod grants;
mod resources;

pub use client::{
    Client, ClientClaim, ClientCorsOrigin, ClientGrantType, ClientIdpRestriction,
    ClientPostLogoutRedirectUri, ClientProperty, ClientRedirectUri, ClientScope, ClientSecret,
};
pub use grants::PersistedGrant;
pub use resources::{
    ApiResource, ApiResourceClaim, ApiResourceProperty, ApiResourceScope, ApiResourceSecret,
    ApiScope, ApiScopeClaim, ApiScopeProperty, IdentityResource, IdentityResourceClaim,
    IdentityResourceProperty,
};
