// ABOUTME: Domain models consumed by the Keystone protocol engine
// ABOUTME: Denormalized aggregates with set/sequence/map-valued attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

mod client;
mod enums;
mod grants;
mod resources;
mod secret;

pub use client::{Client, ClientClaim};
pub use enums::{AccessTokenType, TokenExpiration, TokenUsage};
pub use grants::PersistedGrant;
pub use resources::{ApiResource, ApiScope, IdentityResource};
pub use secret::Secret;
