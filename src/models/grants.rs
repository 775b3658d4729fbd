// ABOUTME: Persisted grant domain model
// ABOUTME: Stored record of an issued authorization artifact keyed for later consumption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted grant: authorization code, refresh token, device code, or
/// consent record
///
/// The `data` payload is an opaque serialized blob owned by the protocol
/// engine; this layer never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGrant {
    /// Lookup key (hashed handle of the issued artifact)
    pub key: String,
    /// Grant type discriminator (e.g. `authorization_code`, `refresh_token`)
    pub grant_type: String,
    /// Subject the grant was issued to, if any
    pub subject_id: Option<String>,
    /// Server-side session the grant belongs to, if any
    pub session_id: Option<String>,
    /// Client the grant was issued for
    pub client_id: String,
    /// Optional description (used for consent records)
    pub description: Option<String>,
    /// When the grant was created
    pub creation_time: DateTime<Utc>,
    /// When the grant expires, if it expires
    pub expiration: Option<DateTime<Utc>>,
    /// When the grant was consumed, if it has been
    pub consumed_time: Option<DateTime<Utc>>,
    /// Opaque serialized grant payload
    pub data: String,
}
