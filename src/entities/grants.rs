// ABOUTME: Persisted grant storage row
// ABOUTME: Pure scalar aggregate, field-for-field match with the domain model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted grant row
///
/// `id` is the storage surrogate key; in-place updates must leave it alone so
/// a tracked row keeps its storage identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGrant {
    /// Storage surrogate key (0 until the storage engine assigns one)
    pub id: i64,
    /// Lookup key (hashed handle of the issued artifact)
    pub key: String,
    /// Grant type discriminator
    pub grant_type: String,
    /// Subject the grant was issued to, if any
    pub subject_id: Option<String>,
    /// Server-side session the grant belongs to, if any
    pub session_id: Option<String>,
    /// Client the grant was issued for
    pub client_id: String,
    /// Optional description
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
