// ABOUTME: Secret value object shared by clients and API resources
// ABOUTME: Hashable so secrets can live in unordered sets on the aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client or API secret
///
/// The value is an already-hashed credential; this layer never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Secret {
    /// Secret type discriminator (e.g. `SharedSecret`, `X509Thumbprint`)
    pub secret_type: String,
    /// Stored secret value
    pub value: String,
    /// Optional operator-facing description
    pub description: Option<String>,
    /// Optional expiration of the secret
    pub expiration: Option<DateTime<Utc>>,
}

impl Secret {
    /// Default secret type used when callers don't specify one
    pub const SHARED_SECRET: &'static str = "SharedSecret";

    /// Create a shared secret with no description or expiration
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            secret_type: Self::SHARED_SECRET.into(),
            value: value.into(),
            description: None,
            expiration: None,
        }
    }
}
