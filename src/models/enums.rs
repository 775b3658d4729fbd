// ABOUTME: Closed protocol enumerations stored as integer codes
// ABOUTME: Access token type and refresh token expiration/usage policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use serde::{Deserialize, Serialize};

/// Access token style issued for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTokenType {
    /// Self-contained JWT access token
    Jwt,
    /// Opaque reference token resolved via introspection
    Reference,
}

/// Refresh token expiration policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenExpiration {
    /// Lifetime slides forward on each refresh, capped by the absolute lifetime
    Sliding,
    /// Fixed expiration from issuance
    Absolute,
}

/// Refresh token usage policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenUsage {
    /// Refresh token handle stays valid across refreshes
    ReUse,
    /// Refresh token handle is rotated on every use
    OneTimeOnly,
}
