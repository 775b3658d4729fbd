// ABOUTME: Application error types for the storage mapping layer
// ABOUTME: AppError with constructor helpers and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use thiserror::Error;

/// Result alias used throughout the storage layer
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error for storage mapping operations
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied data outside the mapper's domain (e.g. an undefined
    /// enum code on a stored row)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
