// ABOUTME: Conversions between integer-coded storage columns and protocol enums
// ABOUTME: Total in the enum-to-code direction, validated in the code-to-enum direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::models::{AccessTokenType, TokenExpiration, TokenUsage};

/// Convert a stored access token type code to the enum
///
/// # Errors
///
/// Returns an invalid-input error if the code is not a defined
/// `AccessTokenType`.
pub fn access_token_type_from_code(code: i32) -> AppResult<AccessTokenType> {
    match code {
        0 => Ok(AccessTokenType::Jwt),
        1 => Ok(AccessTokenType::Reference),
        other => {
            warn!("Rejecting undefined access token type code: {other}");
            Err(AppError::invalid_input(format!(
                "Undefined access token type code: {other}"
            )))
        }
    }
}

/// Convert an access token type to its storage code
#[must_use]
pub fn access_token_type_to_code(value: AccessTokenType) -> i32 {
    match value {
        AccessTokenType::Jwt => 0,
        AccessTokenType::Reference => 1,
    }
}

/// Convert a stored refresh token expiration code to the enum
///
/// # Errors
///
/// Returns an invalid-input error if the code is not a defined
/// `TokenExpiration`.
pub fn token_expiration_from_code(code: i32) -> AppResult<TokenExpiration> {
    match code {
        0 => Ok(TokenExpiration::Sliding),
        1 => Ok(TokenExpiration::Absolute),
        other => {
            warn!("Rejecting undefined refresh token expiration code: {other}");
            Err(AppError::invalid_input(format!(
                "Undefined refresh token expiration code: {other}"
            )))
        }
    }
}

/// Convert a refresh token expiration policy to its storage code
#[must_use]
pub fn token_expiration_to_code(value: TokenExpiration) -> i32 {
    match value {
        TokenExpiration::Sliding => 0,
        TokenExpiration::Absolute => 1,
    }
}

/// Convert a stored refresh token usage code to the enum
///
/// # Errors
///
/// Returns an invalid-input error if the code is not a defined `TokenUsage`.
pub fn token_usage_from_code(code: i32) -> AppResult<TokenUsage> {
    match code {
        0 => Ok(TokenUsage::ReUse),
        1 => Ok(TokenUsage::OneTimeOnly),
        other => {
            warn!("Rejecting undefined refresh token usage code: {other}");
            Err(AppError::invalid_input(format!(
                "Undefined refresh token usage code: {other}"
            )))
        }
    }
}

/// Convert a refresh token usage policy to its storage code
#[must_use]
pub fn token_usage_to_code(value: TokenUsage) -> i32 {
    match value {
        TokenUsage::ReUse => 0,
        TokenUsage::OneTimeOnly => 1,
    }
}
