// ABOUTME: Resource storage aggregates: API resources, identity resources, API scopes
// ABOUTME: Root rows plus claim, property, scope, and secret child tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API resource root row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Storage surrogate key (0 until the storage engine assigns one)
    pub id: i64,
    /// Whether the resource is active
    pub enabled: bool,
    /// Unique resource name
    pub name: String,
    /// Display name shown on consent screens
    pub display_name: Option<String>,
    /// Description of the resource
    pub description: Option<String>,
    /// Whether the resource appears in the discovery document
    pub show_in_discovery_document: bool,
    /// Single allowed access token signing algorithm, if restricted
    pub allowed_access_token_signing_algorithms: Option<String>,
    /// Secret rows
    pub secrets: Option<Vec<ApiResourceSecret>>,
    /// Scope rows
    pub scopes: Option<Vec<ApiResourceScope>>,
    /// User claim rows
    pub user_claims: Option<Vec<ApiResourceClaim>>,
    /// Custom property rows
    pub properties: Option<Vec<ApiResourceProperty>>,
}

impl Default for ApiResource {
    fn default() -> Self {
        Self {
            id: 0,
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            show_in_discovery_document: true,
            allowed_access_token_signing_algorithms: None,
            secrets: None,
            scopes: None,
            user_claims: None,
            properties: None,
        }
    }
}

/// API resource secret child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResourceSecret {
    /// Storage surrogate key
    pub id: i64,
    /// Secret type discriminator
    pub secret_type: String,
    /// Stored secret value
    pub value: String,
    /// Optional operator-facing description
    pub description: Option<String>,
    /// Optional expiration of the secret
    pub expiration: Option<DateTime<Utc>>,
}

/// API resource scope child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResourceScope {
    /// Storage surrogate key
    pub id: i64,
    /// Scope name
    pub scope: String,
}

/// API resource user claim child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResourceClaim {
    /// Storage surrogate key
    pub id: i64,
    /// Claim type
    pub claim_type: String,
}

/// API resource property child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResourceProperty {
    /// Storage surrogate key
    pub id: i64,
    /// Property key (unique per resource)
    pub key: String,
    /// Property value
    pub value: String,
}

/// Identity resource root row
///
/// Carries storage-owned audit stamps: the mapper sets `created`/`updated`
/// when constructing a fresh row and never reads them back into the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResource {
    /// Storage surrogate key (0 until the storage engine assigns one)
    pub id: i64,
    /// Whether the resource is active
    pub enabled: bool,
    /// Unique scope name
    pub name: String,
    /// Display name shown on consent screens
    pub display_name: Option<String>,
    /// Description of the resource
    pub description: Option<String>,
    /// Whether the user can deselect the scope on consent
    pub required: bool,
    /// Whether the consent screen emphasizes this scope
    pub emphasize: bool,
    /// Whether the resource appears in the discovery document
    pub show_in_discovery_document: bool,
    /// When the row was created
    pub created: Option<DateTime<Utc>>,
    /// When the row was last updated
    pub updated: Option<DateTime<Utc>>,
    /// Whether admin tooling treats the row as read-only
    pub non_editable: bool,
    /// User claim rows
    pub user_claims: Option<Vec<IdentityResourceClaim>>,
    /// Custom property rows
    pub properties: Option<Vec<IdentityResourceProperty>>,
}

impl Default for IdentityResource {
    fn default() -> Self {
        Self {
            id: 0,
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            required: false,
            emphasize: false,
            show_in_discovery_document: true,
            created: None,
            updated: None,
            non_editable: false,
            user_claims: None,
            properties: None,
        }
    }
}

/// Identity resource user claim child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityResourceClaim {
    /// Storage surrogate key
    pub id: i64,
    /// Claim type
    pub claim_type: String,
}

/// Identity resource property child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityResourceProperty {
    /// Storage surrogate key
    pub id: i64,
    /// Property key (unique per resource)
    pub key: String,
    /// Property value
    pub value: String,
}

/// API scope root row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiScope {
    /// Storage surrogate key (0 until the storage engine assigns one)
    pub id: i64,
    /// Whether the scope is active
    pub enabled: bool,
    /// Unique scope name
    pub name: String,
    /// Display name shown on consent screens
    pub display_name: Option<String>,
    /// Description of the scope
    pub description: Option<String>,
    /// Whether the user can deselect the scope on consent
    pub required: bool,
    /// Whether the consent screen emphasizes this scope
    pub emphasize: bool,
    /// Whether the scope appears in the discovery document
    pub show_in_discovery_document: bool,
    /// User claim rows
    pub user_claims: Option<Vec<ApiScopeClaim>>,
    /// Custom property rows
    pub properties: Option<Vec<ApiScopeProperty>>,
}

impl Default for ApiScope {
    fn default() -> Self {
        Self {
            id: 0,
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            required: false,
            emphasize: false,
            show_in_discovery_document: true,
            user_claims: None,
            properties: None,
        }
    }
}

/// API scope user claim child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiScopeClaim {
    /// Storage surrogate key
    pub id: i64,
    /// Claim type
    pub claim_type: String,
}

/// API scope property child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiScopeProperty {
    /// Storage surrogate key
    pub id: i64,
    /// Property key (unique per scope)
    pub key: String,
    /// Property value
    pub value: String,
}
