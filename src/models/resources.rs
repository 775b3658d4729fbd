// ABOUTME: Resource domain aggregates: API resources, identity resources, API scopes
// ABOUTME: Scalar metadata plus claim sets, property maps, and secrets where applicable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::secret::Secret;

/// A protected API the authorization server issues access tokens for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Whether the resource is active
    pub enabled: bool,
    /// Unique resource name (the `aud` value in issued tokens)
    pub name: String,
    /// Display name shown on consent screens
    pub display_name: Option<String>,
    /// Description of the resource
    pub description: Option<String>,
    /// Whether the resource appears in the discovery document
    pub show_in_discovery_document: bool,
    /// Signing algorithms allowed for access tokens issued to this resource;
    /// the storage column holds at most one, so this sequence has 0 or 1
    /// elements
    pub allowed_access_token_signing_algorithms: Vec<String>,
    /// Secrets used for resource-initiated introspection
    pub api_secrets: HashSet<Secret>,
    /// Scopes this resource covers
    pub scopes: HashSet<String>,
    /// User claim types included in access tokens for this resource
    pub user_claims: HashSet<String>,
    /// Custom resource properties
    pub properties: HashMap<String, String>,
}

impl Default for ApiResource {
    fn default() -> Self {
        Self {
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            show_in_discovery_document: true,
            allowed_access_token_signing_algorithms: Vec::new(),
            api_secrets: HashSet::new(),
            scopes: HashSet::new(),
            user_claims: HashSet::new(),
            properties: HashMap::new(),
        }
    }
}

/// An identity resource: a named group of user claims requestable via scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResource {
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
    /// User claim types this scope grants access to
    pub user_claims: HashSet<String>,
    /// Custom resource properties
    pub properties: HashMap<String, String>,
}

impl Default for IdentityResource {
    fn default() -> Self {
        Self {
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            required: false,
            emphasize: false,
            show_in_discovery_document: true,
            user_claims: HashSet::new(),
            properties: HashMap::new(),
        }
    }
}

/// A scope an API resource exposes for access-token requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiScope {
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
    /// User claim types included when this scope is granted
    pub user_claims: HashSet<String>,
    /// Custom scope properties
    pub properties: HashMap<String, String>,
}

impl Default for ApiScope {
    fn default() -> Self {
        Self {
            enabled: true,
            name: String::new(),
            display_name: None,
            description: None,
            required: false,
            emphasize: false,
            show_in_discovery_document: true,
            user_claims: HashSet::new(),
            properties: HashMap::new(),
        }
    }
}
