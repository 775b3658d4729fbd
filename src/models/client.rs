// ABOUTME: Client domain aggregate for the protocol engine
// ABOUTME: Scalar protocol settings plus set/sequence/map-valued attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::enums::{AccessTokenType, TokenExpiration, TokenUsage};
use super::secret::Secret;

/// A claim a client always sends along with its tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientClaim {
    /// Claim type
    pub claim_type: String,
    /// Claim value
    pub value: String,
}

/// An `OAuth2`/OIDC client as seen by the protocol engine
///
/// Field semantics follow the protocol configuration surface; this layer
/// copies them verbatim between representations and never validates that a
/// configuration is internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Whether the client may request tokens at all
    pub enabled: bool,
    /// Unique client identifier
    pub client_id: String,
    /// Protocol the client speaks (always `oidc` today)
    pub protocol_type: String,
    /// Whether a client secret is required at the token endpoint
    pub require_client_secret: bool,
    /// Display name shown on consent screens
    pub client_name: Option<String>,
    /// Description of the client
    pub description: Option<String>,
    /// URI with further information about the client
    pub client_uri: Option<String>,
    /// URI of the client logo
    pub logo_uri: Option<String>,
    /// Whether the user must consent to the requested scopes
    pub require_consent: bool,
    /// Whether the user's consent decision may be remembered
    pub allow_remember_consent: bool,
    /// Whether user claims are always embedded in the identity token
    pub always_include_user_claims_in_id_token: bool,
    /// Whether authorization requests must carry a PKCE challenge
    pub require_pkce: bool,
    /// Whether plain-text (non-S256) PKCE challenges are accepted
    pub allow_plain_text_pkce: bool,
    /// Whether a signed request object is required
    pub require_request_object: bool,
    /// Whether access tokens may be delivered via the browser channel
    pub allow_access_tokens_via_browser: bool,
    /// Front-channel logout URI
    pub front_channel_logout_uri: Option<String>,
    /// Whether the session id is sent on front-channel logout
    pub front_channel_logout_session_required: bool,
    /// Back-channel logout URI
    pub back_channel_logout_uri: Option<String>,
    /// Whether the session id is sent on back-channel logout
    pub back_channel_logout_session_required: bool,
    /// Whether the client may request offline access (refresh tokens)
    pub allow_offline_access: bool,
    /// Identity token lifetime in seconds
    pub identity_token_lifetime: i32,
    /// Access token lifetime in seconds
    pub access_token_lifetime: i32,
    /// Authorization code lifetime in seconds
    pub authorization_code_lifetime: i32,
    /// Maximum total refresh token lifetime in seconds
    pub absolute_refresh_token_lifetime: i32,
    /// Sliding refresh token lifetime in seconds
    pub sliding_refresh_token_lifetime: i32,
    /// Consent lifetime in seconds (`None` means consent never expires)
    pub consent_lifetime: Option<i32>,
    /// Refresh token expiration policy
    pub refresh_token_expiration: TokenExpiration,
    /// Refresh token usage policy
    pub refresh_token_usage: TokenUsage,
    /// Whether access token claims refresh along with the token
    pub update_access_token_claims_on_refresh: bool,
    /// Style of access token issued
    pub access_token_type: AccessTokenType,
    /// Whether local (username/password) login is allowed
    pub enable_local_login: bool,
    /// Whether JWT access tokens carry a `jti` claim
    pub include_jwt_id: bool,
    /// Whether client claims are sent for every token request
    pub always_send_client_claims: bool,
    /// Prefix applied to client claim types
    pub client_claims_prefix: Option<String>,
    /// Salt for pairwise subject identifier generation
    pub pair_wise_subject_salt: Option<String>,
    /// Maximum single-sign-on session age in seconds for this client
    pub user_sso_lifetime: Option<i32>,
    /// Device flow user code generator type
    pub user_code_type: Option<String>,
    /// Device code lifetime in seconds
    pub device_code_lifetime: i32,

    /// Allowed grant types, in caller-preferred negotiation order
    pub allowed_grant_types: Vec<String>,
    /// Allowed redirect URIs, in configured order
    pub redirect_uris: Vec<String>,
    /// Allowed post-logout redirect URIs, in configured order
    pub post_logout_redirect_uris: Vec<String>,
    /// Scopes the client may request
    pub allowed_scopes: HashSet<String>,
    /// Client secrets
    pub client_secrets: HashSet<Secret>,
    /// Claims the client sends with its tokens
    pub claims: HashSet<ClientClaim>,
    /// External identity providers the client is restricted to
    pub identity_provider_restrictions: HashSet<String>,
    /// Origins allowed for CORS requests from browser-based clients
    pub allowed_cors_origins: HashSet<String>,
    /// Signing algorithms allowed for this client's identity tokens
    pub allowed_identity_token_signing_algorithms: HashSet<String>,
    /// Custom per-client properties
    pub properties: HashMap<String, String>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: String::new(),
            protocol_type: "oidc".into(),
            require_client_secret: true,
            client_name: None,
            description: None,
            client_uri: None,
            logo_uri: None,
            require_consent: false,
            allow_remember_consent: true,
            always_include_user_claims_in_id_token: false,
            require_pkce: true,
            allow_plain_text_pkce: false,
            require_request_object: false,
            allow_access_tokens_via_browser: false,
            front_channel_logout_uri: None,
            front_channel_logout_session_required: true,
            back_channel_logout_uri: None,
            back_channel_logout_session_required: true,
            allow_offline_access: false,
            identity_token_lifetime: 300,
            access_token_lifetime: 3600,
            authorization_code_lifetime: 300,
            absolute_refresh_token_lifetime: 2_592_000,
            sliding_refresh_token_lifetime: 1_296_000,
            consent_lifetime: None,
            refresh_token_expiration: TokenExpiration::Absolute,
            refresh_token_usage: TokenUsage::OneTimeOnly,
            update_access_token_claims_on_refresh: false,
            access_token_type: AccessTokenType::Jwt,
            enable_local_login: true,
            include_jwt_id: true,
            always_send_client_claims: false,
            client_claims_prefix: Some("client_".into()),
            pair_wise_subject_salt: None,
            user_sso_lifetime: None,
            user_code_type: None,
            device_code_lifetime: 300,
            allowed_grant_types: Vec::new(),
            redirect_uris: Vec::new(),
            post_logout_redirect_uris: Vec::new(),
            allowed_scopes: HashSet::new(),
            client_secrets: HashSet::new(),
            claims: HashSet::new(),
            identity_provider_restrictions: HashSet::new(),
            allowed_cors_origins: HashSet::new(),
            allowed_identity_token_signing_algorithms: HashSet::new(),
            properties: HashMap::new(),
        }
    }
}
