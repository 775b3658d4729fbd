// ABOUTME: Client storage aggregate: root row plus eight child tables
// ABOUTME: Enum-coded integer columns and a CSV-flattened signing-algorithm column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client root row
///
/// `access_token_type`, `refresh_token_expiration` and `refresh_token_usage`
/// are integer-coded enum columns; `allowed_identity_token_signing_algorithms`
/// is a comma-delimited flattening of a set-valued attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Storage surrogate key (0 until the storage engine assigns one)
    pub id: i64,
    /// Whether the client may request tokens at all
    pub enabled: bool,
    /// Unique client identifier
    pub client_id: String,
    /// Protocol the client speaks
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
    /// Whether plain-text PKCE challenges are accepted
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
    /// Whether the client may request offline access
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
    /// Consent lifetime in seconds
    pub consent_lifetime: Option<i32>,
    /// Refresh token expiration policy code
    pub refresh_token_expiration: i32,
    /// Refresh token usage policy code
    pub refresh_token_usage: i32,
    /// Whether access token claims refresh along with the token
    pub update_access_token_claims_on_refresh: bool,
    /// Access token type code
    pub access_token_type: i32,
    /// Whether local login is allowed
    pub enable_local_login: bool,
    /// Whether JWT access tokens carry a `jti` claim
    pub include_jwt_id: bool,
    /// Whether client claims are sent for every token request
    pub always_send_client_claims: bool,
    /// Prefix applied to client claim types
    pub client_claims_prefix: Option<String>,
    /// Salt for pairwise subject identifier generation
    pub pair_wise_subject_salt: Option<String>,
    /// Maximum single-sign-on session age in seconds
    pub user_sso_lifetime: Option<i32>,
    /// Device flow user code generator type
    pub user_code_type: Option<String>,
    /// Device code lifetime in seconds
    pub device_code_lifetime: i32,
    /// Comma-delimited identity token signing algorithm list
    pub allowed_identity_token_signing_algorithms: Option<String>,

    /// Allowed grant type rows, in configured order
    pub allowed_grant_types: Option<Vec<ClientGrantType>>,
    /// Redirect URI rows, in configured order
    pub redirect_uris: Option<Vec<ClientRedirectUri>>,
    /// Post-logout redirect URI rows, in configured order
    pub post_logout_redirect_uris: Option<Vec<ClientPostLogoutRedirectUri>>,
    /// Allowed scope rows
    pub allowed_scopes: Option<Vec<ClientScope>>,
    /// Client secret rows
    pub client_secrets: Option<Vec<ClientSecret>>,
    /// Client claim rows
    pub claims: Option<Vec<ClientClaim>>,
    /// Identity provider restriction rows
    pub identity_provider_restrictions: Option<Vec<ClientIdpRestriction>>,
    /// Allowed CORS origin rows
    pub allowed_cors_origins: Option<Vec<ClientCorsOrigin>>,
    /// Custom property rows
    pub properties: Option<Vec<ClientProperty>>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            id: 0,
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
            refresh_token_expiration: 1,
            refresh_token_usage: 1,
            update_access_token_claims_on_refresh: false,
            access_token_type: 0,
            enable_local_login: true,
            include_jwt_id: true,
            always_send_client_claims: false,
            client_claims_prefix: Some("client_".into()),
            pair_wise_subject_salt: None,
            user_sso_lifetime: None,
            user_code_type: None,
            device_code_lifetime: 300,
            allowed_identity_token_signing_algorithms: None,
            allowed_grant_types: None,
            redirect_uris: None,
            post_logout_redirect_uris: None,
            allowed_scopes: None,
            client_secrets: None,
            claims: None,
            identity_provider_restrictions: None,
            allowed_cors_origins: None,
            properties: None,
        }
    }
}

/// Allowed grant type child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientGrantType {
    /// Storage surrogate key
    pub id: i64,
    /// Grant type value
    pub grant_type: String,
}

/// Redirect URI child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientRedirectUri {
    /// Storage surrogate key
    pub id: i64,
    /// Redirect URI value
    pub redirect_uri: String,
}

/// Post-logout redirect URI child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientPostLogoutRedirectUri {
    /// Storage surrogate key
    pub id: i64,
    /// Post-logout redirect URI value
    pub post_logout_redirect_uri: String,
}

/// Allowed scope child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientScope {
    /// Storage surrogate key
    pub id: i64,
    /// Scope name
    pub scope: String,
}

/// Client secret child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientSecret {
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

/// Client claim child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientClaim {
    /// Storage surrogate key
    pub id: i64,
    /// Claim type
    pub claim_type: String,
    /// Claim value
    pub value: String,
}

/// Identity provider restriction child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientIdpRestriction {
    /// Storage surrogate key
    pub id: i64,
    /// External identity provider name
    pub provider: String,
}

/// Allowed CORS origin child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientCorsOrigin {
    /// Storage surrogate key
    pub id: i64,
    /// Origin value
    pub origin: String,
}

/// Custom property child row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientProperty {
    /// Storage surrogate key
    pub id: i64,
    /// Property key (unique per client)
    pub key: String,
    /// Property value
    pub value: String,
}
