// ABOUTME: Client aggregate mapper between storage rows and the domain model
// ABOUTME: Field-for-field scalar copy plus eight child collections, two coded enums, one CSV column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use super::{child_rows, enums, signing_algorithms};
use crate::entities;
use crate::errors::AppResult;
use crate::models;

/// Map a client storage aggregate to the domain model.
///
/// `None` propagates to `None`. Absent child collections become empty
/// containers. Ordered attributes (redirect URIs, post-logout redirect URIs,
/// allowed grant types) preserve row order; the rest collapse into sets and
/// a property map.
///
/// # Errors
///
/// Returns an invalid-input error if an enum-coded column holds a code
/// outside its enumeration.
pub fn to_model(entity: Option<&entities::Client>) -> AppResult<Option<models::Client>> {
    entity.map(map_to_model).transpose()
}

/// Map a client domain model to a fresh storage aggregate.
///
/// `None` propagates to `None`. Every child collection on the result is
/// materialized (possibly empty); the surrogate key is left at 0 for the
/// storage engine to assign.
#[must_use]
pub fn to_entity(model: Option<&models::Client>) -> Option<entities::Client> {
    model.map(map_to_entity)
}

fn map_to_model(entity: &entities::Client) -> AppResult<models::Client> {
    Ok(models::Client {
        enabled: entity.enabled,
        client_id: entity.client_id.clone(),
        protocol_type: entity.protocol_type.clone(),
        require_client_secret: entity.require_client_secret,
        client_name: entity.client_name.clone(),
        description: entity.description.clone(),
        client_uri: entity.client_uri.clone(),
        logo_uri: entity.logo_uri.clone(),
        require_consent: entity.require_consent,
        allow_remember_consent: entity.allow_remember_consent,
        always_include_user_claims_in_id_token: entity.always_include_user_claims_in_id_token,
        require_pkce: entity.require_pkce,
        allow_plain_text_pkce: entity.allow_plain_text_pkce,
        require_request_object: entity.require_request_object,
        allow_access_tokens_via_browser: entity.allow_access_tokens_via_browser,
        front_channel_logout_uri: entity.front_channel_logout_uri.clone(),
        front_channel_logout_session_required: entity.front_channel_logout_session_required,
        back_channel_logout_uri: entity.back_channel_logout_uri.clone(),
        back_channel_logout_session_required: entity.back_channel_logout_session_required,
        allow_offline_access: entity.allow_offline_access,
        identity_token_lifetime: entity.identity_token_lifetime,
        access_token_lifetime: entity.access_token_lifetime,
        authorization_code_lifetime: entity.authorization_code_lifetime,
        absolute_refresh_token_lifetime: entity.absolute_refresh_token_lifetime,
        sliding_refresh_token_lifetime: entity.sliding_refresh_token_lifetime,
        consent_lifetime: entity.consent_lifetime,
        refresh_token_expiration: enums::token_expiration_from_code(
            entity.refresh_token_expiration,
        )?,
        refresh_token_usage: enums::token_usage_from_code(entity.refresh_token_usage)?,
        update_access_token_claims_on_refresh: entity.update_access_token_claims_on_refresh,
        access_token_type: enums::access_token_type_from_code(entity.access_token_type)?,
        enable_local_login: entity.enable_local_login,
        include_jwt_id: entity.include_jwt_id,
        always_send_client_claims: entity.always_send_client_claims,
        client_claims_prefix: entity.client_claims_prefix.clone(),
        pair_wise_subject_salt: entity.pair_wise_subject_salt.clone(),
        user_sso_lifetime: entity.user_sso_lifetime,
        user_code_type: entity.user_code_type.clone(),
        device_code_lifetime: entity.device_code_lifetime,
        allowed_grant_types: child_rows(entity.allowed_grant_types.as_ref())
            .iter()
            .map(|row| row.grant_type.clone())
            .collect(),
        redirect_uris: child_rows(entity.redirect_uris.as_ref())
            .iter()
            .map(|row| row.redirect_uri.clone())
            .collect(),
        post_logout_redirect_uris: child_rows(entity.post_logout_redirect_uris.as_ref())
            .iter()
            .map(|row| row.post_logout_redirect_uri.clone())
            .collect(),
        allowed_scopes: child_rows(entity.allowed_scopes.as_ref())
            .iter()
            .map(|row| row.scope.clone())
            .collect(),
        client_secrets: child_rows(entity.client_secrets.as_ref())
            .iter()
            .map(|row| models::Secret {
                secret_type: row.secret_type.clone(),
                value: row.value.clone(),
                description: row.description.clone(),
                expiration: row.expiration,
            })
            .collect(),
        claims: child_rows(entity.claims.as_ref())
            .iter()
            .map(|row| models::ClientClaim {
                claim_type: row.claim_type.clone(),
                value: row.value.clone(),
            })
            .collect(),
        identity_provider_restrictions: child_rows(entity.identity_provider_restrictions.as_ref())
            .iter()
            .map(|row| row.provider.clone())
            .collect(),
        allowed_cors_origins: child_rows(entity.allowed_cors_origins.as_ref())
            .iter()
            .map(|row| row.origin.clone())
            .collect(),
        allowed_identity_token_signing_algorithms: signing_algorithms::decode(
            entity.allowed_identity_token_signing_algorithms.as_deref(),
        ),
        properties: child_rows(entity.properties.as_ref())
            .iter()
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect(),
    })
}

fn map_to_entity(model: &models::Client) -> entities::Client {
    entities::Client {
        id: 0,
        enabled: model.enabled,
        client_id: model.client_id.clone(),
        protocol_type: model.protocol_type.clone(),
        require_client_secret: model.require_client_secret,
        client_name: model.client_name.clone(),
        description: model.description.clone(),
        client_uri: model.client_uri.clone(),
        logo_uri: model.logo_uri.clone(),
        require_consent: model.require_consent,
        allow_remember_consent: model.allow_remember_consent,
        always_include_user_claims_in_id_token: model.always_include_user_claims_in_id_token,
        require_pkce: model.require_pkce,
        allow_plain_text_pkce: model.allow_plain_text_pkce,
        require_request_object: model.require_request_object,
        allow_access_tokens_via_browser: model.allow_access_tokens_via_browser,
        front_channel_logout_uri: model.front_channel_logout_uri.clone(),
        front_channel_logout_session_required: model.front_channel_logout_session_required,
        back_channel_logout_uri: model.back_channel_logout_uri.clone(),
        back_channel_logout_session_required: model.back_channel_logout_session_required,
        allow_offline_access: model.allow_offline_access,
        identity_token_lifetime: model.identity_token_lifetime,
        access_token_lifetime: model.access_token_lifetime,
        authorization_code_lifetime: model.authorization_code_lifetime,
        absolute_refresh_token_lifetime: model.absolute_refresh_token_lifetime,
        sliding_refresh_token_lifetime: model.sliding_refresh_token_lifetime,
        consent_lifetime: model.consent_lifetime,
        refresh_token_expiration: enums::token_expiration_to_code(model.refresh_token_expiration),
        refresh_token_usage: enums::token_usage_to_code(model.refresh_token_usage),
        update_access_token_claims_on_refresh: model.update_access_token_claims_on_refresh,
        access_token_type: enums::access_token_type_to_code(model.access_token_type),
        enable_local_login: model.enable_local_login,
        include_jwt_id: model.include_jwt_id,
        always_send_client_claims: model.always_send_client_claims,
        client_claims_prefix: model.client_claims_prefix.clone(),
        pair_wise_subject_salt: model.pair_wise_subject_salt.clone(),
        user_sso_lifetime: model.user_sso_lifetime,
        user_code_type: model.user_code_type.clone(),
        device_code_lifetime: model.device_code_lifetime,
        allowed_identity_token_signing_algorithms: Some(signing_algorithms::encode(
            &model.allowed_identity_token_signing_algorithms,
        )),
        allowed_grant_types: Some(
            model
                .allowed_grant_types
                .iter()
                .map(|grant_type| entities::ClientGrantType {
                    id: 0,
                    grant_type: grant_type.clone(),
                })
                .collect(),
        ),
        redirect_uris: Some(
            model
                .redirect_uris
                .iter()
                .map(|uri| entities::ClientRedirectUri {
                    id: 0,
                    redirect_uri: uri.clone(),
                })
                .collect(),
        ),
        post_logout_redirect_uris: Some(
            model
                .post_logout_redirect_uris
                .iter()
                .map(|uri| entities::ClientPostLogoutRedirectUri {
                    id: 0,
                    post_logout_redirect_uri: uri.clone(),
                })
                .collect(),
        ),
        allowed_scopes: Some(
            model
                .allowed_scopes
                .iter()
                .map(|scope| entities::ClientScope {
                    id: 0,
                    scope: scope.clone(),
                })
                .collect(),
        ),
        client_secrets: Some(
            model
                .client_secrets
                .iter()
                .map(|secret| entities::ClientSecret {
                    id: 0,
                    secret_type: secret.secret_type.clone(),
                    value: secret.value.clone(),
                    description: secret.description.clone(),
                    expiration: secret.expiration,
                })
                .collect(),
        ),
        claims: Some(
            model
                .claims
                .iter()
                .map(|claim| entities::ClientClaim {
                    id: 0,
                    claim_type: claim.claim_type.clone(),
                    value: claim.value.clone(),
                })
                .collect(),
        ),
        identity_provider_restrictions: Some(
            model
                .identity_provider_restrictions
                .iter()
                .map(|provider| entities::ClientIdpRestriction {
                    id: 0,
                    provider: provider.clone(),
                })
                .collect(),
        ),
        allowed_cors_origins: Some(
            model
                .allowed_cors_origins
                .iter()
                .map(|origin| entities::ClientCorsOrigin {
                    id: 0,
                    origin: origin.clone(),
                })
                .collect(),
        ),
        properties: Some(
            model
                .properties
                .iter()
                .map(|(key, value)| entities::ClientProperty {
                    id: 0,
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        ),
    }
}
