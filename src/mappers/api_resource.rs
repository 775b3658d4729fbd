// ABOUTME: API resource aggregate mapper between storage rows and the domain model
// ABOUTME: Claim set, property map, secret set, and the 0-or-1 signing-algorithm sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use super::child_rows;
use crate::entities;
use crate::models;

/// Map an API resource storage aggregate to the domain model.
///
/// `None` propagates to `None`; absent child collections become empty
/// containers. Secret expirations are write-only and read back as `None`.
#[must_use]
pub fn to_model(entity: Option<&entities::ApiResource>) -> Option<models::ApiResource> {
    entity.map(|entity| models::ApiResource {
        enabled: entity.enabled,
        name: entity.name.clone(),
        display_name: entity.display_name.clone(),
        description: entity.description.clone(),
        show_in_discovery_document: entity.show_in_discovery_document,
        // The storage column holds at most one algorithm; the model exposes
        // it as a 0-or-1-element sequence
        allowed_access_token_signing_algorithms: entity
            .allowed_access_token_signing_algorithms
            .clone()
            .map_or_else(Vec::new, |algorithm| vec![algorithm]),
        api_secrets: child_rows(entity.secrets.as_ref())
            .iter()
            .map(|row| models::Secret {
                secret_type: row.secret_type.clone(),
                value: row.value.clone(),
                description: row.description.clone(),
                expiration: None,
            })
            .collect(),
        scopes: child_rows(entity.scopes.as_ref())
            .iter()
            .map(|row| row.scope.clone())
            .collect(),
        user_claims: child_rows(entity.user_claims.as_ref())
            .iter()
            .map(|row| row.claim_type.clone())
            .collect(),
        properties: child_rows(entity.properties.as_ref())
            .iter()
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect(),
    })
}

/// Map an API resource domain model to a fresh storage aggregate.
///
/// `None` propagates to `None`. The signing-algorithm sequence collapses to
/// its first element (or `None`); every child collection is materialized.
#[must_use]
pub fn to_entity(model: Option<&models::ApiResource>) -> Option<entities::ApiResource> {
    model.map(|model| entities::ApiResource {
        id: 0,
        enabled: model.enabled,
        name: model.name.clone(),
        display_name: model.display_name.clone(),
        description: model.description.clone(),
        show_in_discovery_document: model.show_in_discovery_document,
        allowed_access_token_signing_algorithms: model
            .allowed_access_token_signing_algorithms
            .first()
            .cloned(),
        secrets: Some(
            model
                .api_secrets
                .iter()
                .map(|secret| entities::ApiResourceSecret {
                    id: 0,
                    secret_type: secret.secret_type.clone(),
                    value: secret.value.clone(),
                    description: secret.description.clone(),
                    expiration: secret.expiration,
                })
                .collect(),
        ),
        scopes: Some(
            model
                .scopes
                .iter()
                .map(|scope| entities::ApiResourceScope {
                    id: 0,
                    scope: scope.clone(),
                })
                .collect(),
        ),
        user_claims: Some(
            model
                .user_claims
                .iter()
                .map(|claim_type| entities::ApiResourceClaim {
                    id: 0,
                    claim_type: claim_type.clone(),
                })
                .collect(),
        ),
        properties: Some(
            model
                .properties
                .iter()
                .map(|(key, value)| entities::ApiResourceProperty {
                    id: 0,
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        ),
    })
}
