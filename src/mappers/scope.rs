// ABOUTME: API scope aggregate mapper between storage rows and the domain model
// ABOUTME: Scalar metadata plus claim set and property map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use super::child_rows;
use crate::entities;
use crate::models;

/// Map an API scope storage aggregate to the domain model.
///
/// `None` propagates to `None`; absent child collections become empty
/// containers.
#[must_use]
pub fn to_model(entity: Option<&entities::ApiScope>) -> Option<models::ApiScope> {
    entity.map(|entity| models::ApiScope {
        enabled: entity.enabled,
        name: entity.name.clone(),
        display_name: entity.display_name.clone(),
        description: entity.description.clone(),
        required: entity.required,
        emphasize: entity.emphasize,
        show_in_discovery_document: entity.show_in_discovery_document,
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

/// Map an API scope domain model to a fresh storage aggregate.
///
/// `None` propagates to `None`; every child collection is materialized.
#[must_use]
pub fn to_entity(model: Option<&models::ApiScope>) -> Option<entities::ApiScope> {
    model.map(|model| entities::ApiScope {
        id: 0,
        enabled: model.enabled,
        name: model.name.clone(),
        display_name: model.display_name.clone(),
        description: model.description.clone(),
        required: model.required,
        emphasize: model.emphasize,
        show_in_discovery_document: model.show_in_discovery_document,
        user_claims: Some(
            model
                .user_claims
                .iter()
                .map(|claim_type| entities::ApiScopeClaim {
                    id: 0,
                    claim_type: claim_type.clone(),
                })
                .collect(),
        ),
        properties: Some(
            model
                .properties
                .iter()
                .map(|(key, value)| entities::ApiScopeProperty {
                    id: 0,
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        ),
    })
}
