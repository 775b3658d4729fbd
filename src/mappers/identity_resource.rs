// ABOUTME: Identity resource aggregate mapper between storage rows and the domain model
// ABOUTME: Claim set and property map; stamps creation/update times on fresh rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use chrono::Utc;

use super::child_rows;
use crate::entities;
use crate::models;

/// Map an identity resource storage aggregate to the domain model.
///
/// `None` propagates to `None`; absent child collections become empty
/// containers. Storage audit stamps are not surfaced on the model.
#[must_use]
pub fn to_model(entity: Option<&entities::IdentityResource>) -> Option<models::IdentityResource> {
    entity.map(|entity| models::IdentityResource {
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

/// Map an identity resource domain model to a fresh storage aggregate.
///
/// `None` propagates to `None`. The new row is stamped with the current time
/// for both `created` and `updated` and is marked editable; every child
/// collection is materialized.
#[must_use]
pub fn to_entity(model: Option<&models::IdentityResource>) -> Option<entities::IdentityResource> {
    model.map(|model| {
        let now = Utc::now();
        entities::IdentityResource {
            id: 0,
            enabled: model.enabled,
            name: model.name.clone(),
            display_name: model.display_name.clone(),
            description: model.description.clone(),
            required: model.required,
            emphasize: model.emphasize,
            show_in_discovery_document: model.show_in_discovery_document,
            created: Some(now),
            updated: Some(now),
            non_editable: false,
            user_claims: Some(
                model
                    .user_claims
                    .iter()
                    .map(|claim_type| entities::IdentityResourceClaim {
                        id: 0,
                        claim_type: claim_type.clone(),
                    })
                    .collect(),
            ),
            properties: Some(
                model
                    .properties
                    .iter()
                    .map(|(key, value)| entities::IdentityResourceProperty {
                        id: 0,
                        key: key.clone(),
                        value: value.clone(),
                    })
                    .collect(),
            ),
        }
    })
}
