// ABOUTME: Persisted grant mapper: constructive mapping plus in-place row update
// ABOUTME: Pure scalar copies; update_entity preserves the target's storage identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

use crate::entities;
use crate::models;

/// Map a persisted grant storage row to the domain model.
///
/// `None` propagates to `None`; the storage shape matches the domain shape
/// field for field, so this is a pure scalar copy.
#[must_use]
pub fn to_model(entity: Option<&entities::PersistedGrant>) -> Option<models::PersistedGrant> {
    entity.map(|entity| models::PersistedGrant {
        key: entity.key.clone(),
        grant_type: entity.grant_type.clone(),
        subject_id: entity.subject_id.clone(),
        session_id: entity.session_id.clone(),
        client_id: entity.client_id.clone(),
        description: entity.description.clone(),
        creation_time: entity.creation_time,
        expiration: entity.expiration,
        consumed_time: entity.consumed_time,
        data: entity.data.clone(),
    })
}

/// Map a persisted grant domain model to a fresh storage row.
///
/// `None` propagates to `None`; the surrogate key is left at 0 for the
/// storage engine to assign.
#[must_use]
pub fn to_entity(model: Option<&models::PersistedGrant>) -> Option<entities::PersistedGrant> {
    model.map(|model| entities::PersistedGrant {
        id: 0,
        key: model.key.clone(),
        grant_type: model.grant_type.clone(),
        subject_id: model.subject_id.clone(),
        session_id: model.session_id.clone(),
        client_id: model.client_id.clone(),
        description: model.description.clone(),
        creation_time: model.creation_time,
        expiration: model.expiration,
        consumed_time: model.consumed_time,
        data: model.data.clone(),
    })
}

/// Copy every scalar from the model onto an existing, already-tracked storage
/// row, leaving the row's storage identity (`id`) untouched.
///
/// This is the designed seam for refreshing a tracked row without fabricating
/// a new identity. The caller is responsible for passing the correct tracked
/// row and for committing the mutation as a single atomic unit at the storage
/// layer.
pub fn update_entity(model: &models::PersistedGrant, entity: &mut entities::PersistedGrant) {
    entity.key = model.key.clone();
    entity.grant_type = model.grant_type.clone();
    entity.subject_id = model.subject_id.clone();
    entity.session_id = model.session_id.clone();
    entity.client_id = model.client_id.clone();
    entity.description = model.description.clone();
    entity.creation_time = model.creation_time;
    entity.expiration = model.expiration;
    entity.consumed_time = model.consumed_time;
    entity.data = model.data.clone();
}
