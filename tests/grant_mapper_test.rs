// ABOUTME: Unit tests for the persisted grant mapper
// ABOUTME: Scalar round trips, null propagation, and in-place update identity preservation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use keystone_oidc_storage::entities;
use keystone_oidc_storage::mappers::grants;
use keystone_oidc_storage::models::PersistedGrant;

fn refresh_token_grant() -> PersistedGrant {
    let created = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
    PersistedGrant {
        key: "4f2c3a9d1e".into(),
        grant_type: "refresh_token".into(),
        subject_id: Some("user-123".into()),
        session_id: Some("session-456".into()),
        client_id: "web-app".into(),
        description: None,
        creation_time: created,
        expiration: Some(created + Duration::days(30)),
        consumed_time: None,
        data: serde_json::json!({
            "scopes": ["openid", "offline_access"],
            "token": "opaque-handle"
        })
        .to_string(),
    }
}

#[test]
fn test_grant_round_trip() {
    let model = refresh_token_grant();

    let entity = grants::to_entity(Some(&model)).expect("entity expected");
    assert_eq!(entity.id, 0);

    let round_tripped = grants::to_model(Some(&entity)).expect("model expected");
    assert_eq!(round_tripped, model);
}

#[test]
fn test_consumed_grant_round_trips_consumed_time() {
    let mut model = refresh_token_grant();
    model.consumed_time = Some(model.creation_time + Duration::hours(1));

    let entity = grants::to_entity(Some(&model)).expect("entity expected");
    let round_tripped = grants::to_model(Some(&entity)).expect("model expected");
    assert_eq!(round_tripped.consumed_time, model.consumed_time);
}

#[test]
fn test_none_propagates_to_none() {
    assert!(grants::to_model(None).is_none());
    assert!(grants::to_entity(None).is_none());
}

#[test]
fn test_update_entity_copies_scalars_and_preserves_identity() {
    let model = refresh_token_grant();

    let mut existing = entities::PersistedGrant {
        id: 9001,
        key: "stale-key".into(),
        grant_type: "authorization_code".into(),
        subject_id: None,
        session_id: None,
        client_id: "other-client".into(),
        description: Some("stale".into()),
        creation_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        expiration: None,
        consumed_time: None,
        data: String::new(),
    };

    grants::update_entity(&model, &mut existing);

    // Storage identity untouched
    assert_eq!(existing.id, 9001);

    // Every scalar matches the model
    assert_eq!(existing.key, model.key);
    assert_eq!(existing.grant_type, model.grant_type);
    assert_eq!(existing.subject_id, model.subject_id);
    assert_eq!(existing.session_id, model.session_id);
    assert_eq!(existing.client_id, model.client_id);
    assert_eq!(existing.description, model.description);
    assert_eq!(existing.creation_time, model.creation_time);
    assert_eq!(existing.expiration, model.expiration);
    assert_eq!(existing.consumed_time, model.consumed_time);
    assert_eq!(existing.data, model.data);
}

#[test]
fn test_update_entity_clears_fields_absent_on_the_model() {
    let mut model = refresh_token_grant();
    model.subject_id = None;
    model.expiration = None;

    let mut existing = grants::to_entity(Some(&refresh_token_grant())).expect("entity expected");
    existing.id = 17;

    grants::update_entity(&model, &mut existing);

    assert_eq!(existing.id, 17);
    assert_eq!(existing.subject_id, None);
    assert_eq!(existing.expiration, None);
}
