// ABOUTME: Unit tests for the resource family mappers
// ABOUTME: API resource, identity resource, and API scope round trips and edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::{HashMap, HashSet};

use chrono::{TimeZone, Utc};
use keystone_oidc_storage::mappers::{api_resource, identity_resource, scope};
use keystone_oidc_storage::models::{ApiResource, ApiScope, IdentityResource, Secret};
use keystone_oidc_storage::entities;

#[test]
fn test_api_resource_round_trip() {
    let model = ApiResource {
        name: "payments-api".into(),
        display_name: Some("Payments API".into()),
        description: Some("Internal payments service".into()),
        allowed_access_token_signing_algorithms: vec!["PS256".into()],
        api_secrets: HashSet::from([Secret {
            secret_type: Secret::SHARED_SECRET.into(),
            value: "hashed-secret".into(),
            description: Some("introspection".into()),
            // Read-side secrets never carry an expiration, so a round-trip
            // fixture must not either
            expiration: None,
        }]),
        scopes: HashSet::from(["payments.read".into(), "payments.write".into()]),
        user_claims: HashSet::from(["sub".into(), "email".into()]),
        properties: HashMap::from([("tier".into(), "critical".into())]),
        ..ApiResource::default()
    };

    let entity = api_resource::to_entity(Some(&model)).expect("entity expected");
    let round_tripped = api_resource::to_model(Some(&entity)).expect("model expected");

    assert_eq!(round_tripped, model);
}

#[test]
fn test_api_resource_secret_expiration_is_write_only() {
    let expiration = Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap();
    let model = ApiResource {
        name: "api".into(),
        api_secrets: HashSet::from([Secret {
            secret_type: Secret::SHARED_SECRET.into(),
            value: "hashed".into(),
            description: None,
            expiration: Some(expiration),
        }]),
        ..ApiResource::default()
    };

    // Write keeps the expiration on the row
    let entity = api_resource::to_entity(Some(&model)).expect("entity expected");
    let secret_rows = entity.secrets.as_ref().expect("secret rows expected");
    assert_eq!(secret_rows[0].expiration, Some(expiration));

    // Read drops it
    let read_back = api_resource::to_model(Some(&entity)).expect("model expected");
    let read_secret = read_back.api_secrets.iter().next().expect("secret expected");
    assert_eq!(read_secret.expiration, None);
}

#[test]
fn test_api_resource_signing_algorithm_is_zero_or_one_sequence() {
    // Scalar present: one-element sequence
    let entity = entities::ApiResource {
        name: "api".into(),
        allowed_access_token_signing_algorithms: Some("ES384".into()),
        ..entities::ApiResource::default()
    };
    let model = api_resource::to_model(Some(&entity)).expect("model expected");
    assert_eq!(
        model.allowed_access_token_signing_algorithms,
        vec!["ES384".to_owned()]
    );

    // Scalar absent: empty sequence
    let bare = entities::ApiResource {
        name: "api".into(),
        ..entities::ApiResource::default()
    };
    let bare_model = api_resource::to_model(Some(&bare)).expect("model expected");
    assert!(bare_model.allowed_access_token_signing_algorithms.is_empty());

    // Write takes the first element or none
    let multi = ApiResource {
        name: "api".into(),
        allowed_access_token_signing_algorithms: vec!["RS256".into(), "ES256".into()],
        ..ApiResource::default()
    };
    let written = api_resource::to_entity(Some(&multi)).expect("entity expected");
    assert_eq!(
        written.allowed_access_token_signing_algorithms.as_deref(),
        Some("RS256")
    );

    let none_written =
        api_resource::to_entity(Some(&ApiResource::default())).expect("entity expected");
    assert_eq!(none_written.allowed_access_token_signing_algorithms, None);
}

#[test]
fn test_api_resource_null_children_map_to_empty_containers() {
    let entity = entities::ApiResource {
        name: "bare".into(),
        ..entities::ApiResource::default()
    };

    let model = api_resource::to_model(Some(&entity)).expect("model expected");
    assert!(model.api_secrets.is_empty());
    assert!(model.scopes.is_empty());
    assert!(model.user_claims.is_empty());
    assert!(model.properties.is_empty());
}

#[test]
fn test_api_resource_to_entity_materializes_children() {
    let entity = api_resource::to_entity(Some(&ApiResource::default())).expect("entity expected");
    assert_eq!(entity.secrets, Some(Vec::new()));
    assert_eq!(entity.scopes, Some(Vec::new()));
    assert_eq!(entity.user_claims, Some(Vec::new()));
    assert_eq!(entity.properties, Some(Vec::new()));
}

#[test]
fn test_identity_resource_round_trip() {
    let model = IdentityResource {
        name: "profile".into(),
        display_name: Some("User profile".into()),
        description: Some("Name, picture, locale".into()),
        required: false,
        emphasize: true,
        user_claims: HashSet::from(["name".into(), "picture".into(), "locale".into()]),
        properties: HashMap::from([("category".into(), "standard".into())]),
        ..IdentityResource::default()
    };

    let entity = identity_resource::to_entity(Some(&model)).expect("entity expected");
    let round_tripped = identity_resource::to_model(Some(&entity)).expect("model expected");

    assert_eq!(round_tripped, model);
}

#[test]
fn test_identity_resource_fresh_entity_is_stamped() {
    let before = Utc::now();
    let entity = identity_resource::to_entity(Some(&IdentityResource::default()))
        .expect("entity expected");
    let after = Utc::now();

    let created = entity.created.expect("created stamp expected");
    let updated = entity.updated.expect("updated stamp expected");
    assert!(created >= before && created <= after);
    assert_eq!(created, updated);
    assert!(!entity.non_editable);
    assert_eq!(entity.id, 0);
}

#[test]
fn test_api_scope_round_trip() {
    let model = ApiScope {
        name: "payments.read".into(),
        display_name: Some("Read payments".into()),
        required: true,
        user_claims: HashSet::from(["sub".into()]),
        properties: HashMap::from([("audience".into(), "payments-api".into())]),
        ..ApiScope::default()
    };

    let entity = scope::to_entity(Some(&model)).expect("entity expected");
    let round_tripped = scope::to_model(Some(&entity)).expect("model expected");

    assert_eq!(round_tripped, model);
}

#[test]
fn test_api_scope_null_children_map_to_empty_containers() {
    let entity = entities::ApiScope {
        name: "bare".into(),
        ..entities::ApiScope::default()
    };

    let model = scope::to_model(Some(&entity)).expect("model expected");
    assert!(model.user_claims.is_empty());
    assert!(model.properties.is_empty());
}

#[test]
fn test_none_propagates_to_none_for_every_resource_mapper() {
    assert!(api_resource::to_model(None).is_none());
    assert!(api_resource::to_entity(None).is_none());
    assert!(identity_resource::to_model(None).is_none());
    assert!(identity_resource::to_entity(None).is_none());
    assert!(scope::to_model(None).is_none());
    assert!(scope::to_entity(None).is_none());
}

#[test]
fn test_duplicate_property_rows_last_wins() {
    let entity = entities::ApiScope {
        name: "dupes".into(),
        properties: Some(vec![
            entities::ApiScopeProperty {
                id: 1,
                key: "env".into(),
                value: "staging".into(),
            },
            entities::ApiScopeProperty {
                id: 2,
                key: "env".into(),
                value: "production".into(),
            },
        ]),
        ..entities::ApiScope::default()
    };

    let model = scope::to_model(Some(&entity)).expect("model expected");
    assert_eq!(model.properties.get("env").map(String::as_str), Some("production"));
    assert_eq!(model.properties.len(), 1);
}
