//! Integration test: end-to-end resource document validation.
//!
//! Exercises the full pipeline — structural parse, permitted, required,
//! types — with the rule-set shapes a JSON:API server would supply for a
//! posts/users domain, including the fixed first-failure ordering.

use jsonapi_validations::{
    validate_resource, PermittedFields, RelationshipTypeRule, RequiredFields, ResourceRules,
    TypeRules,
};
use serde_json::{json, Value};

/// A create-post payload with one attribute and one to-one relationship.
fn post_document() -> Value {
    json!({
        "data": {
            "type": "posts",
            "attributes": {"title": "x"},
            "relationships": {
                "author": {"data": {"type": "users", "id": "1"}}
            }
        }
    })
}

/// The full rule set for the posts domain: whitelist, checklist, and types.
fn post_rules() -> ResourceRules {
    ResourceRules {
        permitted: Some(PermittedFields {
            id: false,
            attributes: ["title".to_string()].into(),
            relationships: ["author".to_string()].into(),
        }),
        required: Some(RequiredFields {
            id: false,
            attributes: vec!["title".to_string()],
            relationships: vec!["author".to_string()],
        }),
        types: Some(TypeRules {
            primary: Some(["posts".to_string()].into()),
            relationships: [(
                "author".to_string(),
                RelationshipTypeRule::has_one().with_types(["users", "superusers"]),
            )]
            .into(),
        }),
    }
}

#[test]
fn conforming_document_passes_the_full_rule_set() {
    validate_resource(&post_document(), &post_rules()).unwrap();
}

#[test]
fn wrong_related_type_names_relationship_actual_and_allowed() {
    let mut doc = post_document();
    doc["data"]["relationships"]["author"]["data"]["type"] = json!("comments");

    let err = validate_resource(&doc, &post_rules()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch for relationship author: comments should be one of [superusers, users]"
    );
}

#[test]
fn missing_required_id_is_reported() {
    let rules = ResourceRules {
        required: Some(RequiredFields {
            id: true,
            ..RequiredFields::default()
        }),
        ..ResourceRules::default()
    };
    let err = validate_resource(&post_document(), &rules).unwrap_err();
    assert_eq!(err.to_string(), "Missing required id.");
}

#[test]
fn permitted_violations_precede_required_and_type_violations() {
    // The document breaks all three rule sets at once; the permitted check
    // runs first, so its violation is the one reported.
    let doc = json!({
        "data": {
            "type": "comments",
            "attributes": {"body": "y"}
        }
    });
    let rules = post_rules();
    let err = validate_resource(&doc, &rules).unwrap_err();
    assert_eq!(err.to_string(), "Unpermitted attribute body.");
}

#[test]
fn required_violations_precede_type_violations() {
    let doc = json!({"data": {"type": "comments", "attributes": {"title": "x"}}});
    let rules = ResourceRules {
        permitted: None,
        required: Some(RequiredFields {
            relationships: vec!["author".to_string()],
            ..RequiredFields::default()
        }),
        types: Some(TypeRules {
            primary: Some(["posts".to_string()].into()),
            ..TypeRules::default()
        }),
    };
    let err = validate_resource(&doc, &rules).unwrap_err();
    assert_eq!(err.to_string(), "Missing required relationships.");
}

#[test]
fn primary_type_is_checked_before_relationship_types() {
    let mut doc = post_document();
    doc["data"]["type"] = json!("comments");
    doc["data"]["relationships"]["author"]["data"]["type"] = json!("comments");

    let err = validate_resource(&doc, &post_rules()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch for resource: comments should be one of [posts]"
    );
}

#[test]
fn omitted_permitted_differs_from_empty_permitted() {
    let doc = post_document();

    // Omitted: no restriction at all.
    let unrestricted = ResourceRules::default();
    validate_resource(&doc, &unrestricted).unwrap();

    // Empty: forbids every field the document carries.
    let empty = ResourceRules {
        permitted: Some(PermittedFields::default()),
        ..ResourceRules::default()
    };
    validate_resource(&doc, &empty).unwrap_err();
}

#[test]
fn has_many_rule_rejects_object_linkage_in_resource_document() {
    let doc = json!({
        "data": {
            "type": "posts",
            "relationships": {
                "comments": {"data": {"type": "comments", "id": "1"}}
            }
        }
    });
    let rules = ResourceRules {
        types: Some(TypeRules {
            relationships: [("comments".to_string(), RelationshipTypeRule::has_many())].into(),
            ..TypeRules::default()
        }),
        ..ResourceRules::default()
    };
    let err = validate_resource(&doc, &rules).unwrap_err();
    assert_eq!(err.to_string(), "Expected relationship comments to be has_many.");
}

#[test]
fn input_document_is_left_untouched() {
    let doc = post_document();
    let snapshot = doc.clone();
    let _ = validate_resource(&doc, &post_rules());
    assert_eq!(doc, snapshot);
}
