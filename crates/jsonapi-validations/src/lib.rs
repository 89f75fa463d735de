//! # jsonapi-validations — Rule-Based JSON:API Payload Validation
//!
//! Validates already-parsed JSON:API documents against caller-supplied
//! structural rules: which fields are permitted, which are required, and
//! which resource `type` values are acceptable for the primary resource
//! and each of its relationships.
//!
//! Two sibling validators share one rule model and one failure convention:
//!
//! - [`validate_resource`] — a full create/update resource document:
//!   permitted-field whitelist, required-field checklist, and
//!   primary/relationship type constraints.
//! - [`validate_relationship`] — a standalone relationship update document
//!   (`PATCH` to a relationship endpoint): cardinality and, optionally,
//!   permitted related-resource types.
//!
//! Both are pure functions of `(document, rules)`: no I/O, no retained
//! state, deterministic outcome and message for identical inputs. Success
//! is `Ok(())`; failure is a single
//! [`InvalidDocument`](jsonapi_document::InvalidDocument) describing the
//! first violation under a fixed evaluation order (well-formedness →
//! permitted → required → types).
//!
//! ## Example
//!
//! ```
//! use jsonapi_validations::{
//!     validate_resource, PermittedFields, RelationshipTypeRule, RequiredFields,
//!     ResourceRules, TypeRules,
//! };
//! use serde_json::json;
//!
//! let document = json!({
//!     "data": {
//!         "type": "posts",
//!         "attributes": {"title": "Rule engines"},
//!         "relationships": {
//!             "author": {"data": {"type": "users", "id": "1"}}
//!         }
//!     }
//! });
//!
//! let rules = ResourceRules {
//!     permitted: Some(PermittedFields {
//!         id: false,
//!         attributes: ["title".to_string()].into(),
//!         relationships: ["author".to_string()].into(),
//!     }),
//!     required: Some(RequiredFields {
//!         id: false,
//!         attributes: vec!["title".to_string()],
//!         relationships: vec!["author".to_string()],
//!     }),
//!     types: Some(TypeRules {
//!         primary: Some(["posts".to_string()].into()),
//!         relationships: [(
//!             "author".to_string(),
//!             RelationshipTypeRule::has_one().with_types(["users", "superusers"]),
//!         )]
//!         .into(),
//!     }),
//! };
//!
//! assert!(validate_resource(&document, &rules).is_ok());
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `jsonapi-document` internally.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//! - Validation never mutates the input document or rules.

pub mod relationship;
pub mod resource;
pub mod rules;
pub mod typecheck;

// Re-export the library surface.
pub use jsonapi_document::InvalidDocument;
pub use relationship::validate_relationship;
pub use resource::validate_resource;
pub use rules::{
    PermittedFields, RelationshipKind, RelationshipRules, RelationshipTypeRule, RequiredFields,
    ResourceRules, TypeRules,
};
pub use typecheck::check_relationship_types;
