//! # Typed JSON:API Document Model
//!
//! Explicit structures for the JSON:API payload shapes this workspace
//! validates: resource create/update documents and standalone relationship
//! update documents.
//!
//! The `type` member collides with a Rust keyword, so every carrier renames
//! it (`resource_type` in Rust, `"type"` on the wire).
//!
//! ## Implements
//!
//! JSON:API 1.0 §"Document Structure" — resource objects, resource
//! identifier objects, and relationship objects, restricted to the members
//! the rule engine consults (`id`, `type`, `attributes`, `relationships`).
//! Members outside that set (`links`, `meta`, ...) are ignored, not
//! rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resource create/update document: a top-level `data` member holding
/// exactly one resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    /// The primary resource.
    pub data: ResourceObject,
}

/// One addressable entity: `type`, optional `id`, and optional
/// `attributes`/`relationships` maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// The resource type (e.g., `"posts"`).
    #[serde(rename = "type")]
    pub resource_type: String,

    /// The resource identifier, absent on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Attribute values, keyed by field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    /// Relationship objects, keyed by relationship name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<BTreeMap<String, RelationshipObject>>,
}

impl ResourceObject {
    /// Look up an attribute value by field name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(name))
    }

    /// Look up a relationship object by name.
    pub fn relationship(&self, name: &str) -> Option<&RelationshipObject> {
        self.relationships.as_ref().and_then(|rels| rels.get(name))
    }
}

/// A relationship object embedded in a resource object. Only the `data`
/// linkage is modeled; a links-only relationship carries empty data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipObject {
    /// Resource linkage: null, one identifier, or a sequence of identifiers.
    #[serde(default)]
    pub data: RelationshipData,
}

/// Resource linkage inside a relationship: the to-one/to-many distinction
/// is structural, so it is an enum, not a runtime shape probe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// No related resource (`data: null` or `data` absent).
    #[default]
    Empty,
    /// A single related resource (has-one linkage).
    One(ResourceIdentifier),
    /// An ordered sequence of related resources (has-many linkage).
    Many(Vec<ResourceIdentifier>),
}

impl RelationshipData {
    /// True for null/absent linkage.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The minimal `{type, id}` reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The referenced resource's type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The referenced resource's identifier.
    pub id: String,
}

/// A standalone relationship update document (the payload of a `PATCH` to
/// a relationship endpoint): a top-level `data` member holding resource
/// linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDocument {
    /// The linkage being written.
    #[serde(default)]
    pub data: RelationshipData,
}
