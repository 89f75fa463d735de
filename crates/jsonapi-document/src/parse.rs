//! # Structural Parsing
//!
//! Well-formedness gate for JSON:API payloads. The parser walks an
//! already-parsed `serde_json::Value` and builds the typed model, rejecting
//! anything that is not structurally valid JSON:API before any rule-based
//! validation can run.
//!
//! ## Security Invariant
//!
//! Parsing is a trust boundary: a malformed document is rejected with an
//! [`InvalidDocument`] naming the offending member, and the rule engine
//! may assume every parsed document has `data` in the shape appropriate to
//! its kind.
//!
//! ## Implements
//!
//! JSON:API 1.0 §"Document Structure" (resource documents) and
//! §"Updating Relationships" (relationship documents).

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::document::{
    RelationshipData, RelationshipDocument, RelationshipObject, ResourceDocument,
    ResourceIdentifier, ResourceObject,
};
use crate::error::InvalidDocument;

/// Parse a resource create/update document.
///
/// The document must be an object with a `data` member holding a single
/// resource object, which must carry at least a string `type`.
///
/// # Errors
///
/// Returns [`InvalidDocument`] naming the first malformed member.
pub fn parse_resource(document: &Value) -> Result<ResourceDocument, InvalidDocument> {
    let doc = as_document(document)?;
    let data = doc
        .get("data")
        .ok_or_else(|| InvalidDocument::new("Document must contain a data member."))?;
    let data = data
        .as_object()
        .ok_or_else(|| InvalidDocument::new("Expected data to be a resource object."))?;

    Ok(ResourceDocument {
        data: parse_resource_object(data)?,
    })
}

/// Parse a standalone relationship update document.
///
/// The document must be an object; its `data` member (absent or null for
/// clearing a to-one relationship) must be null, a resource identifier, or
/// an array of resource identifiers.
///
/// # Errors
///
/// Returns [`InvalidDocument`] naming the first malformed member.
pub fn parse_relationship(document: &Value) -> Result<RelationshipDocument, InvalidDocument> {
    let doc = as_document(document)?;
    let data = match doc.get("data") {
        None => RelationshipData::Empty,
        Some(value) => parse_linkage(value)?,
    };

    Ok(RelationshipDocument { data })
}

fn as_document(document: &Value) -> Result<&Map<String, Value>, InvalidDocument> {
    document
        .as_object()
        .ok_or_else(|| InvalidDocument::new("Expected document to be an object."))
}

fn parse_resource_object(data: &Map<String, Value>) -> Result<ResourceObject, InvalidDocument> {
    let resource_type = data
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| InvalidDocument::new("Resource object must have a string type member."))?
        .to_string();

    let id = match data.get("id") {
        None => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(_) => {
            return Err(InvalidDocument::new("Resource id must be a string."));
        }
    };

    let attributes = match data.get("attributes") {
        None => None,
        Some(Value::Object(attrs)) => Some(attrs.clone()),
        Some(_) => {
            return Err(InvalidDocument::new("Resource attributes must be an object."));
        }
    };

    let relationships = match data.get("relationships") {
        None => None,
        Some(Value::Object(rels)) => Some(parse_relationship_objects(rels)?),
        Some(_) => {
            return Err(InvalidDocument::new(
                "Resource relationships must be an object.",
            ));
        }
    };

    Ok(ResourceObject {
        resource_type,
        id,
        attributes,
        relationships,
    })
}

fn parse_relationship_objects(
    rels: &Map<String, Value>,
) -> Result<BTreeMap<String, RelationshipObject>, InvalidDocument> {
    let mut parsed = BTreeMap::new();
    for (name, value) in rels {
        let rel = value.as_object().ok_or_else(|| {
            InvalidDocument::new(format!("Relationship {name} must be an object."))
        })?;
        // A links-only relationship has no data member; model it as empty
        // linkage rather than rejecting it.
        let data = match rel.get("data") {
            None => RelationshipData::Empty,
            Some(value) => parse_linkage(value)?,
        };
        parsed.insert(name.clone(), RelationshipObject { data });
    }
    Ok(parsed)
}

fn parse_linkage(value: &Value) -> Result<RelationshipData, InvalidDocument> {
    match value {
        Value::Null => Ok(RelationshipData::Empty),
        Value::Object(identifier) => Ok(RelationshipData::One(parse_identifier(identifier)?)),
        Value::Array(identifiers) => {
            let mut parsed = Vec::with_capacity(identifiers.len());
            for identifier in identifiers {
                let identifier = identifier.as_object().ok_or_else(|| {
                    InvalidDocument::new("Resource identifier must be an object.")
                })?;
                parsed.push(parse_identifier(identifier)?);
            }
            Ok(RelationshipData::Many(parsed))
        }
        _ => Err(InvalidDocument::new(
            "Relationship data must be null, a resource identifier, \
             or an array of resource identifiers.",
        )),
    }
}

fn parse_identifier(
    identifier: &Map<String, Value>,
) -> Result<ResourceIdentifier, InvalidDocument> {
    let resource_type = identifier
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            InvalidDocument::new("Resource identifier must have a string type member.")
        })?
        .to_string();

    let id = identifier
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| InvalidDocument::new("Resource identifier must have a string id member."))?
        .to_string();

    Ok(ResourceIdentifier { resource_type, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_resource_document() {
        let doc = json!({"data": {"type": "posts"}});
        let parsed = parse_resource(&doc).unwrap();
        assert_eq!(parsed.data.resource_type, "posts");
        assert_eq!(parsed.data.id, None);
        assert!(parsed.data.attributes.is_none());
        assert!(parsed.data.relationships.is_none());
    }

    #[test]
    fn parses_full_resource_document() {
        let doc = json!({
            "data": {
                "type": "posts",
                "id": "7",
                "attributes": {"title": "x", "published": false},
                "relationships": {
                    "author": {"data": {"type": "users", "id": "1"}},
                    "comments": {"data": [
                        {"type": "comments", "id": "2"},
                        {"type": "comments", "id": "3"}
                    ]},
                    "cover": {"data": null}
                }
            }
        });
        let parsed = parse_resource(&doc).unwrap();
        let data = parsed.data;
        assert_eq!(data.id.as_deref(), Some("7"));
        assert_eq!(data.attribute("title"), Some(&json!("x")));

        let rels = data.relationships.unwrap();
        assert!(matches!(rels["author"].data, RelationshipData::One(_)));
        match &rels["comments"].data {
            RelationshipData::Many(ids) => assert_eq!(ids.len(), 2),
            other => panic!("expected has-many linkage, got {other:?}"),
        }
        assert!(rels["cover"].data.is_empty());
    }

    #[test]
    fn rejects_non_object_document() {
        let err = parse_resource(&json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "Expected document to be an object.");
    }

    #[test]
    fn rejects_missing_data() {
        let err = parse_resource(&json!({"meta": {}})).unwrap_err();
        assert_eq!(err.to_string(), "Document must contain a data member.");
    }

    #[test]
    fn rejects_resource_data_array() {
        let err = parse_resource(&json!({"data": [{"type": "posts"}]})).unwrap_err();
        assert_eq!(err.to_string(), "Expected data to be a resource object.");
    }

    #[test]
    fn rejects_missing_type() {
        let err = parse_resource(&json!({"data": {"id": "1"}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Resource object must have a string type member."
        );
    }

    #[test]
    fn rejects_numeric_id() {
        let err = parse_resource(&json!({"data": {"type": "posts", "id": 1}})).unwrap_err();
        assert_eq!(err.to_string(), "Resource id must be a string.");
    }

    #[test]
    fn rejects_malformed_identifier_in_linkage() {
        let doc = json!({
            "data": {
                "type": "posts",
                "relationships": {"author": {"data": {"type": "users"}}}
            }
        });
        let err = parse_resource(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Resource identifier must have a string id member."
        );
    }

    #[test]
    fn links_only_relationship_parses_as_empty_linkage() {
        let doc = json!({
            "data": {
                "type": "posts",
                "relationships": {"author": {"links": {"related": "/posts/1/author"}}}
            }
        });
        let parsed = parse_resource(&doc).unwrap();
        assert!(parsed.data.relationship("author").unwrap().data.is_empty());
    }

    #[test]
    fn parses_relationship_document_shapes() {
        let one = parse_relationship(&json!({"data": {"type": "users", "id": "1"}})).unwrap();
        assert!(matches!(one.data, RelationshipData::One(_)));

        let many = parse_relationship(&json!({"data": [{"type": "comments", "id": "1"}]})).unwrap();
        assert!(matches!(many.data, RelationshipData::Many(_)));

        let cleared = parse_relationship(&json!({"data": null})).unwrap();
        assert!(cleared.data.is_empty());

        let absent = parse_relationship(&json!({})).unwrap();
        assert!(absent.data.is_empty());
    }

    #[test]
    fn rejects_scalar_relationship_data() {
        let err = parse_relationship(&json!({"data": 42})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Relationship data must be null, a resource identifier, \
             or an array of resource identifiers."
        );
    }
}
