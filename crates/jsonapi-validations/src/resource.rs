//! # Resource Document Validation
//!
//! Validates a resource create/update payload against caller-supplied
//! rules: permitted-field whitelist, required-field checklist, and
//! primary/relationship type constraints.
//!
//! Checks run in a fixed order — well-formedness, permitted, required,
//! types — and short-circuit on the first violation. Within the type
//! check, the primary resource is checked before relationships, and
//! relationships in the rule set's iteration order.

use serde_json::Value;

use jsonapi_document::{parse_resource, InvalidDocument, ResourceObject};

use crate::rules::{PermittedFields, RequiredFields, ResourceRules, TypeRules};
use crate::typecheck::{check_relationship_types, format_type_set};

/// Validate a resource create/update document.
///
/// The document must first be well-formed JSON:API (a `data` member holding
/// a resource object with at least a `type`); each rule set in `rules` is
/// then enforced if present and skipped if absent.
///
/// # Errors
///
/// Returns [`InvalidDocument`] describing the first violation found.
pub fn validate_resource(document: &Value, rules: &ResourceRules) -> Result<(), InvalidDocument> {
    tracing::trace!(
        permitted = rules.permitted.is_some(),
        required = rules.required.is_some(),
        types = rules.types.is_some(),
        "validating resource document"
    );
    match run_checks(document, rules) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::debug!(error = %err, "resource document rejected");
            Err(err)
        }
    }
}

fn run_checks(document: &Value, rules: &ResourceRules) -> Result<(), InvalidDocument> {
    let parsed = parse_resource(document)?;

    if let Some(permitted) = &rules.permitted {
        check_permitted(&parsed.data, permitted)?;
    }
    if let Some(required) = &rules.required {
        check_required(&parsed.data, required)?;
    }
    if let Some(types) = &rules.types {
        check_types(&parsed.data, types)?;
    }
    Ok(())
}

fn check_permitted(data: &ResourceObject, permitted: &PermittedFields) -> Result<(), InvalidDocument> {
    if data.id.is_some() && !permitted.id {
        return Err(InvalidDocument::new("Unpermitted id."));
    }

    if let Some(attributes) = &data.attributes {
        for name in attributes.keys() {
            if !permitted.attributes.contains(name) {
                return Err(InvalidDocument::new(format!("Unpermitted attribute {name}.")));
            }
        }
    }

    if let Some(relationships) = &data.relationships {
        for name in relationships.keys() {
            if !permitted.relationships.contains(name) {
                return Err(InvalidDocument::new(format!(
                    "Unpermitted relationship {name}."
                )));
            }
        }
    }

    Ok(())
}

fn check_required(data: &ResourceObject, required: &RequiredFields) -> Result<(), InvalidDocument> {
    if required.id && data.id.is_none() {
        return Err(InvalidDocument::new("Missing required id."));
    }

    if !required.attributes.is_empty() {
        let Some(attributes) = &data.attributes else {
            return Err(InvalidDocument::new("Missing required attributes."));
        };
        for name in &required.attributes {
            // Null and false count as missing; 0, "", [] and {} are present.
            let satisfied = attributes
                .get(name)
                .is_some_and(|value| !value.is_null() && *value != Value::Bool(false));
            if !satisfied {
                return Err(InvalidDocument::new(format!(
                    "Missing required attribute {name}."
                )));
            }
        }
    }

    if !required.relationships.is_empty() {
        let Some(relationships) = &data.relationships else {
            return Err(InvalidDocument::new("Missing required relationships."));
        };
        for name in &required.relationships {
            if !relationships.contains_key(name) {
                return Err(InvalidDocument::new(format!(
                    "Missing required relationship {name}."
                )));
            }
        }
    }

    Ok(())
}

fn check_types(data: &ResourceObject, types: &TypeRules) -> Result<(), InvalidDocument> {
    if let Some(primary) = &types.primary {
        if !primary.contains(&data.resource_type) {
            return Err(InvalidDocument::new(format!(
                "Type mismatch for resource: {} should be one of {}",
                data.resource_type,
                format_type_set(primary)
            )));
        }
    }

    if let Some(relationships) = &data.relationships {
        for (name, rule) in &types.relationships {
            // A relationship the document does not include is not this
            // check's concern; required-ness was settled earlier.
            let Some(rel) = relationships.get(name) else {
                continue;
            };
            check_relationship_types(&rel.data, Some(rule), Some(name))?;
        }
    }

    Ok(())
}
