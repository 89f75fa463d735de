//! # Shared Relationship Type-Checker
//!
//! Cardinality and type checking for resource linkage, shared by both
//! validators: the resource validator calls it per embedded relationship
//! (with the relationship name for error context), the relationship
//! validator calls it once for the whole document (no name — a standalone
//! payload has no relationship name context).
//!
//! Free function by design: all context arrives as explicit parameters,
//! there is no owning instance and no shared state.

use std::collections::BTreeSet;

use jsonapi_document::{InvalidDocument, RelationshipData};

use crate::rules::{RelationshipKind, RelationshipTypeRule};

/// Check resource linkage against a cardinality + type-set rule.
///
/// An absent rule passes unconditionally. Cardinality is always enforced;
/// the type set only when given. Empty to-one linkage passes regardless of
/// any type constraint — "no relation" trivially satisfies any restriction
/// on what the relation may point to.
///
/// # Errors
///
/// Returns [`InvalidDocument`] on the first identifier whose shape or type
/// breaks the rule.
pub fn check_relationship_types(
    data: &RelationshipData,
    rule: Option<&RelationshipTypeRule>,
    name: Option<&str>,
) -> Result<(), InvalidDocument> {
    let Some(rule) = rule else {
        return Ok(());
    };

    match rule.kind {
        RelationshipKind::HasMany => {
            let RelationshipData::Many(identifiers) = data else {
                return Err(cardinality_error(name, "has_many"));
            };
            let Some(allowed) = &rule.types else {
                return Ok(());
            };
            for identifier in identifiers {
                if !allowed.contains(&identifier.resource_type) {
                    return Err(type_mismatch(name, &identifier.resource_type, allowed));
                }
            }
            Ok(())
        }
        RelationshipKind::HasOne => match data {
            RelationshipData::Empty => Ok(()),
            RelationshipData::One(identifier) => match &rule.types {
                None => Ok(()),
                Some(allowed) if allowed.contains(&identifier.resource_type) => Ok(()),
                Some(allowed) => Err(type_mismatch(name, &identifier.resource_type, allowed)),
            },
            RelationshipData::Many(_) => Err(cardinality_error(name, "has_one")),
        },
    }
}

/// Render an allowed-type set as `[a, b, c]` for failure messages.
pub(crate) fn format_type_set(allowed: &BTreeSet<String>) -> String {
    let names: Vec<&str> = allowed.iter().map(String::as_str).collect();
    format!("[{}]", names.join(", "))
}

fn context(name: Option<&str>) -> String {
    name.map(|n| format!(" {n}")).unwrap_or_default()
}

fn cardinality_error(name: Option<&str>, kind: &str) -> InvalidDocument {
    InvalidDocument::new(format!(
        "Expected relationship{} to be {kind}.",
        context(name)
    ))
}

fn type_mismatch(name: Option<&str>, actual: &str, allowed: &BTreeSet<String>) -> InvalidDocument {
    InvalidDocument::new(format!(
        "Type mismatch for relationship{}: {actual} should be one of {}",
        context(name),
        format_type_set(allowed)
    ))
}
