//! # Relationship Document Validation
//!
//! Validates a standalone relationship update payload (the body of a
//! `PATCH` to a relationship endpoint): well-formedness first, then the
//! caller's cardinality/type rule applied to the whole document's linkage.

use serde_json::Value;

use jsonapi_document::{parse_relationship, InvalidDocument};

use crate::rules::RelationshipRules;
use crate::typecheck::check_relationship_types;

/// Validate a relationship update document.
///
/// The document must be well-formed (its `data` null, a resource
/// identifier, or an array of resource identifiers); `rules.types`, if
/// present, is then enforced with no context name — a standalone payload
/// has no relationship name.
///
/// # Errors
///
/// Returns [`InvalidDocument`] describing the first violation found.
pub fn validate_relationship(
    document: &Value,
    rules: &RelationshipRules,
) -> Result<(), InvalidDocument> {
    tracing::trace!(
        types = rules.types.is_some(),
        "validating relationship document"
    );
    match run_checks(document, rules) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::debug!(error = %err, "relationship document rejected");
            Err(err)
        }
    }
}

fn run_checks(document: &Value, rules: &RelationshipRules) -> Result<(), InvalidDocument> {
    let parsed = parse_relationship(document)?;
    check_relationship_types(&parsed.data, rules.types.as_ref(), None)
}
