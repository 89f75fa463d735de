//! # Rule-Set Model
//!
//! Caller-supplied constraints for one validation call. Rule sets are plain
//! data: immutable inputs constructed for a single invocation and discarded
//! afterward — no configuration state survives a call.
//!
//! ## Absence vs Emptiness
//!
//! A `None` rule set means "unconstrained — skip the check entirely." An
//! empty rule set forbids (or requires) nothing and is a different thing:
//! `permitted: Some(PermittedFields::default())` forbids every field, while
//! `permitted: None` permits them all. Inside a *present*
//! [`PermittedFields`], omitted collections default to empty, i.e. forbid
//! all. Inside a present [`RequiredFields`], the collections are always
//! concrete sequences (possibly empty), so a partially specified rule set
//! can never dereference a missing list.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Parameters for validating a resource create/update document.
///
/// Each constraint is independently optional; an absent constraint skips
/// that check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRules {
    /// Whitelist of fields the document may carry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted: Option<PermittedFields>,

    /// Checklist of fields the document must carry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredFields>,

    /// Acceptable resource types for the primary resource and its
    /// relationships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<TypeRules>,
}

/// Whitelist of permitted fields. Anything not listed is forbidden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermittedFields {
    /// Whether the document may carry an `id`. Omit to forbid it.
    pub id: bool,
    /// Attribute names the document may carry.
    pub attributes: BTreeSet<String>,
    /// Relationship names the document may carry.
    pub relationships: BTreeSet<String>,
}

/// Checklist of required fields, checked in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredFields {
    /// Whether the document must carry an `id`.
    pub id: bool,
    /// Attribute names that must be present with a non-null, non-false
    /// value.
    pub attributes: Vec<String>,
    /// Relationship names that must be present.
    pub relationships: Vec<String>,
}

/// Acceptable `type` values for the primary resource and its relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRules {
    /// Acceptable primary resource types. Absent means unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<BTreeSet<String>>,

    /// Per-relationship cardinality and type constraints. A relationship
    /// the document does not include is silently skipped; required-ness is
    /// the required check's job.
    pub relationships: BTreeMap<String, RelationshipTypeRule>,
}

/// Cardinality and acceptable types for one relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipTypeRule {
    /// Whether the relationship is to-one or to-many. Always enforced.
    pub kind: RelationshipKind,

    /// Acceptable related-resource types. Absent means any type is
    /// accepted; cardinality is still enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeSet<String>>,
}

impl RelationshipTypeRule {
    /// A to-one rule accepting any related type.
    pub fn has_one() -> Self {
        Self {
            kind: RelationshipKind::HasOne,
            types: None,
        }
    }

    /// A to-many rule accepting any related type.
    pub fn has_many() -> Self {
        Self {
            kind: RelationshipKind::HasMany,
            types: None,
        }
    }

    /// Restrict the rule to the given related-resource types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }
}

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// A single resource identifier, or null.
    HasOne,
    /// An ordered sequence of resource identifiers.
    HasMany,
}

/// Parameters for validating a standalone relationship update document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipRules {
    /// Cardinality and acceptable types for the linkage being written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<RelationshipTypeRule>,
}
