//! # jsonapi-document — JSON:API Document Model & Structural Parser
//!
//! Defines the typed data model for JSON:API payloads and the structural
//! parser that gates every validation pipeline. This crate is the bedrock
//! of the workspace: the rule engine in `jsonapi-validations` depends on
//! it; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit tagged structures, not untyped maps.** A parsed document
//!    is a `ResourceDocument` or `RelationshipDocument` with optional
//!    fields — every "is it present / is it this shape" question becomes
//!    an optional-field test or an enum match, never a stringly-typed
//!    lookup into a generic map.
//!
//! 2. **Parsing is a trust boundary.** A document that is not well-formed
//!    JSON:API never reaches rule checks. The parser rejects it with an
//!    [`InvalidDocument`] whose message names the offending member.
//!
//! 3. **One error kind.** Structural rejection and rule rejection share
//!    [`InvalidDocument`]; callers catch a single type either way.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod document;
pub mod error;
pub mod parse;

// Re-export primary types for ergonomic imports.
pub use document::{
    RelationshipData, RelationshipDocument, RelationshipObject, ResourceDocument,
    ResourceIdentifier, ResourceObject,
};
pub use error::InvalidDocument;
pub use parse::{parse_relationship, parse_resource};
