//! # InvalidDocument — The Single Failure Kind
//!
//! Every rejection in the workspace — structural or rule-based — is an
//! [`InvalidDocument`] carrying the human-readable description of exactly
//! one violation: the first one encountered. There is no accumulation;
//! callers needing exhaustive diagnostics fix and re-validate iteratively.

use thiserror::Error;

/// A JSON:API document failed validation.
///
/// Carries the message for the first violation found, whether the document
/// was structurally malformed or broke a caller-supplied rule. All failures
/// are deterministic and caller-recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidDocument {
    /// Description of the violation.
    pub message: String,
}

impl InvalidDocument {
    /// Build an error from a violation description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
