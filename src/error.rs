//! Error types for scope consolidation.

use crate::models::Family;
use thiserror::Error;

/// Errors raised while parsing or combining address specifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The line is not an address, a CIDR block or a `start-end` range.
    #[error("malformed spec '{spec}': {reason}")]
    MalformedSpec { spec: String, reason: String },

    /// Two values that must share an address family do not.
    #[error("address family mismatch in {context}: expected {expected}, found {found}")]
    FamilyMismatch {
        expected: Family,
        found: Family,
        context: String,
    },

    /// Prefix length is longer than the address family allows.
    #[error("prefix /{prefix} is too long for {family}")]
    InvalidPrefix { family: Family, prefix: u8 },

    /// CIDR base address has host bits set.
    #[error("{family} base {base} is not aligned to /{prefix}")]
    Misaligned {
        family: Family,
        base: String,
        prefix: u8,
    },
}

impl ScopeError {
    pub(crate) fn malformed(spec: &str, reason: impl Into<String>) -> ScopeError {
        ScopeError::MalformedSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}
