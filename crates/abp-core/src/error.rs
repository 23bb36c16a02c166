//! # Error Types
//!
//! Defines the error type returned by the strict decoding paths of the
//! classification tables. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! Plain [`lookup`](crate::CodedVariant::lookup) never produces an error:
//! an unmapped code is an expected outcome there and comes back as `None`.
//! The variants below exist for callers that have decided an unmapped code
//! is a failure in their context.

use thiserror::Error;

/// Error raised when a code or label does not resolve to a variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbpError {
    /// The integer code is not assigned to any variant of the table.
    #[error("unmapped {kind} code: {code}")]
    UnmappedCode {
        /// Table the code was decoded against (e.g. `blpu_state`).
        kind: &'static str,
        /// The rejected code.
        code: i32,
    },

    /// The label does not name any variant of the table.
    #[error("unknown {kind} label: {name:?}")]
    UnknownName {
        /// Table the label was parsed against.
        kind: &'static str,
        /// The rejected label.
        name: String,
    },
}

impl AbpError {
    /// The table the failing input was resolved against.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnmappedCode { kind, .. } | Self::UnknownName { kind, .. } => *kind,
        }
    }
}
