//! # Logical State
//!
//! Defines `LogicalState`, the logical status of an address record in the
//! register. Codes 1, 3, 6 and 8 are assigned; everything else is not found.

use serde::{Deserialize, Serialize};

use crate::code::impl_coded_variant;

/// Logical status of an address record. Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum LogicalState {
    /// The approved address.
    Approved = 1,
    /// A current alternative to the approved address.
    Alternative = 3,
    /// Proposed, not yet approved.
    Provisional = 6,
    /// No longer current.
    Historical = 8,
}

impl LogicalState {
    /// Number of logical states.
    pub const COUNT: usize = 4;

    /// All logical states in declaration order.
    pub const fn all() -> &'static [LogicalState] {
        &[
            Self::Approved,
            Self::Alternative,
            Self::Provisional,
            Self::Historical,
        ]
    }

    /// The register code of this state.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolve a register code, or `None` if the code is unassigned.
    pub const fn lookup(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Approved),
            3 => Some(Self::Alternative),
            6 => Some(Self::Provisional),
            8 => Some(Self::Historical),
            _ => None,
        }
    }

    /// The register label of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Alternative => "Alternative",
            Self::Provisional => "Provisional",
            Self::Historical => "Historical",
        }
    }

    /// Whether the address is live in the register (approved or alternative).
    pub fn is_current(self) -> bool {
        matches!(self, Self::Approved | Self::Alternative)
    }
}

impl_coded_variant!(LogicalState, "logical_state");


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Lookup resolves exactly the assigned codes, each to the matching variant.
        #[test]
        fn lookup_matches_table(code in any::<i32>()) {
            let expected = LogicalState::all().iter().copied().find(|v| v.code() == code);
            prop_assert_eq!(LogicalState::lookup(code), expected);
        }

        /// Strict decoding agrees with lookup.
        #[test]
        fn try_from_agrees_with_lookup(code in any::<i32>()) {
            prop_assert_eq!(LogicalState::try_from(code).ok(), LogicalState::lookup(code));
        }
    }
}
