//! # BLPU State — Building/Land-Use Lifecycle
//!
//! Defines `BlpuState`, the lifecycle state of a Basic Land and Property
//! Unit as carried in address register records.
//!
//! ## Codes
//!
//! | Code | Label |
//! |------|-------|
//! | 1 | `Under_Construction` |
//! | 2 | `In_Use` |
//! | 3 | `Unoccupied` |
//! | 4 | `Demolished` |
//! | 6 | `Planning_Permission_Granted` |
//!
//! Code 5 is unassigned. Any code outside the table resolves to `None`.

use serde::{Deserialize, Serialize};

use crate::code::impl_coded_variant;

/// Lifecycle state of a building or land-use unit.
///
/// Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum BlpuState {
    /// Construction has started but is not complete.
    UnderConstruction = 1,
    /// Complete and in use.
    InUse = 2,
    /// Complete but unoccupied. Also covers vacant and derelict properties.
    Unoccupied = 3,
    /// Demolished.
    Demolished = 4,
    /// Planning permission granted, construction not yet started.
    PlanningPermissionGranted = 6,
}

impl BlpuState {
    /// Number of BLPU states.
    pub const COUNT: usize = 5;

    /// All BLPU states in declaration order.
    pub const fn all() -> &'static [BlpuState] {
        &[
            Self::UnderConstruction,
            Self::InUse,
            Self::Unoccupied,
            Self::Demolished,
            Self::PlanningPermissionGranted,
        ]
    }

    /// The register code of this state.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolve a register code, or `None` if the code is unassigned.
    pub const fn lookup(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::UnderConstruction),
            2 => Some(Self::InUse),
            3 => Some(Self::Unoccupied),
            4 => Some(Self::Demolished),
            6 => Some(Self::PlanningPermissionGranted),
            _ => None,
        }
    }

    /// The register label of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnderConstruction => "Under_Construction",
            Self::InUse => "In_Use",
            Self::Unoccupied => "Unoccupied",
            Self::Demolished => "Demolished",
            Self::PlanningPermissionGranted => "Planning_Permission_Granted",
        }
    }

    /// Whether a completed structure is standing (in use or unoccupied).
    pub fn is_extant(self) -> bool {
        matches!(self, Self::InUse | Self::Unoccupied)
    }
}

impl_coded_variant!(BlpuState, "blpu_state");
