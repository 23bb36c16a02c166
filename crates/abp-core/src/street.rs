//! # Street Classification
//!
//! Defines `StreetClassification`, the class of traffic a street carries.
//!
//! | Code | Label |
//! |------|-------|
//! |  4 | `Footpath` |
//! |  6 | `Cycleway` |
//! |  8 | `All_Vehicles` |
//! |  9 | `Restricted_Byway` |
//! | 10 | `Bridleway` |

use serde::{Deserialize, Serialize};

use crate::code::impl_coded_variant;

/// Classification of a street by permitted traffic.
///
/// Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum StreetClassification {
    /// Footpath, or a general pedestrian way.
    Footpath = 4,
    /// Cycleway.
    Cycleway = 6,
    /// Open to all vehicles.
    AllVehicles = 8,
    /// Restricted byway (no mechanically propelled vehicles).
    RestrictedByway = 9,
    /// Bridleway.
    Bridleway = 10,
}

impl StreetClassification {
    /// Number of street classifications.
    pub const COUNT: usize = 5;

    /// All classifications in declaration order.
    pub const fn all() -> &'static [StreetClassification] {
        &[
            Self::Footpath,
            Self::Cycleway,
            Self::AllVehicles,
            Self::RestrictedByway,
            Self::Bridleway,
        ]
    }

    /// The register code of this classification.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolve a register code, or `None` if the code is unassigned.
    pub const fn lookup(code: i32) -> Option<Self> {
        match code {
            4 => Some(Self::Footpath),
            6 => Some(Self::Cycleway),
            8 => Some(Self::AllVehicles),
            9 => Some(Self::RestrictedByway),
            10 => Some(Self::Bridleway),
            _ => None,
        }
    }

    /// The register label of this classification.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Footpath => "Footpath",
            Self::Cycleway => "Cycleway",
            Self::AllVehicles => "All_Vehicles",
            Self::RestrictedByway => "Restricted_Byway",
            Self::Bridleway => "Bridleway",
        }
    }

    /// Whether general motor traffic is permitted.
    pub fn is_vehicular(self) -> bool {
        matches!(self, Self::AllVehicles)
    }
}

impl_coded_variant!(StreetClassification, "street_classification");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridleway_lookup() {
        assert_eq!(
            StreetClassification::lookup(10),
            Some(StreetClassification::Bridleway)
        );
        assert_eq!(StreetClassification::lookup(0), None);
    }

    #[test]
    fn test_low_codes_unassigned() {
        for code in 0..4 {
            assert_eq!(StreetClassification::lookup(code), None);
        }
        assert_eq!(StreetClassification::lookup(5), None);
        assert_eq!(StreetClassification::lookup(7), None);
        assert_eq!(StreetClassification::lookup(11), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StreetClassification::AllVehicles.to_string(), "All_Vehicles");
        assert_eq!(
            "Restricted_Byway".parse::<StreetClassification>(),
            Ok(StreetClassification::RestrictedByway)
        );
    }

    #[test]
    fn test_unknown_label_error() {
        let err = "Motorway".parse::<StreetClassification>().unwrap_err();
        assert_eq!(err.to_string(), "unknown street_classification label: \"Motorway\"");
    }

    #[test]
    fn test_only_all_vehicles_is_vehicular() {
        let vehicular: Vec<_> = StreetClassification::all()
            .iter()
            .filter(|c| c.is_vehicular())
            .collect();
        assert_eq!(vehicular, vec![&StreetClassification::AllVehicles]);
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // Adding a classification must break this match.
        fn permits_horses(c: StreetClassification) -> bool {
            match c {
                StreetClassification::Footpath => false,
                StreetClassification::Cycleway => false,
                StreetClassification::AllVehicles => true,
                StreetClassification::RestrictedByway => true,
                StreetClassification::Bridleway => true,
            }
        }
        assert!(permits_horses(StreetClassification::Bridleway));
        assert!(!permits_horses(StreetClassification::Footpath));
    }
}
