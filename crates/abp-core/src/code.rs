//! # Coded Variants — Shared Table Contract
//!
//! Every classification table in the register is a closed set of labelled
//! variants, each carrying a fixed integer code taken from the external
//! classification standard. [`CodedVariant`] is the contract the three
//! tables share: forward access (variant → code), reverse lookup
//! (code → variant, or `None`), and the stable register label.
//!
//! ## Not-Found Semantics
//!
//! Codes arrive from external feeds and are sparse by design (the standard
//! skips values). Reverse lookup of an unassigned code is an expected
//! outcome, never a fault: [`CodedVariant::lookup`] returns `None`. Callers
//! that consider an unmapped code an error use [`CodedVariant::decode`],
//! which returns [`AbpError::UnmappedCode`] instead.

use crate::error::AbpError;

/// A closed, compile-time table of labelled variants with integer codes.
///
/// Implementors guarantee that codes are pairwise distinct and labels are
/// pairwise distinct within the table, and that `lookup(v.code()) == Some(v)`
/// for every variant `v` in [`ALL`](Self::ALL).
pub trait CodedVariant: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Snake-case identifier of the table, used in error messages and logs.
    const KIND: &'static str;

    /// Every variant in declaration order. Order is presentational only.
    const ALL: &'static [Self];

    /// The fixed integer code of this variant.
    fn code(self) -> i32;

    /// The stable register label of this variant (e.g. `"In_Use"`).
    fn name(self) -> &'static str;

    /// Resolve a code to its variant, or `None` if the code is unassigned.
    fn lookup(code: i32) -> Option<Self>;

    /// Resolve a code, treating an unassigned code as an error.
    fn decode(code: i32) -> Result<Self, AbpError> {
        Self::lookup(code).ok_or_else(|| {
            tracing::debug!(kind = Self::KIND, code, "rejected unmapped classification code");
            AbpError::UnmappedCode {
                kind: Self::KIND,
                code,
            }
        })
    }

    /// Resolve an exact, case-sensitive register label to its variant.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

/// Implement [`CodedVariant`] and the standard conversions for a table enum.
///
/// The enum must provide inherent `code`, `lookup`, `as_str`, and `all`
/// functions. Generated impls:
/// - `CodedVariant` with the given `KIND`
/// - `Display` (register label) and `FromStr` (exact label)
/// - `TryFrom<i32>` (strict decode) and `From<Enum> for i32`
macro_rules! impl_coded_variant {
    ($ty:ty, $kind:literal) => {
        impl $crate::code::CodedVariant for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = <$ty>::all();

            fn code(self) -> i32 {
                <$ty>::code(self)
            }

            fn name(self) -> &'static str {
                <$ty>::as_str(self)
            }

            fn lookup(code: i32) -> Option<Self> {
                <$ty>::lookup(code)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::AbpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::code::CodedVariant>::from_name(s).ok_or_else(|| {
                    $crate::error::AbpError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    }
                })
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = $crate::error::AbpError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                <Self as $crate::code::CodedVariant>::decode(code)
            }
        }

        impl From<$ty> for i32 {
            fn from(v: $ty) -> i32 {
                v.code()
            }
        }
    };
}

pub(crate) use impl_coded_variant;
