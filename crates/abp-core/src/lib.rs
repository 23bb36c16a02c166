//! # abp-core — Address Register Classification Codes
//!
//! Code tables for the classification fields of address register records.
//! Each table is a closed Rust enum whose variants carry the integer code
//! assigned by the external classification standard.
//!
//! | Table | Type | Codes |
//! |-------|------|-------|
//! | BLPU state | [`BlpuState`] | 1, 2, 3, 4, 6 |
//! | Logical state | [`LogicalState`] | 1, 3, 6, 8 |
//! | Street classification | [`StreetClassification`] | 4, 6, 8, 9, 10 |
//!
//! ## Key Design Principles
//!
//! 1. **Sparse codes are not defects.** The standard skips values. Any code
//!    outside a table resolves to `None`; the code set is never assumed to
//!    be exhaustive of what an external feed may contain.
//!
//! 2. **Lookup is the expected path.** `lookup(code)` returns `Option`.
//!    `TryFrom<i32>` and deserialization return [`AbpError`] for callers that
//!    treat an unmapped code as an error.
//!
//! 3. **Integer on the wire, label for humans.** `serde` encodes the code;
//!    `Display`/`FromStr` use the register label (`"In_Use"`).
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All tables are `Copy`, immutable, and safe to share across threads.

pub mod blpu;
pub mod code;
pub mod error;
pub mod logical;
pub mod street;

// Re-export primary types for ergonomic imports.
pub use blpu::BlpuState;
pub use code::CodedVariant;
pub use error::AbpError;
pub use logical::LogicalState;
pub use street::StreetClassification;
