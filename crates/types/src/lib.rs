#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Illuvitars Types
//!
//! This crate is the foundational library for the Illuvitars mint verifier,
//! containing all core data structures and error types.
//!
//! ## Architectural Role
//!
//! As the base crate, `illuvitars-types` has minimal dependencies and is a
//! dependency for every other crate in the workspace. It provides the
//! canonical definitions of the purchase parameters (`MintRequest`), the
//! derived on-chain metadata (`Portrait`, `Accessory`, `MintResult`), and the
//! error taxonomy shared by the derivation logic.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::MintError> = std::result::Result<T, E>;

/// A unified set of all error types used across the workspace.
pub mod error;
/// Minted item metadata: box types, accessory types, backgrounds, portraits.
pub mod item;
/// Purchase parameters and the request/result pair consumed by verifiers.
pub mod request;

pub use primitive_types::U256;
