#![forbid(unsafe_code)]

//! # Illuvitars Mint Derivation
//!
//! Deterministic derivation of minted item attributes from a single 256-bit
//! random seed. Given a purchase's parameters and the seed resolved by the
//! randomness oracle, [`derive_mint_result`] reproduces exactly the portraits
//! and accessories the on-chain minter produced, enabling off-chain
//! verification: same seed + same params = same output.
//!
//! The seed is consumed by a chained hash-and-divide scheme. Within one item,
//! independent dice rolls are extracted by repeated division (the remainder
//! is the roll, the quotient carries forward); between items, the seed is
//! re-hashed with keccak-256 so that no item's attributes can be predicted
//! from another's without recomputing the hash. See [`seed`] for the
//! primitives and [`tables`] for the weighted probability data.

pub mod accessory;
pub mod blob;
pub mod portrait;
pub mod price;
pub mod result;
pub mod seed;
pub mod tables;

pub use illuvitars_types::{error, item, request, Result, U256};
pub use result::derive_mint_result;
