//! Seed consumption primitives.
//!
//! One 256-bit seed is split into a sequence of bounded dice rolls by
//! repeated division: the remainder (truncated to 8 or 16 bits with an
//! explicit mask, matching the on-chain `uint8`/`uint16` casts) is the roll,
//! and the quotient becomes the carry-forward seed for the next roll within
//! the same item. Between items the seed is re-hashed; see
//! [`next_item_seed`].

use primitive_types::U256;
use sha3::{Digest, Keccak256};

/// Splits `rand` against `modulus`, returning the quotient and the remainder
/// truncated to 16 bits.
///
/// The truncation is wrapping, not saturating: only the low 16 bits of the
/// remainder are kept, so callers must pass a modulus of at most 65536 for
/// the roll to be meaningful.
pub fn div_mod_16(rand: U256, modulus: u64) -> (U256, u16) {
    debug_assert!(modulus != 0, "zero modulus");
    let modulus = U256::from(modulus);
    let quotient = rand / modulus;
    let remainder = ((rand % modulus).low_u64() & 0xFFFF) as u16;
    (quotient, remainder)
}

/// Splits `rand` against `modulus`, returning the quotient and the remainder
/// truncated to 8 bits. Used for small-range draws such as the illuvial
/// index and the background sub-indices.
pub fn div_mod_8(rand: U256, modulus: u64) -> (U256, u8) {
    debug_assert!(modulus != 0, "zero modulus");
    let modulus = U256::from(modulus);
    let quotient = rand / modulus;
    let remainder = ((rand % modulus).low_u64() & 0xFF) as u8;
    (quotient, remainder)
}

/// Re-hashes a seed to produce the seed for the next item.
///
/// Computes `keccak256(abi.encode(rand, rand))`: the keccak-256 digest of the
/// 64-byte big-endian concatenation of the seed with itself. Applied once per
/// completed item, to the seed as of the *start* of that item, so each item's
/// derived seed is independent of how many rolls the item consumed.
pub fn next_item_seed(rand: U256) -> U256 {
    let mut encoded = [0u8; 64];
    rand.to_big_endian(&mut encoded[..32]);
    let (head, tail) = encoded.split_at_mut(32);
    tail.copy_from_slice(head);
    U256::from_big_endian(&Keccak256::digest(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u256(hex: &str) -> U256 {
        U256::from_big_endian(&hex::decode(hex).unwrap())
    }

    #[test]
    fn div_mod_splits_quotient_and_remainder() {
        let (quotient, remainder) = div_mod_16(U256::from(123_456u64), 10_000);
        assert_eq!(quotient, U256::from(12));
        assert_eq!(remainder, 3456);

        let (quotient, remainder) = div_mod_8(U256::from(17u64), 5);
        assert_eq!(quotient, U256::from(3));
        assert_eq!(remainder, 2);
    }

    #[test]
    fn remainders_truncate_with_wrapping_masks() {
        // 70_000 % 100_000 = 70_000; only the low 16 bits survive.
        let (_, remainder) = div_mod_16(U256::from(70_000u64), 100_000);
        assert_eq!(remainder, (70_000u32 & 0xFFFF) as u16);

        // 300 % 1_000 = 300; only the low 8 bits survive.
        let (_, remainder) = div_mod_8(U256::from(300u64), 1_000);
        assert_eq!(remainder, (300u32 & 0xFF) as u8);
    }

    #[test]
    fn next_item_seed_matches_keccak_of_doubled_encoding() {
        // keccak256 of 64 zero bytes, a well-known sparse-merkle zero hash.
        assert_eq!(
            next_item_seed(U256::zero()),
            u256("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
        );
        // keccak256(abi.encode(1, 1)), the familiar Solidity slot hash for
        // mapping slot 1, key 1.
        assert_eq!(
            next_item_seed(U256::one()),
            u256("cc69885fda6bcc1a4ace058b4a62bf5e179ea78fd58a1ccd71c22cc9b688792f")
        );
    }

    #[test]
    fn rehash_is_not_sensitive_to_consumed_state() {
        let seed = u256("cc69885fda6bcc1a4ace058b4a62bf5e179ea78fd58a1ccd71c22cc9b688792f");
        let (consumed, _) = div_mod_16(seed, 10_000);
        assert_ne!(consumed, seed);
        // The next item seed only depends on the starting seed.
        assert_eq!(next_item_seed(seed), next_item_seed(seed));
        assert_ne!(next_item_seed(consumed), next_item_seed(seed));
    }
}
