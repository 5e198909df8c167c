//! Purchase parameters and the request/result pair.
//!
//! A [`MintRequest`] is created when a purchase transaction is accepted. The
//! random seed is filled in once by the randomness source; after that the
//! request is immutable and serves only as the input to derivation and
//! off-chain verification.

use crate::item::{Accessory, AccessoryType, BoxType, Portrait};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A request to mint `amount` portraits of a given box type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortraitMintParams {
    /// Box type purchased.
    pub box_type: BoxType,
    /// Number of portraits to mint.
    pub amount: u64,
}

/// A request to mint accessories whose slot is fixed by the buyer; only tier
/// and stage are randomized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorySemiRandomMintParams {
    /// The accessory slot the buyer chose.
    pub accessory_type: AccessoryType,
    /// Box type purchased.
    pub box_type: BoxType,
    /// Number of accessories to mint.
    pub amount: u64,
}

/// A request to mint accessories with the slot randomized as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryFullRandomMintParams {
    /// Box type purchased.
    pub box_type: BoxType,
    /// Number of accessories to mint.
    pub amount: u64,
}

/// A user's mint request, with start token ids already assigned by the
/// external sequential counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    /// Address of the purchaser.
    pub requester: String,
    /// Portrait purchases, in purchase order.
    pub portrait_mint_params: Vec<PortraitMintParams>,
    /// Semi-random accessory purchases, in purchase order.
    pub accessory_semi_random_mint_params: Vec<AccessorySemiRandomMintParams>,
    /// Full-random accessory purchases, in purchase order.
    pub accessory_full_random_mint_params: Vec<AccessoryFullRandomMintParams>,
    /// The resolved random seed, or zero while unfulfilled.
    pub random_number: U256,
    /// First token id for portraits minted by this request.
    pub portrait_start_token_id: U256,
    /// First token id for accessories minted by this request.
    pub accessory_start_token_id: U256,
}

impl MintRequest {
    /// Total number of portraits this request will mint.
    pub fn portrait_amount(&self) -> u64 {
        self.portrait_mint_params.iter().map(|p| p.amount).sum()
    }

    /// Total number of accessories this request will mint.
    pub fn accessory_amount(&self) -> u64 {
        let semi: u64 = self
            .accessory_semi_random_mint_params
            .iter()
            .map(|p| p.amount)
            .sum();
        let full: u64 = self
            .accessory_full_random_mint_params
            .iter()
            .map(|p| p.amount)
            .sum();
        semi + full
    }
}

/// The full derivation output for one request, consumable by an off-chain
/// verifier or indexer reproducing what the minting transaction produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintResult {
    /// Address of the purchaser.
    pub requester: String,
    /// The seed the derivation started from.
    pub seed: U256,
    /// Derived portraits, in request order expanded by amount.
    pub portraits: Vec<Portrait>,
    /// Derived accessories, semi-random entries first, then full-random.
    pub accessories: Vec<Accessory>,
}
