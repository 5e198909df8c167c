//! Minted item metadata.
//!
//! These types mirror the on-chain metadata layout bit-for-bit: every enum is
//! `#[repr(u8)]` with the same ordinals the contract uses, so a verifier can
//! compare derived results against indexed chain data without remapping.

use crate::error::MintError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Purchase tier of a box, determining price and probability tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BoxType {
    /// Free tier; always yields tier-0 items with no background tier.
    Virtual = 0,
    /// Cheapest paid tier.
    Bronze = 1,
    /// Second paid tier.
    Silver = 2,
    /// Third paid tier.
    Gold = 3,
    /// Fourth paid tier.
    Platinum = 4,
    /// Highest paid tier with the best odds.
    Diamond = 5,
}

impl BoxType {
    /// All box types in ordinal order.
    pub const ALL: [BoxType; 6] = [
        BoxType::Virtual,
        BoxType::Bronze,
        BoxType::Silver,
        BoxType::Gold,
        BoxType::Platinum,
        BoxType::Diamond,
    ];
}

impl TryFrom<u8> for BoxType {
    type Error = MintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(MintError::InvalidBoxType(value))
    }
}

/// The five accessory slots a portrait can be composed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessoryType {
    /// Skin slot.
    Skin = 0,
    /// Body slot.
    Body = 1,
    /// Eye wear slot.
    EyeWear = 2,
    /// Head wear slot.
    HeadWear = 3,
    /// Props slot.
    Props = 4,
}

impl AccessoryType {
    /// All accessory types in ordinal order.
    pub const ALL: [AccessoryType; 5] = [
        AccessoryType::Skin,
        AccessoryType::Body,
        AccessoryType::EyeWear,
        AccessoryType::HeadWear,
        AccessoryType::Props,
    ];
}

impl TryFrom<u8> for AccessoryType {
    type Error = MintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(MintError::InvalidAccessoryType(value))
    }
}

/// Portrait finish: a small fraction of portraits come out holographic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FinishType {
    /// Standard finish.
    Normal = 0,
    /// Holographic finish.
    Holo = 1,
}

/// Facial expression of a portrait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExpressionType {
    /// Default expression (50% of draws).
    Normal = 0,
    /// First alternate expression (30%).
    ExpressionA = 1,
    /// Second alternate expression (20%).
    ExpressionB = 2,
}

/// Background art line. Which lines are available depends on the background
/// tier; see the probability tables in the mint crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BackgroundLine {
    /// Tier 0 line.
    Dots = 0,
    /// Tier 1 line.
    Flash = 1,
    /// Tier 2 line.
    Hex = 2,
    /// Tier 2 line.
    Rain = 3,
    /// Tier 3 line.
    Spotlight = 4,
    /// Tier 3 line.
    Mozart = 5,
    /// Tier 4 line.
    Affinity = 6,
    /// Tier 4 line.
    Arena = 7,
    /// Tier 5 line.
    Token = 8,
    /// Tier 5 line.
    Encounter = 9,
}

impl BackgroundLine {
    /// All background lines in ordinal order.
    pub const ALL: [BackgroundLine; 10] = [
        BackgroundLine::Dots,
        BackgroundLine::Flash,
        BackgroundLine::Hex,
        BackgroundLine::Rain,
        BackgroundLine::Spotlight,
        BackgroundLine::Mozart,
        BackgroundLine::Affinity,
        BackgroundLine::Arena,
        BackgroundLine::Token,
        BackgroundLine::Encounter,
    ];
}

impl TryFrom<u8> for BackgroundLine {
    type Error = MintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(MintError::InvalidBackgroundLine(value))
    }
}

/// Derived on-chain metadata of a single minted portrait.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portrait {
    /// Token id assigned to this portrait. Portraits advance the running id
    /// by a stride of 6 to leave room for the five accessory layers.
    pub token_id: U256,
    /// Box type the portrait was purchased from.
    pub box_type: BoxType,
    /// Rarity tier, 0..=5.
    pub tier: u8,
    /// Index of the illuvial artwork within the tier.
    pub illuvial: u8,
    /// Background rarity tier, 1..=5 (0 for Virtual boxes).
    pub background_tier: u8,
    /// Background art line.
    pub background_line: BackgroundLine,
    /// Background stage within the line.
    pub background_stage: u8,
    /// Background variation within the stage.
    pub background_variation: u8,
    /// Facial expression.
    pub expression: ExpressionType,
    /// Normal or holographic finish.
    pub finish: FinishType,
}

/// Derived on-chain metadata of a single minted accessory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    /// Token id assigned to this accessory. Accessories advance the running
    /// id by 1.
    pub token_id: U256,
    /// Box type the accessory was purchased from.
    pub box_type: BoxType,
    /// The slot this accessory occupies.
    pub accessory_type: AccessoryType,
    /// Rarity tier, 0..=5.
    pub tier: u8,
    /// Stage, 1..=3.
    pub stage: u8,
}
