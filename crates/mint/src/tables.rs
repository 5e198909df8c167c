//! Weighted probability tables.
//!
//! All tables are fixed constants mirroring the on-chain minter. Tier
//! thresholds are cumulative and expressed in basis points (10000 = 100%);
//! a roll in `[0, 10000)` selects the first tier whose threshold exceeds it.
//! The background tables are keyed by tier and line and never change.

use illuvitars_types::error::MintError;
use illuvitars_types::item::{BackgroundLine, BoxType};
use illuvitars_types::Result;

/// Number of rarity tiers.
pub const TIER_COUNT: usize = 6;
/// Highest rarity tier.
pub const MAX_TIER: u8 = 5;
/// Upper bound of a tier roll, in basis points.
pub const MAX_TIER_CHANCE: u16 = 10_000;
/// Upper bound of a percentage roll.
pub const FULL_PERCENT: u16 = 100;
/// Number of accessory stages.
pub const STAGE_COUNT: usize = 3;
/// Number of portrait expressions.
pub const EXPRESSION_COUNT: usize = 3;
/// Token-id stride between consecutive portraits, leaving id space for the
/// five accessory layers of each portrait.
pub const PORTRAIT_TOKEN_STRIDE: u64 = 6;

/// Cumulative stage thresholds out of 100, for stages 1..=3.
pub const STAGE_PROBABILITY: [u16; STAGE_COUNT] = [45, 80, 100];
/// Cumulative expression thresholds out of 100.
pub const EXPRESSION_PROBABILITY: [u16; EXPRESSION_COUNT] = [50, 80, 100];
/// Number of illuvial artworks available per tier.
pub const ILLUVIAL_COUNTS: [u8; TIER_COUNT] = [3, 6, 5, 4, 4, 3];

/// Cumulative portrait tier thresholds for a box type, in basis points.
pub fn portrait_tier_chances(box_type: BoxType) -> [u16; TIER_COUNT] {
    match box_type {
        BoxType::Virtual => [10_000, 0, 0, 0, 0, 0],
        BoxType::Bronze => [0, 8_000, 9_700, 9_930, 9_980, 10_000],
        BoxType::Silver => [0, 6_100, 8_800, 9_700, 9_950, 10_000],
        BoxType::Gold => [0, 2_400, 6_600, 8_800, 9_700, 10_000],
        BoxType::Platinum => [0, 500, 2_000, 4_250, 8_250, 10_000],
        BoxType::Diamond => [0, 200, 1_000, 2_500, 5_000, 10_000],
    }
}

/// Cumulative accessory tier thresholds for a box type, in basis points.
pub fn accessory_tier_chances(box_type: BoxType) -> [u16; TIER_COUNT] {
    match box_type {
        BoxType::Virtual => [10_000, 0, 0, 0, 0, 0],
        BoxType::Bronze => [0, 8_100, 9_200, 9_700, 9_900, 10_000],
        BoxType::Silver => [0, 3_000, 7_600, 8_800, 9_700, 10_000],
        BoxType::Gold => [0, 1_500, 4_700, 7_200, 9_000, 10_000],
        BoxType::Platinum => [0, 500, 2_000, 5_300, 8_000, 10_000],
        BoxType::Diamond => [0, 100, 600, 2_800, 6_000, 10_000],
    }
}

/// Holo finish threshold out of 100. A finish roll less than or equal to
/// this value yields a holographic portrait.
pub fn holo_probability(box_type: BoxType) -> u16 {
    match box_type {
        BoxType::Virtual | BoxType::Bronze | BoxType::Silver | BoxType::Gold => 2,
        BoxType::Platinum => 3,
        BoxType::Diamond => 5,
    }
}

/// Background lines available at a background tier. Returns an empty slice
/// for tiers outside 0..=5.
pub fn background_lines(tier: u8) -> &'static [BackgroundLine] {
    match tier {
        0 => &[BackgroundLine::Dots],
        1 => &[BackgroundLine::Flash],
        2 => &[BackgroundLine::Hex, BackgroundLine::Rain],
        3 => &[BackgroundLine::Spotlight, BackgroundLine::Mozart],
        4 => &[BackgroundLine::Affinity, BackgroundLine::Arena],
        5 => &[BackgroundLine::Token, BackgroundLine::Encounter],
        _ => &[],
    }
}

/// Background stages available for a (tier, line) pair. Returns an empty
/// slice for pairs outside the table.
pub fn background_stages(tier: u8, line: BackgroundLine) -> &'static [u8] {
    match (tier, line) {
        (0, BackgroundLine::Dots) => &[1],
        (1, BackgroundLine::Flash) => &[1],
        (2, BackgroundLine::Hex) => &[2],
        (2, BackgroundLine::Rain) => &[3],
        (3, BackgroundLine::Spotlight) => &[3],
        (3, BackgroundLine::Mozart) => &[2],
        (4, BackgroundLine::Affinity) => &[1],
        (4, BackgroundLine::Arena) => &[1],
        (5, BackgroundLine::Token) => &[1, 2],
        (5, BackgroundLine::Encounter) => &[3],
        _ => &[],
    }
}

/// Number of background variations for a (tier, line, stage) triple. Returns
/// zero for triples outside the table.
pub fn background_variations(tier: u8, line: BackgroundLine, stage: u8) -> u8 {
    match (tier, line, stage) {
        (0, BackgroundLine::Dots, 1) => 10,
        (1, BackgroundLine::Flash, 1) => 10,
        (2, BackgroundLine::Hex, 2) => 8,
        (2, BackgroundLine::Rain, 3) => 8,
        (3, BackgroundLine::Spotlight, 3) => 5,
        (3, BackgroundLine::Mozart, 2) => 8,
        (4, BackgroundLine::Affinity, 1) => 5,
        (4, BackgroundLine::Arena, 1) => 2,
        (5, BackgroundLine::Token, 1) => 1,
        (5, BackgroundLine::Token, 2) => 1,
        (5, BackgroundLine::Encounter, 3) => 2,
        _ => 0,
    }
}

/// Base portrait tier probabilities per box type, for background tiers
/// 1..=5, in tenths of a percent. Keeping the table in tenths makes the
/// weighted computation below exact integer arithmetic.
fn base_background_tenths(box_type: BoxType) -> Result<[u64; 5]> {
    match box_type {
        // Virtual boxes skip the background tier draw entirely; there is no
        // weight table to normalize.
        BoxType::Virtual => Err(MintError::InvalidBoxType(box_type as u8)),
        BoxType::Bronze => Ok([800, 170, 23, 5, 2]),
        BoxType::Silver => Ok([610, 270, 90, 25, 5]),
        BoxType::Gold => Ok([240, 420, 220, 90, 30]),
        BoxType::Platinum => Ok([50, 150, 225, 400, 175]),
        BoxType::Diamond => Ok([20, 80, 150, 250, 500]),
    }
}

/// Cumulative background tier thresholds for a portrait of the given tier,
/// in basis points.
///
/// Derived, not stored: each candidate background tier `b` in 1..=5 is
/// weighted by its base probability times `|b - tier| + 1`, the weights are
/// normalized to percentages rounded to two decimals (half up), and the
/// rounded hundredths are accumulated into cumulative basis points with the
/// final threshold forced to 10000.
pub fn background_tier_chances(tier: u8, box_type: BoxType) -> Result<[u16; 5]> {
    if !(1..=MAX_TIER).contains(&tier) {
        return Err(MintError::InvalidTier(tier));
    }
    let tenths = base_background_tenths(box_type)?;

    let mut weights = [0u64; 5];
    let mut total = 0u64;
    for (i, weight) in weights.iter_mut().enumerate() {
        let background_tier = i as u64 + 1;
        let distance = background_tier.abs_diff(tier as u64);
        *weight = tenths[i] * (distance + 1);
        total += *weight;
    }

    // Share of each background tier in hundredths of a percent, rounded
    // half up, then accumulated. The last threshold is pinned to 10000 so
    // rounding drift can never leave a gap at the top of the range.
    let mut chances = [0u16; 5];
    let mut cumulative = 0u64;
    for (i, weight) in weights.iter().enumerate() {
        if i == 4 {
            chances[i] = MAX_TIER_CHANCE;
        } else {
            let hundredths = (weight * 10_000 * 2 + total) / (2 * total);
            cumulative += hundredths;
            chances[i] = cumulative as u16;
        }
    }
    Ok(chances)
}
