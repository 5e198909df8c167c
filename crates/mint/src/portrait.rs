//! Portrait attribute derivation.

use crate::seed::{div_mod_16, div_mod_8, next_item_seed};
use crate::tables;
use illuvitars_types::item::{BoxType, ExpressionType, FinishType, Portrait};
use illuvitars_types::request::PortraitMintParams;
use illuvitars_types::{Result, U256};

/// Selects the first tier whose cumulative threshold exceeds the roll.
///
/// Falls back to tier 0 if no threshold matches. With well-formed tables
/// ending at 10000 and rolls in `[0, 10000)` the fallback is unreachable,
/// but it is kept to match the on-chain scan exactly.
pub(crate) fn select_tier(chances: &[u16; tables::TIER_COUNT], chance: u16) -> u8 {
    for (tier, &threshold) in chances.iter().enumerate() {
        if chance < threshold {
            return tier as u8;
        }
    }
    0
}

/// Draws the background tier for a portrait of the given tier.
///
/// Virtual boxes have no background tier: the draw is skipped entirely and
/// the seed passes through unconsumed. Otherwise the roll is matched against
/// the computed distance-weighted thresholds, defaulting to background
/// tier 1.
fn background_tier(tier: u8, box_type: BoxType, rand: U256) -> Result<(U256, u8)> {
    if box_type == BoxType::Virtual {
        return Ok((rand, 0));
    }
    let (next, chance) = div_mod_16(rand, tables::MAX_TIER_CHANCE as u64);
    let chances = tables::background_tier_chances(tier, box_type)?;

    let mut background_tier = 1;
    for (k, &threshold) in chances.iter().enumerate() {
        if chance < threshold {
            background_tier = k as u8 + 1;
            break;
        }
    }
    Ok((next, background_tier))
}

fn expression(rand: U256) -> (U256, ExpressionType) {
    let (next, value) = div_mod_16(rand, tables::FULL_PERCENT as u64);

    let mut expression = ExpressionType::Normal;
    let variants = [
        ExpressionType::Normal,
        ExpressionType::ExpressionA,
        ExpressionType::ExpressionB,
    ];
    for (i, &threshold) in tables::EXPRESSION_PROBABILITY.iter().enumerate() {
        if value < threshold {
            expression = variants[i];
            break;
        }
    }
    (next, expression)
}

fn finish(rand: U256, box_type: BoxType) -> (U256, FinishType) {
    let (next, value) = div_mod_16(rand, tables::FULL_PERCENT as u64);
    let finish = if value <= tables::holo_probability(box_type) {
        FinishType::Holo
    } else {
        FinishType::Normal
    };
    (next, finish)
}

/// Derives one portrait from the running seed.
///
/// Returns the portrait, the seed for the next item, and the next token id.
/// The next seed is the re-hash of `rand` as passed in, not of the quotient
/// left over after the rolls, so items stay independent of how many rolls
/// each one consumed.
pub fn derive_portrait(
    rand: U256,
    param: &PortraitMintParams,
    token_id: U256,
) -> Result<(Portrait, U256, U256)> {
    let (consumed, chance) = div_mod_16(rand, tables::MAX_TIER_CHANCE as u64);
    let tier = select_tier(&tables::portrait_tier_chances(param.box_type), chance);

    let (consumed, illuvial) =
        div_mod_8(consumed, tables::ILLUVIAL_COUNTS[tier as usize] as u64);

    let (consumed, background_tier) = background_tier(tier, param.box_type, consumed)?;

    let lines = tables::background_lines(background_tier);
    let (consumed, line_index) = div_mod_8(consumed, (lines.len() & 0xFF) as u64);
    let background_line = lines[line_index as usize];

    let stages = tables::background_stages(background_tier, background_line);
    let (consumed, stage_index) = div_mod_8(consumed, (stages.len() & 0xFF) as u64);
    let background_stage = stages[stage_index as usize];

    let variations =
        tables::background_variations(background_tier, background_line, background_stage);
    let (consumed, background_variation) = div_mod_8(consumed, variations as u64);

    let (consumed, expression) = expression(consumed);
    // The finish roll consumes the quotient left after the expression roll;
    // its own quotient is discarded.
    let (_, finish) = finish(consumed, param.box_type);

    let portrait = Portrait {
        token_id,
        box_type: param.box_type,
        tier,
        illuvial,
        background_tier,
        background_line,
        background_stage,
        background_variation,
        expression,
        finish,
    };

    let next_token_id = token_id + U256::from(tables::PORTRAIT_TOKEN_STRIDE);
    Ok((portrait, next_item_seed(rand), next_token_id))
}

/// Derives all portraits of a request, expanding each param by its amount in
/// array order.
///
/// Returns the portraits and the seed state left for accessory derivation.
pub fn derive_portraits(
    seed: U256,
    params: &[PortraitMintParams],
    start_token_id: U256,
) -> Result<(Vec<Portrait>, U256)> {
    let total: u64 = params.iter().map(|p| p.amount).sum();
    let mut portraits = Vec::with_capacity(total as usize);

    let mut rand = seed;
    let mut token_id = start_token_id;
    for param in params {
        for _ in 0..param.amount {
            let (portrait, next_rand, next_token_id) = derive_portrait(rand, param, token_id)?;
            portraits.push(portrait);
            rand = next_rand;
            token_id = next_token_id;
        }
    }
    Ok((portraits, rand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use illuvitars_types::item::BackgroundLine;

    #[test]
    fn virtual_portraits_are_tier_zero_with_no_background_tier() {
        let param = PortraitMintParams {
            box_type: BoxType::Virtual,
            amount: 1,
        };
        let (portrait, next_rand, next_token_id) =
            derive_portrait(U256::from(3), &param, U256::from(100)).unwrap();

        assert_eq!(portrait.tier, 0);
        assert_eq!(portrait.illuvial, 0);
        assert_eq!(portrait.background_tier, 0);
        assert_eq!(portrait.background_line, BackgroundLine::Dots);
        assert_eq!(portrait.background_stage, 1);
        assert_eq!(portrait.background_variation, 0);
        assert_eq!(portrait.expression, ExpressionType::Normal);
        // Roll value 0 is within the holo threshold.
        assert_eq!(portrait.finish, FinishType::Holo);
        assert_eq!(next_token_id, U256::from(106));
        assert_eq!(next_rand, next_item_seed(U256::from(3)));
    }

    #[test]
    fn bronze_portrait_matches_reference_derivation() {
        // Seed keccak256(abi.encode(1, 1)), replayed through the original
        // TypeScript verifier.
        let seed = next_item_seed(U256::one());
        let param = PortraitMintParams {
            box_type: BoxType::Bronze,
            amount: 1,
        };
        let (portrait, _, _) = derive_portrait(seed, &param, U256::zero()).unwrap();

        assert_eq!(portrait.tier, 1);
        assert_eq!(portrait.illuvial, 3);
        assert_eq!(portrait.background_tier, 3);
        assert_eq!(portrait.background_line, BackgroundLine::Spotlight);
        assert_eq!(portrait.background_stage, 3);
        assert_eq!(portrait.background_variation, 1);
        assert_eq!(portrait.expression, ExpressionType::Normal);
        assert_eq!(portrait.finish, FinishType::Normal);
    }

    #[test]
    fn token_ids_advance_by_the_portrait_stride() {
        let params = [PortraitMintParams {
            box_type: BoxType::Silver,
            amount: 4,
        }];
        let (portraits, _) =
            derive_portraits(next_item_seed(U256::from(42)), &params, U256::from(10)).unwrap();

        let ids: Vec<U256> = portraits.iter().map(|p| p.token_id).collect();
        assert_eq!(
            ids,
            vec![
                U256::from(10),
                U256::from(16),
                U256::from(22),
                U256::from(28)
            ]
        );
    }

    #[test]
    fn tier_scan_defaults_to_zero_when_no_threshold_matches() {
        // Unreachable with well-formed tables; documents the fallback.
        assert_eq!(select_tier(&[0, 0, 0, 0, 0, 0], 9_999), 0);
        assert_eq!(select_tier(&portrait_chances_for_test(), 0), 1);
    }

    fn portrait_chances_for_test() -> [u16; tables::TIER_COUNT] {
        tables::portrait_tier_chances(BoxType::Bronze)
    }
}
