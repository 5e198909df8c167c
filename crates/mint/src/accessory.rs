//! Accessory attribute derivation.

use crate::portrait::select_tier;
use crate::seed::{div_mod_16, next_item_seed};
use crate::tables;
use illuvitars_types::item::{Accessory, AccessoryType};
use illuvitars_types::request::{AccessoryFullRandomMintParams, AccessorySemiRandomMintParams};
use illuvitars_types::{Result, U256};

fn accessory_stage(rand: U256) -> (U256, u8) {
    let (next, value) = div_mod_16(rand, tables::FULL_PERCENT as u64);

    let mut stage = 0;
    for (i, &threshold) in tables::STAGE_PROBABILITY.iter().enumerate() {
        if value < threshold {
            stage = i as u8 + 1;
            break;
        }
    }
    (next, stage)
}

/// Derives one semi-random accessory: the slot is fixed by the buyer, only
/// tier and stage are rolled.
pub fn derive_semi_random_accessory(
    rand: U256,
    param: &AccessorySemiRandomMintParams,
    token_id: U256,
) -> (Accessory, U256, U256) {
    let (consumed, chance) = div_mod_16(rand, tables::MAX_TIER_CHANCE as u64);
    let tier = select_tier(&tables::accessory_tier_chances(param.box_type), chance);
    let (_, stage) = accessory_stage(consumed);

    let accessory = Accessory {
        token_id,
        box_type: param.box_type,
        accessory_type: param.accessory_type,
        tier,
        stage,
    };
    (accessory, next_item_seed(rand), token_id + U256::one())
}

/// Derives one full-random accessory: the slot is rolled as well.
///
/// The slot is the tier roll's quotient taken mod 5, and the stage roll then
/// consumes that same quotient. The two fields therefore share one division's
/// output rather than using independent rolls; this correlation is preserved
/// as-is for bit-compatibility with minted results.
pub fn derive_full_random_accessory(
    rand: U256,
    param: &AccessoryFullRandomMintParams,
    token_id: U256,
) -> (Accessory, U256, U256) {
    let (consumed, chance) = div_mod_16(rand, tables::MAX_TIER_CHANCE as u64);
    let slot = ((consumed % U256::from(5u64)).low_u64() & 0xFF) as usize;
    let accessory_type = AccessoryType::ALL[slot];

    let tier = select_tier(&tables::accessory_tier_chances(param.box_type), chance);
    let (_, stage) = accessory_stage(consumed);

    let accessory = Accessory {
        token_id,
        box_type: param.box_type,
        accessory_type,
        tier,
        stage,
    };
    (accessory, next_item_seed(rand), token_id + U256::one())
}

/// Derives all accessories of a request.
///
/// Semi-random entries are processed before full-random entries regardless
/// of how the caller ordered the request; within each category params run in
/// array order, expanded by amount.
pub fn derive_accessories(
    seed: U256,
    semi_random_params: &[AccessorySemiRandomMintParams],
    full_random_params: &[AccessoryFullRandomMintParams],
    start_token_id: U256,
) -> Result<Vec<Accessory>> {
    let semi_total: u64 = semi_random_params.iter().map(|p| p.amount).sum();
    let full_total: u64 = full_random_params.iter().map(|p| p.amount).sum();
    let mut accessories = Vec::with_capacity((semi_total + full_total) as usize);

    let mut rand = seed;
    let mut token_id = start_token_id;
    for param in semi_random_params {
        for _ in 0..param.amount {
            let (accessory, next_rand, next_token_id) =
                derive_semi_random_accessory(rand, param, token_id);
            accessories.push(accessory);
            rand = next_rand;
            token_id = next_token_id;
        }
    }
    for param in full_random_params {
        for _ in 0..param.amount {
            let (accessory, next_rand, next_token_id) =
                derive_full_random_accessory(rand, param, token_id);
            accessories.push(accessory);
            rand = next_rand;
            token_id = next_token_id;
        }
    }
    Ok(accessories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use illuvitars_types::item::BoxType;

    #[test]
    fn semi_random_accessory_matches_reference_derivation() {
        // Seed keccak256(abi.encode(2, 2)), replayed through the original
        // TypeScript verifier.
        let seed = next_item_seed(U256::from(2));
        let param = AccessorySemiRandomMintParams {
            accessory_type: AccessoryType::Skin,
            box_type: BoxType::Diamond,
            amount: 1,
        };
        let (accessory, next_rand, next_token_id) =
            derive_semi_random_accessory(seed, &param, U256::from(7));

        assert_eq!(accessory.token_id, U256::from(7));
        assert_eq!(accessory.accessory_type, AccessoryType::Skin);
        assert_eq!(accessory.tier, 5);
        assert_eq!(accessory.stage, 3);
        assert_eq!(next_rand, next_item_seed(seed));
        assert_eq!(next_token_id, U256::from(8));
    }

    #[test]
    fn full_random_accessory_matches_reference_derivation() {
        let seed = next_item_seed(U256::from(2));
        let param = AccessoryFullRandomMintParams {
            box_type: BoxType::Platinum,
            amount: 1,
        };
        let (accessory, _, _) = derive_full_random_accessory(seed, &param, U256::from(9));

        assert_eq!(accessory.accessory_type, AccessoryType::Props);
        assert_eq!(accessory.tier, 5);
        assert_eq!(accessory.stage, 3);
    }

    #[test]
    fn semi_random_entries_come_before_full_random() {
        let semi = [AccessorySemiRandomMintParams {
            accessory_type: AccessoryType::EyeWear,
            box_type: BoxType::Gold,
            amount: 2,
        }];
        let full = [AccessoryFullRandomMintParams {
            box_type: BoxType::Silver,
            amount: 1,
        }];
        let accessories =
            derive_accessories(next_item_seed(U256::from(9)), &semi, &full, U256::one()).unwrap();

        assert_eq!(accessories.len(), 3);
        assert_eq!(accessories[0].accessory_type, AccessoryType::EyeWear);
        assert_eq!(accessories[0].box_type, BoxType::Gold);
        assert_eq!(accessories[1].accessory_type, AccessoryType::EyeWear);
        assert_eq!(accessories[1].box_type, BoxType::Gold);
        assert_eq!(accessories[2].box_type, BoxType::Silver);

        let ids: Vec<U256> = accessories.iter().map(|a| a.token_id).collect();
        assert_eq!(ids, vec![U256::from(1), U256::from(2), U256::from(3)]);
    }

    #[test]
    fn stage_thresholds_cover_the_whole_range() {
        // Any roll in [0, 100) lands on a stage in 1..=3.
        for value in [0u64, 44, 45, 79, 80, 99] {
            // Build a seed whose first percentage roll is `value`: the tier
            // roll consumes mod 10000 first, so multiply back up.
            let rand = U256::from(value) * U256::from(10_000u64);
            let param = AccessorySemiRandomMintParams {
                accessory_type: AccessoryType::Body,
                box_type: BoxType::Bronze,
                amount: 1,
            };
            let (accessory, _, _) = derive_semi_random_accessory(rand, &param, U256::zero());
            assert!((1..=3).contains(&accessory.stage), "roll {value}");
        }
    }
}
