//! Box price tables and purchase cost accumulation.
//!
//! Prices are fixed constants per box type, denominated in wei. Virtual
//! boxes are free. These mirror the deployment configuration; the oracle
//! that converts the ether price into other settlement currencies is an
//! external collaborator and not modeled here.

use illuvitars_types::item::BoxType;
use illuvitars_types::request::MintRequest;
use illuvitars_types::U256;

/// One hundredth of an ether, in wei.
pub const CENTIETHER: u64 = 10_000_000_000_000_000;

fn centiethers(cents: u64) -> U256 {
    U256::from(cents) * U256::from(CENTIETHER)
}

/// Price of a single portrait box, in wei.
pub fn portrait_price(box_type: BoxType) -> U256 {
    match box_type {
        BoxType::Virtual => U256::zero(),
        BoxType::Bronze => centiethers(5),
        BoxType::Silver => centiethers(10),
        BoxType::Gold => centiethers(25),
        BoxType::Platinum => centiethers(75),
        BoxType::Diamond => centiethers(250),
    }
}

/// Prices of a single accessory box, in wei.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessoryPrices {
    /// Price when the slot is randomized too (full random).
    pub random_price: U256,
    /// Price when the buyer fixes the slot (semi random).
    pub semi_random_price: U256,
}

/// Accessory box prices for a box type, in wei.
pub fn accessory_prices(box_type: BoxType) -> AccessoryPrices {
    let (random, semi_random) = match box_type {
        BoxType::Virtual => (0, 0),
        BoxType::Bronze => (5, 10),
        BoxType::Silver => (10, 20),
        BoxType::Gold => (15, 30),
        BoxType::Platinum => (20, 40),
        BoxType::Diamond => (25, 50),
    };
    AccessoryPrices {
        random_price: centiethers(random),
        semi_random_price: centiethers(semi_random),
    }
}

/// Total ether price of a request's purchases, in wei.
pub fn purchase_price(request: &MintRequest) -> U256 {
    let mut total = U256::zero();
    for param in &request.portrait_mint_params {
        total += U256::from(param.amount) * portrait_price(param.box_type);
    }
    for param in &request.accessory_semi_random_mint_params {
        total += U256::from(param.amount) * accessory_prices(param.box_type).semi_random_price;
    }
    for param in &request.accessory_full_random_mint_params {
        total += U256::from(param.amount) * accessory_prices(param.box_type).random_price;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use illuvitars_types::item::AccessoryType;
    use illuvitars_types::request::{
        AccessoryFullRandomMintParams, AccessorySemiRandomMintParams, PortraitMintParams,
    };

    #[test]
    fn virtual_boxes_are_free() {
        assert!(portrait_price(BoxType::Virtual).is_zero());
        let prices = accessory_prices(BoxType::Virtual);
        assert!(prices.random_price.is_zero());
        assert!(prices.semi_random_price.is_zero());
    }

    #[test]
    fn diamond_portrait_costs_two_and_a_half_ether() {
        let ether = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(
            portrait_price(BoxType::Diamond),
            ether * U256::from(25u64) / U256::from(10u64)
        );
    }

    #[test]
    fn purchase_price_accumulates_over_all_params() {
        let request = MintRequest {
            requester: "0x0000000000000000000000000000000000000001".into(),
            portrait_mint_params: vec![PortraitMintParams {
                box_type: BoxType::Bronze,
                amount: 2,
            }],
            accessory_semi_random_mint_params: vec![AccessorySemiRandomMintParams {
                accessory_type: AccessoryType::Skin,
                box_type: BoxType::Gold,
                amount: 1,
            }],
            accessory_full_random_mint_params: vec![AccessoryFullRandomMintParams {
                box_type: BoxType::Silver,
                amount: 3,
            }],
            random_number: U256::one(),
            portrait_start_token_id: U256::one(),
            accessory_start_token_id: U256::one(),
        };
        // 2 * 0.05 + 1 * 0.30 + 3 * 0.10 ether = 0.70 ether.
        let expected = U256::from(70u64) * U256::from(CENTIETHER);
        assert_eq!(purchase_price(&request), expected);
    }
}
