//! Top-level mint result derivation.

use crate::accessory::derive_accessories;
use crate::portrait::derive_portraits;
use illuvitars_types::error::MintError;
use illuvitars_types::request::{MintRequest, MintResult};
use illuvitars_types::Result;

/// Derives the full mint result for a request whose seed has been resolved.
///
/// Portraits are derived first, consuming the seed chain; the seed state
/// they leave behind feeds accessory derivation. If the request minted no
/// portraits, accessories start from the original seed. Any error aborts the
/// whole derivation; partial results are never returned.
///
/// # Errors
///
/// Returns [`MintError::NoRandomNumber`] while the request's seed is still
/// zero, i.e. the randomness source has not fulfilled it yet.
pub fn derive_mint_result(request: &MintRequest) -> Result<MintResult> {
    if request.random_number.is_zero() {
        return Err(MintError::NoRandomNumber);
    }
    let seed = request.random_number;

    let mut rand = seed;
    let mut portraits = Vec::new();
    if !request.portrait_mint_params.is_empty() {
        let (derived, next_rand) = derive_portraits(
            rand,
            &request.portrait_mint_params,
            request.portrait_start_token_id,
        )?;
        portraits = derived;
        rand = next_rand;
    }

    let mut accessories = Vec::new();
    if !request.accessory_semi_random_mint_params.is_empty()
        || !request.accessory_full_random_mint_params.is_empty()
    {
        accessories = derive_accessories(
            rand,
            &request.accessory_semi_random_mint_params,
            &request.accessory_full_random_mint_params,
            request.accessory_start_token_id,
        )?;
    }

    log::debug!(
        "derived {} portraits and {} accessories for {}",
        portraits.len(),
        accessories.len(),
        request.requester
    );

    Ok(MintResult {
        requester: request.requester.clone(),
        seed,
        portraits,
        accessories,
    })
}
