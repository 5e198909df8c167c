//! Immutable X minting blob formatting.
//!
//! Layer-2 mints carry the on-chain metadata as a packed string blob. The
//! formats here must match the contract's byte-for-byte, since the blob is
//! what the L2 mint commits to.

use illuvitars_types::item::{Accessory, AccessoryType, BoxType};
use illuvitars_types::U256;

/// Formats a portrait minting blob:
/// `{tokenId}:{<box><tier>,<skin>,<body>,<eye>,<head>,<props>}`.
///
/// The accessory ids are the token ids of the layers bound to the portrait,
/// zero where a slot is empty.
#[allow(clippy::too_many_arguments)]
pub fn portrait_minting_blob(
    token_id: U256,
    box_type: BoxType,
    tier: u8,
    skin_id: U256,
    body_id: U256,
    eye_id: U256,
    head_id: U256,
    props_id: U256,
) -> String {
    format!(
        "{{{token_id}}}:{{{}{tier},{skin_id},{body_id},{eye_id},{head_id},{props_id}}}",
        box_type as u8
    )
}

/// Formats an accessory minting blob: `{tokenId}:{<box><tier><slot>}`.
pub fn accessory_minting_blob(
    token_id: U256,
    box_type: BoxType,
    tier: u8,
    accessory_type: AccessoryType,
) -> String {
    format!(
        "{{{token_id}}}:{{{}{tier}{}}}",
        box_type as u8, accessory_type as u8
    )
}

/// Convenience wrapper building the blob straight from a derived accessory.
pub fn accessory_blob(accessory: &Accessory) -> String {
    accessory_minting_blob(
        accessory.token_id,
        accessory.box_type,
        accessory.tier,
        accessory.accessory_type,
    )
}
