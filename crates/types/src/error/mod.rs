//! Core error types for the Illuvitars mint verifier.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while deriving mint results.
///
/// Every variant is a deterministic validation failure. There are no I/O
/// operations behind the derivation, so nothing here is retryable; a caller
/// seeing [`MintError::NoRandomNumber`] must wait for the randomness source
/// to resolve and submit the request again.
#[derive(Debug, Error)]
pub enum MintError {
    /// The request's random seed is still zero, i.e. the randomness source
    /// has not fulfilled it yet.
    #[error("No random number generated")]
    NoRandomNumber,
    /// A box type lookup was given a value outside the six known box tiers,
    /// or a probability table was requested for a box type it is not defined
    /// for (background tier chances do not exist for Virtual boxes).
    #[error("Invalid box type: {0}")]
    InvalidBoxType(u8),
    /// An accessory type conversion was given a value outside the five known
    /// accessory slots.
    #[error("Invalid accessory type: {0}")]
    InvalidAccessoryType(u8),
    /// A background line conversion was given a value outside the ten known
    /// lines.
    #[error("Invalid background line: {0}")]
    InvalidBackgroundLine(u8),
    /// A portrait tier outside 1..=5 was used to compute background tier
    /// chances.
    #[error("Portrait tier {0} has no background tier table")]
    InvalidTier(u8),
}

impl ErrorCode for MintError {
    fn code(&self) -> &'static str {
        match self {
            Self::NoRandomNumber => "MINT_NO_RANDOM_NUMBER",
            Self::InvalidBoxType(_) => "MINT_INVALID_BOX_TYPE",
            Self::InvalidAccessoryType(_) => "MINT_INVALID_ACCESSORY_TYPE",
            Self::InvalidBackgroundLine(_) => "MINT_INVALID_BACKGROUND_LINE",
            Self::InvalidTier(_) => "MINT_INVALID_TIER",
        }
    }
}
