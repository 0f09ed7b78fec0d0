//! Syntactic validation of Solana wallet addresses.
//!
//! Only the textual shape is checked: length and the base58 alphabet. The
//! address is never decoded, so a well-formed string that is not a valid
//! curve point still passes.

use crate::error::CoreError;

/// Base58 alphabet: alphanumerics without `0`, `O`, `I` and `l`.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub const MIN_ADDRESS_LEN: usize = 32;
pub const MAX_ADDRESS_LEN: usize = 44;

/// Check that `address` looks like a base58-encoded Solana public key.
pub fn validate(address: &str) -> Result<(), CoreError> {
    if address.is_empty() {
        return Err(CoreError::InvalidAddress(
            "Address cannot be empty".to_string(),
        ));
    }

    // Counted in chars so multi-byte input reports the length a user sees.
    let len = address.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return Err(CoreError::InvalidAddress(format!(
            "Invalid Solana address. Address must be {MIN_ADDRESS_LEN}-{MAX_ADDRESS_LEN} characters, got {len}"
        )));
    }

    if !address.chars().all(is_base58_char) {
        return Err(CoreError::InvalidAddress(
            "Invalid Solana address: contains non-base58 characters".to_string(),
        ));
    }

    Ok(())
}

fn is_base58_char(c: char) -> bool {
    BASE58_ALPHABET.contains(c)
}
