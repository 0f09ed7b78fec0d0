//! Unit and timestamp conversions between raw RPC values and the API model.

use time::OffsetDateTime;

use crate::error::CoreError;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places kept when presenting SOL amounts.
pub const SOL_DECIMALS: i32 = 9;

// ==============================================================================
// Amounts
// ==============================================================================

/// Convert lamports to SOL. No rounding is applied here.
#[must_use]
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Round a SOL amount to lamport precision for presentation.
#[must_use]
pub fn round_sol(sol: f64) -> f64 {
    let scale = 10f64.powi(SOL_DECIMALS);
    (sol * scale).round() / scale
}

// ==============================================================================
// Timestamps
// ==============================================================================

/// Convert an optional unix timestamp (seconds) into a UTC datetime.
///
/// Absence is propagated; callers that need a concrete value substitute
/// [`OffsetDateTime::UNIX_EPOCH`] themselves.
pub fn timestamp_to_datetime(seconds: Option<i64>) -> Result<Option<OffsetDateTime>, CoreError> {
    seconds
        .map(|s| OffsetDateTime::from_unix_timestamp(s).map_err(|_| CoreError::InvalidTimestamp(s)))
        .transpose()
}
