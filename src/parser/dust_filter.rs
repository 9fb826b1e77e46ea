//! Dust filter (stage 4).
//!
//! Balance changes whose magnitude does not clear the per-decimals
//! threshold carry no economic signal and are removed before asset
//! collection.
use num_bigint::BigInt;
use num_traits::Signed;

use crate::constants::{ DUST_DECIMALS_CUTOFF, DUST_THRESHOLD_HIGH, DUST_THRESHOLD_LOW };
use crate::parser::types::BalanceChange;

/// Threshold a change must strictly exceed to survive
pub fn dust_threshold(decimals: u8) -> u64 {
    if decimals <= DUST_DECIMALS_CUTOFF {
        DUST_THRESHOLD_LOW
    } else {
        DUST_THRESHOLD_HIGH
    }
}

pub fn filter_dust(changes: &[BalanceChange]) -> Vec<BalanceChange> {
    changes
        .iter()
        .filter(|change| {
            change.effective_delta().abs() > BigInt::from(dust_threshold(change.decimals))
        })
        .cloned()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
