//! Rent-refund filter (stage 2).
//!
//! Closing a token account refunds its rent lamports, which shows up as a
//! small positive SOL delta next to the real swap legs. Those credits are
//! dropped whenever the batch carries any non-SOL activity. Negative SOL
//! never drops.
use num_bigint::BigInt;
use num_traits::{ Signed, Zero };

use crate::constants::{ is_sol_equivalent, RENT_THRESHOLD };
use crate::parser::types::BalanceChange;

/// Result of the rent-refund pass
#[derive(Debug, Clone)]
pub struct RentFilterOutcome {
    pub changes: Vec<BalanceChange>,
    pub rent_refunds_filtered: bool,
}

pub fn filter_rent_refunds(changes: &[BalanceChange]) -> RentFilterOutcome {
    // Global to the batch, not per owner
    let has_token_activity = changes
        .iter()
        .any(|c| !is_sol_equivalent(&c.mint) && !c.effective_delta().is_zero());

    let threshold = BigInt::from(RENT_THRESHOLD);
    let mut kept: Vec<BalanceChange> = Vec::with_capacity(changes.len());
    let mut dropped_any = false;

    for change in changes {
        if !is_sol_equivalent(&change.mint) {
            kept.push(change.clone());
            continue;
        }

        let delta = change.effective_delta();
        if delta.is_positive() && delta < threshold && has_token_activity {
            dropped_any = true;
            continue;
        }

        kept.push(change.clone());
    }

    RentFilterOutcome {
        changes: kept,
        rent_refunds_filtered: dropped_any,
    }
}

// =============================================================================
// Tests
// =============================================================================
