//! SOL-variant normalizer (stage 1).
//!
//! Wrapped and native SOL entries are the same economic asset; this stage
//! folds every SOL-family balance change into at most one canonical SOL
//! entry per owner. Owners whose SOL-family deltas cancel to zero get no
//! entry at all.
use num_bigint::BigInt;
use num_traits::Zero;

use crate::constants::{ is_sol_equivalent, SOL_DECIMALS, SOL_MINT };
use crate::parser::types::BalanceChange;

/// Merges SOL-family changes per owner. Non-SOL changes pass through in
/// input order; merged SOL entries follow in first-seen-owner order.
pub fn normalize_sol_variants(changes: &[BalanceChange]) -> Vec<BalanceChange> {
    let mut normalized: Vec<BalanceChange> = Vec::with_capacity(changes.len());
    // Vec, not a map: first-seen owner order must survive
    let mut sol_totals: Vec<(String, BigInt)> = Vec::new();

    for change in changes {
        if is_sol_equivalent(&change.mint) {
            let delta = change.effective_delta();
            match sol_totals.iter_mut().find(|(owner, _)| owner == &change.owner) {
                Some((_, total)) => {
                    *total += delta;
                }
                None => sol_totals.push((change.owner.clone(), delta)),
            }
        } else {
            normalized.push(change.clone());
        }
    }

    for (owner, total) in sol_totals {
        if total.is_zero() {
            continue;
        }
        normalized.push(BalanceChange {
            mint: SOL_MINT.to_string(),
            owner,
            pre_delta: BigInt::zero(),
            post_delta: total,
            decimals: SOL_DECIMALS,
        });
    }

    normalized
}

// =============================================================================
// Tests
// =============================================================================
