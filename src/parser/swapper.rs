//! Swapper identifier (stage 3).
//!
//! Picks exactly one owner as the party executing the swap. Three tiers,
//! strongest signal first: the fee payer, then a lone economically-active
//! signer, then the owner moving the most value. System and router
//! accounts never qualify.
use num_bigint::BigInt;
use num_traits::Zero;

use crate::config::ParserSettings;
use crate::constants::SYSTEM_OWNER_SUFFIXES;
use crate::parser::types::{
    BalanceChange,
    EraseReason,
    SwapperInfo,
    SwapperMethod,
    SwapperResult,
    TransactionMeta,
};

const FEE_PAYER_CONFIDENCE: u8 = 95;
const TIER2_CONFIDENCE: u8 = 90;
const LARGEST_DELTA_CONFIDENCE: u8 = 70;

pub fn identify_swapper(
    changes: &[BalanceChange],
    meta: &TransactionMeta,
    settings: &ParserSettings
) -> SwapperResult {
    // Tier 1: the fee payer moved value
    let fee_payer = meta.fee_payer.as_str();
    if !settings.is_system_account(fee_payer) && owner_has_nonzero_delta(changes, fee_payer) {
        return SwapperResult::Success(SwapperInfo {
            swapper: fee_payer.to_string(),
            confidence: FEE_PAYER_CONFIDENCE,
            method: SwapperMethod::FeePayer,
        });
    }

    // Tier 2: exactly one non-system signer moved value
    let mut active_signers: Vec<&str> = Vec::new();
    for signer in &meta.signers {
        if settings.is_system_account(signer) {
            continue;
        }
        if !owner_has_nonzero_delta(changes, signer) {
            continue;
        }
        if !active_signers.contains(&signer.as_str()) {
            active_signers.push(signer);
        }
    }
    if active_signers.len() == 1 {
        return SwapperResult::Success(SwapperInfo {
            swapper: active_signers[0].to_string(),
            confidence: TIER2_CONFIDENCE,
            method: SwapperMethod::Tier2,
        });
    }

    // Tier 3: largest normalized absolute delta across eligible owners
    let totals = eligible_owner_totals(changes, settings);
    let max_total = totals
        .iter()
        .map(|(_, total)| total)
        .max()
        .cloned();

    let max_total = match max_total {
        Some(total) if !total.is_zero() => total,
        _ => {
            return SwapperResult::Erase(EraseReason::NoEconomicDelta);
        }
    };

    let winners: Vec<&str> = totals
        .iter()
        .filter(|(_, total)| *total == max_total)
        .map(|(owner, _)| owner.as_str())
        .collect();

    if winners.len() == 1 {
        return SwapperResult::Success(SwapperInfo {
            swapper: winners[0].to_string(),
            confidence: LARGEST_DELTA_CONFIDENCE,
            method: SwapperMethod::LargestDelta,
        });
    }

    // A tie has no fee-payer fallback: an eligible fee payer with any
    // non-zero delta already returned at tier 1, and a system fee payer
    // may never be the swapper
    SwapperResult::Erase(EraseReason::NoEconomicDelta)
}

fn owner_has_nonzero_delta(changes: &[BalanceChange], owner: &str) -> bool {
    changes.iter().any(|c| c.owner == owner && !c.effective_delta().is_zero())
}

/// Owners ending in `vault` or `pool` hold pool-side liquidity, not the
/// swapper's wallet
fn has_system_suffix(owner: &str) -> bool {
    SYSTEM_OWNER_SUFFIXES.iter().any(|suffix| owner.ends_with(suffix))
}

/// Per-owner sums of |delta| scaled to a common number of decimals, in
/// first-seen owner order
fn eligible_owner_totals(
    changes: &[BalanceChange],
    settings: &ParserSettings
) -> Vec<(String, BigInt)> {
    let mut totals: Vec<(String, BigInt)> = Vec::new();

    for change in changes {
        if settings.is_system_account(&change.owner) || has_system_suffix(&change.owner) {
            continue;
        }
        let contribution = change.normalized_magnitude();
        match totals.iter_mut().find(|(owner, _)| owner == &change.owner) {
            Some((_, total)) => {
                *total += contribution;
            }
            None => totals.push((change.owner.clone(), contribution)),
        }
    }

    totals
}

// =============================================================================
// Tests
// =============================================================================
