//! Hybrid recovery.
//!
//! Routed swaps sometimes leave the fee payer with only one visible leg:
//! the non-core token moved in or out of the wallet, while the core
//! counter-leg settled against a pool account. When identification or
//! collection would erase such a transaction, this stage rebuilds the
//! missing leg from the opposing core movement and promotes the fee payer
//! to swapper. It is the only path on which a transaction with a single
//! swapper-owned non-core delta can succeed.
use num_traits::{ Signed, Zero };
use std::cmp::Ordering;

use crate::config::ParserSettings;
use crate::parser::types::{
    AssetDelta,
    AssetRole,
    BalanceChange,
    SwapperInfo,
    SwapperMethod,
    TransactionMeta,
};

const RECOVERY_CONFIDENCE: u8 = 95;

/// Attempts the recovery. `identified` carries the identifier's result when
/// identification succeeded but collection failed.
pub fn attempt_recovery(
    changes: &[BalanceChange],
    meta: &TransactionMeta,
    identified: Option<&SwapperInfo>,
    settings: &ParserSettings
) -> Option<(SwapperInfo, Vec<AssetDelta>)> {
    let fee_payer = meta.fee_payer.as_str();
    if settings.is_system_account(fee_payer) {
        return None;
    }

    // Exactly one non-core movement in the whole batch, owned by the fee payer
    let mut non_core_iter = changes
        .iter()
        .filter(|c| !settings.is_core_token(&c.mint) && !c.effective_delta().is_zero());
    let non_core = non_core_iter.next()?;
    if non_core_iter.next().is_some() || non_core.owner != fee_payer {
        return None;
    }

    let non_core_delta = non_core.effective_delta();

    // The opposing core leg: same sign, different owner, largest normalized
    // magnitude wins, first-encountered on ties
    let counterpart = changes
        .iter()
        .filter(|c| settings.is_core_token(&c.mint) && c.owner != fee_payer)
        .filter(|c| {
            let delta = c.effective_delta();
            !delta.is_zero() && delta.is_positive() == non_core_delta.is_positive()
        })
        .reduce(|best, candidate| {
            match candidate.normalized_magnitude().cmp(&best.normalized_magnitude()) {
                Ordering::Greater => candidate,
                _ => best,
            }
        })?;

    let swapper = match identified {
        Some(info) if info.swapper == fee_payer => info.clone(),
        _ =>
            SwapperInfo {
                swapper: fee_payer.to_string(),
                confidence: RECOVERY_CONFIDENCE,
                method: SwapperMethod::FeePayer,
            },
    };

    let kept = AssetDelta {
        mint: non_core.mint.clone(),
        owner: fee_payer.to_string(),
        decimals: non_core.decimals,
        delta: non_core_delta.clone(),
        role: if non_core_delta.is_negative() {
            AssetRole::Entry
        } else {
            AssetRole::Exit
        },
    };
    let synthetic = AssetDelta {
        mint: counterpart.mint.clone(),
        owner: fee_payer.to_string(),
        decimals: counterpart.decimals,
        delta: -counterpart.effective_delta(),
        role: if non_core_delta.is_negative() {
            AssetRole::Exit
        } else {
            AssetRole::Entry
        },
    };

    // Entry first
    let assets = if kept.role == AssetRole::Entry {
        vec![kept, synthetic]
    } else {
        vec![synthetic, kept]
    };

    Some((swapper, assets))
}

// =============================================================================
// Tests
// =============================================================================
