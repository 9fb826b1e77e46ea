//! Asset-delta collector (stage 5).
//!
//! Restricts the batch to the swapper's movements, folds them into one
//! delta per mint, and reduces the result to exactly two active assets.
//! Multi-hop routes leave intermediate legs behind; the collapse keeps the
//! extremes of the signed ordering and drops the rest.
use num_traits::{ Signed, Zero };
use std::cmp::Ordering;

use crate::parser::types::{ AssetDelta, AssetRole, BalanceChange, EraseReason };

#[derive(Debug, Clone, PartialEq)]
pub enum CollectorResult {
    Collected {
        assets: Vec<AssetDelta>,
        collapsed: bool,
    },
    Erase(EraseReason),
}

pub fn collect_asset_deltas(changes: &[BalanceChange], swapper: &str) -> CollectorResult {
    // One AssetDelta per mint, first-seen order
    let mut deltas: Vec<AssetDelta> = Vec::new();
    for change in changes.iter().filter(|c| c.owner == swapper) {
        let delta = change.effective_delta();
        match deltas.iter_mut().find(|d| d.mint == change.mint) {
            Some(existing) => {
                existing.delta += delta;
            }
            None =>
                deltas.push(AssetDelta {
                    mint: change.mint.clone(),
                    owner: swapper.to_string(),
                    decimals: change.decimals,
                    delta,
                    role: AssetRole::Intermediate,
                }),
        }
    }
    // Merged legs that cancel out carry no signal
    deltas.retain(|d| !d.delta.is_zero());

    if deltas.len() < 2 {
        return CollectorResult::Erase(EraseReason::InvalidAssetCount);
    }

    if deltas.len() == 2 {
        let mut pair = deltas;
        assign_pair_roles(&mut pair);
        return CollectorResult::Collected { assets: pair, collapsed: false };
    }

    // Collapse: most negative becomes the entry, most positive the exit.
    // Strict comparisons keep the first-encountered winner on ties.
    let mut entry_idx = 0;
    let mut exit_idx = 0;
    for idx in 1..deltas.len() {
        if cmp_normalized(&deltas[idx], &deltas[entry_idx]) == Ordering::Less {
            entry_idx = idx;
        }
        if cmp_normalized(&deltas[idx], &deltas[exit_idx]) == Ordering::Greater {
            exit_idx = idx;
        }
    }
    if entry_idx == exit_idx {
        // Every candidate compares equal; take the next one for the exit side
        exit_idx = if entry_idx == 0 { 1 } else { 0 };
    }

    let mut entry = deltas[entry_idx].clone();
    let mut exit = deltas[exit_idx].clone();
    entry.role = AssetRole::Entry;
    exit.role = AssetRole::Exit;

    CollectorResult::Collected { assets: vec![entry, exit], collapsed: true }
}

/// Exact cross-decimal comparison: `a.delta * b.scale` vs `b.delta * a.scale`
fn cmp_normalized(a: &AssetDelta, b: &AssetDelta) -> Ordering {
    (&a.delta * b.scale()).cmp(&(&b.delta * a.scale()))
}

fn assign_pair_roles(pair: &mut [AssetDelta]) {
    if pair[0].delta.is_negative() && pair[1].delta.is_positive() {
        pair[0].role = AssetRole::Entry;
        pair[1].role = AssetRole::Exit;
    } else if pair[0].delta.is_positive() && pair[1].delta.is_negative() {
        pair[0].role = AssetRole::Exit;
        pair[1].role = AssetRole::Entry;
    } else {
        // Same sign: tentative roles, the sign validator rejects next
        pair[0].role = AssetRole::Entry;
        pair[1].role = AssetRole::Exit;
    }
}

// =============================================================================
// Tests
// =============================================================================
