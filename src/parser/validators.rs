//! Delta-sign validator (stage 6) and swapper-economic-delta validator
//! (stage 7).
//!
//! Stage 6 requires one side of the swap to pay and the other to receive.
//! Stage 7 guards against pipeline ordering regressions so the invariants
//! at the output generator are provable.
use num_traits::Signed;

use crate::parser::types::{ AssetDelta, EraseReason };

/// Outcome of the sign check over the two active assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignValidation {
    Valid {
        positive_count: usize,
        negative_count: usize,
    },
    Invalid(EraseReason),
}

pub fn validate_delta_signs(assets: &[AssetDelta]) -> SignValidation {
    let negative_count = assets
        .iter()
        .filter(|a| a.delta.is_negative())
        .count();
    let positive_count = assets
        .iter()
        .filter(|a| a.delta.is_positive())
        .count();

    if negative_count == 0 {
        return SignValidation::Invalid(EraseReason::NoNegativeDeltas);
    }
    if positive_count == 0 {
        return SignValidation::Invalid(EraseReason::NoPositiveDeltas);
    }

    SignValidation::Valid { positive_count, negative_count }
}

/// The swapper must carry at least one active delta
pub fn validate_swapper_economic_delta(assets: &[AssetDelta]) -> Result<(), EraseReason> {
    if assets.is_empty() {
        return Err(EraseReason::SwapperNoDelta);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
