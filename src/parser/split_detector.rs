//! Split-swap detector (stage 9).
//!
//! A swap whose entry and exit are both non-core tokens has no core leg to
//! quote against and is emitted as a sell/buy record pair instead. Shape
//! violations here are programmer errors, not transaction defects.
use num_traits::Signed;

use crate::config::ParserSettings;
use crate::parser::types::AssetDelta;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitDetection {
    pub split_required: bool,
    pub entry_asset: AssetDelta,
    pub exit_asset: AssetDelta,
}

pub fn detect_split_swap(assets: &[AssetDelta], settings: &ParserSettings) -> SplitDetection {
    assert!(
        assets.len() == 2,
        "Invariant violated: splitSwapDetector expects exactly 2 active assets"
    );

    let negatives: Vec<&AssetDelta> = assets
        .iter()
        .filter(|a| a.delta.is_negative())
        .collect();
    let positives: Vec<&AssetDelta> = assets
        .iter()
        .filter(|a| a.delta.is_positive())
        .collect();
    assert!(
        negatives.len() == 1 && positives.len() == 1,
        "Invariant violated: splitSwapDetector expects one positive and one negative delta"
    );

    let entry_asset = negatives[0].clone();
    let exit_asset = positives[0].clone();

    let split_required =
        !settings.is_core_token(&entry_asset.mint) && !settings.is_core_token(&exit_asset.mint);

    SplitDetection { split_required, entry_asset, exit_asset }
}

// =============================================================================
// Tests
// =============================================================================
