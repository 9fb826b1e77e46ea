//! Output generator.
//!
//! Converts the validated entry/exit pair into the public swap schema.
//! Every invariant established upstream is re-checked here before it is
//! baked into a record; violations crash rather than emit a wrong swap.
use num_bigint::BigInt;
use num_traits::{ Signed, Zero };

use crate::config::ParserSettings;
use crate::constants::SPLIT_REASON_NON_CORE_PAIR;
use crate::parser::amounts::{ build_amounts, render_amount };
use crate::parser::types::{
    Amounts,
    AssetDelta,
    AssetRef,
    Direction,
    ParseAccumulator,
    ParsedSwap,
    RawTransaction,
    SplitSwapPair,
    SwapperInfo,
};

pub fn generate_swap_record(
    tx: &RawTransaction,
    swapper: &SwapperInfo,
    entry: &AssetDelta,
    exit: &AssetDelta,
    direction: Direction,
    accumulator: &ParseAccumulator,
    settings: &ParserSettings
) -> ParsedSwap {
    check_entry_exit_signs(entry, exit);

    let (base_asset, quote_asset) = match direction {
        Direction::Buy => (asset_ref(exit, settings), asset_ref(entry, settings)),
        Direction::Sell => (asset_ref(entry, settings), asset_ref(exit, settings)),
    };

    ParsedSwap {
        signature: tx.signature.clone(),
        timestamp: tx.timestamp,
        swapper: swapper.swapper.clone(),
        protocol: accumulator.protocol.clone(),
        direction,
        base_asset,
        quote_asset,
        amounts: build_amounts(direction, entry, exit),
        confidence: swapper.confidence,
        split_reason: None,
        metadata: accumulator.metadata(),
    }
}

/// Emits a SELL of the entry side and a BUY of the exit side, each against
/// a synthetic zero-amount SOL quote. Both records share signature,
/// timestamp and swapper.
pub fn generate_split_pair(
    tx: &RawTransaction,
    swapper: &SwapperInfo,
    entry: &AssetDelta,
    exit: &AssetDelta,
    accumulator: &ParseAccumulator,
    settings: &ParserSettings
) -> SplitSwapPair {
    check_entry_exit_signs(entry, exit);

    let synthetic_quote = AssetRef::canonical_sol();
    let zero_quote_amount = render_amount(&BigInt::zero(), synthetic_quote.decimals);

    let sell_record = ParsedSwap {
        signature: tx.signature.clone(),
        timestamp: tx.timestamp,
        swapper: swapper.swapper.clone(),
        protocol: accumulator.protocol.clone(),
        direction: Direction::Sell,
        base_asset: asset_ref(entry, settings),
        quote_asset: synthetic_quote.clone(),
        amounts: Amounts::Sell {
            base_amount: render_amount(&entry.magnitude(), entry.decimals),
            net_wallet_received: zero_quote_amount.clone(),
            swap_output_amount: zero_quote_amount.clone(),
        },
        confidence: swapper.confidence,
        split_reason: Some(SPLIT_REASON_NON_CORE_PAIR.to_string()),
        metadata: accumulator.metadata(),
    };

    let buy_record = ParsedSwap {
        signature: tx.signature.clone(),
        timestamp: tx.timestamp,
        swapper: swapper.swapper.clone(),
        protocol: accumulator.protocol.clone(),
        direction: Direction::Buy,
        base_asset: asset_ref(exit, settings),
        quote_asset: synthetic_quote,
        amounts: Amounts::Buy {
            base_amount: render_amount(&exit.magnitude(), exit.decimals),
            total_wallet_cost: zero_quote_amount.clone(),
            swap_input_amount: zero_quote_amount,
        },
        confidence: swapper.confidence,
        split_reason: Some(SPLIT_REASON_NON_CORE_PAIR.to_string()),
        metadata: accumulator.metadata(),
    };

    SplitSwapPair {
        sell_record,
        buy_record,
        split_reason: SPLIT_REASON_NON_CORE_PAIR.to_string(),
    }
}

fn check_entry_exit_signs(entry: &AssetDelta, exit: &AssetDelta) {
    if !entry.delta.is_negative() || !exit.delta.is_positive() {
        panic!("INVALID_ENTRY_EXIT_SIGN");
    }
}

fn asset_ref(asset: &AssetDelta, settings: &ParserSettings) -> AssetRef {
    AssetRef {
        mint: asset.mint.clone(),
        symbol: settings.symbol_for(&asset.mint),
        decimals: asset.decimals,
    }
}

// =============================================================================
// Tests
// =============================================================================
