//! End-to-end parser scenarios over literal transactions

mod common;

use common::{ change, instruction, tx };
use swaplens::constants::{ RENT_THRESHOLD, SOL_MINT, TOKEN_PROGRAM_ID, USDC_MINT };
use swaplens::parser::parse_transaction;
use swaplens::parser::types::{ Amounts, Direction, EraseReason, ParseOutcome, ParsedSwap };

const MEME_A: &str = "MemeAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
const MEME_B: &str = "MemeBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

fn expect_single_swap(outcome: ParseOutcome) -> ParsedSwap {
    match outcome {
        ParseOutcome::Swap(swap) => swap,
        other => panic!("expected one swap, got {:?}", other),
    }
}

#[test]
fn test_simple_buy() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![instruction("RouterProgram", "route")]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.direction, Direction::Buy);
    assert_eq!(swap.base_asset.mint, MEME_A);
    assert_eq!(swap.quote_asset.mint, SOL_MINT);
    assert_eq!(swap.amounts, Amounts::Buy {
        base_amount: "2.000000".to_string(),
        total_wallet_cost: "1.000000000".to_string(),
        swap_input_amount: "1.000000000".to_string(),
    });
    assert_eq!(swap.swapper, "alice");
    assert_eq!(swap.confidence, 95);
}

#[test]
fn test_simple_sell() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(MEME_A, "alice", -2_000_000, 6),
            change(SOL_MINT, "alice", 750_000_000, 9)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.direction, Direction::Sell);
    assert_eq!(swap.base_asset.mint, MEME_A);
    assert_eq!(swap.amounts, Amounts::Sell {
        base_amount: "2.000000".to_string(),
        net_wallet_received: "0.750000000".to_string(),
        swap_output_amount: "0.750000000".to_string(),
    });
}

#[test]
fn test_split_swap() {
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", -2_000_000, 6), change(MEME_B, "alice", 3_000_000, 6)],
        vec![]
    );

    match parse_transaction(&input) {
        ParseOutcome::Split(pair) => {
            assert_eq!(pair.split_reason, "non_core_pair");
            assert_eq!(pair.sell_record.signature, pair.buy_record.signature);
            assert_eq!(pair.sell_record.timestamp, pair.buy_record.timestamp);
            assert_eq!(pair.sell_record.swapper, pair.buy_record.swapper);
            assert_eq!(pair.sell_record.direction, Direction::Sell);
            assert_eq!(pair.sell_record.base_asset.mint, MEME_A);
            assert_eq!(pair.sell_record.amounts.base_amount(), "2.000000");
            assert_eq!(pair.buy_record.direction, Direction::Buy);
            assert_eq!(pair.buy_record.base_asset.mint, MEME_B);
            assert_eq!(pair.buy_record.amounts.base_amount(), "3.000000");
        }
        other => panic!("expected split pair, got {:?}", other),
    }
}

#[test]
fn test_core_only_swap_erases() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(USDC_MINT, "alice", 2_000_000, 6)
        ],
        vec![]
    );

    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::CoreOnlySwap));
}

#[test]
fn test_pure_transfer_erases() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(USDC_MINT, "alice", 2_000_000, 6)
        ],
        vec![instruction(TOKEN_PROGRAM_ID, "transfer")]
    );

    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::PureTransfer));
}

#[test]
fn test_dust_only_erases() {
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", -1, 6), change(MEME_B, "alice", 1, 6)],
        vec![]
    );

    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::InvalidAssetCount));
}

#[test]
fn test_hybrid_recovery_promotes_fee_payer() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(MEME_A, "alice", 5_000_000, 6),
            change(SOL_MINT, "raydium-authority", 20_000_000, 9)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.swapper, "alice");
    assert_eq!(swap.direction, Direction::Buy);
    assert_eq!(swap.base_asset.mint, MEME_A);
    assert_eq!(swap.quote_asset.mint, SOL_MINT);
    assert_eq!(swap.amounts, Amounts::Buy {
        base_amount: "5.000000".to_string(),
        total_wallet_cost: "0.020000000".to_string(),
        swap_input_amount: "0.020000000".to_string(),
    });
}

#[test]
fn test_no_economic_delta_erases() {
    // Every change carries a zero effective delta
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", 0, 6), change(SOL_MINT, "bob", 0, 9)],
        vec![]
    );

    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::NoEconomicDelta));
}

#[test]
fn test_rent_refund_flag_set_on_output() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6),
            // Token-account rent refund credited to another wallet
            change(SOL_MINT, "bob", 2_039_280, 9)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert!(swap.metadata.rent_refunds_filtered);
    assert!(!swap.metadata.intermediate_assets_collapsed);
}

#[test]
fn test_rent_refund_to_swapper_does_not_cancel_spend() {
    // The refund merges into the swapper's SOL leg during normalization,
    // shrinking the spend rather than surviving as a separate entry
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(SOL_MINT, "alice", 2_039_280, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.amounts, Amounts::Buy {
        base_amount: "2.000000".to_string(),
        total_wallet_cost: "0.997960720".to_string(),
        swap_input_amount: "0.997960720".to_string(),
    });
    assert!(!swap.metadata.rent_refunds_filtered);
}

#[test]
fn test_multi_hop_collapses_to_two_assets() {
    // SOL -> USDC -> meme route: the USDC leg nets close to zero
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(USDC_MINT, "alice", 1_500, 6),
            change(MEME_A, "alice", 40_000_000, 6)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert!(swap.metadata.intermediate_assets_collapsed);
    assert_eq!(swap.direction, Direction::Buy);
    assert_eq!(swap.base_asset.mint, MEME_A);
    assert_eq!(swap.quote_asset.mint, SOL_MINT);
}

#[test]
fn test_positive_sol_above_threshold_survives() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(MEME_A, "alice", -40_000_000, 6),
            change(SOL_MINT, "alice", RENT_THRESHOLD as i128, 9)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.direction, Direction::Sell);
    assert_eq!(swap.amounts, Amounts::Sell {
        base_amount: "40.000000".to_string(),
        net_wallet_received: "0.010000000".to_string(),
        swap_output_amount: "0.010000000".to_string(),
    });
}

#[test]
fn test_same_sign_assets_erase_by_sign() {
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", 2_000_000, 6), change(MEME_B, "alice", 3_000_000, 6)],
        vec![]
    );
    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::NoNegativeDeltas));

    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", -2_000_000, 6), change(MEME_B, "alice", -3_000_000, 6)],
        vec![]
    );
    assert_eq!(parse_transaction(&input), ParseOutcome::Erase(EraseReason::NoPositiveDeltas));
}

#[test]
fn test_wrapped_and_native_sol_merge_before_parsing() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -600_000_000, 9),
            change("11111111111111111111111111111111", "alice", -400_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.amounts, Amounts::Buy {
        base_amount: "2.000000".to_string(),
        total_wallet_cost: "1.000000000".to_string(),
        swap_input_amount: "1.000000000".to_string(),
    });
}

#[test]
fn test_protocol_and_identity_pass_through() {
    let mut input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );
    input.signature = "CustomSignature111".to_string();
    input.timestamp = 1_234_567_890_123;
    input.protocol = "pumpfun".to_string();

    let swap = expect_single_swap(parse_transaction(&input));
    assert_eq!(swap.signature, "CustomSignature111");
    assert_eq!(swap.timestamp, 1_234_567_890_123);
    assert_eq!(swap.protocol, "pumpfun");
}
