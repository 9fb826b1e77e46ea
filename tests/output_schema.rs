//! Wire-format checks: field presence per direction, forbidden enrichment
//! fields, and the closed erase-reason set

mod common;

use common::{ change, instruction, tx };
use serde_json::Value;

use swaplens::constants::{ SOL_MINT, TOKEN_PROGRAM_ID, USDC_MINT };
use swaplens::parser::parse_transaction;
use swaplens::parser::types::ParseOutcome;

const MEME_A: &str = "MemeAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
const MEME_B: &str = "MemeBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

/// Downstream enrichment fields that must never leak out of the parser
const FORBIDDEN_KEYS: &[&str] = &["usdAmount", "solPrice", "marketCap"];

const ERASE_REASONS: &[&str] = &[
    "no_economic_delta",
    "invalid_asset_count",
    "no_negative_deltas",
    "no_positive_deltas",
    "swapper_no_delta",
    "pure_transfer",
    "core_only_swap",
    "non_core_pair_requires_split_path",
];

fn wire(outcome: &ParseOutcome) -> Value {
    serde_json::to_value(outcome.to_wire()).expect("wire serialization")
}

fn walk(value: &Value, visit: &mut dyn FnMut(&str, &Value)) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                visit(key, child);
                walk(child, visit);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, visit);
            }
        }
        _ => {}
    }
}

fn assert_no_forbidden_keys(value: &Value) {
    walk(value, &mut |key, _| {
        assert!(
            !FORBIDDEN_KEYS.contains(&key),
            "forbidden enrichment field {} leaked into output",
            key
        );
    });
}

#[test]
fn test_buy_wire_has_only_buy_amount_fields() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );
    let value = wire(&parse_transaction(&input));

    assert_eq!(value["type"], "success");
    let swaps = value["swaps"].as_array().expect("swaps array");
    assert_eq!(swaps.len(), 1);

    let amounts = swaps[0]["amounts"].as_object().expect("amounts object");
    assert!(amounts.contains_key("baseAmount"));
    assert!(amounts.contains_key("totalWalletCost"));
    assert!(amounts.contains_key("swapInputAmount"));
    assert!(!amounts.contains_key("netWalletReceived"));
    assert!(!amounts.contains_key("swapOutputAmount"));

    assert_eq!(swaps[0]["direction"], "BUY");
    assert_eq!(swaps[0]["amounts"]["baseAmount"], "2.000000");
    assert_no_forbidden_keys(&value);
}

#[test]
fn test_sell_wire_has_only_sell_amount_fields() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(MEME_A, "alice", -2_000_000, 6),
            change(SOL_MINT, "alice", 750_000_000, 9)
        ],
        vec![]
    );
    let value = wire(&parse_transaction(&input));

    let amounts = value["swaps"][0]["amounts"].as_object().expect("amounts object");
    assert!(amounts.contains_key("baseAmount"));
    assert!(amounts.contains_key("netWalletReceived"));
    assert!(amounts.contains_key("swapOutputAmount"));
    assert!(!amounts.contains_key("totalWalletCost"));
    assert!(!amounts.contains_key("swapInputAmount"));

    assert_eq!(value["swaps"][0]["direction"], "SELL");
    assert_no_forbidden_keys(&value);
}

#[test]
fn test_split_wire_carries_two_records() {
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", -2_000_000, 6), change(MEME_B, "alice", 3_000_000, 6)],
        vec![]
    );
    let value = wire(&parse_transaction(&input));

    assert_eq!(value["type"], "success");
    let swaps = value["swaps"].as_array().expect("swaps array");
    assert_eq!(swaps.len(), 2);
    assert_eq!(swaps[0]["direction"], "SELL");
    assert_eq!(swaps[1]["direction"], "BUY");
    assert_eq!(swaps[0]["splitReason"], "non_core_pair");
    assert_eq!(swaps[1]["splitReason"], "non_core_pair");
    assert_eq!(swaps[0]["signature"], swaps[1]["signature"]);
    assert_eq!(swaps[0]["timestamp"], swaps[1]["timestamp"]);
    assert_eq!(swaps[0]["swapper"], swaps[1]["swapper"]);

    // Each record carries the full amount fields of its own direction
    assert!(swaps[0]["amounts"].get("netWalletReceived").is_some());
    assert!(swaps[1]["amounts"].get("totalWalletCost").is_some());
    assert_no_forbidden_keys(&value);
}

#[test]
fn test_non_split_record_omits_split_reason() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );
    let value = wire(&parse_transaction(&input));
    assert!(value["swaps"][0].get("splitReason").is_none());
}

#[test]
fn test_unknown_mint_omits_symbol() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(MEME_A, "alice", 2_000_000, 6)
        ],
        vec![]
    );
    let value = wire(&parse_transaction(&input));

    let base = value["swaps"][0]["baseAsset"].as_object().expect("base asset");
    assert!(!base.contains_key("symbol"));
    let quote = value["swaps"][0]["quoteAsset"].as_object().expect("quote asset");
    assert_eq!(quote["symbol"], "SOL");
}

#[test]
fn test_erase_wire_shape() {
    let input = tx(
        "alice",
        &["alice"],
        vec![
            change(SOL_MINT, "alice", -1_000_000_000, 9),
            change(USDC_MINT, "alice", 2_000_000, 6)
        ],
        vec![instruction(TOKEN_PROGRAM_ID, "transfer")]
    );
    let value = wire(&parse_transaction(&input));

    assert_eq!(value["type"], "erase");
    assert_eq!(value["error"]["reason"], "pure_transfer");
    assert!(value.get("swaps").is_none());
}

#[test]
fn test_erase_reasons_stay_in_closed_set() {
    let inputs = vec![
        // no_economic_delta
        tx("alice", &["alice"], vec![change(MEME_A, "alice", 0, 6)], vec![]),
        // invalid_asset_count
        tx("alice", &["alice"], vec![change(MEME_A, "alice", 2_000_000, 6)], vec![]),
        // no_negative_deltas
        tx(
            "alice",
            &["alice"],
            vec![change(MEME_A, "alice", 2_000_000, 6), change(MEME_B, "alice", 1_000_000, 6)],
            vec![]
        ),
        // core_only_swap
        tx(
            "alice",
            &["alice"],
            vec![
                change(SOL_MINT, "alice", -1_000_000_000, 9),
                change(USDC_MINT, "alice", 2_000_000, 6)
            ],
            vec![]
        )
    ];

    for input in inputs {
        if let ParseOutcome::Erase(reason) = parse_transaction(&input) {
            assert!(
                ERASE_REASONS.contains(&reason.as_str()),
                "reason {} not in the closed set",
                reason
            );
        } else {
            panic!("expected an erase outcome");
        }
    }
}

#[test]
fn test_amount_strings_are_never_empty() {
    let input = tx(
        "alice",
        &["alice"],
        vec![change(MEME_A, "alice", -2_000_000, 6), change(MEME_B, "alice", 3_000_000, 6)],
        vec![]
    );
    let value = wire(&parse_transaction(&input));

    walk(&value, &mut |key, child| {
        if key.ends_with("Amount") || key.ends_with("Cost") || key.ends_with("Received") {
            let text = child.as_str().unwrap_or_default();
            assert!(!text.is_empty(), "amount field {} is empty", key);
        }
    });
}
