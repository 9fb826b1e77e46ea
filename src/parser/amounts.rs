//! Amount normalizer.
//!
//! Raw integer magnitudes become decimal strings with exactly `decimals`
//! fractional digits. Pure string arithmetic end to end; a rendered amount
//! always parses back to the original integer.
use num_traits::Signed;

use crate::parser::types::{ Amounts, AssetDelta, Direction };

/// Renders `magnitude / 10^decimals` without precision loss
pub fn render_amount(magnitude: &num_bigint::BigInt, decimals: u8) -> String {
    debug_assert!(!magnitude.is_negative());

    let digits = magnitude.to_string();
    if decimals == 0 {
        return digits;
    }

    // Left-pad so at least one digit lands before the separator
    let width = (decimals as usize) + 1;
    let padded = if digits.len() < width {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    } else {
        digits
    };

    let split_at = padded.len() - (decimals as usize);
    format!("{}.{}", &padded[..split_at], &padded[split_at..])
}

/// Assigns the direction-specific amount fields from the two active assets
pub fn build_amounts(direction: Direction, entry: &AssetDelta, exit: &AssetDelta) -> Amounts {
    match direction {
        Direction::Buy => {
            let total_wallet_cost = render_amount(&entry.magnitude(), entry.decimals);
            Amounts::Buy {
                base_amount: render_amount(&exit.magnitude(), exit.decimals),
                // Identical today; the schema keeps them apart for future
                // wrapping-fee decomposition
                swap_input_amount: total_wallet_cost.clone(),
                total_wallet_cost,
            }
        }
        Direction::Sell => {
            let net_wallet_received = render_amount(&exit.magnitude(), exit.decimals);
            Amounts::Sell {
                base_amount: render_amount(&entry.magnitude(), entry.decimals),
                swap_output_amount: net_wallet_received.clone(),
                net_wallet_received,
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
