//! Direction classifier (non-split path).
//!
//! BUY means the swapper spent a core token for a non-core token; SELL is
//! the reverse. A surviving core-to-core pair classifies as SELL of the
//! non-canonical side. Non-core-to-non-core can only arrive here through a
//! pipeline regression and crashes.
use num_traits::Signed;

use crate::config::ParserSettings;
use crate::parser::types::{ AssetDelta, Direction };

pub fn classify_direction(
    entry: &AssetDelta,
    exit: &AssetDelta,
    settings: &ParserSettings
) -> Direction {
    if !entry.delta.is_negative() || !exit.delta.is_positive() {
        panic!("INVALID_ENTRY_EXIT_SIGN");
    }

    let entry_is_core = settings.is_core_token(&entry.mint);
    let exit_is_core = settings.is_core_token(&exit.mint);

    match (entry_is_core, exit_is_core) {
        (true, false) => Direction::Buy,
        (false, true) => Direction::Sell,
        (true, true) => Direction::Sell,
        (false, false) => panic!("NON_CORE_TO_NON_CORE_REACHED_DIRECTION"),
    }
}

// =============================================================================
// Tests
// =============================================================================
