//! Transfer / core detector (stage 8).
//!
//! A transaction whose two active assets are all core tokens is either a
//! plain transfer dressed up by balance movement or a core-to-core trade
//! this parser does not track. Both shapes erase; any non-core involvement
//! continues down the pipeline.
use crate::config::ParserSettings;
use crate::constants::{ TOKEN_PROGRAM_ID, TRANSFER_INSTRUCTION_NAMES };
use crate::parser::types::{ AssetDelta, EraseReason, TransactionMeta };

/// The two booleans the rejection mapping is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferInspection {
    pub has_non_core_token: bool,
    pub is_transfer: bool,
}

pub fn inspect_transfer(
    assets: &[AssetDelta],
    meta: &TransactionMeta,
    settings: &ParserSettings
) -> TransferInspection {
    let has_non_core_token = assets.iter().any(|a| !settings.is_core_token(&a.mint));

    // An empty instruction list proves nothing about being a transfer
    let all_transfer_instructions =
        !meta.instructions.is_empty() &&
        meta.instructions
            .iter()
            .all(|ix| {
                ix.program_id == TOKEN_PROGRAM_ID &&
                    TRANSFER_INSTRUCTION_NAMES.contains(&ix.name.as_str())
            });

    TransferInspection {
        has_non_core_token,
        is_transfer: all_transfer_instructions && !has_non_core_token,
    }
}

/// Applies the rejection mapping; `None` means the pipeline continues
pub fn detect_transfer_or_core_only(
    assets: &[AssetDelta],
    meta: &TransactionMeta,
    settings: &ParserSettings
) -> Option<EraseReason> {
    let inspection = inspect_transfer(assets, meta, settings);

    if inspection.has_non_core_token {
        return None;
    }
    if inspection.is_transfer {
        return Some(EraseReason::PureTransfer);
    }
    Some(EraseReason::CoreOnlySwap)
}

// =============================================================================
// Tests
// =============================================================================
