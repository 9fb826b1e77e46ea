//! Balance-truth swap parser.
//!
//! Reconstructs one canonical swap (or a split-swap pair) per transaction
//! from post-minus-pre balance deltas, the instruction list and fee-payer
//! metadata. The pipeline is a fixed sequence of pure stages over exact
//! integer arithmetic; any stage can short-circuit with a typed erase.
//! Invariant violations between stages are programmer errors and panic.

pub mod amounts;
pub mod collector;
pub mod direction;
pub mod dust_filter;
pub mod output;
pub mod recovery;
pub mod rent_filter;
pub mod sol_normalizer;
pub mod split_detector;
pub mod swapper;
pub mod transfer_detector;
pub mod types;
pub mod validators;

use crate::config::ParserSettings;

use self::collector::{ collect_asset_deltas, CollectorResult };
use self::direction::classify_direction;
use self::dust_filter::filter_dust;
use self::output::{ generate_split_pair, generate_swap_record };
use self::recovery::attempt_recovery;
use self::rent_filter::filter_rent_refunds;
use self::sol_normalizer::normalize_sol_variants;
use self::split_detector::detect_split_swap;
use self::swapper::identify_swapper;
use self::transfer_detector::detect_transfer_or_core_only;
use self::types::{
    AssetDelta,
    BalanceChange,
    EraseReason,
    ParseAccumulator,
    ParseOutcome,
    RawTransaction,
    SwapperInfo,
    SwapperResult,
};
use self::validators::{ validate_delta_signs, validate_swapper_economic_delta, SignValidation };

/// The orchestrator. Settings are injected at construction; there is no
/// process-global state and a parser can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TransactionParser {
    settings: ParserSettings,
}

impl TransactionParser {
    pub fn new(settings: ParserSettings) -> Self {
        TransactionParser { settings }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Runs the full pipeline once. Pure: no I/O, no retained references,
    /// identical output for identical input on every platform.
    pub fn parse_transaction(&self, tx: &RawTransaction) -> ParseOutcome {
        let mut accumulator = ParseAccumulator::new(&tx.protocol);

        // Stage 1: fold SOL variants into one canonical entry per owner
        let normalized = normalize_sol_variants(&tx.balance_changes);

        // Stage 2: drop rent-refund dust
        let rent = filter_rent_refunds(&normalized);
        accumulator.rent_refunds_filtered = rent.rent_refunds_filtered;

        // Stage 3: pick the swapper on the pre-dust batch
        let identified = identify_swapper(&rent.changes, &tx.transaction_meta, &self.settings);

        // Stage 4: drop sub-threshold noise
        let filtered = filter_dust(&rent.changes);

        // Stage 5: reduce to two active assets, with hybrid recovery on
        // the erase paths
        let (swapper, assets, collapsed) = match
            self.collect_with_recovery(&filtered, tx, identified)
        {
            Ok(collected) => collected,
            Err(reason) => {
                return ParseOutcome::Erase(reason);
            }
        };
        accumulator.intermediate_assets_collapsed = collapsed;

        // Stage 6: one side pays, the other receives
        if let SignValidation::Invalid(reason) = validate_delta_signs(&assets) {
            return ParseOutcome::Erase(reason);
        }

        // Stage 7: ordering guard
        if let Err(reason) = validate_swapper_economic_delta(&assets) {
            return ParseOutcome::Erase(reason);
        }

        // Stage 8: reject plain transfers and core-only trades
        if
            let Some(reason) = detect_transfer_or_core_only(
                &assets,
                &tx.transaction_meta,
                &self.settings
            )
        {
            return ParseOutcome::Erase(reason);
        }

        // Stage 9 boundary invariant
        assert!(
            assets.len() == 2,
            "Invariant violated: splitSwapDetector expects exactly 2 active assets"
        );
        let detection = detect_split_swap(&assets, &self.settings);

        if detection.split_required {
            return ParseOutcome::Split(
                generate_split_pair(
                    tx,
                    &swapper,
                    &detection.entry_asset,
                    &detection.exit_asset,
                    &accumulator,
                    &self.settings
                )
            );
        }

        let direction = classify_direction(
            &detection.entry_asset,
            &detection.exit_asset,
            &self.settings
        );
        ParseOutcome::Swap(
            generate_swap_record(
                tx,
                &swapper,
                &detection.entry_asset,
                &detection.exit_asset,
                direction,
                &accumulator,
                &self.settings
            )
        )
    }

    fn collect_with_recovery(
        &self,
        filtered: &[BalanceChange],
        tx: &RawTransaction,
        identified: SwapperResult
    ) -> Result<(SwapperInfo, Vec<AssetDelta>, bool), EraseReason> {
        match identified {
            SwapperResult::Success(info) => {
                match collect_asset_deltas(filtered, &info.swapper) {
                    CollectorResult::Collected { assets, collapsed } => {
                        Ok((info, assets, collapsed))
                    }
                    CollectorResult::Erase(reason) => {
                        match
                            attempt_recovery(
                                filtered,
                                &tx.transaction_meta,
                                Some(&info),
                                &self.settings
                            )
                        {
                            Some((recovered, assets)) => Ok((recovered, assets, false)),
                            None => Err(reason),
                        }
                    }
                }
            }
            SwapperResult::Erase(reason) => {
                match attempt_recovery(filtered, &tx.transaction_meta, None, &self.settings) {
                    Some((recovered, assets)) => Ok((recovered, assets, false)),
                    None => Err(reason),
                }
            }
        }
    }
}

/// Parses with default settings
pub fn parse_transaction(tx: &RawTransaction) -> ParseOutcome {
    TransactionParser::default().parse_transaction(tx)
}
