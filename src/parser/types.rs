//! Core data model for the balance-truth swap parser.
//!
//! Everything numeric flowing through the pipeline is an exact signed
//! big integer. Floating point never appears past input parsing; amount
//! fields on the output are decimal strings produced by integer string
//! arithmetic.
use num_bigint::BigInt;
use num_traits::Signed;
use serde::{ Deserialize, Serialize };

use crate::constants::{ MAX_DECIMALS, SOL_DECIMALS, SOL_MINT };

/// Raw transaction input: untrusted balance deltas plus fee-payer and
/// instruction metadata. Signature and timestamp are opaque pass-throughs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub signature: String,
    /// Milliseconds since epoch; never interpreted
    pub timestamp: i64,
    pub balance_changes: Vec<BalanceChange>,
    pub transaction_meta: TransactionMeta,
    #[serde(default)]
    pub protocol: String,
}

impl RawTransaction {
    /// Input-boundary validation. The pipeline itself assumes these hold.
    pub fn validate(&self) -> Result<(), String> {
        for change in &self.balance_changes {
            if change.decimals > MAX_DECIMALS {
                return Err(
                    format!(
                        "balance change for mint {} has {} decimals (max {})",
                        change.mint,
                        change.decimals,
                        MAX_DECIMALS
                    )
                );
            }
        }
        Ok(())
    }
}

/// One owner/mint balance movement. The effective delta is post minus pre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    pub mint: String,
    pub owner: String,
    #[serde(with = "bigint_str")]
    pub pre_delta: BigInt,
    #[serde(with = "bigint_str")]
    pub post_delta: BigInt,
    pub decimals: u8,
}

impl BalanceChange {
    pub fn effective_delta(&self) -> BigInt {
        &self.post_delta - &self.pre_delta
    }

    pub fn scale(&self) -> BigInt {
        pow10(self.decimals)
    }

    /// Magnitude scaled to `MAX_DECIMALS`, for exact cross-mint comparison
    pub fn normalized_magnitude(&self) -> BigInt {
        self.effective_delta().abs() * pow10(MAX_DECIMALS.saturating_sub(self.decimals))
    }
}

/// Transaction metadata: only fee payer, signer order and instruction
/// program/name pairs are inspected. Instruction arguments are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    pub fee_payer: String,
    #[serde(default)]
    pub signers: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub program_id: String,
    pub name: String,
}

/// Role of an asset delta within the reconstructed swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRole {
    /// The asset the swapper gave up (negative delta)
    Entry,
    /// The asset the swapper received (positive delta)
    Exit,
    /// Not yet assigned
    Intermediate,
}

/// An aggregated balance movement for one (owner, mint) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDelta {
    pub mint: String,
    pub owner: String,
    pub decimals: u8,
    pub delta: BigInt,
    pub role: AssetRole,
}

impl AssetDelta {
    pub fn scale(&self) -> BigInt {
        pow10(self.decimals)
    }

    pub fn magnitude(&self) -> BigInt {
        self.delta.abs()
    }

    /// Magnitude scaled to `MAX_DECIMALS`, for exact cross-mint comparison
    pub fn normalized_magnitude(&self) -> BigInt {
        self.magnitude() * pow10(MAX_DECIMALS.saturating_sub(self.decimals))
    }

    pub fn is_negative(&self) -> bool {
        self.delta.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.delta.is_positive()
    }
}

/// Typed rejection reasons. This set is closed; tests assert no other
/// reason string ever appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EraseReason {
    NoEconomicDelta,
    InvalidAssetCount,
    NoNegativeDeltas,
    NoPositiveDeltas,
    SwapperNoDelta,
    PureTransfer,
    CoreOnlySwap,
    /// Reserved; never emitted by the current pipeline
    NonCorePairRequiresSplitPath,
}

impl EraseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EraseReason::NoEconomicDelta => "no_economic_delta",
            EraseReason::InvalidAssetCount => "invalid_asset_count",
            EraseReason::NoNegativeDeltas => "no_negative_deltas",
            EraseReason::NoPositiveDeltas => "no_positive_deltas",
            EraseReason::SwapperNoDelta => "swapper_no_delta",
            EraseReason::PureTransfer => "pure_transfer",
            EraseReason::CoreOnlySwap => "core_only_swap",
            EraseReason::NonCorePairRequiresSplitPath => "non_core_pair_requires_split_path",
        }
    }
}

impl std::fmt::Display for EraseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the swapper was identified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapperMethod {
    FeePayer,
    Tier2,
    LargestDelta,
}

impl SwapperMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapperMethod::FeePayer => "fee_payer",
            SwapperMethod::Tier2 => "tier2",
            SwapperMethod::LargestDelta => "largest_delta",
        }
    }
}

/// Successful swapper identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapperInfo {
    pub swapper: String,
    /// Opaque pass-through in [0, 100]
    pub confidence: u8,
    pub method: SwapperMethod,
}

/// Outcome of the swapper identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapperResult {
    Success(SwapperInfo),
    Erase(EraseReason),
}

/// Swap direction from the swapper's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

/// Reference to an asset on the output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub mint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub decimals: u8,
}

impl AssetRef {
    /// The canonical SOL asset, used as the synthetic quote of split records
    pub fn canonical_sol() -> Self {
        AssetRef {
            mint: SOL_MINT.to_string(),
            symbol: Some("SOL".to_string()),
            decimals: SOL_DECIMALS,
        }
    }
}

/// Direction-specific amount fields. Serialized untagged so only the
/// fields of the active variant appear on the wire; unset members are
/// absent, not null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amounts {
    #[serde(rename_all = "camelCase")] Buy {
        base_amount: String,
        total_wallet_cost: String,
        swap_input_amount: String,
    },
    #[serde(rename_all = "camelCase")] Sell {
        base_amount: String,
        net_wallet_received: String,
        swap_output_amount: String,
    },
}

impl Amounts {
    pub fn base_amount(&self) -> &str {
        match self {
            Amounts::Buy { base_amount, .. } => base_amount,
            Amounts::Sell { base_amount, .. } => base_amount,
        }
    }
}

/// Pipeline metadata carried onto the output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapMetadata {
    pub rent_refunds_filtered: bool,
    pub intermediate_assets_collapsed: bool,
}

/// One canonical reconstructed swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSwap {
    pub signature: String,
    pub timestamp: i64,
    pub swapper: String,
    pub protocol: String,
    pub direction: Direction,
    pub base_asset: AssetRef,
    pub quote_asset: AssetRef,
    pub amounts: Amounts,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_reason: Option<String>,
    pub metadata: SwapMetadata,
}

/// A non-core-to-non-core swap decomposed into a sell and a buy record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSwapPair {
    pub sell_record: ParsedSwap,
    pub buy_record: ParsedSwap,
    pub split_reason: String,
}

/// Final parser outcome. Discrimination is exhaustive at the type level;
/// erase is a value, never an exception.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Swap(ParsedSwap),
    Split(SplitSwapPair),
    Erase(EraseReason),
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, ParseOutcome::Erase(_))
    }

    pub fn erase_reason(&self) -> Option<EraseReason> {
        match self {
            ParseOutcome::Erase(reason) => Some(*reason),
            _ => None,
        }
    }

    /// The swap records of a successful parse, in emission order
    pub fn swaps(&self) -> Vec<&ParsedSwap> {
        match self {
            ParseOutcome::Swap(swap) => vec![swap],
            ParseOutcome::Split(pair) => vec![&pair.sell_record, &pair.buy_record],
            ParseOutcome::Erase(_) => vec![],
        }
    }

    /// Wire-format view: `{"type": "success", ...}` / `{"type": "erase", ...}`
    pub fn to_wire(&self) -> WireResult<'_> {
        match self {
            ParseOutcome::Erase(reason) => WireResult::Erase { error: WireError { reason: *reason } },
            _ => WireResult::Success { swaps: self.swaps() },
        }
    }
}

/// Serialized result shape consumed by downstream subsystems
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireResult<'a> {
    Success {
        swaps: Vec<&'a ParsedSwap>,
    },
    Erase {
        error: WireError,
    },
}

#[derive(Debug, Serialize)]
pub struct WireError {
    pub reason: EraseReason,
}

/// Flags accumulated across stages and stamped onto every output record
#[derive(Debug, Clone, Default)]
pub struct ParseAccumulator {
    pub rent_refunds_filtered: bool,
    pub intermediate_assets_collapsed: bool,
    pub protocol: String,
}

impl ParseAccumulator {
    pub fn new(protocol: &str) -> Self {
        ParseAccumulator {
            rent_refunds_filtered: false,
            intermediate_assets_collapsed: false,
            protocol: protocol.to_string(),
        }
    }

    pub fn metadata(&self) -> SwapMetadata {
        SwapMetadata {
            rent_refunds_filtered: self.rent_refunds_filtered,
            intermediate_assets_collapsed: self.intermediate_assets_collapsed,
        }
    }
}

/// 10^exp as a big integer
pub fn pow10(exp: u8) -> BigInt {
    num_traits::pow(BigInt::from(10), exp as usize)
}

/// Serde helper: big integers travel as decimal strings but are accepted
/// from plain JSON integers as well.
pub mod bigint_str {
    use num_bigint::BigInt;
    use serde::{ de, Deserialize, Deserializer, Serializer };

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Ok(BigInt::from(value)),
            Raw::Text(text) =>
                text
                    .trim()
                    .parse::<BigInt>()
                    .map_err(|e| de::Error::custom(format!("invalid big integer: {}", e))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
