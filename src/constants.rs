/// Global constants used across SwapLens
///
/// This module contains the compile-time tables the parser is built on.
/// Callers may read them but never mutate them; runtime extensions go
/// through `config::ParserSettings` instead.

// ============================================================================
// SOLANA BLOCKCHAIN CONSTANTS
// ============================================================================

/// SOL token mint address (wrapped SOL / WSOL) - the canonical SOL mint
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Native SOL placeholder some balance-change feeds use instead of WSOL
pub const NATIVE_SOL_MINT: &str = "11111111111111111111111111111111";

/// USDC mint address
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// USDT mint address
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

/// SPL token program - the only program recognized as a transfer source
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// SOL always has 9 decimals
pub const SOL_DECIMALS: u8 = 9;

// ============================================================================
// TOKEN CLASSIFICATION TABLES
// ============================================================================

/// Mints that are all treated as SOL during normalization.
/// Wrapped and native variants collapse into one canonical entry per owner.
pub const SOL_EQUIVALENTS: &[&str] = &[SOL_MINT, NATIVE_SOL_MINT];

/// Core tokens: swaps purely between these are rejected as core-only.
pub const CORE_TOKENS: &[&str] = &[SOL_MINT, USDC_MINT, USDT_MINT];

/// Display symbols for the core tokens
pub const CORE_TOKEN_SYMBOLS: &[(&str, &str)] = &[
    (SOL_MINT, "SOL"),
    (USDC_MINT, "USDC"),
    (USDT_MINT, "USDT"),
];

/// Known system, router and pool-authority owners that can never be
/// the swapper.
pub const SYSTEM_ACCOUNTS: &[&str] = &[
    // System program
    "11111111111111111111111111111111",
    // Jupiter aggregator v6
    "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4",
    // Raydium AMM v4 program
    "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
    // Raydium AMM authority
    "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1",
    // Raydium CPMM program
    "CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C",
    // Orca Whirlpool program
    "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc",
    // Meteora DLMM program
    "LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo",
    // Pump.fun AMM program
    "pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA",
    // Pump.fun bonding curve program
    "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P",
];

// ============================================================================
// PARSER THRESHOLDS
// ============================================================================

/// Positive SOL deltas below this many lamports are rent refunds, not
/// swap legs, whenever real token activity exists in the same batch.
pub const RENT_THRESHOLD: u64 = 10_000_000;

/// Dust threshold for mints with `decimals <= DUST_DECIMALS_CUTOFF`
pub const DUST_THRESHOLD_LOW: u64 = 1;

/// Dust threshold for mints with more decimals than the cutoff
pub const DUST_THRESHOLD_HIGH: u64 = 10;

/// Decimals at or below which the low dust threshold applies
pub const DUST_DECIMALS_CUTOFF: u8 = 6;

/// Largest decimals value the parser accepts; also the common scale
/// deltas are brought to for exact cross-mint comparison.
pub const MAX_DECIMALS: u8 = 18;

/// Instruction names recognized as plain token transfers
pub const TRANSFER_INSTRUCTION_NAMES: &[&str] = &["transfer", "transferChecked"];

/// Owner suffixes treated as pool-side infrastructure during tier-3
/// swapper selection
pub const SYSTEM_OWNER_SUFFIXES: &[&str] = &["vault", "pool"];

/// Split reason attached to both records of a split-swap pair
pub const SPLIT_REASON_NON_CORE_PAIR: &str = "non_core_pair";

/// Checks whether a mint belongs to the SOL family
pub fn is_sol_equivalent(mint: &str) -> bool {
    SOL_EQUIVALENTS.contains(&mint)
}

/// Looks up the display symbol for a core token mint
pub fn core_token_symbol(mint: &str) -> Option<&'static str> {
    CORE_TOKEN_SYMBOLS
        .iter()
        .find(|(known, _)| *known == mint)
        .map(|(_, symbol)| *symbol)
}
