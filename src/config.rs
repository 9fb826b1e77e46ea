use serde::{ Deserialize, Serialize };
use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::{ self, CORE_TOKENS, SYSTEM_ACCOUNTS };
use crate::errors::{ SwapLensError, SwapLensResult };

/// Construction-time settings for the transaction parser.
///
/// The compile-time tables in `constants` are always active; settings can
/// only widen them. Settings are threaded into `TransactionParser::new` so
/// the core never reads process-global mutable state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParserSettings {
    /// Additional stablecoin mints treated as core tokens
    #[serde(default)]
    pub extra_core_tokens: Vec<String>,
    /// Additional owners excluded from swapper selection
    #[serde(default)]
    pub extra_system_accounts: Vec<String>,
    /// Display-symbol overrides by mint
    #[serde(default)]
    pub symbol_overrides: BTreeMap<String, String>,
}

impl ParserSettings {
    /// Load settings from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SwapLensResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml
            ::from_str(&content)
            .map_err(|e| {
                SwapLensError::Config(
                    format!("failed to parse {}: {}", path.as_ref().display(), e)
                )
            })
    }

    /// Whether a mint counts as a core token
    pub fn is_core_token(&self, mint: &str) -> bool {
        CORE_TOKENS.contains(&mint) || self.extra_core_tokens.iter().any(|m| m == mint)
    }

    /// Whether an owner is a known system/router account
    pub fn is_system_account(&self, owner: &str) -> bool {
        SYSTEM_ACCOUNTS.contains(&owner) ||
            self.extra_system_accounts.iter().any(|a| a == owner)
    }

    /// Display symbol for a mint, if one is known
    pub fn symbol_for(&self, mint: &str) -> Option<String> {
        if let Some(symbol) = self.symbol_overrides.get(mint) {
            return Some(symbol.clone());
        }
        constants::core_token_symbol(mint).map(|s| s.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
