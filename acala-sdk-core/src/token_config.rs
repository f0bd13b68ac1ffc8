//! Token configuration
//!
//! The token metadata registry: symbol → chain/name/decimal, plus the
//! canonical sort rank for each symbol. A preset registry covering the
//! chain's registered tokens ships with the SDK; tests and embedders can
//! build their own and pass it wherever a registry is taken.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use acala_types::TokenSymbol;

use crate::error::{SdkError, SdkResult};
use crate::types::Chain;

/// Token definition shipped with the SDK.
#[derive(Debug, Clone)]
pub struct PresetToken {
    pub symbol: &'static str,
    pub chain: Chain,
    pub name: &'static str,
    pub decimal: u8,
}

pub static ACA_TOKEN: PresetToken = PresetToken {
    symbol: "ACA",
    chain: Chain::Acala,
    name: "Acala",
    decimal: 12,
};

pub static AUSD_TOKEN: PresetToken = PresetToken {
    symbol: "AUSD",
    chain: Chain::Acala,
    name: "Acala Dollar",
    decimal: 12,
};

pub static DOT_TOKEN: PresetToken = PresetToken {
    symbol: "DOT",
    chain: Chain::Polkadot,
    name: "Polkadot",
    decimal: 10,
};

pub static XBTC_TOKEN: PresetToken = PresetToken {
    symbol: "XBTC",
    chain: Chain::Bitcoin,
    name: "Cross-chain Bitcoin",
    decimal: 8,
};

pub static LDOT_TOKEN: PresetToken = PresetToken {
    symbol: "LDOT",
    chain: Chain::Acala,
    name: "Liquid DOT",
    decimal: 10,
};

pub static RENBTC_TOKEN: PresetToken = PresetToken {
    symbol: "RENBTC",
    chain: Chain::Bitcoin,
    name: "Ren Bitcoin",
    decimal: 8,
};

/// Preset definitions in canonical symbol order.
pub static PRESET_TOKENS: [&PresetToken; 6] = [
    &ACA_TOKEN,
    &AUSD_TOKEN,
    &DOT_TOKEN,
    &XBTC_TOKEN,
    &LDOT_TOKEN,
    &RENBTC_TOKEN,
];

/// Registered metadata for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub symbol: String,
    pub chain: Chain,
    pub name: String,
    pub decimal: u8,
}

impl TokenEntry {
    pub fn new(
        symbol: impl Into<String>,
        chain: Chain,
        name: impl Into<String>,
        decimal: u8,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            chain,
            name: name.into(),
            decimal,
        }
    }
}

impl From<&PresetToken> for TokenEntry {
    fn from(preset: &PresetToken) -> Self {
        Self::new(preset.symbol, preset.chain, preset.name, preset.decimal)
    }
}

/// Token configuration registry.
///
/// Read-only once handed to callers: build it up front with [`register`]
/// and [`set_rank`], then pass it by shared reference. Lookups for symbols
/// that were never registered fail with [`SdkError::UnknownSymbol`] rather
/// than defaulting.
///
/// [`register`]: TokenRegistry::register
/// [`set_rank`]: TokenRegistry::set_rank
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    entries: HashMap<String, TokenEntry>,
    ranks: HashMap<String, u32>,
}

lazy_static! {
    static ref PRESET_REGISTRY: TokenRegistry = {
        let mut registry = TokenRegistry::new();
        for preset in PRESET_TOKENS {
            registry.register(TokenEntry::from(preset));
        }
        // Canonical rank is the symbol's position in the chain's registry
        for (rank, symbol) in TokenSymbol::ALL.iter().enumerate() {
            registry.set_rank(symbol.as_str(), rank as u32);
        }
        log::debug!(
            "preset token registry initialized with {} symbols",
            registry.len()
        );
        registry
    };
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shipped with the SDK, built once per process.
    pub fn preset() -> &'static TokenRegistry {
        &PRESET_REGISTRY
    }

    /// Register a token entry, replacing any previous entry for the symbol
    pub fn register(&mut self, entry: TokenEntry) {
        self.entries.insert(entry.symbol.clone(), entry);
    }

    /// Assign the canonical sort rank for a symbol
    pub fn set_rank(&mut self, symbol: impl Into<String>, rank: u32) {
        self.ranks.insert(symbol.into(), rank);
    }

    /// Full entry for a symbol, if registered
    pub fn entry(&self, symbol: &str) -> Option<&TokenEntry> {
        self.entries.get(symbol)
    }

    /// Origin chain of a symbol
    pub fn get_chain(&self, symbol: &str) -> SdkResult<Chain> {
        self.entry(symbol)
            .map(|entry| entry.chain)
            .ok_or_else(|| SdkError::unknown_symbol(symbol))
    }

    /// Display name of a symbol
    pub fn get_name(&self, symbol: &str) -> SdkResult<&str> {
        self.entry(symbol)
            .map(|entry| entry.name.as_str())
            .ok_or_else(|| SdkError::unknown_symbol(symbol))
    }

    /// Fixed-point scale of a symbol
    pub fn get_decimal(&self, symbol: &str) -> SdkResult<u8> {
        self.entry(symbol)
            .map(|entry| entry.decimal)
            .ok_or_else(|| SdkError::unknown_symbol(symbol))
    }

    /// Canonical sort rank of a symbol, if one was assigned
    pub fn rank(&self, symbol: &str) -> Option<u32> {
        self.ranks.get(symbol).copied()
    }

    /// Iterate over every registered entry, in no particular order
    pub fn tokens(&self) -> impl Iterator<Item = &TokenEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_covers_every_symbol() {
        let registry = TokenRegistry::preset();
        assert_eq!(registry.len(), TokenSymbol::ALL.len());

        for symbol in TokenSymbol::ALL {
            assert!(
                registry.entry(symbol.as_str()).is_some(),
                "missing preset entry for {}",
                symbol
            );
        }
    }

    #[test]
    fn test_preset_ranks_follow_canonical_order() {
        let registry = TokenRegistry::preset();

        for (position, symbol) in TokenSymbol::ALL.iter().enumerate() {
            assert_eq!(registry.rank(symbol.as_str()), Some(position as u32));
        }
    }

    #[test]
    fn test_preset_lookups() {
        let registry = TokenRegistry::preset();

        assert_eq!(registry.get_chain("ACA").expect("ACA chain"), Chain::Acala);
        assert_eq!(registry.get_name("ACA").expect("ACA name"), "Acala");
        assert_eq!(registry.get_decimal("ACA").expect("ACA decimal"), 12);

        assert_eq!(
            registry.get_chain("DOT").expect("DOT chain"),
            Chain::Polkadot
        );
        assert_eq!(registry.get_decimal("DOT").expect("DOT decimal"), 10);
    }

    #[test]
    fn test_unknown_symbol_fails_fast() {
        let registry = TokenRegistry::preset();

        assert_eq!(
            registry.get_chain("KSM"),
            Err(SdkError::unknown_symbol("KSM"))
        );
        assert_eq!(
            registry.get_name("KSM"),
            Err(SdkError::unknown_symbol("KSM"))
        );
        assert_eq!(
            registry.get_decimal("KSM"),
            Err(SdkError::unknown_symbol("KSM"))
        );
        assert_eq!(registry.rank("KSM"), None);
    }

    #[test]
    fn test_tokens_iterates_every_entry() {
        let registry = TokenRegistry::preset();

        let mut symbols: Vec<&str> = registry
            .tokens()
            .map(|entry| entry.symbol.as_str())
            .collect();
        symbols.sort_unstable();

        let mut expected: Vec<&str> = TokenSymbol::ALL.iter().map(TokenSymbol::as_str).collect();
        expected.sort_unstable();
        assert_eq!(symbols, expected);

        // Entries come out whole, not just keys
        let aca = registry
            .tokens()
            .find(|entry| entry.symbol == "ACA")
            .expect("ACA entry");
        assert_eq!(aca.name, "Acala");
        assert_eq!(aca.decimal, 12);
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = TokenRegistry::new();
        registry.register(TokenEntry::new("ACA", Chain::Acala, "Acala", 12));
        registry.register(TokenEntry::new("ACA", Chain::Acala, "Acala Mainnet", 12));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_name("ACA").expect("ACA name"), "Acala Mainnet");
    }

    #[test]
    fn test_set_rank_overrides() {
        let mut registry = TokenRegistry::new();
        registry.set_rank("DOT", 5);
        registry.set_rank("DOT", 0);

        assert_eq!(registry.rank("DOT"), Some(0));
    }

    #[test]
    fn test_empty_registry() {
        let registry = TokenRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.entry("ACA").is_none());
    }
}
