//! Currency primitives
//!
//! The symbol enum and the currency identifier union used across the
//! runtime's currency-aware modules. The declaration order of
//! [`TokenSymbol`] is canonical: it is the order the chain registers the
//! symbols in, and downstream sort tables are derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Registered token symbols, in canonical chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum TokenSymbol {
    ACA,
    AUSD,
    DOT,
    XBTC,
    LDOT,
    RENBTC,
}

impl TokenSymbol {
    /// Every registered symbol, in canonical order.
    pub const ALL: [TokenSymbol; 6] = [
        TokenSymbol::ACA,
        TokenSymbol::AUSD,
        TokenSymbol::DOT,
        TokenSymbol::XBTC,
        TokenSymbol::LDOT,
        TokenSymbol::RENBTC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::ACA => "ACA",
            TokenSymbol::AUSD => "AUSD",
            TokenSymbol::DOT => "DOT",
            TokenSymbol::XBTC => "XBTC",
            TokenSymbol::LDOT => "LDOT",
            TokenSymbol::RENBTC => "RENBTC",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a registered token symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown token symbol: {0}")]
pub struct ParseTokenSymbolError(pub String);

impl FromStr for TokenSymbol {
    type Err = ParseTokenSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACA" => Ok(TokenSymbol::ACA),
            "AUSD" => Ok(TokenSymbol::AUSD),
            "DOT" => Ok(TokenSymbol::DOT),
            "XBTC" => Ok(TokenSymbol::XBTC),
            "LDOT" => Ok(TokenSymbol::LDOT),
            "RENBTC" => Ok(TokenSymbol::RENBTC),
            _ => Err(ParseTokenSymbolError(s.to_string())),
        }
    }
}

/// Currency identifier union.
///
/// The runtime encodes every transactable asset as one of these kinds. The
/// JSON form is externally tagged, matching the chain's type encoder:
/// `{"Token":"ACA"}`, `{"DexShare":["ACA","AUSD"]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyId {
    /// A plain registered token.
    Token(TokenSymbol),
    /// A liquidity-pool share over a trading pair.
    DexShare(TokenSymbol, TokenSymbol),
}

impl CurrencyId {
    pub fn is_token(&self) -> bool {
        matches!(self, CurrencyId::Token(_))
    }

    pub fn is_dex_share(&self) -> bool {
        matches!(self, CurrencyId::DexShare(_, _))
    }

    /// The symbol when this identifier is the token kind.
    pub fn as_token(&self) -> Option<TokenSymbol> {
        match self {
            CurrencyId::Token(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Name of the kind tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CurrencyId::Token(_) => "Token",
            CurrencyId::DexShare(_, _) => "DexShare",
        }
    }
}
