//! Token value object and ordered set
//!
//! [`Token`] normalizes every way a token reaches the SDK (chain-encoded
//! currency id, bare symbol, explicit fields) into one value with chain,
//! name, symbol and decimal resolved up front. Identity is (chain, symbol);
//! display metadata never affects equality, hashing, or set membership.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use acala_types::{CurrencyId, TokenSymbol};

use crate::chain_client::CurrencyFactory;
use crate::error::{SdkError, SdkResult};
use crate::token_config::TokenRegistry;
use crate::types::Chain;

/// Fixed-point scale assumed when a token is built without one.
pub const DEFAULT_DECIMAL: u8 = 18;

/// Inputs for [`Token::new`]. Only the name is required.
#[derive(Debug, Clone, Default)]
pub struct TokenParams {
    pub chain: Option<Chain>,
    pub name: String,
    pub symbol: Option<String>,
    pub decimal: Option<u8>,
}

impl TokenParams {
    /// Params carrying just a name, everything else defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Field overrides for [`Token::clone_with`].
///
/// Unset fields keep the receiver's values; set fields are applied
/// verbatim, including zero decimals and empty strings.
#[derive(Debug, Clone, Default)]
pub struct TokenPatch {
    pub chain: Option<Chain>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimal: Option<u8>,
}

/// A resolved token.
///
/// Fields are fixed at construction; there are no setters. Two tokens are
/// the same asset exactly when chain and symbol match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    chain: Chain,
    name: String,
    symbol: String,
    decimal: u8,
}

impl Token {
    /// Build a token from explicit fields.
    ///
    /// An absent symbol falls back to the name, an absent decimal to
    /// [`DEFAULT_DECIMAL`], an absent chain to the default chain.
    pub fn new(params: TokenParams) -> Self {
        let symbol = params.symbol.unwrap_or_else(|| params.name.clone());
        Self {
            chain: params.chain.unwrap_or_default(),
            symbol,
            name: params.name,
            decimal: params.decimal.unwrap_or(DEFAULT_DECIMAL),
        }
    }

    /// Build a token from a chain-encoded currency identifier.
    ///
    /// Only the plain `Token` kind names a single token; any other kind
    /// is rejected with [`SdkError::InvalidCurrencyKind`].
    pub fn from_currency_id(registry: &TokenRegistry, currency: CurrencyId) -> SdkResult<Self> {
        let symbol = currency
            .as_token()
            .ok_or_else(|| SdkError::invalid_currency_kind(currency.kind()))?;
        Self::from_token_symbol(registry, symbol)
    }

    /// Build a token from a bare symbol, resolving metadata from the
    /// registry.
    pub fn from_token_symbol(registry: &TokenRegistry, symbol: TokenSymbol) -> SdkResult<Self> {
        let symbol = symbol.as_str();
        Ok(Self {
            chain: registry.get_chain(symbol)?,
            name: registry.get_name(symbol)?.to_string(),
            symbol: symbol.to_string(),
            decimal: registry.get_decimal(symbol)?,
        })
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimal(&self) -> u8 {
        self.decimal
    }

    /// Identity comparison on (chain, symbol) only
    pub fn is_equal(&self, other: &Token) -> bool {
        self == other
    }

    /// Chain-encodable form of this token.
    pub fn to_chain_data(&self) -> ChainData {
        ChainData::Token(self.symbol.clone())
    }

    /// Encode this token as a currency identifier through the chain's
    /// type factory.
    pub fn to_currency_id(&self, factory: &dyn CurrencyFactory) -> SdkResult<CurrencyId> {
        factory.create_currency_id(&self.to_chain_data())
    }

    /// Copy of this token with the patch applied.
    pub fn clone_with(&self, patch: TokenPatch) -> Token {
        Token {
            chain: patch.chain.unwrap_or(self.chain),
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            symbol: patch.symbol.unwrap_or_else(|| self.symbol.clone()),
            decimal: patch.decimal.unwrap_or(self.decimal),
        }
    }

    /// Sort a slice of tokens into canonical order without touching the
    /// input.
    pub fn sort(registry: &TokenRegistry, tokens: &[Token]) -> Vec<Token> {
        sort_tokens(registry, tokens.iter().cloned())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain && self.symbol == other.symbol
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain.hash(state);
        self.symbol.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Sort tokens into canonical order.
///
/// The key is the registry rank of each token's symbol. Unranked symbols
/// keep their relative input order after every ranked one; the sort is
/// stable throughout.
pub fn sort_tokens(
    registry: &TokenRegistry,
    tokens: impl IntoIterator<Item = Token>,
) -> Vec<Token> {
    let mut sorted: Vec<Token> = tokens.into_iter().collect();
    sorted.sort_by_key(|token| registry.rank(token.symbol()).unwrap_or(u32::MAX));
    sorted
}

/// Wire shape understood by the chain's type encoder.
///
/// Serializes with the external tag the node expects: `{"Token":"ACA"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainData {
    Token(String),
}

/// Insertion-ordered collection of tokens, deduplicated by identity.
///
/// The first token added for an identity wins; later duplicates are
/// dropped. Removing and re-adding a token appends it at the end.
/// Deserialization replays [`add`] per element, so decoded sets hold the
/// same uniqueness guarantee as built ones.
///
/// [`add`]: TokenSet::add
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "TokenSetData")]
pub struct TokenSet {
    list: Vec<Token>,
}

/// Raw wire form of [`TokenSet`], accepted as-is and deduplicated on
/// conversion.
#[derive(Deserialize)]
struct TokenSetData {
    list: Vec<Token>,
}

impl From<TokenSetData> for TokenSet {
    fn from(data: TokenSetData) -> Self {
        let mut set = TokenSet::new();
        for token in data.list {
            set.add(token);
        }
        set
    }
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens in insertion order.
    pub fn values(&self) -> &[Token] {
        &self.list
    }

    /// Append a token unless an identity-equal one is already present.
    pub fn add(&mut self, token: Token) {
        if !self.contains(&token) {
            self.list.push(token);
        }
    }

    /// Remove the token matching by identity, if present.
    pub fn delete(&mut self, token: &Token) {
        self.list.retain(|existing| !existing.is_equal(token));
    }

    /// Drop every token.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.list.iter().any(|existing| existing.is_equal(token))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
