//! Acala SDK Core
//!
//! Convenience layer over the chain's currency primitives.
//! Normalizes the ways a token reaches the SDK into one [`Token`] value
//! object, keeps deduplicated token collections, and applies the canonical
//! sort used across SDK surfaces.
//!
//! ## Architecture
//!
//! This library follows a small layered architecture:
//!
//! - **types**: chain identifiers
//! - **error**: SDK error and result types
//! - **token_config**: the token metadata registry and the preset table
//! - **token**: the token value object, canonical sorting, and the token set
//! - **chain_client**: the currency factory seam to a chain's type encoder
//!
//! ## Usage
//!
//! ```rust
//! use acala_sdk_core::{StaticCurrencyFactory, Token, TokenRegistry};
//! use acala_types::TokenSymbol;
//!
//! let registry = TokenRegistry::preset();
//! let aca = Token::from_token_symbol(registry, TokenSymbol::ACA)?;
//! assert_eq!(aca.symbol(), "ACA");
//! assert_eq!(aca.decimal(), 12);
//!
//! let currency = aca.to_currency_id(&StaticCurrencyFactory)?;
//! assert!(currency.is_token());
//! # Ok::<(), acala_sdk_core::SdkError>(())
//! ```

// Re-export main modules for easy access
pub mod chain_client;
pub mod error;
pub mod token;
pub mod token_config;
pub mod types;

// Re-export the runtime type definitions this SDK builds on
pub use acala_types;

// Re-export core components
pub use chain_client::{CurrencyFactory, StaticCurrencyFactory};
pub use token::{
    sort_tokens, ChainData, Token, TokenParams, TokenPatch, TokenSet, DEFAULT_DECIMAL,
};
pub use token_config::{PresetToken, TokenEntry, TokenRegistry, PRESET_TOKENS};

// Re-export shared types
pub use error::{SdkError, SdkResult};
pub use types::Chain;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
