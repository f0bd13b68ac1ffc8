//! Chain type factory
//!
//! The seam between SDK token values and a connected chain's type
//! registry. Encoding goes through [`CurrencyFactory`] so callers can
//! swap in a node-backed encoder, and tests can run without one.

use std::str::FromStr;

use acala_types::{CurrencyId, TokenSymbol};

use crate::error::{SdkError, SdkResult};
use crate::token::ChainData;

/// Creates chain-side currency identifiers from SDK wire shapes.
#[cfg_attr(test, mockall::automock)]
pub trait CurrencyFactory {
    fn create_currency_id(&self, data: &ChainData) -> SdkResult<CurrencyId>;
}

/// Factory backed by the statically known symbol table.
///
/// Resolves symbols offline; anything outside the registered set fails
/// with [`SdkError::UnknownSymbol`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCurrencyFactory;

impl CurrencyFactory for StaticCurrencyFactory {
    fn create_currency_id(&self, data: &ChainData) -> SdkResult<CurrencyId> {
        match data {
            ChainData::Token(symbol) => {
                TokenSymbol::from_str(symbol).map(CurrencyId::Token).map_err(|_| {
                    log::warn!("cannot encode unregistered symbol: {}", symbol);
                    SdkError::unknown_symbol(symbol.as_str())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use crate::token_config::TokenRegistry;

    #[test]
    fn test_static_factory_resolves_every_registered_symbol() {
        let factory = StaticCurrencyFactory;

        for symbol in TokenSymbol::ALL {
            let data = ChainData::Token(symbol.as_str().to_string());
            let currency = factory.create_currency_id(&data).expect("registered symbol");
            assert_eq!(currency, CurrencyId::Token(symbol));
        }
    }

    #[test]
    fn test_static_factory_rejects_unknown_symbol() {
        let factory = StaticCurrencyFactory;
        let data = ChainData::Token("KSM".to_string());

        assert_eq!(
            factory.create_currency_id(&data),
            Err(SdkError::unknown_symbol("KSM"))
        );
    }

    #[test]
    fn test_token_round_trips_through_static_factory() {
        let registry = TokenRegistry::preset();
        let factory = StaticCurrencyFactory;

        for symbol in TokenSymbol::ALL {
            let token = Token::from_token_symbol(registry, symbol).expect("preset token");
            let currency = token.to_currency_id(&factory).expect("encode");
            let decoded = Token::from_currency_id(registry, currency).expect("decode");
            assert!(token.is_equal(&decoded));
        }
    }

    #[test]
    fn test_factory_error_propagates_to_caller() {
        let registry = TokenRegistry::preset();
        let token = Token::from_token_symbol(registry, TokenSymbol::ACA).expect("preset token");

        let mut factory = MockCurrencyFactory::new();
        factory
            .expect_create_currency_id()
            .returning(|_| Err(SdkError::type_creation("registry offline")));

        assert_eq!(
            token.to_currency_id(&factory),
            Err(SdkError::type_creation("registry offline"))
        );
    }
}
