//! Error handling for the SDK core
//!
//! This module defines the error type used throughout the SDK core.

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("Invalid currency kind: expected Token, got {0}")]
    InvalidCurrencyKind(String),

    #[error("Unknown token symbol: {0}")]
    UnknownSymbol(String),

    #[error("Type creation error: {0}")]
    TypeCreation(String),
}

impl SdkError {
    /// Create an invalid currency kind error
    pub fn invalid_currency_kind(kind: impl Into<String>) -> Self {
        Self::InvalidCurrencyKind(kind.into())
    }

    /// Create an unknown symbol error
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol(symbol.into())
    }

    /// Create a type creation error
    pub fn type_creation(message: impl Into<String>) -> Self {
        Self::TypeCreation(message.into())
    }
}

/// Result alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
