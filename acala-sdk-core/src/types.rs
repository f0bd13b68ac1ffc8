//! Shared SDK types
//!
//! The chain identifier used to tag where a token originates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin chain of a token.
///
/// `Acala` is the home chain: tokens constructed without an explicit chain
/// belong to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Acala,
    Polkadot,
    Bitcoin,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Acala => "acala",
            Chain::Polkadot => "polkadot",
            Chain::Bitcoin => "bitcoin",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_chain_is_default() {
        assert_eq!(Chain::default(), Chain::Acala);
    }

    #[test]
    fn test_chain_display() {
        assert_eq!(Chain::Acala.to_string(), "acala");
        assert_eq!(Chain::Polkadot.to_string(), "polkadot");
        assert_eq!(Chain::Bitcoin.to_string(), "bitcoin");
    }

    #[test]
    fn test_chain_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Chain::Polkadot).expect("serialize chain"),
            r#""polkadot""#
        );
        let decoded: Chain = serde_json::from_str(r#""acala""#).expect("decode chain");
        assert_eq!(decoded, Chain::Acala);
    }
}
