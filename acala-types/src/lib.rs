//! Acala chain type declarations
//!
//! Rust bindings for the chain-side types the SDK works with:
//!
//! - **Runtime**: primitive aliases (`AccountId`, `Balance`, `EraIndex`, ...)
//! - **Primitives**: the [`TokenSymbol`] registry and the [`CurrencyId`]
//!   currency union, with the JSON forms the chain's type encoder expects
//! - **Interfaces**: per-module storage shapes (currently the nominees
//!   election bonding ledger)
//!
//! Everything here is declaration-only. Behavior - lookups, normalization,
//! ordering - lives in `acala-sdk-core`.

pub mod interfaces;
pub mod primitives;
pub mod runtime;

// Re-export the commonly used types
pub use interfaces::nominees_election::{BondingLedger, HomaUnlockChunk, NomineeId};
pub use primitives::{CurrencyId, ParseTokenSymbolError, TokenSymbol};
pub use runtime::{AccountId, Balance, BlockNumber, EraIndex};
