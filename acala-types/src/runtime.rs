//! Runtime primitive aliases
//!
//! Scalar type bindings shared by every interface module. These mirror the
//! chain runtime's primitive names so interface shapes read the same here
//! as they do on-chain.

/// SS58-encoded account identifier.
pub type AccountId = String;

/// Token amount in the chain's smallest unit.
pub type Balance = u128;

/// Block height.
pub type BlockNumber = u32;

/// Staking era counter.
pub type EraIndex = u32;
