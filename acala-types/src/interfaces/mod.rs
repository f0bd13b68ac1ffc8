//! Module interface shapes
//!
//! One submodule per runtime module whose storage shapes the SDK decodes.

pub mod nominees_election;

// Re-export interface shapes
pub use nominees_election::*;
