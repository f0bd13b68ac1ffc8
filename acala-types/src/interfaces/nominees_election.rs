//! Nominees election interface shapes
//!
//! Data contracts for the staking/bonding storage of the nominees election
//! module. These are plain records: decoding and encoding is all they are
//! for, and consumers must not attach behavior to them.

use serde::{Deserialize, Serialize};

use crate::runtime::{AccountId, Balance, EraIndex};

/// Account nominated for the staking pool.
pub type NomineeId = AccountId;

/// A pending unbond: `value` becomes withdrawable once `era` is reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomaUnlockChunk {
    pub value: Balance,
    pub era: EraIndex,
}

/// Bonded stake of one account: the total bond, the portion still at
/// stake, and the scheduled unlocks in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondingLedger {
    pub total: Balance,
    pub active: Balance,
    pub unlocking: Vec<HomaUnlockChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonding_ledger_decodes_storage_json() {
        let raw = r#"{
            "total": 1200000000000,
            "active": 1000000000000,
            "unlocking": [
                { "value": 150000000000, "era": 93 },
                { "value": 50000000000, "era": 95 }
            ]
        }"#;

        let ledger: BondingLedger = serde_json::from_str(raw).expect("decode ledger");
        assert_eq!(ledger.total, 1_200_000_000_000);
        assert_eq!(ledger.active, 1_000_000_000_000);
        assert_eq!(ledger.unlocking.len(), 2);
        assert_eq!(
            ledger.unlocking[0],
            HomaUnlockChunk {
                value: 150_000_000_000,
                era: 93
            }
        );
        assert_eq!(ledger.unlocking[1].era, 95);
    }

    #[test]
    fn test_bonding_ledger_default_is_empty() {
        let ledger = BondingLedger::default();
        assert_eq!(ledger.total, 0);
        assert_eq!(ledger.active, 0);
        assert!(ledger.unlocking.is_empty());
    }
}
