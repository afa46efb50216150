//! The per-locker, append-only burn-request ledger.

use std::collections::HashMap;

use bitcoin::Amount;
use cinder_bridge_primitives::{
    script::UserScript,
    types::{AccountId, BitcoinBlockHeight, RequestIndex},
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{LedgerError, LedgerResult};

/// A single redemption claim against a locker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRequest {
    /// Wrapped-token amount originally requested by the sender.
    pub amount: u64,

    /// Bitcoin-side payment the locker owes, net of every fee.
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub burnt_amount: Amount,

    /// Owner of the claim and beneficiary of an idle-locker slash.
    pub sender: AccountId,

    /// Destination script the payout must use.
    pub user_script: UserScript,

    /// Block height by which payment must be proven.
    pub deadline: BitcoinBlockHeight,

    /// True once the claim is paid or slashed.
    pub is_transferred: bool,
}

/// Per-locker claim storage.
///
/// Claims are addressed by `(locker, index)`; indexes increase by one per locker and are
/// never reused. Records are never removed, so settled claims stay visible for audit.
#[derive(Debug, Default, Clone)]
pub struct BurnRequestTable {
    /// locker -> claims in creation order
    requests: HashMap<AccountId, Vec<BurnRequest>>,
}

impl BurnRequestTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a claim for `locker`, returning the index it was assigned.
    pub fn append(&mut self, locker: AccountId, request: BurnRequest) -> RequestIndex {
        let claims = self.requests.entry(locker).or_default();
        let index = claims.len() as RequestIndex;
        claims.push(request);
        trace!(%locker, %index, "appended burn request");
        index
    }

    /// Number of claims recorded against `locker`.
    pub fn count(&self, locker: AccountId) -> u64 {
        self.requests
            .get(&locker)
            .map_or(0, |claims| claims.len() as u64)
    }

    /// Looks up the claim at `(locker, index)`.
    pub fn get(&self, locker: AccountId, index: RequestIndex) -> LedgerResult<&BurnRequest> {
        self.requests
            .get(&locker)
            .and_then(|claims| claims.get(index as usize))
            .ok_or(LedgerError::WrongIndex {
                locker,
                index,
                len: self.count(locker),
            })
    }

    /// Whether the claim at `(locker, index)` has been settled.
    pub fn is_transferred(&self, locker: AccountId, index: RequestIndex) -> LedgerResult<bool> {
        self.get(locker, index).map(|request| request.is_transferred)
    }

    /// Marks the claim at `(locker, index)` settled.
    ///
    /// Each claim settles exactly once; a second call fails with
    /// [`LedgerError::AlreadySettled`].
    pub fn mark_transferred(
        &mut self,
        locker: AccountId,
        index: RequestIndex,
    ) -> LedgerResult<()> {
        let len = self.count(locker);
        let request = self
            .requests
            .get_mut(&locker)
            .and_then(|claims| claims.get_mut(index as usize))
            .ok_or(LedgerError::WrongIndex { locker, index, len })?;

        if request.is_transferred {
            return Err(LedgerError::AlreadySettled { locker, index });
        }

        request.is_transferred = true;
        trace!(%locker, %index, "marked burn request transferred");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cinder_bridge_primitives::script::ScriptType;
    use cinder_bridge_test_utils::bitcoin::generate_user_script;

    use super::*;

    fn request(sender: AccountId) -> BurnRequest {
        BurnRequest {
            amount: 100_060_030,
            burnt_amount: Amount::from_sat(100_000_000),
            sender,
            user_script: generate_user_script(ScriptType::P2pkh),
            deadline: 120,
            is_transferred: false,
        }
    }

    #[test]
    fn append_assigns_sequential_indexes() {
        let locker = AccountId::new([7; 20]);
        let other = AccountId::new([8; 20]);
        let mut table = BurnRequestTable::new();

        assert_eq!(table.count(locker), 0);
        assert_eq!(table.append(locker, request(AccountId::new([1; 20]))), 0);
        assert_eq!(table.append(locker, request(AccountId::new([2; 20]))), 1);

        // indexes are tracked per locker
        assert_eq!(table.append(other, request(AccountId::new([3; 20]))), 0);

        assert_eq!(table.count(locker), 2);
        assert_eq!(table.count(other), 1);
    }

    #[test]
    fn lookup_is_bounds_checked() {
        let locker = AccountId::new([7; 20]);
        let mut table = BurnRequestTable::new();
        table.append(locker, request(AccountId::new([1; 20])));

        assert!(table.get(locker, 0).is_ok());
        assert!(matches!(
            table.get(locker, 1),
            Err(LedgerError::WrongIndex { index: 1, len: 1, .. })
        ));
        assert!(matches!(
            table.get(AccountId::new([9; 20]), 0),
            Err(LedgerError::WrongIndex { len: 0, .. })
        ));
    }

    #[test]
    fn mark_transferred_is_single_shot() {
        let locker = AccountId::new([7; 20]);
        let mut table = BurnRequestTable::new();
        table.append(locker, request(AccountId::new([1; 20])));

        assert!(!table.is_transferred(locker, 0).unwrap());
        table.mark_transferred(locker, 0).unwrap();
        assert!(table.is_transferred(locker, 0).unwrap());

        assert!(matches!(
            table.mark_transferred(locker, 0),
            Err(LedgerError::AlreadySettled { index: 0, .. })
        ));
    }
}
