//! The used-proof registry shared by the proof and theft-dispute paths.

use std::collections::HashSet;

use bitcoin::Txid;
use tracing::trace;

/// Set of Bitcoin transaction ids consumed by a settlement path.
///
/// An id enters at most once, whether admitted as a fully-valid burn payment or spent by a
/// successful theft dispute; both paths check membership before mutating anything, which is
/// what prevents one transaction from being credited twice across them.
#[derive(Debug, Default, Clone)]
pub struct UsedProofRegistry {
    used: HashSet<Txid>,
}

impl UsedProofRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `txid` has already been consumed.
    pub fn contains(&self, txid: &Txid) -> bool {
        self.used.contains(txid)
    }

    /// Records `txid` as consumed, returning false if it already was.
    pub fn insert(&mut self, txid: Txid) -> bool {
        let inserted = self.used.insert(txid);
        if inserted {
            trace!(%txid, "recorded used burn proof");
        }
        inserted
    }

    /// Number of consumed transaction ids.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no id has been consumed yet.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
