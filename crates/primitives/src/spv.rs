//! SPV inclusion proofs handed to the external relay.

use bitcoin::TxMerkleNode;
use serde::{Deserialize, Serialize};

/// A Merkle-inclusion proof for a transaction in a relay-accepted Bitcoin block.
///
/// The router never verifies this itself; it forwards the proof to the relay along with the
/// transaction id and claimed block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInclusionProof {
    /// Position of the transaction within the block's transaction list.
    pub position: u32,

    /// Sibling hashes from the transaction up to the block's Merkle root.
    pub intermediate_nodes: Vec<TxMerkleNode>,
}

impl TxInclusionProof {
    /// A proof with no intermediate nodes, for blocks carrying a single transaction.
    pub const fn single(position: u32) -> Self {
        Self {
            position,
            intermediate_nodes: Vec::new(),
        }
    }
}
