//! The exchange connector used by the swap-then-burn pre-step.

use crate::{errors::ConnectorError, types::AccountId};

/// A swap venue able to convert an arbitrary token into the wrapped token.
pub trait ExchangeConnector {
    /// Executes a swap along `path`, crediting the final output to `recipient`.
    ///
    /// `amounts` carries one bound per path element; `is_input_fixed` selects whether the
    /// input or the output end is exact. Returns the venue's success flag together with the
    /// realized amount at every hop.
    fn swap(
        &mut self,
        amounts: &[u64],
        path: &[AccountId],
        is_input_fixed: bool,
        recipient: AccountId,
        deadline: u64,
    ) -> Result<(bool, Vec<u64>), ConnectorError>;
}
