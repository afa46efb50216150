//! Identity and height types shared across the router.

use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use hex::FromHex;
use serde::{Deserialize, Serialize};

use crate::errors::AccountIdError;

/// Height of a block on the Bitcoin chain as tracked by the relay.
pub type BitcoinBlockHeight = u64;

/// Position of a burn request within one locker's append-only claim list.
pub type RequestIndex = u64;

/// Number of bytes in an [`AccountId`].
pub const ACCOUNT_ID_LEN: usize = 20;

/// A 20-byte identity on the chain hosting the wrapped token.
///
/// Identifies claim owners, lockers, the treasury and the collaborator endpoints. The all-zero
/// identity is reserved as "unset" and rejected wherever an endpoint is configured.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Arbitrary)]
pub struct AccountId(#[serde(with = "hex::serde")] [u8; ACCOUNT_ID_LEN]);

impl AccountId {
    /// The reserved all-zero identity.
    pub const ZERO: AccountId = AccountId([0; ACCOUNT_ID_LEN]);

    /// Creates a new identity from a byte array.
    pub const fn new(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        AccountId(bytes)
    }

    /// Returns the identity as a byte array.
    pub const fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// Returns true for the reserved all-zero identity.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = AccountIdError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; ACCOUNT_ID_LEN] = bytes
            .try_into()
            .map_err(|_| AccountIdError::InvalidLength(bytes.len()))?;
        Ok(AccountId(array))
    }
}

impl From<AccountId> for [u8; ACCOUNT_ID_LEN] {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() != 2 * ACCOUNT_ID_LEN {
            return Err(AccountIdError::InvalidLength(stripped.len() / 2));
        }
        let bytes =
            <[u8; ACCOUNT_ID_LEN]>::from_hex(stripped).map_err(|_| AccountIdError::InvalidHex)?;
        Ok(AccountId(bytes))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", hex::encode(self.0))
    }
}
