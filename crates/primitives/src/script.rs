//! User-supplied Bitcoin destination scripts and their supported type tags.

use std::fmt;

use arbitrary::Arbitrary;
use bitcoin::{hashes::Hash, PubkeyHash, ScriptBuf, ScriptHash, WPubkeyHash, WScriptHash};
use serde::{Deserialize, Serialize};

use crate::errors::ScriptError;

/// Payload length in bytes for P2PKH, P2SH and P2WPKH scripts.
pub const HASH160_LEN: usize = 20;

/// Payload length in bytes for P2WSH scripts.
pub const SHA256_LEN: usize = 32;

/// Tag identifying the kind of a user-supplied destination script.
///
/// The discriminants are the wire-level tags callers pass alongside the raw payload; tag 0 is
/// reserved upstream for raw-pubkey destinations, which the router does not pay out to.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Arbitrary)]
pub enum ScriptType {
    /// Pay-to-pubkey-hash.
    P2pkh = 1,
    /// Pay-to-script-hash.
    P2sh = 2,
    /// Pay-to-witness-pubkey-hash.
    P2wpkh = 3,
    /// Pay-to-witness-script-hash.
    P2wsh = 4,
}

impl ScriptType {
    /// Payload length in bytes this type requires.
    pub const fn required_len(&self) -> usize {
        match self {
            ScriptType::P2pkh | ScriptType::P2sh | ScriptType::P2wpkh => HASH160_LEN,
            ScriptType::P2wsh => SHA256_LEN,
        }
    }
}

impl TryFrom<u8> for ScriptType {
    type Error = ScriptError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ScriptType::P2pkh),
            2 => Ok(ScriptType::P2sh),
            3 => Ok(ScriptType::P2wpkh),
            4 => Ok(ScriptType::P2wsh),
            other => Err(ScriptError::UnknownType(other)),
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptType::P2pkh => "p2pkh",
            ScriptType::P2sh => "p2sh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wsh => "p2wsh",
        };
        write!(f, "{name}")
    }
}

/// A validated destination for a redemption payout.
///
/// Holds the hash payload of one of the supported script kinds; the full output script is
/// reconstructed on demand for output matching. Construction is the single validation point,
/// so a held value is always well-formed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Arbitrary)]
pub enum UserScript {
    /// Pay-to-pubkey-hash destination.
    P2pkh(#[serde(with = "hex::serde")] [u8; HASH160_LEN]),
    /// Pay-to-script-hash destination.
    P2sh(#[serde(with = "hex::serde")] [u8; HASH160_LEN]),
    /// Pay-to-witness-pubkey-hash destination.
    P2wpkh(#[serde(with = "hex::serde")] [u8; HASH160_LEN]),
    /// Pay-to-witness-script-hash destination.
    P2wsh(#[serde(with = "hex::serde")] [u8; SHA256_LEN]),
}

impl UserScript {
    /// Validates a raw payload against its claimed script type.
    pub fn new(payload: &[u8], ty: ScriptType) -> Result<Self, ScriptError> {
        let invalid_len = |got: usize| ScriptError::InvalidLength {
            ty,
            expected: ty.required_len(),
            got,
        };

        match ty {
            ScriptType::P2pkh => payload
                .try_into()
                .map(UserScript::P2pkh)
                .map_err(|_| invalid_len(payload.len())),
            ScriptType::P2sh => payload
                .try_into()
                .map(UserScript::P2sh)
                .map_err(|_| invalid_len(payload.len())),
            ScriptType::P2wpkh => payload
                .try_into()
                .map(UserScript::P2wpkh)
                .map_err(|_| invalid_len(payload.len())),
            ScriptType::P2wsh => payload
                .try_into()
                .map(UserScript::P2wsh)
                .map_err(|_| invalid_len(payload.len())),
        }
    }

    /// The type tag of this destination.
    pub const fn script_type(&self) -> ScriptType {
        match self {
            UserScript::P2pkh(_) => ScriptType::P2pkh,
            UserScript::P2sh(_) => ScriptType::P2sh,
            UserScript::P2wpkh(_) => ScriptType::P2wpkh,
            UserScript::P2wsh(_) => ScriptType::P2wsh,
        }
    }

    /// Reconstructs the output script a payout to this destination must carry.
    pub fn script_pubkey(&self) -> ScriptBuf {
        match self {
            UserScript::P2pkh(hash) => ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array(*hash)),
            UserScript::P2sh(hash) => ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(*hash)),
            UserScript::P2wpkh(hash) => {
                ScriptBuf::new_p2wpkh(&WPubkeyHash::from_byte_array(*hash))
            }
            UserScript::P2wsh(hash) => ScriptBuf::new_p2wsh(&WScriptHash::from_byte_array(*hash)),
        }
    }
}
