//! Owned state of the redemption router: the per-locker append-only burn-request ledger and
//! the used-proof registry shared by the proof and theft-dispute paths.
//!
//! Everything here is in-memory; the embedding host decides how and whether to persist
//! snapshots. Records are never deleted, so the ledger doubles as the audit history.

pub mod errors;
pub mod proofs;
pub mod requests;
