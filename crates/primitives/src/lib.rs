//! This crate contains the types, traits and pure functions shared across the redemption
//! router workspace: account identities, user-supplied Bitcoin scripts, fee arithmetic, SPV
//! proof carriers, and the traits abstracting the router's external collaborators.
//!
//! It sits near the bottom of the crate hierarchy and depends only on the parameters crate.

pub mod connector;
pub mod errors;
pub mod fees;
pub mod registry;
pub mod relay;
pub mod script;
pub mod spv;
pub mod token;
pub mod types;
