//! Test utilities for the redemption router workspace.
//!
//! Random Bitcoin value generators for fixtures, plus scriptable in-memory implementations of
//! the router's collaborator traits with call recording, so tests can both steer collaborator
//! behavior and assert on what the router asked of them.

pub mod bitcoin;
pub mod mocks;
