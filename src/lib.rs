//! Consensus reconstruction of Shamir-shared secrets
//!
//! The binary is the main entry point; the library is exposed for tests.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod consensus;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod rational;
pub mod subsets;

pub use consensus::{ReconstructionResult, reconstruct};
pub use error::ReconstructError;
pub use rational::ExactRational;
