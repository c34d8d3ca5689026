//! Testing infrastructure for agentstack integration tests.
//!
//! - `TestWorld`: isolated data directory and CLI runner
//! - `assertions`: checks over the JSON envelope the CLI prints
//! - `fixtures`: small catalogs written into the test world

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
