//! medifusion-cli library root.
//!
//! Exposes the command implementations, config handling, and the results
//! page so integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod page;
