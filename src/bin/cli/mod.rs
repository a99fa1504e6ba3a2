//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: logging setup and the lint command

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
