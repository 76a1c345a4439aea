//! CLI support for the `verso` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod session;

pub use context::CommandContext;
