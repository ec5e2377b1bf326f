//! Terminal output helpers
//!
//! Uses `cliclack` for styled output on interactive terminals, with plain
//! text when output is piped or running in CI.

mod context;
mod output;

pub use context::UiContext;
pub use output::{empty, field, heading, saved, skipped, total};
