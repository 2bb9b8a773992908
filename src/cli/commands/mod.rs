//! Subcommand implementations.

mod fetch;
mod serve;

pub use fetch::cmd_fetch;
pub use serve::cmd_serve;
