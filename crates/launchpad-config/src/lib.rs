//! # launchpad-config
//!
//! Configuration system for the Launchpad host. Reads from `launchpad.toml`
//! and environment variables — in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{LaunchpadConfig, LoggingConfig, ServerConfig};
