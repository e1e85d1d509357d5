//! # launchpad-core
//!
//! Shared error type for the Launchpad host. This crate defines the
//! vocabulary used by every other crate in the workspace.

pub mod error;

pub use error::{LaunchpadError, Result};
