//! # launchpad-plugin
//!
//! Plugin registration contract for the Launchpad host. A plugin is a unit
//! of server-side functionality registered once at startup. During
//! registration it receives an application handle plus the host's named
//! service handles, and may:
//!
//! - store host-wide settings (`app.set("views", ...)`)
//! - bind HTTP routes (`app.get("/path", handler)`)
//! - declare the client-side modules its front end needs
//!
//! The [`PluginHost`] keeps plugin names unique and records each plugin's
//! client dependencies in declaration order; the host's HTTP layer turns
//! the accumulated routes into a served router.

pub mod app;
pub mod host;
pub mod services;

pub use app::AppHandle;
pub use host::{Plugin, PluginContext, PluginHost};
pub use services::{SystemService, UsersService};
