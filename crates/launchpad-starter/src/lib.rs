//! # launchpad-starter
//!
//! The starter plugin. Registered once at host startup, it:
//!
//! - sets the host's `views` setting to this crate's `server/views`
//!   directory, where its template assets live
//! - binds `GET /lander`, whose handler logs one diagnostic line and then
//!   never answers (see [`StarterPlugin`])
//! - declares the two client-side modules its front end needs

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::response::Response;
use tracing::info;

use launchpad_core::Result;
use launchpad_plugin::{Plugin, PluginContext};

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "starter";

/// Client-side modules the host's bootstrapper must load with this plugin,
/// in load order.
pub const CLIENT_DEPENDENCIES: [&str; 2] = ["launchpad.system", "launchpad.users"];

/// The starter plugin.
///
/// Its only runtime state is a counter of `/lander` requests, exposed so
/// the host's metrics and the tests can observe handler invocations —
/// necessary because the handler never writes a response: the request
/// stalls until the client gives up. That behavior is deliberate; see
/// DESIGN.md.
pub struct StarterPlugin {
    hits: Arc<AtomicU64>,
}

impl StarterPlugin {
    pub fn new() -> Self {
        Self {
            hits: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shared handle to the `/lander` request counter. Take it before
    /// registering — the host retains the plugin afterwards.
    pub fn hit_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.hits)
    }

    /// Template asset directory this plugin registers under the `views`
    /// setting: `<crate root>/server/views`.
    pub fn views_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("server")
            .join("views")
    }
}

impl Default for StarterPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for StarterPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn register(&mut self, ctx: &mut PluginContext<'_>) -> Result<()> {
        ctx.app.set("views", Self::views_dir().to_string_lossy());

        let hits = Arc::clone(&self.hits);
        ctx.app
            .get("/lander", move || lander_handler(Arc::clone(&hits)));

        ctx.client_dependencies(&CLIENT_DEPENDENCIES);
        Ok(())
    }
}

/// Logs the fixed diagnostic line, bumps the counter, and parks forever:
/// no status or body is ever written, so the connection stalls until the
/// client's own timeout.
async fn lander_handler(hits: Arc<AtomicU64>) -> Response {
    hits.fetch_add(1, Ordering::Relaxed);
    info!("I received a Lander request");
    std::future::pending().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_plugin::{PluginHost, SystemService, UsersService};

    fn registered_host() -> (PluginHost, Arc<AtomicU64>) {
        let mut host = PluginHost::new(UsersService::new(), SystemService::new());
        let plugin = StarterPlugin::new();
        let hits = plugin.hit_counter();
        host.register(plugin).unwrap();
        (host, hits)
    }

    #[test]
    fn test_registration_succeeds() {
        let (host, hits) = registered_host();
        assert_eq!(host.plugin_names(), vec![PLUGIN_NAME]);
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_views_setting_points_at_crate_views_dir() {
        let (host, _) = registered_host();
        let expected = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("server")
            .join("views");
        assert_eq!(
            host.setting("views"),
            Some(expected.to_string_lossy().as_ref())
        );
        assert!(expected.join("index.html").exists());
    }

    #[test]
    fn test_client_dependencies_fixed_and_ordered() {
        let (host, _) = registered_host();
        assert_eq!(
            host.client_dependencies_of(PLUGIN_NAME).unwrap(),
            &[
                "launchpad.system".to_string(),
                "launchpad.users".to_string()
            ]
        );
    }

    #[test]
    fn test_second_starter_is_rejected_by_host() {
        let (mut host, _) = registered_host();
        let err = host.register(StarterPlugin::new()).unwrap_err();
        assert!(matches!(
            err,
            launchpad_core::LaunchpadError::Plugin { ref plugin, .. } if plugin == PLUGIN_NAME
        ));
    }
}
