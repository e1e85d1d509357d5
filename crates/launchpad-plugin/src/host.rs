use std::sync::Arc;
use tracing::info;

use crate::app::AppHandle;
use crate::services::{SystemService, UsersService};
use launchpad_core::{LaunchpadError, Result};

/// Injected-collaborator bundle passed to [`Plugin::register`].
///
/// The application handle and the two named services are supplied by the
/// host; the context also records the calling plugin's client-side module
/// dependencies.
pub struct PluginContext<'a> {
    pub app: &'a mut AppHandle,
    pub users: &'a Arc<UsersService>,
    pub system: &'a Arc<SystemService>,
    client_deps: Vec<String>,
}

impl PluginContext<'_> {
    /// Declare the client-side modules this plugin's front end needs.
    /// Order is preserved; the host's client bootstrapper consumes the list.
    pub fn client_dependencies(&mut self, deps: &[&str]) {
        self.client_deps.extend(deps.iter().map(|d| d.to_string()));
    }
}

/// A unit of server-side functionality registered with the host at startup.
///
/// Registration runs once, synchronously, during host bootstrap. There is
/// no unregistration.
pub trait Plugin {
    /// Unique plugin name; the host rejects duplicates.
    fn name(&self) -> &str;

    /// Registration entry point, invoked once with the injected
    /// collaborators.
    fn register(&mut self, ctx: &mut PluginContext<'_>) -> Result<()>;
}

/// A plugin the host has accepted, retained for the life of the process.
pub struct RegisteredPlugin {
    pub name: String,
    pub client_dependencies: Vec<String>,
    #[allow(dead_code)]
    plugin: Box<dyn Plugin>,
}

/// The plugin registry. Owns the application handle, the injected services,
/// and every registered plugin.
pub struct PluginHost {
    app: AppHandle,
    users: Arc<UsersService>,
    system: Arc<SystemService>,
    plugins: Vec<RegisteredPlugin>,
}

impl PluginHost {
    pub fn new(users: UsersService, system: SystemService) -> Self {
        Self {
            app: AppHandle::new(),
            users: Arc::new(users),
            system: Arc::new(system),
            plugins: Vec::new(),
        }
    }

    /// Register a plugin. Rejects duplicate names before invoking the
    /// plugin's entry point; any error the entry point returns propagates
    /// unchanged and the registry is left without the plugin.
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<()> {
        let mut plugin = Box::new(plugin);
        let name = plugin.name().to_string();

        if self.plugins.iter().any(|p| p.name == name) {
            return Err(LaunchpadError::Plugin {
                plugin: name,
                reason: "already registered".into(),
            });
        }

        let mut ctx = PluginContext {
            app: &mut self.app,
            users: &self.users,
            system: &self.system,
            client_deps: Vec::new(),
        };
        plugin.register(&mut ctx)?;
        let client_dependencies = ctx.client_deps;

        info!(plugin = %name, deps = ?client_dependencies, "plugin registered");
        self.plugins.push(RegisteredPlugin {
            name,
            client_dependencies,
            plugin,
        });
        Ok(())
    }

    /// Names of all registered plugins, in registration order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    /// Client dependencies of one plugin, in declaration order.
    pub fn client_dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.plugins
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.client_dependencies.as_slice())
    }

    /// All client dependencies, flattened in registration then declaration
    /// order. This is what the client bootstrapper loads.
    pub fn client_dependencies(&self) -> Vec<String> {
        self.plugins
            .iter()
            .flat_map(|p| p.client_dependencies.iter().cloned())
            .collect()
    }

    /// Read a host-wide setting stored via [`AppHandle::set`].
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.app.setting(key)
    }

    /// Consume the host, yielding the accumulated plugin router.
    pub fn into_router(self) -> axum::Router {
        self.app.into_router()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPlugin {
        name: &'static str,
    }

    impl Plugin for TestPlugin {
        fn name(&self) -> &str {
            self.name
        }

        fn register(&mut self, ctx: &mut PluginContext<'_>) -> Result<()> {
            ctx.app.set("views", "/srv/test/views");
            ctx.client_dependencies(&["test.alpha", "test.beta"]);
            Ok(())
        }
    }

    struct FailingPlugin;

    impl Plugin for FailingPlugin {
        fn name(&self) -> &str {
            "failing"
        }

        fn register(&mut self, _ctx: &mut PluginContext<'_>) -> Result<()> {
            Err(LaunchpadError::Plugin {
                plugin: "failing".into(),
                reason: "entry point refused".into(),
            })
        }
    }

    fn host() -> PluginHost {
        PluginHost::new(UsersService::new(), SystemService::new())
    }

    #[test]
    fn test_register_succeeds() {
        let mut host = host();
        host.register(TestPlugin { name: "test" }).unwrap();
        assert_eq!(host.plugin_names(), vec!["test"]);
        assert_eq!(host.setting("views"), Some("/srv/test/views"));
    }

    #[test]
    fn test_client_dependency_order_preserved() {
        let mut host = host();
        host.register(TestPlugin { name: "test" }).unwrap();
        assert_eq!(
            host.client_dependencies_of("test").unwrap(),
            &["test.alpha".to_string(), "test.beta".to_string()]
        );
        assert_eq!(host.client_dependencies(), vec!["test.alpha", "test.beta"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut host = host();
        host.register(TestPlugin { name: "test" }).unwrap();
        let err = host.register(TestPlugin { name: "test" }).unwrap_err();
        assert!(matches!(
            err,
            LaunchpadError::Plugin { ref plugin, .. } if plugin == "test"
        ));
        // Registry unchanged
        assert_eq!(host.plugin_names(), vec!["test"]);
    }

    #[test]
    fn test_entry_point_error_propagates() {
        let mut host = host();
        let err = host.register(FailingPlugin).unwrap_err();
        assert!(matches!(err, LaunchpadError::Plugin { .. }));
        assert!(host.plugin_names().is_empty());
    }

    #[test]
    fn test_services_visible_to_plugins() {
        // The host retains the plugin after registration, so observe the
        // injected service through a shared cell.
        let seen = std::sync::Arc::new(std::sync::Mutex::new(None::<String>));
        struct Probe(std::sync::Arc<std::sync::Mutex<Option<String>>>);
        impl Plugin for Probe {
            fn name(&self) -> &str {
                "probe"
            }
            fn register(&mut self, ctx: &mut PluginContext<'_>) -> Result<()> {
                *self.0.lock().unwrap() = Some(ctx.system.version().to_string());
                Ok(())
            }
        }

        let mut host = host();
        host.register(Probe(seen.clone())).unwrap();
        assert!(seen.lock().unwrap().is_some());
    }
}
