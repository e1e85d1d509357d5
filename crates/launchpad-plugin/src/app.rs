use axum::Router;
use axum::handler::Handler;
use axum::routing;
use std::collections::HashMap;

/// Application handle injected into plugins at registration time.
///
/// Wraps the routing table under construction plus a string settings map.
/// Settings are host-wide: last write wins, and the host's HTTP layer is
/// the consumer (e.g. the `views` key names a template asset directory).
#[derive(Default)]
pub struct AppHandle {
    router: Router,
    settings: HashMap<String, String>,
}

impl AppHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a host-wide setting.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Read a setting back.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Bind an HTTP GET handler at `path` on the shared routing table.
    ///
    /// Duplicate paths surface axum's own panic when the router is built;
    /// this handle neither detects nor masks that.
    pub fn get<H, T>(&mut self, path: &str, handler: H)
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.router = std::mem::take(&mut self.router).route(path, routing::get(handler));
    }

    /// Consume the handle, yielding the accumulated router.
    pub fn into_router(self) -> Router {
        self.router
    }
}
