//! Named service handles injected into plugins.
//!
//! These are opaque collaborators owned by the host bootstrap. Plugins
//! receive them at registration and may ignore them; the starter plugin
//! does.

/// Handle to the host's user-account service.
#[derive(Debug, Default)]
pub struct UsersService;

impl UsersService {
    pub fn new() -> Self {
        Self
    }
}

/// Handle to the host's system service.
#[derive(Debug)]
pub struct SystemService {
    version: &'static str,
}

impl SystemService {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Host version as reported to plugins.
    pub fn version(&self) -> &str {
        self.version
    }
}

impl Default for SystemService {
    fn default() -> Self {
        Self::new()
    }
}
