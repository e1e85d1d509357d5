//! Prometheus-compatible metrics endpoint for the Launchpad host.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Host metrics registry.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total HTTP requests served by host-owned routes.
    pub http_requests_total: AtomicU64,
    /// Plugins registered at startup.
    pub plugins_registered: AtomicU64,
    /// Server start time for uptime calculation.
    pub started_at: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                http_requests_total: AtomicU64::new(0),
                plugins_registered: AtomicU64::new(0),
                started_at: Instant::now(),
            }),
        }
    }

    pub fn inc_http_requests(&self) {
        self.inner
            .http_requests_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_plugins_registered(&self, n: u64) {
        self.inner.plugins_registered.store(n, Ordering::Relaxed);
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }

    /// Render metrics in Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let m = &self.inner;
        format!(
            r#"# HELP launchpad_uptime_seconds Time since the server started.
# TYPE launchpad_uptime_seconds gauge
launchpad_uptime_seconds {}

# HELP launchpad_http_requests_total Total HTTP requests served by host routes.
# TYPE launchpad_http_requests_total counter
launchpad_http_requests_total {}

# HELP launchpad_plugins_registered Plugins registered at startup.
# TYPE launchpad_plugins_registered gauge
launchpad_plugins_registered {}
"#,
            self.uptime_secs(),
            m.http_requests_total.load(Ordering::Relaxed),
            m.plugins_registered.load(Ordering::Relaxed),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counter_increments() {
        let m = Metrics::new();
        m.inc_http_requests();
        m.inc_http_requests();
        let output = m.render_prometheus();
        assert!(output.contains("launchpad_http_requests_total 2"));
    }

    #[test]
    fn test_metrics_plugins_gauge() {
        let m = Metrics::new();
        m.set_plugins_registered(1);
        let output = m.render_prometheus();
        assert!(output.contains("launchpad_plugins_registered 1"));
    }

    #[test]
    fn test_metrics_prometheus_format() {
        let m = Metrics::new();
        let output = m.render_prometheus();
        assert!(output.contains("# HELP launchpad_uptime_seconds"));
        assert!(output.contains("# TYPE launchpad_uptime_seconds gauge"));
        assert!(output.contains("# TYPE launchpad_http_requests_total counter"));
    }
}
