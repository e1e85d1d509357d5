use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use launchpad_config::ConfigLoader;
use launchpad_plugin::{PluginHost, SystemService, UsersService};
use launchpad_starter::StarterPlugin;

#[derive(Parser)]
#[command(name = "launchpad", version, about = "Pluggable web host")]
struct Cli {
    /// Path to launchpad.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long)]
    listen: Option<String>,

    /// Override the log level
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    async fn run(self) -> launchpad_core::Result<()> {
        // Load config first so we can use it for log format
        let loader = ConfigLoader::load(self.config.as_deref())?;
        let mut config = loader.get();

        if let Some(listen) = self.listen {
            config.server.listen = listen;
        }

        // Resolve log level: --log-level > config default
        let log_level = self
            .log_level
            .as_deref()
            .unwrap_or(&config.logging.level)
            .to_string();

        // Initialize tracing with appropriate format
        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
                )
                .with_target(false)
                .init();
        }

        info!(config = %loader.path().display(), "launchpad starting");

        // Construct the injected services and register plugins. Registration
        // runs once, synchronously; any failure aborts startup.
        let mut host = PluginHost::new(UsersService::new(), SystemService::new());
        host.register(StarterPlugin::new())?;

        let router = launchpad_server::build_router(host, &config.server);
        launchpad_server::start_server(router, &config.server).await
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
