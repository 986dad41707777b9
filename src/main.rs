//! jupeserv - P10 jupe server.
//!
//! Usage: `jupeserv [config.toml]`

use jupeserv::config::{self, Config};
use jupeserv::sync::run_link;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true);
    if std::env::var("JUPESERV_LOG_FORMAT").is_ok_and(|format| format == "json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "jupeserv.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {}", errors.len(), config_path);
    }

    info!(
        server = %config.server.name,
        numeric = config.server.numeric,
        uplink = %config.uplink.address(),
        bot = config.enabled_bot().is_some(),
        "Starting jupeserv"
    );

    let summary = tokio::select! {
        result = run_link(&config) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            return Ok(());
        }
    };

    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        authenticated = summary.authenticated,
        "Link closed"
    );
    Ok(())
}
