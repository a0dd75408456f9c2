//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Enable JSON logging.
    pub json_logs: bool,
    /// Only errors.
    pub quiet: bool,
    /// Debug output from the Blog Spot crates.
    pub verbose: bool,
}

impl TelemetryConfig {
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info,blogspot=debug,blogspot_core=debug,blogspot_infra=debug"
        } else {
            "warn"
        }
    }
}

/// Initialize tracing. Logs go to stderr so stdout stays clean for command output.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(
        json_logs = config.json_logs,
        verbose = config.verbose,
        "Telemetry initialized"
    );
}
