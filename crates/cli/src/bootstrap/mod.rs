//! Process bootstrap: configuration load and logging setup.

use mquery_domain::config::{CliOverrides, Config, ConfigError};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Installs the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// the configured level applies to the mquery crates. Diagnostics go to
/// stderr so the report on stdout stays clean.
pub fn init_logging(config: &Config) {
    let level = &config.logging.level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mquery={level},mquery_domain={level},mquery_infrastructure={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
