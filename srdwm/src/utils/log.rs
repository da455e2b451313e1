use anyhow::{Context, Result};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Builds the filter for `level`, falling back to `info` when it does not
/// parse. The parse error is handed back so it can be reported once logging
/// is up.
#[must_use]
pub fn parse_log_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    let builder = || EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match builder().parse(level) {
        Ok(filter) => (filter, None),
        Err(err) => (builder().parse_lossy(""), Some(err)),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Fails if a global subscriber was already set.
pub fn setup_logging(level: &str) -> Result<()> {
    let (filter, parse_err) = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.is_empty() => parse_log_level(&env),
        _ => parse_log_level(level),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("could not install the log subscriber")?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level, using info: {}", err);
    }
    Ok(())
}
