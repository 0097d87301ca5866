use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::Settings;

/// RUST_LOG wins over the configured level so operators can raise verbosity
/// without touching the deployment config.
pub(crate) fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let telemetry = settings.telemetry();
    let subscriber = fmt()
        .with_env_filter(env_filter(&telemetry.log_level))
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    let installed =
        if telemetry.json { subscriber.json().try_init() } else { subscriber.try_init() };

    installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn env_filter(default_level: &str) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_level),
    }
}

#[cfg(test)]
mod tests {
    use super::env_filter;

    use crate::test_support;

    #[test]
    fn env_filter_falls_back_to_configured_level() {
        let _guard = test_support::env_lock();
        std::env::remove_var("RUST_LOG");

        let filter = env_filter("debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn env_filter_prefers_rust_log() {
        let _guard = test_support::env_lock();
        std::env::set_var("RUST_LOG", "warn");

        let filter = env_filter("debug");
        std::env::remove_var("RUST_LOG");
        assert_eq!(filter.to_string(), "warn");
    }
}
