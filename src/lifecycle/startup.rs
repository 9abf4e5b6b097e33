//! Startup orchestration.

use std::sync::Arc;

use crate::config::validation::lint;
use crate::config::{resolve, EnvSnapshot, RuntimeConfig};

/// Resolve, lint and log the runtime configuration.
///
/// Lint warnings are logged and never abort startup.
pub fn bootstrap(env: &EnvSnapshot) -> Arc<RuntimeConfig> {
    let config = resolve(env);

    tracing::info!(
        output = %config.output,
        adapter = %config.adapter,
        bind_address = %config.server.bind_address(),
        backend_api_url = %config.backends.backend_api_url,
        wp_api_url = %config.backends.wp_api_url,
        node_api_url = %config.backends.node_api_url,
        allowed_hosts = ?config.dev_server.allowed_hosts,
        watch_polling = config.dev_server.watch.use_polling,
        watch_interval_ms = config.dev_server.watch.interval_ms,
        "Configuration resolved"
    );

    for warning in lint(&config) {
        tracing::warn!(%warning, "Configuration lint");
    }

    Arc::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_matches_resolve() {
        let env: EnvSnapshot = [("WP_API_URL", "https://cms.example.com/wp-json/wp/v2")]
            .into_iter()
            .collect();
        let config = bootstrap(&env);
        assert_eq!(*config, resolve(&env));
    }

    #[test]
    fn bad_url_does_not_abort() {
        let env: EnvSnapshot = [("NODE_API_URL", "::::")].into_iter().collect();
        assert_eq!(bootstrap(&env).backends.node_api_url, "::::");
    }
}
