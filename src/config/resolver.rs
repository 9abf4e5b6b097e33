//! Runtime configuration resolution.

use crate::config::env::{EnvSnapshot, ENV_BACKEND_API_URL, ENV_NODE_API_URL, ENV_WP_API_URL};
use crate::config::schema::{
    BackendTargets, RuntimeConfig, DEFAULT_BACKEND_API_URL, DEFAULT_NODE_API_URL,
    DEFAULT_WP_API_URL,
};

/// Resolve the runtime configuration from an environment snapshot.
///
/// Backend URLs take the variable's value when it is present and non-empty,
/// otherwise the literal default. Every other field is fixed. Resolution
/// cannot fail.
pub fn resolve(env: &EnvSnapshot) -> RuntimeConfig {
    RuntimeConfig {
        backends: BackendTargets {
            backend_api_url: or_default(env, ENV_BACKEND_API_URL, DEFAULT_BACKEND_API_URL),
            wp_api_url: or_default(env, ENV_WP_API_URL, DEFAULT_WP_API_URL),
            node_api_url: or_default(env, ENV_NODE_API_URL, DEFAULT_NODE_API_URL),
        },
        ..RuntimeConfig::default()
    }
}

fn or_default(env: &EnvSnapshot, name: &str, default: &str) -> String {
    env.non_empty(name).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_falls_back() {
        let env: EnvSnapshot = [(ENV_BACKEND_API_URL, "")].into_iter().collect();
        assert_eq!(resolve(&env).backends.backend_api_url, DEFAULT_BACKEND_API_URL);
    }

    #[test]
    fn whitespace_is_preserved_verbatim() {
        let env: EnvSnapshot = [(ENV_NODE_API_URL, " http://node:3001 ")].into_iter().collect();
        assert_eq!(resolve(&env).backends.node_api_url, " http://node:3001 ");
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        let env: EnvSnapshot = [("PORT", "9999"), ("HOST", "example.org")].into_iter().collect();
        let config = resolve(&env);
        assert_eq!(config, RuntimeConfig::default());
    }
}
