//! Environment variable snapshot.
//!
//! The resolver never reads the process environment itself; callers take a
//! snapshot at the edge (`from_process_env`) or build one from pairs in tests.

use std::collections::BTreeMap;

/// Env var: primary backend API endpoint.
pub const ENV_BACKEND_API_URL: &str = "BACKEND_API_URL";
/// Env var: WordPress REST endpoint.
pub const ENV_WP_API_URL: &str = "WP_API_URL";
/// Env var: Node API endpoint.
pub const ENV_NODE_API_URL: &str = "NODE_API_URL";

/// Every variable the resolver consults.
pub const RECOGNISED_VARS: [&str; 3] = [ENV_BACKEND_API_URL, ENV_WP_API_URL, ENV_NODE_API_URL];

/// Immutable name → value mapping handed to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the recognised variables from the current process environment.
    ///
    /// Values that are not valid unicode are decoded lossily rather than
    /// dropped, so a set variable never silently reverts to its default.
    pub fn from_process_env() -> Self {
        let vars = RECOGNISED_VARS
            .iter()
            .filter_map(|name| {
                std::env::var_os(name)
                    .map(|value| (name.to_string(), value.to_string_lossy().into_owned()))
            })
            .collect();
        Self { vars }
    }

    /// Raw value, including empty strings.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value only when present and non-empty.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
