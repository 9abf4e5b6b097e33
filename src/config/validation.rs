//! Configuration lint.
//!
//! # Responsibilities
//! - Flag backend URLs that will not work as HTTP endpoints
//!
//! # Design Decisions
//! - Warnings only: the resolved value is always accepted as-is
//! - Returns every warning, not just the first
//! - Pure function: RuntimeConfig → Vec<ConfigWarning>

use std::fmt;

use url::Url;

use crate::config::schema::RuntimeConfig;

/// A non-fatal configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Backend URL could not be parsed.
    UnparsableUrl {
        target: &'static str,
        url: String,
        reason: String,
    },
    /// Backend URL uses a scheme other than http or https.
    UnsupportedScheme {
        target: &'static str,
        url: String,
        scheme: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnparsableUrl { target, url, reason } => {
                write!(f, "{} url '{}' is not a valid URL: {}", target, url, reason)
            }
            ConfigWarning::UnsupportedScheme { target, url, scheme } => {
                write!(f, "{} url '{}' uses unsupported scheme '{}'", target, url, scheme)
            }
        }
    }
}

/// Collect warnings for the resolved configuration.
pub fn lint(config: &RuntimeConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for (target, raw) in config.backends.iter() {
        match Url::parse(raw) {
            Ok(url) => {
                if !matches!(url.scheme(), "http" | "https") {
                    warnings.push(ConfigWarning::UnsupportedScheme {
                        target,
                        url: raw.to_string(),
                        scheme: url.scheme().to_string(),
                    });
                }
            }
            Err(e) => warnings.push(ConfigWarning::UnparsableUrl {
                target,
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    warnings
}
