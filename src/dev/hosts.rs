//! Dev server Host header check.
//!
//! Mirrors the allow-list semantics of the development server: IP literals
//! and `localhost` (including `*.localhost`) always pass, entries match
//! exactly, and an entry with a leading `.` matches the domain and every
//! subdomain.

use std::collections::BTreeSet;
use std::net::IpAddr;

/// Normalised allow-list built from [`DevServerConfig::allowed_hosts`].
///
/// [`DevServerConfig::allowed_hosts`]: crate::config::DevServerConfig
#[derive(Debug, Clone)]
pub struct AllowedHosts {
    entries: BTreeSet<String>,
}

impl AllowedHosts {
    pub fn new<'a>(hosts: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            entries: hosts
                .into_iter()
                .map(|h| normalise(h))
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Check a raw `Host` header value (port optional).
    pub fn is_allowed(&self, host_header: &str) -> bool {
        let Some(hostname) = hostname_of(host_header) else {
            return false;
        };

        if hostname.parse::<IpAddr>().is_ok() {
            return true;
        }
        if hostname == "localhost" || hostname.ends_with(".localhost") {
            return true;
        }

        self.entries.iter().any(|entry| match entry.strip_prefix('.') {
            Some(domain) => hostname == domain || hostname.ends_with(entry.as_str()),
            None => hostname == *entry,
        })
    }
}

/// Lowercased hostname with port and trailing dot removed.
fn hostname_of(host_header: &str) -> Option<String> {
    let raw = host_header.trim();
    if raw.is_empty() {
        return None;
    }

    let host = if let Some(rest) = raw.strip_prefix('[') {
        // [v6]:port
        &rest[..rest.find(']')?]
    } else if raw.matches(':').count() == 1 {
        raw.split(':').next().unwrap_or(raw)
    } else {
        raw
    };

    let host = normalise(host);
    (!host.is_empty()).then_some(host)
}

fn normalise(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevServerConfig;

    fn defaults() -> AllowedHosts {
        AllowedHosts::new(&DevServerConfig::default().allowed_hosts)
    }

    #[test]
    fn configured_hosts_pass_with_or_without_port() {
        let hosts = defaults();
        assert!(hosts.is_allowed("localhost"));
        assert!(hosts.is_allowed("localhost:4321"));
        assert!(hosts.is_allowed("127.0.0.1:4321"));
        assert!(hosts.is_allowed("LOCALHOST."));
    }

    #[test]
    fn ip_literals_always_pass() {
        let hosts = defaults();
        assert!(hosts.is_allowed("10.0.0.5:4321"));
        assert!(hosts.is_allowed("[::1]:4321"));
        assert!(hosts.is_allowed("::1"));
    }

    #[test]
    fn foreign_hostnames_are_rejected() {
        let hosts = defaults();
        assert!(!hosts.is_allowed("evil.example.com"));
        assert!(!hosts.is_allowed("localhost.evil.com"));
        assert!(!hosts.is_allowed(""));
        assert!(!hosts.is_allowed("[::1"));
    }

    #[test]
    fn dot_entries_cover_subdomains() {
        let entries = vec![".example.com".to_string()];
        let hosts = AllowedHosts::new(&entries);
        assert!(hosts.is_allowed("example.com"));
        assert!(hosts.is_allowed("app.example.com:443"));
        assert!(!hosts.is_allowed("badexample.com"));
    }

    #[test]
    fn localhost_subdomains_pass() {
        assert!(defaults().is_allowed("app.localhost:4321"));
    }
}
