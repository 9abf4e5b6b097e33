//! Backend reachability probe.
//!
//! # Responsibilities
//! - Issue one GET per configured backend URL
//! - Report status or failure per target
//!
//! # Design Decisions
//! - Read-only: results never feed back into configuration
//! - Any HTTP response counts as reachable; only transport errors fail

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::BackendTargets;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Outcome for one backend target.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub target: &'static str,
    pub url: String,
    pub status: Option<u16>,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl ProbeReport {
    pub fn is_reachable(&self) -> bool {
        self.status.is_some()
    }
}

/// Probe every backend target sequentially.
pub async fn probe_backends(
    targets: &BackendTargets,
    timeout: Duration,
) -> Result<Vec<ProbeReport>, ProbeError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()?;

    let mut reports = Vec::new();
    for (target, url) in targets.iter() {
        let start = Instant::now();
        let (status, error) = match client.get(url).send().await {
            Ok(res) => (Some(res.status().as_u16()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match status {
            Some(code) => tracing::info!(backend = target, url, status = code, elapsed_ms, "Backend reachable"),
            None => tracing::warn!(backend = target, url, error = ?error, elapsed_ms, "Backend unreachable"),
        }

        reports.push(ProbeReport {
            target,
            url: url.to_string(),
            status,
            error,
            elapsed_ms,
        });
    }

    Ok(reports)
}
