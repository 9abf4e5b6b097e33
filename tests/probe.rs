//! Backend probe against local mock servers.

use std::time::Duration;

use site_runtime::config::BackendTargets;
use site_runtime::probe::probe_backends;

mod common;

#[tokio::test]
async fn reports_status_and_failures_per_target() {
    let healthy = common::start_mock_backend(200).await;
    let degraded = common::start_mock_backend(503).await;
    let closed = common::closed_port().await;

    let targets = BackendTargets {
        backend_api_url: format!("http://{}/", healthy),
        wp_api_url: format!("http://{}/wp-json/wp/v2", degraded),
        node_api_url: format!("http://{}/api", closed),
    };

    let reports = probe_backends(&targets, Duration::from_secs(2)).await.unwrap();
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0].target, "backend");
    assert_eq!(reports[0].status, Some(200));
    assert!(reports.iter().all(|r| r.elapsed_ms < 5_000));

    assert_eq!(reports[1].target, "wp");
    assert_eq!(reports[1].status, Some(503));
    assert!(reports[1].is_reachable());

    assert_eq!(reports[2].target, "node");
    assert!(!reports[2].is_reachable());
    assert!(reports[2].error.is_some());
}
