//! Reachability probe tests against a local mock tracker

use httpmock::prelude::*;
use piwik_settings::domain::probe::{HttpReachabilityProbe, ProbeFailure, ReachabilityProbe};
use std::time::Duration;

fn probe() -> HttpReachabilityProbe {
    HttpReachabilityProbe::new(Duration::from_secs(2), "piwik-settings-test").unwrap()
}

#[tokio::test]
async fn test_probe_accepts_a_tracker_answering_200() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/analytics/piwik.php");
            then.status(200).body("/* piwik */");
        })
        .await;

    let result = probe().probe(&server.url("/analytics/")).await;
    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_probe_reports_the_observed_status() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/analytics/piwik.php");
            then.status(404);
        })
        .await;

    let result = probe().probe(&server.url("/analytics/")).await;
    assert_eq!(result, Err(ProbeFailure::Status { status: 404 }));
}

#[tokio::test]
async fn test_probe_treats_redirects_and_errors_as_failures() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/analytics/piwik.php");
            then.status(500);
        })
        .await;

    let result = probe().probe(&server.url("/analytics/")).await;
    assert_eq!(result, Err(ProbeFailure::Status { status: 500 }));
}

#[tokio::test]
async fn test_probe_reports_connection_failures_as_transport_errors() {
    // Port 1 is reserved and refuses connections on any sane host.
    let result = probe().probe("http://127.0.0.1:1/").await;
    match result {
        Err(ProbeFailure::Transport { .. }) | Err(ProbeFailure::Timeout { .. }) => {}
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_probe_rejects_a_malformed_base_url() {
    let result = probe().probe("not-a-url/").await;
    assert!(matches!(result, Err(ProbeFailure::Transport { .. })));
}
