//! End-to-end tests for the summary endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use summary_gateway::backends::SummaryBackends;
use summary_gateway::config::GatewayConfig;
use summary_gateway::http::HttpServer;
use summary_gateway::lifecycle::Shutdown;

mod common;

/// Spawn a gateway on `addr` and give it a moment to start accepting.
async fn spawn_gateway(
    addr: SocketAddr,
    config: GatewayConfig,
    backends: SummaryBackends,
) -> Shutdown {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, backends);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn summary_url(addr: SocketAddr) -> String {
    format!("http://{}/api/v1/chat/summary", addr)
}

#[tokio::test]
async fn summary_contains_every_field_when_all_services_answer() {
    let addr: SocketAddr = "127.0.0.1:29181".parse().unwrap();
    let shutdown = spawn_gateway(addr, GatewayConfig::default(), common::healthy_backends()).await;

    let res = client().get(summary_url(addr)).send().await.unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"], "user-1");
    assert_eq!(body["access"], true);
    assert_eq!(body["memory"], "vector-memory");

    shutdown.trigger();
}

#[tokio::test]
async fn summary_degrades_without_memory_when_enrichment_is_slow() {
    let addr: SocketAddr = "127.0.0.1:29281".parse().unwrap();

    let mut config = GatewayConfig::default();
    config.orchestrator.gather_budget_ms = 100;

    let mut backends = common::healthy_backends();
    backends.memory = common::ok_after(Duration::from_millis(400), "late".to_string());

    let shutdown = spawn_gateway(addr, config, backends).await;

    let res = client().get(summary_url(addr)).send().await.unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"], "user-1");
    assert_eq!(body["access"], true);
    assert!(body.get("memory").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn summary_fails_when_the_identity_service_errors() {
    let addr: SocketAddr = "127.0.0.1:29381".parse().unwrap();

    let mut backends = common::healthy_backends();
    backends.identity = common::failing("user service internal error");

    let shutdown = spawn_gateway(addr, GatewayConfig::default(), backends).await;

    let res = client().get(summary_url(addr)).send().await.unwrap();

    assert_eq!(res.status(), 500);
    let body = res.text().await.unwrap();
    assert!(body.contains("user service internal error"));

    shutdown.trigger();
}

#[tokio::test]
async fn summary_is_forbidden_when_access_is_denied() {
    let addr: SocketAddr = "127.0.0.1:29481".parse().unwrap();

    let mut backends = common::healthy_backends();
    backends.access = common::ok_after(Duration::from_millis(5), false);

    let shutdown = spawn_gateway(addr, GatewayConfig::default(), backends).await;

    let res = client().get(summary_url(addr)).send().await.unwrap();

    assert_eq!(res.status(), 403);
    assert_eq!(res.text().await.unwrap(), "access denied by policy");

    shutdown.trigger();
}

#[tokio::test]
async fn summary_times_out_when_a_critical_service_stalls() {
    let addr: SocketAddr = "127.0.0.1:29581".parse().unwrap();

    let mut config = GatewayConfig::default();
    config.orchestrator.gather_budget_ms = 100;

    let mut backends = common::healthy_backends();
    backends.access = common::ok_after(Duration::from_millis(500), true);

    let shutdown = spawn_gateway(addr, config, backends).await;

    let res = client().get(summary_url(addr)).send().await.unwrap();

    assert_eq!(res.status(), 504);

    shutdown.trigger();
}

#[tokio::test]
async fn health_route_answers_while_backends_are_failing() {
    let addr: SocketAddr = "127.0.0.1:29681".parse().unwrap();

    let mut backends = common::healthy_backends();
    backends.identity = common::failing("user service internal error");
    backends.access = common::failing("permission service internal error");

    let shutdown = spawn_gateway(addr, GatewayConfig::default(), backends).await;

    let res = client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    shutdown.trigger();
}
