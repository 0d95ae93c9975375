mod auth;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let health = app.client.health_check().await?;
    assert_eq!(health.status, "ok");

    Ok(())
}

#[tokio::test]
async fn root_reports_service_running() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let info = app.client.service_info().await?;
    assert_eq!(info.message, "Todo API running successfully 🚀");

    Ok(())
}

#[tokio::test]
async fn cors_allows_configured_origin() -> anyhow::Result<()> {
    let mut config = api::Config {
        ip: "127.0.0.1".into(),
        port: 0,
        allowed_origins: vec![api::Config::DEFAULT_ALLOWED_ORIGIN.into()],
    };
    let server = api::build(&mut config)?;
    tokio::spawn(server);

    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("http://127.0.0.1:{}/api/auth/signup", config.port),
        )
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );

    Ok(())
}
