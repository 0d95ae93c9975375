use api::{Config, telemetry};
use payloads::{requests, responses};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Register alice and return the credentials used.
    pub async fn create_alice_user(
        &self,
    ) -> anyhow::Result<requests::AuthCredentials> {
        let credentials = alice_credentials();
        let outcome = self.client.signup(&credentials).await?;
        anyhow::ensure!(
            outcome == payloads::signup::SignupOutcome::Created,
            "unexpected signup outcome: {outcome:?}"
        );
        Ok(credentials)
    }

    /// Send a raw POST with an arbitrary body, bypassing the typed client.
    pub async fn post_raw(
        &self,
        path: &str,
        body: &str,
    ) -> anyhow::Result<(StatusCode, responses::ErrorDetail)> {
        let response = reqwest::Client::new()
            .post(format!("{}/api/{path}", self.address()))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }
}

pub fn alice_credentials() -> requests::AuthCredentials {
    requests::AuthCredentials {
        email: "alice@example.com".into(),
        password: "supersecret".into(),
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = api::build(&mut config).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
    }
}

/// Spawn the api on an OS-assigned port.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
