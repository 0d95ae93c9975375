use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Todo API Server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Optional environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public), defaults to 127.0.0.1
/// - PORT: Server port, defaults to 8000
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or
///   comma-separated list for production), defaults to http://localhost:3000
/// - RUST_LOG: log filter, defaults to "info"
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=http://localhost:3000
///
/// Example development command:
/// cargo run -p api
///
/// Accounts are kept in memory and are lost when the server stops.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;

    let server = build(&mut config)?;
    tracing::info!(
        "Todo API listening on http://{}:{}",
        config.ip,
        config.port
    );
    server.await?;
    Ok(())
}
