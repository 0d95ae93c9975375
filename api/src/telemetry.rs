//! Server-side logging for the Todo API: a pretty stderr subscriber filtered
//! by `RUST_LOG`, with `log` records bridged into `tracing`.

use actix_web::rt::task::JoinHandle;
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an unexpected handler error with its full cause chain. Called when an
/// `APIError::UnexpectedError` is turned into a 500 response, so the client
/// only sees the generic message.
pub fn log_error(e: &anyhow::Error) {
    tracing::error!("{e:#}");
}

/// Build the subscriber used by the server binary and by `test-helpers`.
/// `RUST_LOG` wins over `default_filter` when it is set.
pub fn get_subscriber(default_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .pretty()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Install `subscriber` as the process-wide default. Panics if a subscriber
/// or logger is already installed; tests use `try_init` instead.
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Run argon2 hashing and verification off the actix workers, keeping the
/// caller's span so `Create user` and `Validate credentials` stay nested.
pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = tracing::Span::current();
    actix_web::rt::task::spawn_blocking(move || current_span.in_scope(f))
}
