//! Tracing subscriber setup and shutdown handling.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,hyper=warn,tower=warn";

/// Installs the global subscriber, writing to stderr.
///
/// An explicit `level` wins over `RUST_LOG`. A directive that does not parse
/// falls back to the default filter and is reported with a warning once the
/// subscriber is up. Calling this more than once is a no-op.
pub fn init_tracing(level: Option<&str>) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = build_filter(level.or(from_env.as_deref()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Some((directive, error)) = rejected {
        tracing::warn!(%directive, %error, default = DEFAULT_FILTER, "invalid log filter, using default");
    }
}

/// Parses `directive`, or the default filter when absent or invalid.
///
/// The second element carries the rejected directive and its parse error.
fn build_filter(directive: Option<&str>) -> (EnvFilter, Option<(String, ParseError)>) {
    match directive {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some((directive.to_owned(), e))),
        },
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Resolves on Ctrl+C or SIGTERM.
#[cfg(feature = "api")]
pub async fn shutdown_signal() {
    use tokio::signal;
    use tracing::{info, warn};

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! { _ = ctrl_c => {}, _ = terminate => {}, }
    info!("shutdown signal received");
}
