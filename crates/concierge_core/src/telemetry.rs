//! Tracing subscriber setup shared by Concierge binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a `fmt` subscriber filtered by `RUST_LOG`.
///
/// `default_level` applies when `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(default_level: tracing::Level) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let fmt_layer = fmt::layer().with_target(false).with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
