//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "seneca_mail=debug,tower_http=debug";

/// Initialize the tracing subscriber.
///
/// Honours `RUST_LOG` when present, otherwise falls back to the service
/// default. Call once, before any other subsystem starts.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
