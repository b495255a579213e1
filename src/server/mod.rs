// server/mod.rs - Server-side pieces of the SSR binary (ssr feature only)
//
// - config.rs: ServerConfig read from the environment / .env
// - proxy.rs: /api/* forwarding to the REST backend

pub mod config;
pub mod proxy;

pub use config::{ServerConfig, ServerConfigError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pentest_lab_web=info,actix_web=info";

/// Installs the global tracing subscriber (RUST_LOG overrides the default filter)
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
