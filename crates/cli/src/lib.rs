//! Command-line clients for Listy.
//!
//! Both binaries share one command set ([`commands::Command`]) and one
//! dispatcher ([`commands::execute`]). `listy` drives the HTTP API through
//! [`client::ApiClient`]; `listy-local` runs the workflows in-process through
//! [`backend::LocalBackend`].

pub mod backend;
pub mod client;
pub mod commands;
pub mod config;
pub mod render;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a stderr subscriber so log lines never mix with command output.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
