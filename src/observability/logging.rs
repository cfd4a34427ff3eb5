//! Structured logging setup.
//!
//! # Responsibilities
//! - Initialize a tracing subscriber for embedding applications that do
//!   not install their own
//! - Respect `RUST_LOG` for level configuration
//!
//! # Design Decisions
//! - The middleware itself only emits through `tracing`; applications with
//!   an existing subscriber never need this module

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a formatting subscriber with env-filter support.
///
/// Defaults to `info` globally and `debug` for this crate's log target
/// when `RUST_LOG` is unset. Does nothing if a global subscriber is
/// already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,param_logger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
