//! Request parameter logging middleware for axum applications.
//!
//! Captures each request's query, form, and multipart parameters, masks a
//! configurable list of sensitive field names, and emits the result as
//! structured `params` / `form` log fields through `tracing`.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 PARAM LOGGER                  │
//!                  │                                               │
//!  Request ────────┼─▶ http/middleware  ──▶ form (decode body)     │
//!                  │        │                    │                 │
//!                  │        ▼                    ▼                 │
//!                  │   inner service        params (mask pass)     │
//!                  │        │                    │                 │
//!  Response ◀──────┼────────┴──── tracing event ◀┘                 │
//!                  │                                               │
//!                  │  config (exclusion list, capture cap)         │
//!                  │  observability (subscriber init helper)       │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! The middleware is a pure observer: responses pass through unmodified,
//! and every internal failure is logged and swallowed.
//!
//! # Usage
//!
//! ```ignore
//! let layer = ParamLoggerLayer::new();
//! let exclusions = layer.exclusions();
//! exclusions.extend(["ApiToken"]);
//!
//! let app = Router::new()
//!     .route("/login", post(login))
//!     .layer(layer);
//! ```

pub mod config;
pub mod form;
pub mod http;
pub mod observability;
pub mod params;

pub use config::{load_config, ConfigError, ParamLoggerConfig};
pub use http::middleware::{ExclusionHandle, ParamLogger, ParamLoggerLayer, LOG_TARGET};
pub use params::{mask_secrets, ExclusionList, ParamMap, FILTERED};
