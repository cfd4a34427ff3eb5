//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware/param_logger.rs
//!         resolve query + path params
//!         buffer form body (non-GET), decode via form::extract
//!     → inner service runs with the rebuilt request
//!     → deferred logging step (always runs)
//!         redact form fields, serialize, emit tracing event
//!     → response returned unmodified
//! ```

pub mod middleware;

pub use middleware::{ExclusionHandle, ParamLogger, ParamLoggerLayer};
