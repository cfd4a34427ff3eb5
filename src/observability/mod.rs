//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware emits:
//!     → tracing events, target "param_logger"
//!         params / form fields (JSON strings)
//!         extraction & serialization errors
//!
//! Consumers:
//!     → subscriber installed by the embedding application
//!     → logging.rs init helper for apps without their own setup
//! ```

pub mod logging;

pub use logging::init_logging;
