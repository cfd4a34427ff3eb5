//! Middleware implementations.

pub mod param_logger;

pub use param_logger::{ExclusionHandle, ParamLogger, ParamLoggerLayer, LOG_TARGET};
