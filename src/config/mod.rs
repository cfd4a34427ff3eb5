//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! middleware config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → ParamLoggerConfig (defaulted, immutable)
//!     → bound into ParamLoggerLayer at construction
//!
//! At runtime:
//!     ExclusionHandle (middleware module)
//!     → atomic swap of the exclusion list
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty config section works
//! - The exclusion list is the primary configuration point; everything
//!   else is an operational knob
//! - Config is immutable after layer construction except for the
//!   exclusion list, which swaps atomically

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ParamLoggerConfig;
