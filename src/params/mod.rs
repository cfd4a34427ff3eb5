//! Parameter handling subsystem.
//!
//! # Data Flow
//! ```text
//! request URI / form body
//!     → map.rs (ParamMap, multi-valued field collection)
//!     → exclusion.rs (which field names are sensitive)
//!     → redact.rs (masking pass over a ParamMap)
//!     → serialized to JSON by the middleware and attached to the log event
//! ```
//!
//! # Design Decisions
//! - Insertion order is preserved (IndexMap) so logged JSON mirrors the
//!   order fields arrived in
//! - Exclusion matching is ASCII case-insensitive
//! - Redaction copies the map structure only; value vectors for
//!   non-excluded keys are cloned as-is

pub mod exclusion;
pub mod map;
pub mod redact;

pub use exclusion::ExclusionList;
pub use map::ParamMap;
pub use redact::{mask_secrets, FILTERED};
