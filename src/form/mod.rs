//! Form body decoding subsystem.
//!
//! # Data Flow
//! ```text
//! buffered request body + Content-Type
//!     → extract.rs (dispatch on content type)
//!         urlencoded → url::form_urlencoded
//!         multipart  → multer (text fields + file part names)
//!     → ParamMap handed back to the middleware for redaction
//! ```
//!
//! # Design Decisions
//! - File content is drained but never retained; only the declared
//!   filename reaches the log
//! - Unrecognized content types produce no form fields rather than an error
//! - All failures are typed (FormError) and recovered by the caller

pub mod extract;

pub use extract::{extract_form, flatten_multipart, is_form_content_type, parse_urlencoded, FormError};
