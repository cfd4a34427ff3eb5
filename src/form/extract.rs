//! Turning request bodies into loggable form fields.

use axum::body::Bytes;
use futures_util::stream;
use thiserror::Error;

use crate::params::map::{append, ParamMap};

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Errors raised while decoding a request body into form fields.
#[derive(Debug, Error)]
pub enum FormError {
    /// The body could not be read from the wire.
    #[error("failed to read request body: {0}")]
    Body(axum::Error),

    /// The multipart Content-Type carried no usable boundary.
    #[error("invalid multipart content type: {0}")]
    Boundary(multer::Error),

    /// The multipart body itself was malformed.
    #[error("failed to parse multipart body: {0}")]
    Multipart(multer::Error),
}

/// True when `content_type` names a body this module knows how to decode.
pub fn is_form_content_type(content_type: &str) -> bool {
    let essence = essence_of(content_type);
    essence.eq_ignore_ascii_case(URLENCODED) || essence.eq_ignore_ascii_case(MULTIPART)
}

/// Media type without parameters ("multipart/form-data; boundary=x" → "multipart/form-data").
fn essence_of(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or("").trim()
}

/// Decode an `application/x-www-form-urlencoded` body.
pub fn parse_urlencoded(body: &[u8]) -> ParamMap {
    let mut fields = ParamMap::new();
    for (key, value) in url::form_urlencoded::parse(body) {
        append(&mut fields, key.into_owned(), value.into_owned());
    }
    fields
}

/// Flatten a multipart body into a single multi-valued map.
///
/// Text fields keep their submitted values. File parts contribute only
/// their declared filename under the part's field name; the content is
/// drained so the parser can advance, but is never stored.
pub async fn flatten_multipart(content_type: &str, body: Bytes) -> Result<ParamMap, FormError> {
    let boundary = multer::parse_boundary(content_type).map_err(FormError::Boundary)?;
    let stream = stream::once(async move { Ok::<_, std::convert::Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = ParamMap::new();
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(FormError::Multipart)?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            // Nameless parts have nothing to file the value under.
            continue;
        };
        if let Some(filename) = field.file_name().map(str::to_owned) {
            while field.chunk().await.map_err(FormError::Multipart)?.is_some() {}
            append(&mut fields, name, filename);
        } else {
            let value = field.text().await.map_err(FormError::Multipart)?;
            append(&mut fields, name, value);
        }
    }

    Ok(fields)
}

/// Extract form fields from a buffered body, dispatching on content type.
///
/// Returns `None` for content types this module does not decode.
pub async fn extract_form(
    content_type: Option<&str>,
    body: Bytes,
) -> Result<Option<ParamMap>, FormError> {
    let Some(content_type) = content_type else {
        return Ok(None);
    };

    let essence = essence_of(content_type);
    if essence.eq_ignore_ascii_case(URLENCODED) {
        Ok(Some(parse_urlencoded(&body)))
    } else if essence.eq_ignore_ascii_case(MULTIPART) {
        flatten_multipart(content_type, body).await.map(Some)
    } else {
        Ok(None)
    }
}
