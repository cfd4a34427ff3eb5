//! Parameter logging middleware.
//!
//! # Responsibilities
//! - Resolve the request's query and path parameters
//! - Capture form bodies (urlencoded / multipart) before the inner
//!   service consumes them, rebuilding the request afterwards
//! - Mask excluded field names and emit the result as structured
//!   `params` / `form` log fields once the inner service has finished
//!
//! # Design Decisions
//! - The logging step runs after the inner call on every path, success
//!   or error response, and never alters the response
//! - Bodies are only buffered when the declared Content-Length fits the
//!   configured cap; anything else passes through uncaptured
//! - The exclusion list sits behind ArcSwap so the embedding app can
//!   swap it at runtime while requests read it lock-free

use std::sync::Arc;
use std::task::{Context, Poll};

use arc_swap::ArcSwap;
use axum::body::Body;
use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::request::Parts;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::{Layer, Service};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::ParamLoggerConfig;
use crate::form::{self, FormError};
use crate::params::exclusion::ExclusionList;
use crate::params::map::{append, ParamMap};
use crate::params::redact::mask_secrets;

/// Target of every event this middleware emits.
pub const LOG_TARGET: &str = "param_logger";

/// State shared by the layer and all service clones built from it.
#[derive(Debug)]
struct Shared {
    exclusions: ArcSwap<ExclusionList>,
    redact_params: bool,
    max_capture_bytes: usize,
}

/// Handle for inspecting and updating the exclusion list at runtime.
///
/// Request handling reads the list lock-free (`ArcSwap::load`); `replace`
/// and `extend` publish a whole new list atomically, so updates are safe
/// while requests are in flight.
#[derive(Clone, Debug)]
pub struct ExclusionHandle {
    shared: Arc<Shared>,
}

impl ExclusionHandle {
    /// Swap in a new exclusion list.
    pub fn replace(&self, list: ExclusionList) {
        self.shared.exclusions.store(Arc::new(list));
    }

    /// Add names on top of the current list.
    pub fn extend<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = ExclusionList::clone(&self.shared.exclusions.load());
        list.extend(names);
        self.shared.exclusions.store(Arc::new(list));
    }

    /// Snapshot of the current list.
    pub fn current(&self) -> Arc<ExclusionList> {
        self.shared.exclusions.load_full()
    }
}

/// `tower::Layer` that wraps a service with [`ParamLogger`].
#[derive(Clone, Debug)]
pub struct ParamLoggerLayer {
    shared: Arc<Shared>,
}

impl ParamLoggerLayer {
    /// Layer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParamLoggerConfig::default())
    }

    /// Layer from an explicit configuration.
    pub fn with_config(config: ParamLoggerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                exclusions: ArcSwap::from_pointee(config.exclusions),
                redact_params: config.redact_params,
                max_capture_bytes: config.max_capture_bytes,
            }),
        }
    }

    /// Handle for runtime exclusion-list updates.
    pub fn exclusions(&self) -> ExclusionHandle {
        ExclusionHandle {
            shared: self.shared.clone(),
        }
    }
}

impl Default for ParamLoggerLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for ParamLoggerLayer {
    type Service = ParamLogger<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ParamLogger {
            inner,
            shared: self.shared.clone(),
        }
    }
}

/// Middleware service produced by [`ParamLoggerLayer`].
#[derive(Clone, Debug)]
pub struct ParamLogger<S> {
    inner: S,
    shared: Arc<Shared>,
}

/// Outcome of the body-capture step.
enum Capture {
    /// GET request, non-form content type, or body too large to buffer.
    Skipped,
    /// Body buffered and decoded into form fields.
    Fields(ParamMap),
    /// Extraction failed; reported during the logging step.
    Failed(FormError),
}

impl<S> Service<Request<Body>> for ParamLogger<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let shared = self.shared.clone();
        // Take the service that was polled ready; the clone waits for the
        // next call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let (mut parts, body) = req.into_parts();

            let method = parts.method.clone();
            let path = parts.uri.path().to_owned();
            let params = resolve_params(&mut parts).await;

            // Form capture must happen before the inner service consumes
            // the body.
            let (body, captured) = if parts.method == Method::GET {
                (body, Capture::Skipped)
            } else {
                capture_form(&parts, body, shared.max_capture_bytes).await
            };

            let req = Request::from_parts(parts, body);
            let result = inner.call(req).await;

            // Deferred logging step: runs whether the inner service
            // produced a success or an error response.
            let status = result.as_ref().ok().map(|res| res.status());
            log_request(&shared, &method, &path, status, params, captured);

            result
        })
    }
}

/// Query parameters merged with whatever path parameters the router has
/// resolved for this request.
///
/// Path parameters are only visible when the layer is applied inside the
/// router (`route_layer`); their absence is not an error.
async fn resolve_params(parts: &mut Parts) -> ParamMap {
    let mut params = ParamMap::new();

    if let Some(query) = parts.uri.query() {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            append(&mut params, key.into_owned(), value.into_owned());
        }
    }

    if let Ok(path_params) = RawPathParams::from_request_parts(parts, &()).await {
        for (key, value) in &path_params {
            append(&mut params, key, value);
        }
    }

    params
}

/// Buffer and decode a form body, handing back a replayable body for the
/// inner service.
async fn capture_form(parts: &Parts, body: Body, limit: usize) -> (Body, Capture) {
    let content_type = match parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(ct) if form::is_form_content_type(ct) => ct.to_owned(),
        _ => return (body, Capture::Skipped),
    };

    // Only buffer bodies whose declared length fits the cap; anything else
    // passes through untouched so the inner read cannot be broken.
    let declared = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    match declared {
        Some(len) if len <= limit => {}
        _ => return (body, Capture::Skipped),
    }

    let bytes = match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        // The body broke mid-read; the inner service would have hit the
        // same failure. Hand it an empty body and report the error.
        Err(err) => return (Body::empty(), Capture::Failed(FormError::Body(err))),
    };

    let captured = match form::extract_form(Some(content_type.as_str()), bytes.clone()).await {
        Ok(Some(fields)) => Capture::Fields(fields),
        Ok(None) => Capture::Skipped,
        Err(err) => Capture::Failed(err),
    };

    (Body::from(bytes), captured)
}

/// Serialize and emit the `params` / `form` fields for one request.
fn log_request(
    shared: &Shared,
    method: &Method,
    path: &str,
    status: Option<StatusCode>,
    params: ParamMap,
    captured: Capture,
) {
    let request_id = Uuid::new_v4();
    let exclusions = shared.exclusions.load();
    let status = status.map(|s| u64::from(s.as_u16()));

    let params = if shared.redact_params {
        mask_secrets(&params, &exclusions)
    } else {
        params
    };
    let params_json = match serde_json::to_string(&params) {
        Ok(json) => Some(json),
        Err(err) => {
            error!(target: LOG_TARGET, error = %err, "failed to serialize request params");
            None
        }
    };

    let form_json = match captured {
        Capture::Skipped => None,
        Capture::Failed(err) => {
            error!(target: LOG_TARGET, error = %err, "failed to extract form data");
            None
        }
        Capture::Fields(fields) => {
            let masked = mask_secrets(&fields, &exclusions);
            match serde_json::to_string(&masked) {
                Ok(json) => Some(json),
                Err(err) => {
                    error!(target: LOG_TARGET, error = %err, "failed to serialize form data");
                    None
                }
            }
        }
    };

    match (params_json, form_json) {
        (Some(params), Some(form)) => info!(
            target: LOG_TARGET,
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            params = %params,
            form = %form,
            "request parameters"
        ),
        (Some(params), None) => info!(
            target: LOG_TARGET,
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            params = %params,
            "request parameters"
        ),
        (None, Some(form)) => info!(
            target: LOG_TARGET,
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            form = %form,
            "request parameters"
        ),
        (None, None) => {}
    }
}
