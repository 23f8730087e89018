//! API middleware

use std::any::Any;

use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::error::{ApiError, INTERNAL_ERROR_BODY};
use crate::AppState;

/// Number of headers still logged once the header block is over the size limit
const TRUNCATED_HEADER_COUNT: usize = 10;

/// Request logging middleware
///
/// Logs header size and content, method and URI, the body of mutating
/// requests, and the response status. Anything over `max_log_size` bytes is
/// truncated or replaced by a placeholder. The body is buffered for logging,
/// up to `max_body_size` bytes, and handed on unchanged; a larger body is
/// answered with 413.
pub async fn request_logging_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let max_log_size = state.config.max_log_size;
    let max_body_size = state.config.max_body_size;

    let headers_size = headers_size(request.headers());
    info!(headers_size, "Headers size: {} bytes", headers_size);
    info!("Headers: {}", describe_headers(request.headers(), max_log_size));
    info!(method = %request.method(), uri = %request.uri(), "Request: {} {}", request.method(), request.uri());

    let request = if logs_body(request.method()) {
        let (parts, body) = request.into_parts();
        let bytes = match body::to_bytes(body, max_body_size).await {
            Ok(bytes) => bytes,
            // Over the limit, or a dropped connection that never reads the reply
            Err(err) => {
                warn!(error = %err, max_body_size, "Request body rejected");
                let response = ApiError::PayloadTooLarge(format!(
                    "Request body exceeds {max_body_size} bytes"
                ))
                .into_response();
                info!(status = response.status().as_u16(), "Response status: {}", response.status().as_u16());
                return response;
            }
        };
        info!(body_size = bytes.len(), "Body size: {} bytes", bytes.len());
        info!("Body: {}", describe_body(&bytes, max_log_size));
        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    let response = next.run(request).await;

    info!(status = response.status().as_u16(), "Response status: {}", response.status().as_u16());
    response
}

/// Converts a handler panic into the generic 500 response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %message, "Unhandled exception while serving request");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}

fn logs_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Total bytes of all header names and values
pub fn headers_size(headers: &HeaderMap) -> usize {
    headers
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len())
        .sum()
}

/// Renders headers for the log, keeping only the first few when oversized
pub fn describe_headers(headers: &HeaderMap, max_log_size: usize) -> String {
    let truncated = headers_size(headers) > max_log_size;
    let shown = if truncated { TRUNCATED_HEADER_COUNT } else { usize::MAX };

    let rendered: Vec<String> = headers
        .iter()
        .take(shown)
        .map(|(name, value)| format!("'{}': '{}'", name, String::from_utf8_lossy(value.as_bytes())))
        .collect();

    let mut out = format!("{{{}}}", rendered.join(", "));
    if truncated {
        out.push_str("... [Truncated due to size]");
    }
    out
}

/// Renders a request body for the log, or a placeholder when oversized
pub fn describe_body(bytes: &[u8], max_log_size: usize) -> String {
    if bytes.len() <= max_log_size {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        "[Too large to log]".to_string()
    }
}
