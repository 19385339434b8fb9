use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::INTERNAL_ERROR_MESSAGE, response::ErrorBody};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Gives every failed response a `{"message": ...}` body.
///
/// Handler errors already arrive as JSON and pass through untouched. Whatever
/// the router or an extractor produced on its own (unknown route, wrong
/// method, plain-text rejection) is rewritten with the same status and
/// headers. Server-side detail is logged and never sent.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) || has_json_body(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let detail = to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| reason(status));

    let message = if status.is_server_error() {
        tracing::error!(status = status.as_u16(), %detail, "unhandled server error");
        INTERNAL_ERROR_MESSAGE.to_owned()
    } else {
        detail
    };

    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);

    let mut rewritten = (status, Json(ErrorBody::new(message))).into_response();
    rewritten.headers_mut().extend(parts.headers);
    rewritten
}

fn has_json_body(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            let value = value.to_ascii_lowercase();
            value.starts_with("application/json") || value.contains("+json")
        })
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_owned()
}
