//! HTTP-to-event translation for the demo server.
//!
//! Each request against `/pets` or `/pets/{petId}` becomes a proxy event,
//! flows through the resource's dispatch table, and the resulting envelope
//! is written back as a plain HTTP response.

use std::convert::Infallible;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;

use restgate_core::Resource;
use restgate_model::{RestEvent, RestResponse};

use crate::pets::{ID_PARAMETER, Pet};

/// Resource path served by this binary.
pub const PETS_RESOURCE: &str = "/pets";

/// Serve one request through the pets resource.
pub async fn serve(
    request: http::Request<Incoming>,
    resource: &Resource<Pet>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, incoming) = request.into_parts();

    let Some(pet_id) = match_pets_path(parts.uri.path()) else {
        return Ok(plain_response(
            http::StatusCode::NOT_FOUND,
            r#"{"message": "Not Found"}"#,
        ));
    };

    let body = match incoming.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(error) => {
            tracing::warn!(error = %error, "failed to read request body");
            return Ok(plain_response(
                http::StatusCode::BAD_REQUEST,
                r#"{"message": "Request body was invalid"}"#,
            ));
        }
    };

    let mut event = RestEvent::new(parts.method.as_str(), PETS_RESOURCE);
    for (name, value) in &parts.headers {
        if let Ok(value) = value.to_str() {
            event = event.with_header(name.as_str(), value);
        }
    }
    if let Some(id) = pet_id {
        event = event.with_path_parameter(ID_PARAMETER, id);
    }
    if !body.is_empty() {
        event = event.with_body(String::from_utf8_lossy(&body).into_owned());
    }

    Ok(to_http(resource.handle(&event)))
}

/// Match `/pets` (no identifier) and `/pets/{id}` (one identifier).
///
/// Returns `None` for paths outside the resource, including deeper nesting.
fn match_pets_path(path: &str) -> Option<Option<String>> {
    let rest = path.strip_prefix(PETS_RESOURCE)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    match rest.trim_matches('/') {
        "" => Some(None),
        id if !id.contains('/') => Some(Some(id.to_owned())),
        _ => None,
    }
}

/// Convert the engine's response envelope into an HTTP response.
fn to_http(response: RestResponse) -> http::Response<Full<Bytes>> {
    let mut builder = http::Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name, value);
    }
    match builder.body(Full::new(Bytes::from(response.body))) {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(error = %error, "response envelope carried invalid headers");
            plain_response(
                http::StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"message": "Internal Server Error"}"#,
            )
        }
    }
}

fn plain_response(status: http::StatusCode, body: &'static str) -> http::Response<Full<Bytes>> {
    let mut response = http::Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert("content-type", http::HeaderValue::from_static("application/json"));
    response
}
