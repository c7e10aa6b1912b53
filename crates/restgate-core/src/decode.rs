//! Opportunistic request body decoding.
//!
//! Decoding is invoked by handlers that need a payload; the engine never
//! forces it for operations that take no body.

use restgate_model::{RestError, RestEvent};
use serde::de::DeserializeOwned;

const BODY_REQUIRED: &str = "Request body required, but was empty";
const BODY_INVALID: &str = "Request body was invalid";

/// Decode the event body into `T`.
///
/// Fails with a validation error when the body is absent or empty, cannot
/// be parsed as JSON, or cannot be coerced into `T` (missing field, wrong
/// type, unknown enum value).
pub fn decode_body<T: DeserializeOwned>(event: &RestEvent) -> Result<T, RestError> {
    decode_body_opt(event)?.ok_or_else(|| RestError::validation(BODY_REQUIRED))
}

/// Decode the event body into `T` when one is present.
///
/// Returns `Ok(None)` for an absent or empty body; a body that is present
/// but malformed still fails with a validation error.
pub fn decode_body_opt<T: DeserializeOwned>(event: &RestEvent) -> Result<Option<T>, RestError> {
    let Some(body) = event.body.as_deref().filter(|body| !body.trim().is_empty()) else {
        return Ok(None);
    };
    match serde_json::from_str(body) {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            tracing::debug!(error = %error, "request body failed to decode");
            Err(RestError::validation(BODY_INVALID))
        }
    }
}

/// Decode the event body into an untyped JSON value.
pub fn decode_body_raw(event: &RestEvent) -> Result<serde_json::Value, RestError> {
    decode_body(event)
}
