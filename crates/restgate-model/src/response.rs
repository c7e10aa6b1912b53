//! Outbound response envelope.

use std::collections::HashMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// The outbound response produced for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse {
    /// HTTP status code, serialized as its numeric value.
    #[serde(rename = "statusCode", with = "status_code")]
    pub status: StatusCode,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body (UTF-8 text, typically JSON).
    pub body: String,
}

impl RestResponse {
    /// Create a response from its parts.
    #[must_use]
    pub fn new(
        status: StatusCode,
        headers: HashMap<String, String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// (De)serialize `http::StatusCode` as its numeric wire value.
mod status_code {
    use http::StatusCode;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(status.as_u16())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(serde::de::Error::custom)
    }
}
