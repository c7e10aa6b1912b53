//! Inbound proxy event.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A single inbound request in the API Gateway proxy format.
///
/// Created once per invocation and never stored by the engine. The gateway
/// sends `null` for absent parameter and header maps, so both deserialize
/// into empty maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestEvent {
    /// Raw HTTP method, e.g. `"GET"`.
    pub http_method: String,
    /// Resource path template, e.g. `"/pets"`; rendered into
    /// unsupported-operation messages.
    pub resource: String,
    /// Path parameters extracted by the gateway.
    #[serde(deserialize_with = "nullable_map")]
    pub path_parameters: HashMap<String, String>,
    /// Request headers.
    #[serde(deserialize_with = "nullable_map")]
    pub headers: HashMap<String, String>,
    /// Raw request body, if any.
    pub body: Option<String>,
}

impl RestEvent {
    /// Create an event with the given method and resource path.
    #[must_use]
    pub fn new(http_method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            resource: resource.into(),
            ..Self::default()
        }
    }

    /// Add a path parameter.
    #[must_use]
    pub fn with_path_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Add a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the named path parameter when present and non-empty.
    ///
    /// An empty value counts as absent, so a request with a blank
    /// identifier slot classifies as a collection operation.
    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Deserialize a map that the gateway may send as `null`.
fn nullable_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<HashMap<String, String>>::deserialize(deserializer)?;
    Ok(map.unwrap_or_default())
}
