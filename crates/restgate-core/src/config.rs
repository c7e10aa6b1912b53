//! Per-resource configuration.

/// Dispatch configuration for one resource, fixed at construction.
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    /// Name of the path parameter that carries the resource identifier.
    pub id_parameter: String,
    /// Whether CORS headers are added to every response.
    pub enable_cors: bool,
}

impl ResourceConfig {
    /// Create a configuration with CORS enabled (the default).
    #[must_use]
    pub fn new(id_parameter: impl Into<String>) -> Self {
        Self {
            id_parameter: id_parameter.into(),
            enable_cors: true,
        }
    }

    /// Disable CORS headers on responses.
    #[must_use]
    pub fn without_cors(mut self) -> Self {
        self.enable_cors = false;
        self
    }
}
