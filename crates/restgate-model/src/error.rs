//! Typed failure taxonomy.
//!
//! Every variant is bound to exactly one HTTP status code, and the rendered
//! wire body is always a single-field JSON object `{"message": "..."}`.
//! Internal failures keep their underlying cause for diagnostics but never
//! surface it on the wire.

use http::StatusCode;

/// Boxed error source retained for logging.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Wire message for internal failures; causes stay out of the body.
const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Typed failures produced by handlers and the dispatch engine.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// No resource exists for the requested identifier.
    #[error("Resource not found: {id}")]
    NotFound {
        /// The identifier that was not found.
        id: String,
    },

    /// The request payload was missing, malformed, or mis-shaped.
    #[error("{detail}")]
    Validation {
        /// Human-readable description of the validation failure.
        detail: String,
    },

    /// The verb/resource combination has no registered handler.
    #[error("Cannot perform {method} {resource}")]
    Unsupported {
        /// The raw request method.
        method: String,
        /// The resource path the request targeted.
        resource: String,
    },

    /// The caller is not authenticated.
    #[error("Unauthorized")]
    Unauthorized,

    /// The caller is authenticated but not permitted.
    #[error("Forbidden")]
    Forbidden,

    /// An unanticipated failure. The message is generic; the cause is kept
    /// only as a source for logging.
    #[error("{message}")]
    Internal {
        /// Generic wire message, never the cause's details.
        message: String,
        /// The underlying cause, for diagnostics only.
        #[source]
        source: Option<BoxError>,
    },
}

impl RestError {
    /// An unknown-identifier failure (404).
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// A validation failure (400).
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// An unsupported verb/resource combination (405).
    pub fn unsupported(method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::Unsupported {
            method: method.into(),
            resource: resource.into(),
        }
    }

    /// An internal failure (500) wrapping its cause.
    pub fn internal(source: impl Into<BoxError>) -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_owned(),
            source: Some(source.into()),
        }
    }

    /// An internal failure (500) with a caller-vetted safe message suffix.
    pub fn internal_with_message(safe_detail: impl Into<String>, source: Option<BoxError>) -> Self {
        Self::Internal {
            message: format!("{INTERNAL_MESSAGE}: {}", safe_detail.into()),
            source,
        }
    }

    /// An internal failure (500) with no recorded cause.
    #[must_use]
    pub fn internal_opaque() -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_owned(),
            source: None,
        }
    }

    /// The HTTP status code bound to this failure. Total; never overridden
    /// per call.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unsupported { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience result type for handler outcomes.
pub type RestResult<T> = Result<T, RestError>;
