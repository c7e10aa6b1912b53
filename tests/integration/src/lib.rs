//! Integration tests for the Restgate dispatch engine.
//!
//! These tests drive [`restgate_core::Resource::handle`] in-process with
//! hand-built proxy events; no server is required. The sample consumers
//! (pet store, minimal person resource) live in [`pets`] and the test
//! modules exercise the engine contract through them.

use std::sync::Once;

use restgate_model::{RestEvent, RestResponse};

pub mod pets;
mod test_defaults;
mod test_minimal;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a collection-level event for the pets resource.
#[must_use]
pub fn pets_event(method: &str) -> RestEvent {
    RestEvent::new(method, "/pets")
}

/// Build an identifier-scoped event for the pets resource.
#[must_use]
pub fn pets_event_with_id(method: &str, id: &str) -> RestEvent {
    pets_event(method).with_path_parameter(pets::ID_PARAMETER, id)
}

/// Extract the `message` field from an error response body.
#[must_use]
pub fn error_message(response: &RestResponse) -> String {
    let parsed: serde_json::Value =
        serde_json::from_str(&response.body).expect("error body is JSON");
    parsed["message"]
        .as_str()
        .expect("error body has a message field")
        .to_owned()
}
