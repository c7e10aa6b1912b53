//! Response header assembly and CORS merge rules.

use std::collections::HashMap;

/// Content type applied to every engine-built response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// CORS headers applied to every response when enabled.
pub const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
];

/// Build the base header set for a resource.
#[must_use]
pub fn base_headers(enable_cors: bool) -> HashMap<String, String> {
    let mut headers = HashMap::from([("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned())]);
    if enable_cors {
        for (name, value) in CORS_HEADERS {
            headers.insert(name.to_owned(), value.to_owned());
        }
    }
    headers
}

/// Merge a raw handler's headers with the resource's base set.
///
/// Handler headers win on non-CORS keys (Content-Type included); CORS keys
/// from the base set are always reapplied so a handler cannot drop them.
#[must_use]
pub fn merge_handler_headers(
    base: &HashMap<String, String>,
    handler: HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = handler;
    for (name, value) in base {
        if is_cors_header(name) {
            merged.insert(name.clone(), value.clone());
        } else {
            merged.entry(name.clone()).or_insert_with(|| value.clone());
        }
    }
    merged
}

fn is_cors_header(name: &str) -> bool {
    CORS_HEADERS
        .iter()
        .any(|(cors_name, _)| name.eq_ignore_ascii_case(cors_name))
}
