//! Default handler table contract.
//!
//! A resource with no handlers registered must answer 405 everywhere
//! except OPTIONS, whose default succeeds with an empty object.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use restgate_core::{Resource, ResourceConfig};
    use restgate_model::{RestEvent, RestResponse};

    use crate::{error_message, init_tracing, pets_event, pets_event_with_id};

    fn bare_resource() -> Resource<String> {
        init_tracing();
        Resource::new(ResourceConfig::new("petId"))
    }

    #[test]
    fn test_should_default_options_to_empty_object_with_cors() {
        let resource = bare_resource();
        let response = resource.handle(&pets_event("OPTIONS"));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "{}");
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            response.headers.get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_should_default_options_without_cors_headers_when_disabled() {
        init_tracing();
        let resource: Resource<String> =
            Resource::new(ResourceConfig::new("petId").without_cors());
        let response = resource.handle(&pets_event("OPTIONS"));
        assert_eq!(response.status, StatusCode::OK);
        assert!(!response.headers.contains_key("Access-Control-Allow-Origin"));
    }

    #[test]
    fn test_should_default_every_crud_operation_to_405() {
        let resource = bare_resource();
        let events = [
            pets_event("GET"),
            pets_event_with_id("GET", "123"),
            pets_event("POST"),
            pets_event_with_id("POST", "123"),
            pets_event_with_id("PUT", "123"),
            pets_event_with_id("DELETE", "123"),
            pets_event("DELETE"),
        ];
        for event in events {
            let response = resource.handle(&event);
            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                error_message(&response),
                format!("Cannot perform {} /pets", event.http_method),
            );
        }
    }

    #[test]
    fn test_should_default_unmatched_requests_to_405() {
        let resource = bare_resource();
        for event in [pets_event("FOO"), pets_event("PUT")] {
            let response = resource.handle(&event);
            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[test]
    fn test_should_not_route_put_without_identifier_to_create() {
        // PUT without an identifier is unmatched even when update and
        // create handlers exist.
        init_tracing();
        let resource = Resource::new(ResourceConfig::new("petId"))
            .create(|_| Ok("created".to_owned()))
            .update(|_, _| Ok(Some("updated".to_owned())));
        let response = resource.handle(&pets_event("PUT"));
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(error_message(&response), "Cannot perform PUT /pets");
    }

    #[test]
    fn test_should_answer_options_byte_identically_on_repeat() {
        let resource = bare_resource();
        let event = pets_event("OPTIONS");
        let first = resource.handle(&event);
        let second = resource.handle(&event);
        assert_eq!(first, second);
        assert_eq!(first.body.as_bytes(), second.body.as_bytes());
    }

    #[test]
    fn test_should_let_overridden_unmatched_handler_take_over() {
        init_tracing();
        let resource: Resource<String> = Resource::new(ResourceConfig::new("petId")).unmatched(
            |event| {
                Ok(RestResponse::new(
                    StatusCode::IM_A_TEAPOT,
                    std::collections::HashMap::new(),
                    format!(r#"{{"seen":"{}"}}"#, event.http_method),
                ))
            },
        );
        let response = resource.handle(&RestEvent::new("BREW", "/pets"));
        assert_eq!(response.status, StatusCode::IM_A_TEAPOT);
        assert!(response.body.contains("BREW"));
        // CORS headers survive a raw override.
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }
}
