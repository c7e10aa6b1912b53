//! The minimal person resource: a get-only consumer with defaults
//! everywhere else.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use restgate_model::RestEvent;

    use crate::init_tracing;
    use crate::pets::{Person, minimal_resource};

    fn person_event(method: &str) -> RestEvent {
        RestEvent::new(method, "/people")
    }

    fn person_event_with_id(method: &str, id: &str) -> RestEvent {
        person_event(method).with_path_parameter("id", id)
    }

    #[test]
    fn test_should_echo_requested_person() {
        init_tracing();
        let resource = minimal_resource();
        let response = resource.handle(&person_event_with_id("GET", "alice"));
        assert_eq!(response.status, StatusCode::OK);
        let person: Person = serde_json::from_str(&response.body).unwrap();
        assert_eq!(person.id, "alice");
    }

    #[test]
    fn test_should_carry_cors_headers_by_default() {
        init_tracing();
        let resource = minimal_resource();
        let response = resource.handle(&person_event_with_id("GET", "alice"));
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[test]
    fn test_should_answer_options_even_without_override() {
        init_tracing();
        let resource = minimal_resource();
        let response = resource.handle(&person_event("OPTIONS"));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn test_should_answer_405_for_everything_else() {
        init_tracing();
        let resource = minimal_resource();
        for event in [
            person_event("GET"),
            person_event("POST"),
            person_event_with_id("PUT", "alice"),
            person_event_with_id("DELETE", "alice"),
        ] {
            let response = resource.handle(&event);
            assert_eq!(
                response.status,
                StatusCode::METHOD_NOT_ALLOWED,
                "expected 405 for {}",
                event.http_method,
            );
        }
    }
}
