//! The operation table and dispatch loop.
//!
//! [`Resource`] holds one optional handler per operation. Each invocation
//! classifies the event, invokes the registered handler or the documented
//! default, and renders the outcome. [`Resource::handle`] is infallible:
//! typed failures render through the taxonomy, and anything else escaping a
//! handler is contained as a 500.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use restgate_model::{RestError, RestEvent, RestMethod, RestOperation, RestResponse};
use serde::Serialize;

use crate::config::ResourceConfig;
use crate::headers::{base_headers, merge_handler_headers};
use crate::response::{empty_object_response, error_response, json_response};

/// Handler producing the full collection (`list`, `delete_all`).
pub type CollectionHandler<T> =
    Box<dyn Fn(&RestEvent) -> Result<Vec<T>, RestError> + Send + Sync>;

/// Handler creating a resource without an identifier (`create`).
pub type CreateHandler<T> = Box<dyn Fn(&RestEvent) -> Result<T, RestError> + Send + Sync>;

/// Handler creating a resource under a caller-chosen identifier
/// (`create_with_id`).
pub type CreateWithIdHandler<T> =
    Box<dyn Fn(&str, &RestEvent) -> Result<T, RestError> + Send + Sync>;

/// Identifier-scoped handler that may find nothing (`get`, `update`,
/// `delete`). `Ok(None)` is absence and coerces to a 404.
pub type LookupHandler<T> =
    Box<dyn Fn(&str, &RestEvent) -> Result<Option<T>, RestError> + Send + Sync>;

/// Handler returning a complete response (`options`, `unmatched`). The
/// engine reapplies CORS headers but otherwise leaves the response alone.
pub type RawHandler = Box<dyn Fn(&RestEvent) -> Result<RestResponse, RestError> + Send + Sync>;

/// One optional handler per operation; unset slots fall back to the
/// documented defaults.
struct HandlerTable<T> {
    list: Option<CollectionHandler<T>>,
    get: Option<LookupHandler<T>>,
    create: Option<CreateHandler<T>>,
    create_with_id: Option<CreateWithIdHandler<T>>,
    update: Option<LookupHandler<T>>,
    delete: Option<LookupHandler<T>>,
    delete_all: Option<CollectionHandler<T>>,
    options: Option<RawHandler>,
    unmatched: Option<RawHandler>,
}

impl<T> HandlerTable<T> {
    fn new() -> Self {
        Self {
            list: None,
            get: None,
            create: None,
            create_with_id: None,
            update: None,
            delete: None,
            delete_all: None,
            options: None,
            unmatched: None,
        }
    }

    fn registered(&self) -> Vec<&'static str> {
        let slots = [
            ("list", self.list.is_some()),
            ("get", self.get.is_some()),
            ("create", self.create.is_some()),
            ("create_with_id", self.create_with_id.is_some()),
            ("update", self.update.is_some()),
            ("delete", self.delete.is_some()),
            ("delete_all", self.delete_all.is_some()),
            ("options", self.options.is_some()),
            ("unmatched", self.unmatched.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}

/// A single flat REST resource: configuration plus its handler table.
///
/// Constructed once, then invoked for every request against the resource.
/// Holds no mutable state; consumer storage lives inside the handler
/// closures.
pub struct Resource<T> {
    config: ResourceConfig,
    headers: HashMap<String, String>,
    handlers: HandlerTable<T>,
}

impl<T> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("config", &self.config)
            .field("handlers", &self.handlers.registered())
            .finish()
    }
}

impl<T: Serialize> Resource<T> {
    /// Create a resource with no handlers registered.
    ///
    /// Until handlers are registered, every operation except OPTIONS
    /// answers 405.
    #[must_use]
    pub fn new(config: ResourceConfig) -> Self {
        let headers = base_headers(config.enable_cors);
        Self {
            config,
            headers,
            handlers: HandlerTable::new(),
        }
    }

    /// Register the `GET /resource` handler.
    #[must_use]
    pub fn list<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RestEvent) -> Result<Vec<T>, RestError> + Send + Sync + 'static,
    {
        self.handlers.list = Some(Box::new(handler));
        self
    }

    /// Register the `GET /resource/{id}` handler. `Ok(None)` answers 404.
    #[must_use]
    pub fn get<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &RestEvent) -> Result<Option<T>, RestError> + Send + Sync + 'static,
    {
        self.handlers.get = Some(Box::new(handler));
        self
    }

    /// Register the `POST /resource` handler.
    #[must_use]
    pub fn create<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RestEvent) -> Result<T, RestError> + Send + Sync + 'static,
    {
        self.handlers.create = Some(Box::new(handler));
        self
    }

    /// Register the `POST /resource/{id}` handler.
    #[must_use]
    pub fn create_with_id<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &RestEvent) -> Result<T, RestError> + Send + Sync + 'static,
    {
        self.handlers.create_with_id = Some(Box::new(handler));
        self
    }

    /// Register the `PUT /resource/{id}` handler. `Ok(None)` answers 404.
    #[must_use]
    pub fn update<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &RestEvent) -> Result<Option<T>, RestError> + Send + Sync + 'static,
    {
        self.handlers.update = Some(Box::new(handler));
        self
    }

    /// Register the `DELETE /resource/{id}` handler. `Ok(None)` answers 404.
    #[must_use]
    pub fn delete<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &RestEvent) -> Result<Option<T>, RestError> + Send + Sync + 'static,
    {
        self.handlers.delete = Some(Box::new(handler));
        self
    }

    /// Register the `DELETE /resource` handler.
    #[must_use]
    pub fn delete_all<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RestEvent) -> Result<Vec<T>, RestError> + Send + Sync + 'static,
    {
        self.handlers.delete_all = Some(Box::new(handler));
        self
    }

    /// Register the OPTIONS handler. It controls the entire response;
    /// without one, OPTIONS answers 200 with an empty JSON object.
    #[must_use]
    pub fn options<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RestEvent) -> Result<RestResponse, RestError> + Send + Sync + 'static,
    {
        self.handlers.options = Some(Box::new(handler));
        self
    }

    /// Register the catch-all handler for unmatched requests. It controls
    /// the entire response; without one, unmatched requests answer 405.
    #[must_use]
    pub fn unmatched<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RestEvent) -> Result<RestResponse, RestError> + Send + Sync + 'static,
    {
        self.handlers.unmatched = Some(Box::new(handler));
        self
    }

    /// Dispatch one event and render its response.
    ///
    /// Never fails: typed errors render through the taxonomy, serialization
    /// failures become 500s, and a panicking handler is contained at this
    /// boundary and answered with a generic 500.
    pub fn handle(&self, event: &RestEvent) -> RestResponse {
        let resource_id = event.path_parameter(&self.config.id_parameter);
        let method = RestMethod::parse(&event.http_method);
        let operation = RestOperation::classify(method, resource_id.is_some());
        tracing::debug!(
            method = %event.http_method,
            resource = %event.resource,
            operation = %operation,
            "dispatching resource operation"
        );

        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.invoke(operation, resource_id, event)));
        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => {
                if error.status().is_server_error() {
                    tracing::error!(
                        error = %error,
                        source = ?std::error::Error::source(&error),
                        "internal failure while handling request"
                    );
                }
                error_response(&error, self.headers.clone())
            }
            Err(cause) => {
                tracing::error!(
                    operation = %operation,
                    panic = %panic_message(cause.as_ref()),
                    "handler panicked; answering with a generic internal error"
                );
                error_response(&RestError::internal_opaque(), self.headers.clone())
            }
        }
    }

    fn invoke(
        &self,
        operation: RestOperation,
        resource_id: Option<&str>,
        event: &RestEvent,
    ) -> Result<RestResponse, RestError> {
        match (operation, resource_id) {
            (RestOperation::Options, _) => match &self.handlers.options {
                Some(handler) => self.finish_raw(handler, event),
                None => Ok(empty_object_response(self.headers.clone())),
            },
            (RestOperation::Unmatched, _) => match &self.handlers.unmatched {
                Some(handler) => self.finish_raw(handler, event),
                None => Err(self.unsupported(event)),
            },
            (RestOperation::List, _) => self.collection(self.handlers.list.as_ref(), event),
            (RestOperation::DeleteAll, _) => {
                self.collection(self.handlers.delete_all.as_ref(), event)
            }
            (RestOperation::Create, _) => {
                let handler = self
                    .handlers
                    .create
                    .as_ref()
                    .ok_or_else(|| self.unsupported(event))?;
                json_response(&handler(event)?, self.headers.clone())
            }
            (RestOperation::CreateWithId, Some(id)) => {
                let handler = self
                    .handlers
                    .create_with_id
                    .as_ref()
                    .ok_or_else(|| self.unsupported(event))?;
                json_response(&handler(id, event)?, self.headers.clone())
            }
            (RestOperation::Get, Some(id)) => self.lookup(self.handlers.get.as_ref(), id, event),
            (RestOperation::Update, Some(id)) => {
                self.lookup(self.handlers.update.as_ref(), id, event)
            }
            (RestOperation::Delete, Some(id)) => {
                self.lookup(self.handlers.delete.as_ref(), id, event)
            }
            // The classifier only emits identifier-scoped operations when
            // the identifier is present.
            (
                RestOperation::Get
                | RestOperation::CreateWithId
                | RestOperation::Update
                | RestOperation::Delete,
                None,
            ) => Err(self.unsupported(event)),
        }
    }

    fn collection(
        &self,
        handler: Option<&CollectionHandler<T>>,
        event: &RestEvent,
    ) -> Result<RestResponse, RestError> {
        let handler = handler.ok_or_else(|| self.unsupported(event))?;
        json_response(&handler(event)?, self.headers.clone())
    }

    fn lookup(
        &self,
        handler: Option<&LookupHandler<T>>,
        id: &str,
        event: &RestEvent,
    ) -> Result<RestResponse, RestError> {
        let handler = handler.ok_or_else(|| self.unsupported(event))?;
        match handler(id, event)? {
            Some(value) => json_response(&value, self.headers.clone()),
            None => Err(RestError::not_found(id)),
        }
    }

    fn finish_raw(&self, handler: &RawHandler, event: &RestEvent) -> Result<RestResponse, RestError> {
        let mut response = handler(event)?;
        response.headers = merge_handler_headers(&self.headers, response.headers);
        Ok(response)
    }

    fn unsupported(&self, event: &RestEvent) -> RestError {
        RestError::unsupported(&event.http_method, &event.resource)
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
