//! Wire-facing types for Restgate.
//!
//! This crate defines the data model shared between the dispatch engine and
//! its consumers:
//!
//! - **Method vocabulary**: the closed set of HTTP verbs that participate
//!   in resource dispatch
//! - **Operation classifier**: the pure mapping from (verb, identifier
//!   presence) to a resource operation
//! - **Event / response envelopes**: the API Gateway proxy wire shapes
//! - **Error taxonomy**: typed failures with fixed status-code bindings

mod error;
mod event;
mod method;
mod operation;
mod response;

pub use error::{BoxError, RestError, RestResult};
pub use event::RestEvent;
pub use method::RestMethod;
pub use operation::RestOperation;
pub use response::RestResponse;
