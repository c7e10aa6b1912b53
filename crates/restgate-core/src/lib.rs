//! Resource dispatch engine for Restgate.
//!
//! One [`Resource`] handles every request for a single flat REST resource,
//! turning an inbound proxy event into exactly one response:
//!
//! - **Classification**: verb + identifier presence select the operation
//!   (see [`restgate_model::RestOperation::classify`])
//! - **Handler table**: one optional handler per operation; unregistered
//!   slots fall back to documented defaults
//! - **Error translation**: typed failures render as
//!   `{"message": "..."}` bodies with their bound status codes
//! - **Containment**: panics and serialization failures become 500s; no
//!   failure escapes [`Resource::handle`]
//!
//! Consumers own all storage and its synchronization; the engine carries no
//! mutable state across invocations.

pub mod config;
pub mod decode;
pub mod dispatch;
pub mod headers;
pub mod response;

pub use config::ResourceConfig;
pub use decode::{decode_body, decode_body_opt, decode_body_raw};
pub use dispatch::Resource;
