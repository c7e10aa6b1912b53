//! Resource operation classification.
//!
//! A request classifies into exactly one operation from its verb and
//! whether it carries a resource identifier. Classification never looks at
//! the body or the headers, and is recomputed per request.

use std::fmt;

use crate::method::RestMethod;

/// The resource operations a dispatch table can register handlers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestOperation {
    /// `OPTIONS` on the collection or an item.
    Options,
    /// `GET` on the collection.
    List,
    /// `GET` on an item.
    Get,
    /// `POST` on the collection.
    Create,
    /// `POST` on an item: create under a caller-chosen identifier.
    CreateWithId,
    /// `PUT` on an item.
    Update,
    /// `DELETE` on an item.
    Delete,
    /// `DELETE` on the collection.
    DeleteAll,
    /// Any verb/identifier combination outside the table, including
    /// unknown verbs and `PUT` without an identifier.
    Unmatched,
}

impl RestOperation {
    /// Classify a request from its verb and identifier presence.
    ///
    /// The mapping is total and pure:
    ///
    /// | Verb | Identifier | Operation |
    /// |---|---|---|
    /// | OPTIONS | either | `Options` |
    /// | GET | yes / no | `Get` / `List` |
    /// | POST | yes / no | `CreateWithId` / `Create` |
    /// | PUT | yes / no | `Update` / `Unmatched` |
    /// | DELETE | yes / no | `Delete` / `DeleteAll` |
    /// | other | either | `Unmatched` |
    ///
    /// `PUT` without an identifier is deliberately unmatched rather than
    /// routed to `Create`.
    #[must_use]
    pub fn classify(method: Option<RestMethod>, has_id: bool) -> Self {
        match (method, has_id) {
            (Some(RestMethod::Options), _) => Self::Options,
            (Some(RestMethod::Get), true) => Self::Get,
            (Some(RestMethod::Get), false) => Self::List,
            (Some(RestMethod::Post), true) => Self::CreateWithId,
            (Some(RestMethod::Post), false) => Self::Create,
            (Some(RestMethod::Put), true) => Self::Update,
            (Some(RestMethod::Delete), true) => Self::Delete,
            (Some(RestMethod::Delete), false) => Self::DeleteAll,
            (Some(RestMethod::Put), false) | (None, _) => Self::Unmatched,
        }
    }

    /// Returns the operation name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Options => "Options",
            Self::List => "List",
            Self::Get => "Get",
            Self::Create => "Create",
            Self::CreateWithId => "CreateWithId",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::DeleteAll => "DeleteAll",
            Self::Unmatched => "Unmatched",
        }
    }

    /// Returns true for operations scoped to a single resource identifier.
    #[must_use]
    pub fn is_identifier_scoped(&self) -> bool {
        matches!(
            self,
            Self::Get | Self::CreateWithId | Self::Update | Self::Delete
        )
    }
}

impl fmt::Display for RestOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
