//! Error types for the phonebook core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the state layer reports a
//! contact that vanished from the server differently from other failures.
//! All other non-2xx responses land in `Http` with the raw status and body.

use thiserror::Error;

use crate::types::ContactId;

/// Errors returned by `ContactsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by the `Phonebook` state layer.
#[derive(Debug, Error)]
pub enum PhonebookError {
    /// A user action tried to start a request while another is unresolved.
    #[error("a request is already in flight")]
    RequestInFlight,

    /// A response arrived but no request was waiting for one.
    #[error("no request is pending")]
    NoRequestPending,

    #[error("no contact with id {0}")]
    UnknownContact(ContactId),

    #[error(transparent)]
    Api(#[from] ApiError),
}
