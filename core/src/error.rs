//! Error types for the todo client.
//!
//! # Design
//! `ApiError` describes what went wrong on the wire. `TodoError` is what the
//! controller hands back to the item editor and composer: API failures plus
//! the local refusals that never reach the network. `NotFound` keeps its own
//! variant because callers distinguish a vanished record from a server fault.

use thiserror::Error;

use crate::types::TodoId;

/// Errors produced while building, sending, or parsing API calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned an unexpected status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors returned by controller operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("title should not be empty")]
    TitleRequired,

    /// A mutation for this id is already in flight.
    #[error("todo {0} is busy")]
    Busy(TodoId),

    /// The placeholder slot is already taken by another creation.
    #[error("a todo is already being created")]
    CreateInFlight,

    #[error("todo {0} is not in the list")]
    UnknownTodo(TodoId),

    /// An inline edit is open or its last save failed.
    #[error("an inline edit is in progress")]
    EditLocked,
}

/// Errors raised while reading client configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid user id {value:?}: expected a positive integer")]
    InvalidUserId { value: String },

    #[error("API url must not be empty")]
    EmptyBaseUrl,
}
