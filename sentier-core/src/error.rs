//! Error types for Sentier.
//!
//! Two distinct families, matching the routing lifecycle:
//!
//! - [`BuildError`] - raised while constructing the route tree. Fatal and
//!   propagated to the caller of registration.
//! - [`HandlerError`] - raised by a before-hook, primary handler, or
//!   after-handler during dispatch. Never crashes the process; resolved by
//!   the error sweep within the request that produced it.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building a route tree.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A route definition had a path with no segments (empty, or slashes
    /// only).
    #[error("route path must contain at least one segment")]
    EmptyPath,

    /// A dynamic segment had a sigil but no name (e.g. a bare `:`).
    #[error("dynamic segment {0:?} is missing a parameter name")]
    UnnamedParameter(String),
}

/// A tagged handler failure.
///
/// Handlers return this instead of an opaque error code so the error sweep
/// can inspect the failure kind when deciding how to respond.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A plain failure description.
    #[error("{0}")]
    Message(String),

    /// A failure that maps directly to a response status.
    #[error("handler failed with status {0}")]
    Status(u16),

    /// A failure caused by an underlying error.
    #[error(transparent)]
    Source(BoxError),
}

impl HandlerError {
    /// Shorthand for a [`HandlerError::Message`].
    pub fn msg(message: impl Into<String>) -> Self {
        HandlerError::Message(message.into())
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        HandlerError::Message(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        HandlerError::Message(message.to_string())
    }
}

impl From<BoxError> for HandlerError {
    fn from(err: BoxError) -> Self {
        HandlerError::Source(err)
    }
}
