//! # sentier-core
//!
//! Protocol primitives for the Sentier request router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! request-type adapters and extensions that don't need the full `sentier`
//! router implementation.
//!
//! # What lives here
//!
//! - [`Request`] - the opaque request abstraction the router consumes.
//!   The router never touches a socket; everything it needs from the
//!   underlying server is behind this trait.
//! - [`Method`] - the recognized HTTP methods plus a catch-all.
//! - [`Params`] - the name to decoded-value map captured from dynamic
//!   path segments during a match.
//! - [`BuildError`] / [`HandlerError`] - the two halves of the error
//!   taxonomy: construction failures are fatal and propagate, handler
//!   failures are recovered per-request by the error sweep.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod method;
mod params;
mod request;

pub use error::{BoxError, BuildError, HandlerError};
pub use method::Method;
pub use params::Params;
pub use request::Request;
