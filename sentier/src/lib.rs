//! # sentier - Segment-Trie Request Router
//!
//! `sentier` maps a request method and URL path to a registered handler,
//! extracts named path parameters, and assembles the ordered chain of
//! before-hooks, after-handlers, and error handlers that apply along the
//! matched path.
//!
//! # Architecture
//!
//! Two collaborating components, built bottom-up:
//!
//! - **[`routing::RouteTree`]** - an arena-backed trie, one node per path
//!   segment. Static children match exact literals and take absolute
//!   precedence; dynamic children (`:name`) match any single segment,
//!   bind the percent-decoded value to a parameter, and are retried in
//!   registration order when a deeper attempt fails.
//! - **[`Router`]** - the per-request orchestrator. It matches the
//!   request, runs before-hooks root-to-leaf (any may [`Flow::Stop`] the
//!   dispatch), runs the primary handler, runs after-handlers, and
//!   converts any handler failure into a leaf-to-root sweep over the
//!   accumulated error handlers.
//!
//! The tree is built once, before request handling begins, and is
//! read-only afterwards: unlimited concurrent dispatches share it with no
//! locking, each owning its own [`routing::RoutingResult`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sentier::{Route, Router};
//!
//! let router = Router::builder()
//!     .mount(Route::new("users/:id").get(ShowUser).delete(RemoveUser))?
//!     .build();
//!
//! // per request, on any worker:
//! router.dispatch(&mut request).await;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod handler;
pub mod routing;
pub mod testing;

pub use dispatch::{Outcome, Router, RouterBuilder};
pub use handler::{
    DynErrorHandler, DynHandler, DynHook, ErrorHandler, Flow, Handler, Hook, RouteContext,
    SharedErrorHandler, SharedHandler, SharedHook,
};
pub use routing::{NodeId, Route, RouteNode, RouteTree, RoutingResult};
pub use sentier_core::{BoxError, BuildError, HandlerError, Method, Params, Request};

/// Prelude module - common imports for Sentier.
///
/// # Usage
///
/// ```rust,ignore
/// use sentier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BuildError, ErrorHandler, Flow, Handler, HandlerError, Hook, Method, Outcome, Params,
        Request, Route, RouteContext, Router,
    };
}
