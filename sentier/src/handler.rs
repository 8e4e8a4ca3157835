//! Handler capabilities and the per-route execution context.
//!
//! Every role in a dispatch - before-hooks, the primary handler,
//! after-handlers, not-found handlers, error handlers - is a polymorphic
//! capability: any value implementing the matching trait, returning a
//! tagged [`HandlerError`] on failure rather than an opaque code.
//!
//! The native-async traits ([`Handler`], [`Hook`], [`ErrorHandler`]) give
//! static dispatch for direct use. The route tree stores handlers as
//! trait objects, so each has an object-safe `Dyn*` twin returning a
//! [`BoxFuture`], with a blanket impl bridging the two.

use crate::routing::RouteNode;
use futures::future::BoxFuture;
use sentier_core::{HandlerError, Params, Request};
use std::future::Future;
use std::sync::Arc;

/// Outcome of a before-hook: keep going, or end dispatch silently.
///
/// A `Stop` is not an error. It is the gatekeeping signal (e.g. an auth
/// check rejecting a request after writing its own response): the primary
/// handler, after-handlers, and error handlers all stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Proceed to the next stage of the dispatch.
    Continue,
    /// End the dispatch immediately, with no error.
    Stop,
}

/// The read-only view handed to every handler during dispatch.
///
/// Exposes the node at which matching terminated and the parameters
/// captured along the way.
pub struct RouteContext<'a, R: Request> {
    node: &'a RouteNode<R>,
    params: &'a Params,
}

impl<'a, R: Request> RouteContext<'a, R> {
    pub(crate) fn new(node: &'a RouteNode<R>, params: &'a Params) -> Self {
        Self { node, params }
    }

    /// The node at which matching terminated.
    pub fn node(&self) -> &'a RouteNode<R> {
        self.node
    }

    /// All captured path parameters.
    pub fn params(&self) -> &'a Params {
        self.params
    }

    /// Look up a single captured parameter by name.
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name)
    }
}

// ============================================================================
// Primary / after / not-found handlers
// ============================================================================

/// A terminal capability of a matched route.
///
/// Receives the mutable request and the read-only routing context, and
/// reports success or a tagged failure. The same shape serves primary
/// handlers, after-handlers, and not-found handlers.
///
/// # Example
///
/// ```rust,ignore
/// struct Pong;
///
/// impl<R: Request> Handler<R> for Pong {
///     async fn call(&self, req: &mut R, _route: &RouteContext<'_, R>) -> Result<(), HandlerError> {
///         req.write(b"pong");
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{R}`",
    label = "missing `Handler<{R}>` implementation",
    note = "Handlers must implement the `call` method for the request type `{R}`."
)]
pub trait Handler<R: Request>: Send + Sync + 'static {
    /// Execute the handler.
    fn call(
        &self,
        req: &mut R,
        route: &RouteContext<'_, R>,
    ) -> impl Future<Output = Result<(), HandlerError>> + Send;
}

/// Object-safe version of [`Handler`], as stored in the route tree.
pub trait DynHandler<R: Request>: Send + Sync {
    /// Execute the handler through a boxed future.
    fn call_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
    ) -> BoxFuture<'a, Result<(), HandlerError>>;
}

// Blanket implementation: any Handler implements DynHandler automatically.
impl<R: Request, T: Handler<R>> DynHandler<R> for T {
    fn call_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(self.call(req, route))
    }
}

impl<R, F> Handler<R> for F
where
    R: Request,
    F: for<'a> Fn(
            &'a mut R,
            &'a RouteContext<'a, R>,
        ) -> BoxFuture<'a, Result<(), HandlerError>>
        + Send
        + Sync
        + 'static,
{
    async fn call(&self, req: &mut R, route: &RouteContext<'_, R>) -> Result<(), HandlerError> {
        (self)(req, route).await
    }
}

// ============================================================================
// Before-hooks
// ============================================================================

/// A before-hook, run root-to-leaf ahead of the primary handler.
///
/// Hooks may observe the request, mutate the response, or gate the
/// dispatch by returning [`Flow::Stop`].
pub trait Hook<R: Request>: Send + Sync + 'static {
    /// Inspect the request before the primary handler runs.
    fn on_request(
        &self,
        req: &mut R,
        route: &RouteContext<'_, R>,
    ) -> impl Future<Output = Result<Flow, HandlerError>> + Send;
}

/// Object-safe version of [`Hook`], as stored in the route tree.
pub trait DynHook<R: Request>: Send + Sync {
    /// Run the hook through a boxed future.
    fn on_request_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
    ) -> BoxFuture<'a, Result<Flow, HandlerError>>;
}

impl<R: Request, T: Hook<R>> DynHook<R> for T {
    fn on_request_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
    ) -> BoxFuture<'a, Result<Flow, HandlerError>> {
        Box::pin(self.on_request(req, route))
    }
}

// ============================================================================
// Error handlers
// ============================================================================

/// A recovery capability invoked by the error sweep.
///
/// Receives the failure that aborted the dispatch. A handler that returns
/// `Ok(())` ends the sweep; one that fails passes control to the next,
/// less specific, handler in the chain.
pub trait ErrorHandler<R: Request>: Send + Sync + 'static {
    /// Attempt to resolve the given failure.
    fn handle(
        &self,
        req: &mut R,
        route: &RouteContext<'_, R>,
        error: &HandlerError,
    ) -> impl Future<Output = Result<(), HandlerError>> + Send;
}

/// Object-safe version of [`ErrorHandler`], as stored in the route tree.
pub trait DynErrorHandler<R: Request>: Send + Sync {
    /// Run the error handler through a boxed future.
    fn handle_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
        error: &'a HandlerError,
    ) -> BoxFuture<'a, Result<(), HandlerError>>;
}

impl<R: Request, T: ErrorHandler<R>> DynErrorHandler<R> for T {
    fn handle_dyn<'a>(
        &'a self,
        req: &'a mut R,
        route: &'a RouteContext<'a, R>,
        error: &'a HandlerError,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(self.handle(req, route, error))
    }
}

// ============================================================================
// Shared storage aliases
// ============================================================================

/// A handler as stored in the tree and cloned into routing results.
pub type SharedHandler<R> = Arc<dyn DynHandler<R>>;

/// A before-hook as stored in the tree.
pub type SharedHook<R> = Arc<dyn DynHook<R>>;

/// An error handler as stored in the tree.
pub type SharedErrorHandler<R> = Arc<dyn DynErrorHandler<R>>;
