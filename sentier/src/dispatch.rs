//! Request dispatch: match, run the handler chain, recover failures.

use crate::handler::{
    ErrorHandler, Flow, Handler, RouteContext, SharedErrorHandler, SharedHandler,
};
use crate::routing::{Route, RouteTree, RoutingResult};
use sentier_core::{BuildError, HandlerError, Method, Request};
use std::sync::Arc;

/// What a dispatch did with its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A method handler ran to completion, after-handlers included.
    Completed,
    /// No handler matched; the not-found chain produced the response.
    /// Not-found is a first-class routing outcome, not an error.
    NotFound,
    /// A before-hook ended the dispatch silently.
    Stopped,
    /// A handler failed and an error handler resolved the failure.
    Recovered,
    /// A handler failed and every error handler failed too; the failure
    /// was absorbed after exhausting the chain.
    Absorbed,
}

/// An immutable, shareable router handle.
///
/// Built once via [`RouterBuilder`] before request handling begins; no
/// mutation is exposed afterwards, so any number of requests may dispatch
/// concurrently against the same instance (wrap it in an `Arc` to share
/// across tasks). Multiple independent routers can coexist - there is no
/// process-wide active instance.
pub struct Router<R: Request> {
    tree: RouteTree<R>,
    default_not_found: SharedHandler<R>,
    default_error: SharedErrorHandler<R>,
}

impl<R: Request> Router<R> {
    /// Start building a router.
    pub fn builder() -> RouterBuilder<R> {
        RouterBuilder::new()
    }

    /// The underlying route tree.
    pub fn tree(&self) -> &RouteTree<R> {
        &self.tree
    }

    /// Match a method and path without dispatching.
    ///
    /// Exposes the captured parameters, the matched node, and the
    /// accumulated chains; useful for tests and for callers that want to
    /// inspect routing decisions.
    pub fn route(&self, method: Method, path: &str) -> RoutingResult<R> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut result = RoutingResult::seeded(Some(self.default_not_found.clone()));
        result.error.push(self.default_error.clone());
        result.found = self.tree.matches(method, &segments, &mut result);
        result
    }

    /// Dispatch one request through the matched handler chain.
    ///
    /// Before-hooks run root-to-leaf, then the primary handler (a method
    /// handler, or the most specific not-found handler), then the
    /// after-handlers root-to-leaf. Any [`HandlerError`] aborts the
    /// remaining sequence and triggers the error sweep. Failures never
    /// escape a dispatch.
    pub async fn dispatch(&self, req: &mut R) -> Outcome {
        let path = req.path().to_string();
        let method = req.method();

        let result = self.route(method, &path);
        tracing::debug!(%path, %method, found = result.is_match(), "route matched");

        let ctx = RouteContext::new(self.tree.node(result.matched()), result.params());

        for hook in &result.before {
            match hook.on_request_dyn(req, &ctx).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    tracing::debug!(%path, "before-hook stopped dispatch");
                    return Outcome::Stopped;
                }
                Err(error) => return self.sweep(req, &ctx, &result, error).await,
            }
        }

        let primary = match &result.handler {
            Some(handler) => handler.clone(),
            // The match always settles a handler once seeded; this arm
            // covers a result built without a default.
            None => self.default_not_found.clone(),
        };
        if let Err(error) = primary.call_dyn(req, &ctx).await {
            return self.sweep(req, &ctx, &result, error).await;
        }

        for after in &result.after {
            if let Err(error) = after.call_dyn(req, &ctx).await {
                return self.sweep(req, &ctx, &result, error).await;
            }
        }

        if result.is_match() {
            Outcome::Completed
        } else {
            Outcome::NotFound
        }
    }

    /// Run the accumulated error handlers leaf-to-root against `error`.
    ///
    /// Each handler receives the original triggering failure. The first
    /// one to complete ends the sweep; one that fails hands control to
    /// the next, less specific, handler.
    async fn sweep(
        &self,
        req: &mut R,
        ctx: &RouteContext<'_, R>,
        result: &RoutingResult<R>,
        error: HandlerError,
    ) -> Outcome {
        for handler in result.error.iter().rev() {
            match handler.handle_dyn(req, ctx, &error).await {
                Ok(()) => return Outcome::Recovered,
                Err(next) => {
                    tracing::debug!(error = %next, "error handler failed; trying the next one");
                }
            }
        }
        tracing::warn!(error = %error, "handler failure absorbed: error handler chain exhausted");
        Outcome::Absorbed
    }
}

/// Builds a [`Router`] from declarative route definitions.
///
/// # Example
///
/// ```rust,ignore
/// let router = Router::builder()
///     .mount(Route::new("users/:id").get(ShowUser))?
///     .mount(Route::new("health").get(Health))?
///     .build();
/// ```
pub struct RouterBuilder<R: Request> {
    tree: RouteTree<R>,
    default_not_found: Option<SharedHandler<R>>,
    default_error: Option<SharedErrorHandler<R>>,
}

impl<R: Request> RouterBuilder<R> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            tree: RouteTree::new(),
            default_not_found: None,
            default_error: None,
        }
    }

    /// Insert a route definition into the tree.
    pub fn mount(mut self, route: Route<R>) -> Result<Self, BuildError> {
        self.tree.insert(route)?;
        Ok(self)
    }

    /// Replace the terminal not-found handler.
    pub fn default_not_found(mut self, handler: impl Handler<R>) -> Self {
        self.default_not_found = Some(Arc::new(handler));
        self
    }

    /// Replace the terminal error handler.
    pub fn default_error(mut self, handler: impl ErrorHandler<R>) -> Self {
        self.default_error = Some(Arc::new(handler));
        self
    }

    /// Finish building; the router is immutable from here on.
    pub fn build(self) -> Router<R> {
        Router {
            tree: self.tree,
            default_not_found: self
                .default_not_found
                .unwrap_or_else(|| Arc::new(NotFoundResponse)),
            default_error: self
                .default_error
                .unwrap_or_else(|| Arc::new(InternalErrorResponse)),
        }
    }
}

impl<R: Request> Default for RouterBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal fallback when no custom not-found handler applies.
struct NotFoundResponse;

impl<R: Request> Handler<R> for NotFoundResponse {
    async fn call(&self, req: &mut R, _route: &RouteContext<'_, R>) -> Result<(), HandlerError> {
        req.set_status(404);
        req.set_content_type("text/plain");
        req.write(b"404: Not Found");
        Ok(())
    }
}

/// Terminal fallback when no custom error handler recovers.
struct InternalErrorResponse;

impl<R: Request> ErrorHandler<R> for InternalErrorResponse {
    async fn handle(
        &self,
        req: &mut R,
        _route: &RouteContext<'_, R>,
        _error: &HandlerError,
    ) -> Result<(), HandlerError> {
        req.set_status(500);
        req.set_content_type("text/plain");
        req.write(b"500: Internal Server Error");
        Ok(())
    }
}
