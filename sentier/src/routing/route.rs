//! Declarative route definitions.

use crate::handler::{ErrorHandler, Handler, Hook, SharedErrorHandler, SharedHandler, SharedHook};
use sentier_core::{Method, Request};
use std::sync::Arc;

/// A declarative route definition: the input to tree construction.
///
/// The path may span several `/`-separated segments; each is inserted as
/// one node, reusing nodes already present. A leading `:` marks a dynamic
/// segment that captures the matched value under its name.
///
/// # Example
///
/// ```rust,ignore
/// let route = Route::new("users/:id")
///     .get(ShowUser)
///     .delete(RemoveUser)
///     .before(RequireAuth)
///     .child(Route::new("posts").get(ListPosts));
/// ```
pub struct Route<R: Request> {
    pub(crate) path: String,
    pub(crate) methods: Vec<(Method, SharedHandler<R>)>,
    pub(crate) any: Option<SharedHandler<R>>,
    pub(crate) not_found: Option<SharedHandler<R>>,
    pub(crate) error: Option<SharedErrorHandler<R>>,
    pub(crate) before: Option<SharedHook<R>>,
    pub(crate) after: Option<SharedHandler<R>>,
    pub(crate) children: Vec<Route<R>>,
}

impl<R: Request> Route<R> {
    /// Start a route definition for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            any: None,
            not_found: None,
            error: None,
            before: None,
            after: None,
            children: Vec::new(),
        }
    }

    /// Register a handler for a specific method at this route.
    pub fn method(mut self, method: Method, handler: impl Handler<R>) -> Self {
        self.methods.push((method, Arc::new(handler)));
        self
    }

    /// Register a GET handler.
    pub fn get(self, handler: impl Handler<R>) -> Self {
        self.method(Method::Get, handler)
    }

    /// Register a POST handler.
    pub fn post(self, handler: impl Handler<R>) -> Self {
        self.method(Method::Post, handler)
    }

    /// Register a PUT handler.
    pub fn put(self, handler: impl Handler<R>) -> Self {
        self.method(Method::Put, handler)
    }

    /// Register a PATCH handler.
    pub fn patch(self, handler: impl Handler<R>) -> Self {
        self.method(Method::Patch, handler)
    }

    /// Register a DELETE handler.
    pub fn delete(self, handler: impl Handler<R>) -> Self {
        self.method(Method::Delete, handler)
    }

    /// Register a fallback handler for methods with no exact match.
    pub fn any(mut self, handler: impl Handler<R>) -> Self {
        self.any = Some(Arc::new(handler));
        self
    }

    /// Override the not-found handler for this subtree.
    pub fn not_found(mut self, handler: impl Handler<R>) -> Self {
        self.not_found = Some(Arc::new(handler));
        self
    }

    /// Add an error handler to the sweep chain for this subtree.
    pub fn on_error(mut self, handler: impl ErrorHandler<R>) -> Self {
        self.error = Some(Arc::new(handler));
        self
    }

    /// Add a before-hook that runs for every match through this node.
    pub fn before(mut self, hook: impl Hook<R>) -> Self {
        self.before = Some(Arc::new(hook));
        self
    }

    /// Add an after-handler that runs for every match through this node.
    pub fn after(mut self, handler: impl Handler<R>) -> Self {
        self.after = Some(Arc::new(handler));
        self
    }

    /// Nest a child route definition under this one.
    pub fn child(mut self, route: Route<R>) -> Self {
        self.children.push(route);
        self
    }
}
