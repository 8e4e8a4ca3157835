//! Per-request match accumulation.

use crate::handler::{SharedErrorHandler, SharedHandler, SharedHook};
use crate::routing::tree::{NodeId, RouteNode};
use sentier_core::{Params, Request};

/// Everything a match attempt accumulates.
///
/// One top-level result is created per request. Each speculative
/// dynamic-child attempt gets its own disposable result, merged back into
/// the parent only if the attempt succeeds; a failed attempt is simply
/// dropped, which is what makes backtracking side-effect free.
///
/// Handlers are `Arc`-shared with the tree, so results are cheap to build
/// and fully owned by the request that created them - concurrent matches
/// share nothing mutable.
pub struct RoutingResult<R: Request> {
    pub(crate) matched: NodeId,
    pub(crate) handler: Option<SharedHandler<R>>,
    pub(crate) params: Params,
    pub(crate) before: Vec<SharedHook<R>>,
    pub(crate) after: Vec<SharedHandler<R>>,
    pub(crate) error: Vec<SharedErrorHandler<R>>,
    pub(crate) not_found: Option<SharedHandler<R>>,
    pub(crate) found: bool,
}

impl<R: Request> RoutingResult<R> {
    /// Create a result seeded with a fallback not-found handler.
    pub(crate) fn seeded(not_found: Option<SharedHandler<R>>) -> Self {
        Self {
            matched: NodeId::ROOT,
            handler: None,
            params: Params::new(),
            before: Vec::new(),
            after: Vec::new(),
            error: Vec::new(),
            not_found,
            found: false,
        }
    }

    /// Whether matching found a handler for the request's method and path.
    ///
    /// `false` means the dispatch resolves through the not-found chain -
    /// a first-class routing outcome, not an error.
    pub fn is_match(&self) -> bool {
        self.found
    }

    /// The node at which matching terminated.
    pub fn matched(&self) -> NodeId {
        self.matched
    }

    /// The parameters captured during the match.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to the captured parameters.
    ///
    /// Values inserted here bypass percent-decoding.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Merge a node's overridable handlers into this result.
    ///
    /// Not-found replaces the inherited value; error, before, and after
    /// append in visit (root-to-leaf) order.
    pub(crate) fn absorb_node(&mut self, node: &RouteNode<R>) {
        if let Some(h) = &node.not_found {
            self.not_found = Some(h.clone());
        }
        if let Some(h) = &node.error {
            self.error.push(h.clone());
        }
        if let Some(h) = &node.before {
            self.before.push(h.clone());
        }
        if let Some(h) = &node.after {
            self.after.push(h.clone());
        }
    }

    /// Start a disposable attempt for one dynamic child.
    pub(crate) fn speculate(&self) -> Self {
        Self::seeded(self.not_found.clone())
    }

    /// Record a captured parameter.
    pub(crate) fn capture(&mut self, name: String, value: String) {
        self.params.insert(name, value);
    }

    /// Fold a successful speculative attempt into this result.
    pub(crate) fn merge_child(&mut self, child: Self) {
        self.matched = child.matched;
        self.handler = child.handler;
        self.not_found = child.not_found;
        self.before.extend(child.before);
        self.after.extend(child.after);
        self.error.extend(child.error);
        self.params.extend(child.params);
    }

    /// Terminate this attempt at `at` with the accumulated not-found handler.
    pub(crate) fn settle_not_found(&mut self, at: NodeId) {
        self.matched = at;
        self.handler = self.not_found.clone();
    }
}
