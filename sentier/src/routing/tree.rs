//! The segment trie: arena storage, construction, and matching.

use crate::handler::{SharedErrorHandler, SharedHandler, SharedHook};
use crate::routing::result::RoutingResult;
use crate::routing::route::Route;
use sentier_core::{BuildError, Method, Request};
use std::collections::HashMap;

/// The sigil marking a dynamic segment in a route path.
pub(crate) const PARAM_SIGIL: char = ':';

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0
    }
}

/// One tree node per path segment.
///
/// A node's segment is immutable after creation. The root's segment is
/// empty and its method handlers are never consulted.
pub struct RouteNode<R: Request> {
    segment: String,
    pub(crate) static_children: HashMap<String, NodeId>,
    pub(crate) dynamic_children: Vec<NodeId>,
    pub(crate) methods: HashMap<Method, SharedHandler<R>>,
    pub(crate) any: Option<SharedHandler<R>>,
    pub(crate) not_found: Option<SharedHandler<R>>,
    pub(crate) error: Option<SharedErrorHandler<R>>,
    pub(crate) before: Option<SharedHook<R>>,
    pub(crate) after: Option<SharedHandler<R>>,
}

impl<R: Request> RouteNode<R> {
    fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            static_children: HashMap::new(),
            dynamic_children: Vec::new(),
            methods: HashMap::new(),
            any: None,
            not_found: None,
            error: None,
            before: None,
            after: None,
        }
    }

    /// The literal text of this path component (sigil included if dynamic).
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Whether this node is a placeholder that captures a parameter.
    pub fn is_dynamic(&self) -> bool {
        self.segment.starts_with(PARAM_SIGIL)
    }

    /// The parameter name of a dynamic node (sigil stripped).
    pub fn param_name(&self) -> Option<&str> {
        self.segment.strip_prefix(PARAM_SIGIL)
    }

    /// Resolve the handler for a method, falling back to `any`.
    fn handler_for(&self, method: Method) -> Option<&SharedHandler<R>> {
        self.methods.get(&method).or(self.any.as_ref())
    }
}

/// An arena-backed trie of [`RouteNode`]s.
///
/// Children are stored as arena indices rather than owning pointers:
/// teardown is a single `Vec` drop and cycles are structurally
/// impossible. The tree is built once, before request handling begins,
/// and is read-only during matching - unlimited concurrent matches need
/// no locking.
pub struct RouteTree<R: Request> {
    nodes: Vec<RouteNode<R>>,
}

impl<R: Request> RouteTree<R> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![RouteNode::new("")],
        }
    }

    /// Access a node by id.
    pub fn node(&self, id: NodeId) -> &RouteNode<R> {
        &self.nodes[id.index()]
    }

    /// The number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Insert a route definition, creating or reusing one node per segment.
    ///
    /// Idempotent per distinct path: the same literal segment registered
    /// twice reuses the existing node. Handlers set by a later definition
    /// replace those set by an earlier one at the same node.
    pub(crate) fn insert(&mut self, route: Route<R>) -> Result<(), BuildError> {
        self.insert_at(NodeId::ROOT, route)
    }

    fn insert_at(&mut self, parent: NodeId, route: Route<R>) -> Result<(), BuildError> {
        let Route {
            path,
            methods,
            any,
            not_found,
            error,
            before,
            after,
            children,
        } = route;

        let mut at = parent;
        for raw in path.split('/').filter(|s| !s.is_empty()) {
            at = self.child_for_segment(at, raw)?;
        }
        // A path with no segments would attach handlers to the node above
        // it; for a top-level route that node is the root, which never
        // serves handlers itself.
        if at == parent {
            return Err(BuildError::EmptyPath);
        }

        let node = &mut self.nodes[at.index()];
        for (method, handler) in methods {
            node.methods.insert(method, handler);
        }
        if let Some(h) = any {
            node.any = Some(h);
        }
        if let Some(h) = not_found {
            node.not_found = Some(h);
        }
        if let Some(h) = error {
            node.error = Some(h);
        }
        if let Some(h) = before {
            node.before = Some(h);
        }
        if let Some(h) = after {
            node.after = Some(h);
        }

        for child in children {
            self.insert_at(at, child)?;
        }
        Ok(())
    }

    fn child_for_segment(&mut self, parent: NodeId, raw: &str) -> Result<NodeId, BuildError> {
        if let Some(name) = raw.strip_prefix(PARAM_SIGIL) {
            if name.is_empty() {
                return Err(BuildError::UnnamedParameter(raw.to_string()));
            }
            let existing = self.nodes[parent.index()]
                .dynamic_children
                .iter()
                .copied()
                .find(|id| self.nodes[id.index()].segment == raw);
            if let Some(id) = existing {
                return Ok(id);
            }
            let id = self.push(RouteNode::new(raw));
            self.nodes[parent.index()].dynamic_children.push(id);
            Ok(id)
        } else {
            if let Some(&id) = self.nodes[parent.index()].static_children.get(raw) {
                return Ok(id);
            }
            let id = self.push(RouteNode::new(raw));
            self.nodes[parent.index()]
                .static_children
                .insert(raw.to_string(), id);
            Ok(id)
        }
    }

    fn push(&mut self, node: RouteNode<R>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match a segment sequence from the root, accumulating into `result`.
    ///
    /// Returns whether the request was handled here or below: `true` sets
    /// `result.handler` to a method handler, `false` to the most specific
    /// not-found handler seen.
    pub(crate) fn matches(
        &self,
        method: Method,
        segments: &[&str],
        result: &mut RoutingResult<R>,
    ) -> bool {
        self.match_at(NodeId::ROOT, method, segments, result)
    }

    fn match_at(
        &self,
        at: NodeId,
        method: Method,
        segments: &[&str],
        result: &mut RoutingResult<R>,
    ) -> bool {
        let node = self.node(at);
        result.absorb_node(node);

        let Some((&head, rest)) = segments.split_first() else {
            // Leaf reached: resolve the per-method handler, `any` fallback
            // included, else settle on the not-found chain.
            result.matched = at;
            return match node.handler_for(method) {
                Some(handler) => {
                    result.handler = Some(handler.clone());
                    true
                }
                None => {
                    result.settle_not_found(at);
                    false
                }
            };
        };

        if let Some(&child) = node.static_children.get(head) {
            // Static matches are final. A failure below a static match is a
            // not-found, never a retry against a dynamic sibling.
            return self.match_at(child, method, rest, result);
        }

        for &child in &node.dynamic_children {
            let mut attempt = result.speculate();
            if self.match_at(child, method, rest, &mut attempt) {
                let name = self.node(child).segment[1..].to_string();
                result.capture(name, decode_segment(head));
                result.merge_child(attempt);
                return true;
            }
            // Failed attempt: drop it. `rest` is untouched, so the next
            // sibling starts from the same position.
        }

        result.settle_not_found(at);
        false
    }
}

/// Percent-decode a captured segment value.
///
/// Decoding that produces invalid UTF-8 keeps the raw segment text, so a
/// hostile escape sequence degrades to a literal rather than a failure.
fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(value) => value.into_owned(),
        Err(_) => raw.to_string(),
    }
}
