//! # The Route Tree
//!
//! One node per path segment, built once from declarative [`Route`]
//! definitions and read-only thereafter.
//!
//! Matching walks the tree segment by segment:
//!
//! - **Static children** (exact literals) take absolute precedence and are
//!   never retried against dynamic siblings, even if the static subtree
//!   fails to produce a handler.
//! - **Dynamic children** (`:name` placeholders) are tried in registration
//!   order, each against a disposable [`RoutingResult`], with the
//!   remaining-segment slice acting as the backtracking cursor.
//!
//! Cross-cutting handlers (not-found, error, before, after) accumulate
//! into the [`RoutingResult`] at every visited node: not-found handlers
//! override the inherited value, the other three append.

mod result;
mod route;
mod tree;

pub use result::RoutingResult;
pub use route::Route;
pub use tree::{NodeId, RouteNode, RouteTree};
