//! Coordinate assignment.
//!
//! [`vertical`] gives every rank a band and every node its `y`; [`priority`] assigns `x` with
//! the priority method.

pub mod priority;
pub mod vertical;

use strata_graph::{DirectedGraph, NodeId};

/// Horizontal gap wanted between two neighbouring nodes of a rank.
pub(crate) fn gap(g: &DirectedGraph, a: NodeId, b: NodeId, default: f64) -> f64 {
    let pad = |n: NodeId| g.node(n).and_then(|node| node.padding()).unwrap_or(default);
    pad(a).max(pad(b))
}
