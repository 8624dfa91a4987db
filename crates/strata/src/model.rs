//! Output types: a serializable snapshot of a laid-out graph plus run diagnostics.

use serde::{Deserialize, Serialize};
use strata_graph::{DirectedGraph, NodeId, Point};

/// Per-pass counters of one [`layout`](crate::layout) run.
///
/// Iterative passes never fail when they hit their caps; these numbers are how callers (and
/// tests) observe that a pass stopped early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDiagnostics {
    pub pruned_nodes: usize,
    pub prune_rounds: usize,
    pub reversed_edges: usize,
    pub rank_iterations: usize,
    pub rank_converged: bool,
    pub virtual_nodes: usize,
    pub split_edges: usize,
    pub crossings_initial: u64,
    pub crossings_after_minimizer: u64,
    pub crossings_final: u64,
    pub crossing_iterations: usize,
    pub transpose_passes: usize,
    pub transpose_swaps: usize,
    pub placement_iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub id: String,
    pub rank: i32,
    pub order: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLayout {
    pub source: String,
    pub target: String,
    pub weight: u32,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<EdgeLayout>,
}

impl Layout {
    /// Snapshot of caller-visible results: real nodes and caller edges, in insertion order.
    pub fn from_graph(g: &DirectedGraph) -> Self {
        let mut out = Self::default();
        for n in g.node_ids() {
            let Some(node) = g.node(n) else {
                continue;
            };
            if node.is_virtual() {
                continue;
            }
            out.width = out.width.max(node.x + node.width());
            out.height = out.height.max(node.y + node.height());
            out.nodes.push(NodeLayout {
                id: node.id().to_string(),
                rank: node.rank,
                order: node.order,
                x: node.x,
                y: node.y,
                width: node.width(),
                height: node.height(),
            });
        }
        for e in g.caller_edge_ids() {
            let Some(edge) = g.edge(e) else {
                continue;
            };
            let (source, target) = edge.caller_endpoints();
            let name = |n: NodeId| {
                g.node(n)
                    .map(|node| node.id().to_string())
                    .unwrap_or_default()
            };
            out.edges.push(EdgeLayout {
                source: name(source),
                target: name(target),
                weight: edge.weight,
                points: edge.points.clone(),
            });
        }
        out
    }

    pub fn node(&self, id: &str) -> Option<&NodeLayout> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
