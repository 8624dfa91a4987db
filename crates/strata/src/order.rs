//! Node ordering / crossing minimization.
//!
//! [`median`] runs the alternating median sweeps and keeps the best layering seen;
//! [`transpose`] then swaps adjacent pairs while that strictly removes crossings.

mod cross_count;
pub mod median;
pub mod transpose;

pub use cross_count::{cross_count, two_layer_cross_count};

use strata_graph::{DirectedGraph, NodeId};

/// Position of every node within its layer, indexed by node handle.
pub(crate) fn positions(g: &DirectedGraph, layering: &[Vec<NodeId>]) -> Vec<usize> {
    let mut pos = vec![0; g.node_bound()];
    for layer in layering {
        for (i, &n) in layer.iter().enumerate() {
            pos[n.index()] = i;
        }
    }
    pos
}
