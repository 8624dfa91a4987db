//! Pruning of nodes that take no part in the layered structure.
//!
//! A node is pruned once it has no *active* incident edge, i.e. no live edge whose other
//! endpoint is still unpruned. Pruned nodes skip the ranking passes and rejoin at rank 0 when
//! ranks are populated.

use strata_graph::{DirectedGraph, NodeId};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub pruned: usize,
    pub rounds: usize,
}

pub fn run(g: &mut DirectedGraph, max_depth: usize) -> PruneSummary {
    let mut summary = PruneSummary::default();

    while summary.rounds < max_depth {
        let batch: Vec<NodeId> = g
            .node_ids()
            .filter(|&n| {
                g.node(n)
                    .is_some_and(|node| !node.pruned && !node.is_virtual())
                    && active_degree(g, n) == 0
            })
            .collect();
        if batch.is_empty() {
            break;
        }

        summary.rounds += 1;
        trace!(round = summary.rounds, nodes = batch.len(), "prune round");
        for n in batch {
            if let Some(node) = g.node_mut(n) {
                node.pruned = true;
                summary.pruned += 1;
            }
        }
    }

    summary
}

fn active_degree(g: &DirectedGraph, n: NodeId) -> usize {
    g.in_edges(n)
        .iter()
        .chain(g.out_edges(n))
        .filter(|&&e| {
            g.edge(e)
                .and_then(|edge| g.node(edge.other(n)))
                .is_some_and(|other| !other.pruned)
        })
        .count()
}
