//! Rank population: splits long edges into chains of unit edges through virtual nodes.
//!
//! Segment weights are scaled by Ω so long edges resist being bent by later passes: an
//! edge's weight is multiplied by `virtual_weight_single` when one segment endpoint is virtual
//! and by `virtual_weight_double` when both are.

use crate::config::LayoutConfig;
use crate::error::Result;
use strata_graph::{DirectedGraph, EdgeId, NodeId};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub virtual_nodes: usize,
    pub split_edges: usize,
}

pub fn run(g: &mut DirectedGraph, config: &LayoutConfig) -> Result<PopulateSummary> {
    let mut summary = PopulateSummary::default();

    let pruned: Vec<NodeId> = g
        .node_ids()
        .filter(|&n| g.node(n).is_some_and(|node| node.pruned))
        .collect();
    for n in pruned {
        if let Some(node) = g.node_mut(n) {
            node.rank = 0;
        }
    }

    let edges: Vec<EdgeId> = g.live_edge_ids().collect();
    for e in edges {
        let Some(edge) = g.edge(e) else {
            continue;
        };
        let (source, target, weight) = (edge.source(), edge.target(), edge.weight);
        let (source_rank, target_rank) = (g.rank_of(source), g.rank_of(target));
        if target_rank - source_rank <= 1 {
            if target_rank <= source_rank {
                warn!(edge = %e, source_rank, target_rank, "edge does not point down the ranks");
            }
            continue;
        }

        let chain: Vec<NodeId> = (source_rank + 1..target_rank)
            .map(|r| g.add_virtual_node(r))
            .collect();
        let mut path: Vec<NodeId> = Vec::with_capacity(chain.len() + 2);
        path.push(source);
        path.extend(chain.iter().copied());
        path.push(target);

        let mut segments: Vec<EdgeId> = Vec::with_capacity(path.len() - 1);
        for pair in path.windows(2) {
            let virtual_ends = pair
                .iter()
                .filter(|&&n| g.node(n).is_some_and(|node| node.is_virtual()))
                .count();
            let omega = if virtual_ends >= 2 {
                config.virtual_weight_double
            } else {
                config.virtual_weight_single
            };
            segments.push(g.add_segment(pair[0], pair[1], weight.saturating_mul(omega))?);
        }

        summary.virtual_nodes += chain.len();
        summary.split_edges += 1;
        g.detach_edge(e, chain, segments)?;
    }

    g.rebuild_ranks();
    Ok(summary)
}
