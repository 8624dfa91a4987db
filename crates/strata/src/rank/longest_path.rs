//! Cycle breaking and longest-path ranking.

use crate::error::Result;
use strata_graph::{DirectedGraph, EdgeId, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Reverses every back edge found by a depth-first search over out-edges.
///
/// Roots are taken sources first, then the remaining nodes, each group in insertion order.
/// Pruned nodes are skipped. Returns the number of reversed edges.
pub fn break_cycles(g: &mut DirectedGraph) -> Result<usize> {
    let active: Vec<NodeId> = g
        .node_ids()
        .filter(|&n| g.node(n).is_some_and(|node| !node.pruned))
        .collect();
    let (sources, rest): (Vec<NodeId>, Vec<NodeId>) = active
        .iter()
        .partition(|&&n| g.in_edges(n).is_empty());

    let mut mark = vec![Mark::Unvisited; g.node_bound()];
    let mut back_edges: Vec<EdgeId> = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for root in sources.into_iter().chain(rest) {
        if mark[root.index()] != Mark::Unvisited {
            continue;
        }
        mark[root.index()] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(&(v, next)) = stack.last() {
            let outs = g.out_edges(v);
            if next >= outs.len() {
                mark[v.index()] = Mark::Done;
                stack.pop();
                continue;
            }
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            let e = outs[next];
            let Some(w) = g.edge(e).map(|edge| edge.target()) else {
                continue;
            };
            match mark[w.index()] {
                Mark::Unvisited => {
                    mark[w.index()] = Mark::InProgress;
                    stack.push((w, 0));
                }
                Mark::InProgress => back_edges.push(e),
                Mark::Done => {}
            }
        }
    }

    for &e in &back_edges {
        g.reverse_edge(e)?;
    }
    Ok(back_edges.len())
}

/// Sets `rank(n)` to the length of the longest path reaching `n` from a source.
///
/// Predecessors are resolved depth-first with memoization. A predecessor that is still in
/// progress (only possible when cycles were not broken first) is skipped, so the node falls
/// back to the maximum over its already-ranked predecessors. Always terminates.
pub fn assign(g: &mut DirectedGraph) {
    let bound = g.node_bound();
    let mut rank: Vec<Option<i32>> = vec![None; bound];
    let mut on_stack = vec![false; bound];
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    let active: Vec<NodeId> = g
        .node_ids()
        .filter(|&n| g.node(n).is_some_and(|node| !node.pruned))
        .collect();

    for &start in &active {
        if rank[start.index()].is_some() {
            continue;
        }
        on_stack[start.index()] = true;
        stack.push((start, 0));

        while let Some(&(v, next)) = stack.last() {
            let ins = g.in_edges(v);
            if next < ins.len() {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                let Some(p) = g.edge(ins[next]).map(|edge| edge.source()) else {
                    continue;
                };
                if rank[p.index()].is_none() && !on_stack[p.index()] {
                    on_stack[p.index()] = true;
                    stack.push((p, 0));
                }
                continue;
            }

            let r = ins
                .iter()
                .filter_map(|&e| g.edge(e))
                .filter_map(|edge| rank[edge.source().index()])
                .map(|r| r + 1)
                .max()
                .unwrap_or(0);
            rank[v.index()] = Some(r);
            on_stack[v.index()] = false;
            stack.pop();
        }
    }

    for n in active {
        if let (Some(node), Some(r)) = (g.node_mut(n), rank[n.index()]) {
            node.rank = r;
        }
    }
}
