//! Network simplex rank optimization.
//!
//! Starting from a tight spanning forest, repeatedly replaces a tree edge with a negative cut
//! value by the minimum-slack non-tree edge crossing the same cut in the opposite direction.
//! Each exchange lowers Σ weight × length; the loop stops at a local optimum or at the
//! iteration cap.

use super::{SpanningTree, tight_tree, util};
use strata_graph::{DirectedGraph, EdgeId, NodeId};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplexSummary {
    pub iterations: usize,
    pub converged: bool,
}

/// Optimizes ranks in place and normalizes each component to start at rank 0.
pub fn run(g: &mut DirectedGraph, max_iterations: usize) -> SimplexSummary {
    let mut tree = prepare(g);
    let mut summary = SimplexSummary::default();

    summary.converged = loop {
        let Some(leaving) = leave_edge(g, &tree) else {
            break true;
        };
        if summary.iterations >= max_iterations {
            break false;
        }
        let Some(entering) = enter_edge(g, &tree, leaving) else {
            debug!(edge = %leaving, "negative cut value without a replacement edge");
            break false;
        };
        trace!(leaving = %leaving, entering = %entering, "exchange tree edges");
        exchange(g, &mut tree, leaving, entering);
        summary.iterations += 1;
    };

    let groups = component_groups(g, &tree);
    util::normalize_ranks(g, &groups);
    summary
}

/// Builds the tight spanning forest and initializes postorder numbers and cut values.
pub fn prepare(g: &mut DirectedGraph) -> SpanningTree {
    let mut tree = tight_tree::build(g);
    for comp in 0..tree.roots.len() {
        refresh_component(g, &mut tree, comp);
    }
    tree
}

/// First tree edge (in edge order) with a negative cut value.
pub fn leave_edge(g: &DirectedGraph, tree: &SpanningTree) -> Option<EdgeId> {
    g.live_edge_ids().find(|&e| {
        tree.is_tree_edge(e) && g.edge(e).is_some_and(|edge| edge.cut_value < 0)
    })
}

/// Minimum-slack non-tree edge that reconnects the two halves of the cut made by removing
/// `leaving`, oriented opposite to it. Ties go to the first edge in edge order.
pub fn enter_edge(g: &DirectedGraph, tree: &SpanningTree, leaving: EdgeId) -> Option<EdgeId> {
    let edge = g.edge(leaving)?;
    let (v, w) = (edge.source(), edge.target());

    // `tail` is the endpoint on the subtree side of the cut.
    let (tail, flip) = if tree.lim[v.index()] > tree.lim[w.index()] {
        (w, true)
    } else {
        (v, false)
    };
    let comp = tree.component[tail.index()];

    let mut best: Option<(i32, EdgeId)> = None;
    for e in g.live_edge_ids() {
        if tree.is_tree_edge(e) {
            continue;
        }
        let Some(candidate) = g.edge(e) else {
            continue;
        };
        let (s, t) = (candidate.source(), candidate.target());
        if tree.component[s.index()] != comp || tree.component[t.index()] != comp {
            continue;
        }
        if flip != tree.is_descendant(s, tail) || flip == tree.is_descendant(t, tail) {
            continue;
        }
        let slack = g.slack(e);
        if best.is_none_or(|(best_slack, _)| slack < best_slack) {
            best = Some((slack, e));
        }
    }
    best.map(|(_, e)| e)
}

fn exchange(
    g: &mut DirectedGraph,
    tree: &mut SpanningTree,
    leaving: EdgeId,
    entering: EdgeId,
) {
    let comp = g
        .edge(leaving)
        .map(|edge| tree.component[edge.source().index()])
        .unwrap_or(0);
    tree.exchange(leaving, entering);
    if let Some(edge) = g.edge_mut(leaving) {
        edge.cut_value = 0;
    }
    update_ranks(g, tree, tree.roots[comp]);
    refresh_component(g, tree, comp);
}

/// Re-derives ranks from the root so that every tree edge is tight again.
fn update_ranks(g: &mut DirectedGraph, tree: &SpanningTree, root: NodeId) {
    let mut visited = vec![false; g.node_bound()];
    visited[root.index()] = true;
    let mut stack: Vec<NodeId> = vec![root];
    while let Some(v) = stack.pop() {
        let v_rank = g.rank_of(v);
        let children: Vec<(NodeId, i32)> = incident(g, v)
            .filter(|&e| tree.is_tree_edge(e))
            .filter_map(|e| g.edge(e))
            .filter(|edge| !visited[edge.other(v).index()])
            .map(|edge| {
                let w = edge.other(v);
                let rank = if edge.source() == v {
                    v_rank + 1
                } else {
                    v_rank - 1
                };
                (w, rank)
            })
            .collect();
        for (w, rank) in children {
            visited[w.index()] = true;
            if let Some(node) = g.node_mut(w) {
                node.rank = rank;
            }
            stack.push(w);
        }
    }
}

/// Recomputes parents, low/lim numbers and cut values for one component.
fn refresh_component(g: &mut DirectedGraph, tree: &mut SpanningTree, comp: usize) {
    let root = tree.roots[comp];
    let postorder = init_low_lim(g, tree, root);
    for v in postorder {
        let Some(parent_edge) = tree.parent_edge[v.index()] else {
            continue;
        };
        let cut = calc_cut_value(g, tree, v, parent_edge);
        if let Some(edge) = g.edge_mut(parent_edge) {
            edge.cut_value = cut;
        }
    }
}

/// Postorder numbering of one tree: `lim` is the postorder index, `low` the smallest `lim` in
/// the subtree. Returns the nodes in postorder.
fn init_low_lim(g: &DirectedGraph, tree: &mut SpanningTree, root: NodeId) -> Vec<NodeId> {
    let mut postorder: Vec<NodeId> = Vec::new();
    let mut next_lim: u32 = 1;
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    tree.parent_edge[root.index()] = None;
    tree.low[root.index()] = next_lim;

    while let Some(&(v, next)) = stack.last() {
        let incident_edges: Vec<EdgeId> = incident(g, v).collect();
        let mut child: Option<(NodeId, EdgeId)> = None;
        let mut cursor = next;
        while cursor < incident_edges.len() {
            let e = incident_edges[cursor];
            cursor += 1;
            if !tree.is_tree_edge(e) || tree.parent_edge[v.index()] == Some(e) {
                continue;
            }
            if let Some(edge) = g.edge(e) {
                child = Some((edge.other(v), e));
                break;
            }
        }
        if let Some(top) = stack.last_mut() {
            top.1 = cursor;
        }

        match child {
            Some((w, e)) => {
                tree.parent_edge[w.index()] = Some(e);
                tree.low[w.index()] = next_lim;
                stack.push((w, 0));
            }
            None => {
                tree.lim[v.index()] = next_lim;
                next_lim += 1;
                postorder.push(v);
                stack.pop();
            }
        }
    }
    postorder
}

/// Cut value of the tree edge joining `child` to its parent, derived from the cut values of
/// the child's own subtree edges.
fn calc_cut_value(
    g: &DirectedGraph,
    tree: &SpanningTree,
    child: NodeId,
    tree_edge: EdgeId,
) -> i64 {
    let Some(edge) = g.edge(tree_edge) else {
        return 0;
    };
    let child_is_tail = edge.source() == child;
    let mut cut = i64::from(edge.weight);

    for e in incident(g, child) {
        if e == tree_edge {
            continue;
        }
        let Some(other) = g.edge(e) else {
            continue;
        };
        let is_out_edge = other.source() == child;
        let points_to_head = is_out_edge == child_is_tail;
        let weight = i64::from(other.weight);
        cut += if points_to_head { weight } else { -weight };

        if tree.is_tree_edge(e) {
            cut += if points_to_head {
                -other.cut_value
            } else {
                other.cut_value
            };
        }
    }
    cut
}

fn incident(g: &DirectedGraph, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
    g.in_edges(v).iter().chain(g.out_edges(v)).copied()
}

fn component_groups(g: &DirectedGraph, tree: &SpanningTree) -> Vec<Vec<NodeId>> {
    let mut groups: Vec<Vec<NodeId>> = vec![Vec::new(); tree.roots.len()];
    for n in g.node_ids() {
        if let Some(group) = tree
            .component
            .get(n.index())
            .and_then(|&c| groups.get_mut(c))
        {
            group.push(n);
        }
    }
    groups
}
