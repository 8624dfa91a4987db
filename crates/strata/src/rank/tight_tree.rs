//! Tight spanning forest construction.
//!
//! Grows a tree of zero-slack edges from a root. When no tight edge leaves the tree, the
//! minimum-slack edge with exactly one endpoint inside is made tight by shifting the ranks of
//! the whole tree, and growth resumes. A component with no such edge is complete and the next
//! unpruned node outside the forest starts a new tree.

use super::SpanningTree;
use strata_graph::{DirectedGraph, EdgeId, NodeId};
use tracing::trace;

pub fn build(g: &mut DirectedGraph) -> SpanningTree {
    let mut tree = SpanningTree::new(g);
    let active: Vec<NodeId> = g
        .node_ids()
        .filter(|&n| g.node(n).is_some_and(|node| !node.pruned))
        .collect();

    let mut cursor = 0;
    loop {
        while cursor < active.len() && tree.member[active[cursor].index()] {
            cursor += 1;
        }
        let Some(&root) = active.get(cursor) else {
            break;
        };

        let comp = tree.roots.len();
        tree.roots.push(root);
        tree.member[root.index()] = true;
        tree.component[root.index()] = comp;
        let mut nodes: Vec<NodeId> = vec![root];

        loop {
            grow(g, &mut tree, comp, &mut nodes);
            let Some((slack, source_in_tree)) = min_slack_edge(g, &tree, &nodes) else {
                break;
            };
            let delta = if source_in_tree { slack } else { -slack };
            trace!(component = comp, delta, "shift tree ranks");
            for &n in &nodes {
                if let Some(node) = g.node_mut(n) {
                    node.rank += delta;
                }
            }
        }
    }

    tree
}

fn grow(g: &DirectedGraph, tree: &mut SpanningTree, comp: usize, nodes: &mut Vec<NodeId>) {
    let mut stack: Vec<NodeId> = nodes.clone();
    while let Some(v) = stack.pop() {
        for &e in g.out_edges(v).iter().chain(g.in_edges(v)) {
            let Some(edge) = g.edge(e) else {
                continue;
            };
            let w = edge.other(v);
            if tree.member[w.index()] || g.slack(e) != 0 {
                continue;
            }
            tree.member[w.index()] = true;
            tree.component[w.index()] = comp;
            tree.add_edge(e);
            nodes.push(w);
            stack.push(w);
        }
    }
}

/// Minimum-slack edge leaving the tree, ties broken by edge order. Returns the slack and
/// whether the edge's source is the endpoint inside the tree.
fn min_slack_edge(
    g: &DirectedGraph,
    tree: &SpanningTree,
    nodes: &[NodeId],
) -> Option<(i32, bool)> {
    let mut best: Option<(i32, EdgeId, bool)> = None;
    for &v in nodes {
        for &e in g.out_edges(v).iter().chain(g.in_edges(v)) {
            let Some(edge) = g.edge(e) else {
                continue;
            };
            if tree.member[edge.other(v).index()] {
                continue;
            }
            let slack = g.slack(e);
            let better = match best {
                None => true,
                Some((best_slack, best_e, _)) => (slack, e) < (best_slack, best_e),
            };
            if better {
                best = Some((slack, e, edge.source() == v));
            }
        }
    }
    best.map(|(slack, _, source_in_tree)| (slack, source_in_tree))
}
