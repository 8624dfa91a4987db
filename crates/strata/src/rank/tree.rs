//! Spanning forest used while optimizing ranks.

use strata_graph::{DirectedGraph, EdgeId, NodeId};

/// A spanning forest over the unpruned nodes, one tree per connected component.
///
/// Tree membership, parents and postorder numbers are plain per-handle vectors; cut values are
/// stored on the graph edges themselves.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    pub(crate) in_tree: Vec<bool>,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) member: Vec<bool>,
    pub(crate) roots: Vec<NodeId>,
    /// Component (index into `roots`) of each member node.
    pub(crate) component: Vec<usize>,
    pub(crate) parent_edge: Vec<Option<EdgeId>>,
    pub(crate) low: Vec<u32>,
    pub(crate) lim: Vec<u32>,
}

impl SpanningTree {
    pub(crate) fn new(g: &DirectedGraph) -> Self {
        let nodes = g.node_bound();
        Self {
            in_tree: vec![false; g.edge_bound()],
            edges: Vec::new(),
            member: vec![false; nodes],
            roots: Vec::new(),
            component: vec![usize::MAX; nodes],
            parent_edge: vec![None; nodes],
            low: vec![0; nodes],
            lim: vec![0; nodes],
        }
    }

    pub fn is_tree_edge(&self, e: EdgeId) -> bool {
        self.in_tree.get(e.index()).copied().unwrap_or(false)
    }

    pub fn contains(&self, n: NodeId) -> bool {
        self.member.get(n.index()).copied().unwrap_or(false)
    }

    /// One root per component, in discovery order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Tree edges in the order they joined the tree.
    pub fn tree_edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn add_edge(&mut self, e: EdgeId) {
        self.in_tree[e.index()] = true;
        self.edges.push(e);
    }

    pub(crate) fn exchange(&mut self, leaving: EdgeId, entering: EdgeId) {
        self.in_tree[leaving.index()] = false;
        self.in_tree[entering.index()] = true;
        if let Some(slot) = self.edges.iter_mut().find(|e| **e == leaving) {
            *slot = entering;
        }
    }

    /// `true` when `n` lies in the subtree rooted at `root` (same component assumed).
    pub(crate) fn is_descendant(&self, n: NodeId, root: NodeId) -> bool {
        let (low, lim) = (self.low[root.index()], self.lim[root.index()]);
        let l = self.lim[n.index()];
        low <= l && l <= lim
    }
}
