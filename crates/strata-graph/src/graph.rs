//! The `DirectedGraph` container.
//!
//! Slots are never reused: a removed node or edge leaves a `None` hole, so handles stay stable
//! and iteration order is always insertion order.

use crate::error::{GraphError, Result};
use rustc_hash::FxBuildHasher;

pub mod alg;
mod entries;
mod ids;

pub use entries::{Edge, Node, Point};
pub use ids::{EdgeId, NodeId};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    node_index: HashMap<String, NodeId>,
    node_count: usize,
    edge_count: usize,
    detached_count: usize,
    ranks: Vec<Vec<NodeId>>,
    virtual_seq: usize,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Number of nodes, virtual nodes included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges, split edges and their segments included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_node(&mut self, id: impl Into<String>, width: f64, height: f64) -> Result<NodeId> {
        let id = id.into();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GraphError::InvalidNodeSize {
                node: id,
                width,
                height,
            });
        }
        if self.node_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node: id });
        }
        let n = self.push_node(Node::new(id.clone(), width, height, false));
        self.node_index.insert(id, n);
        Ok(n)
    }

    /// Adds a zero-sized virtual node at `rank`. Virtual nodes are not reachable by name.
    pub fn add_virtual_node(&mut self, rank: i32) -> NodeId {
        let id = format!("_v{}", self.virtual_seq);
        self.virtual_seq += 1;
        let mut node = Node::new(id, 0.0, 0.0, true);
        node.rank = rank;
        self.push_node(node)
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let n = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        self.node_count += 1;
        n
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        self.add_weighted_edge(source, target, 1)
    }

    pub fn add_weighted_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: u32,
    ) -> Result<EdgeId> {
        self.require_node(target)?;
        let src = self.require_node(source)?;
        if source == target {
            return Err(GraphError::InvalidEdge {
                node: src.id.clone(),
            });
        }
        Ok(self.push_edge(Edge::new(source, target, weight)))
    }

    /// Adds a unit edge of a split chain. At least one endpoint is expected to be virtual.
    pub fn add_segment(&mut self, source: NodeId, target: NodeId, weight: u32) -> Result<EdgeId> {
        let e = self.add_weighted_edge(source, target, weight)?;
        if let Some(edge) = self.edge_slot_mut(e) {
            edge.is_segment = true;
        }
        Ok(e)
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let e = EdgeId(self.edges.len() as u32);
        let (source, target) = (edge.source, edge.target);
        self.edges.push(Some(edge));
        self.edge_count += 1;
        if let Some(n) = self.node_slot_mut(source) {
            n.outgoing.push(e);
        }
        if let Some(n) = self.node_slot_mut(target) {
            n.incoming.push(e);
        }
        e
    }

    /// Removes a node together with every edge touching it (live or detached).
    pub fn remove_node(&mut self, n: NodeId) -> Result<Node> {
        let node = self.require_node(n)?;
        let mut touching: Vec<EdgeId> = node
            .incoming
            .iter()
            .chain(node.outgoing.iter())
            .copied()
            .collect();
        if self.detached_count > 0 {
            touching.extend(self.edge_ids().filter(|&e| {
                self.edge(e)
                    .is_some_and(|edge| !edge.live && (edge.source == n || edge.target == n))
            }));
        }
        for e in touching {
            self.remove_edge(e)?;
        }
        let node = self.nodes[n.index()].take().ok_or_else(|| unknown_node(n))?;
        if !node.is_virtual {
            self.node_index.remove(&node.id);
        }
        self.node_count -= 1;
        Ok(node)
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .get_mut(e.index())
            .and_then(Option::take)
            .ok_or_else(|| unknown_edge(e))?;
        self.edge_count -= 1;
        if edge.live {
            self.unlink(e, edge.source, edge.target);
        } else {
            self.detached_count -= 1;
        }
        Ok(edge)
    }

    fn unlink(&mut self, e: EdgeId, source: NodeId, target: NodeId) {
        if let Some(n) = self.node_slot_mut(source) {
            n.outgoing.retain(|&x| x != e);
        }
        if let Some(n) = self.node_slot_mut(target) {
            n.incoming.retain(|&x| x != e);
        }
    }

    fn link(&mut self, e: EdgeId, source: NodeId, target: NodeId) {
        if let Some(n) = self.node_slot_mut(source) {
            n.outgoing.push(e);
        }
        if let Some(n) = self.node_slot_mut(target) {
            n.incoming.push(e);
        }
    }

    pub fn node(&self, n: NodeId) -> Option<&Node> {
        self.nodes.get(n.index()).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, n: NodeId) -> Option<&mut Node> {
        self.node_slot_mut(n)
    }

    fn node_slot_mut(&mut self, n: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(n.index()).and_then(Option::as_mut)
    }

    fn require_node(&self, n: NodeId) -> Result<&Node> {
        self.node(n).ok_or_else(|| unknown_node(n))
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.index()).and_then(Option::as_ref)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut Edge> {
        self.edge_slot_mut(e)
    }

    fn edge_slot_mut(&mut self, e: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(e.index()).and_then(Option::as_mut)
    }

    pub fn node_by_name(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    /// Upper bound (exclusive) of node handle indices; sized for per-node scratch vectors.
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// Upper bound (exclusive) of edge handle indices; sized for per-edge scratch vectors.
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(ix, _)| NodeId(ix as u32))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(ix, _)| EdgeId(ix as u32))
    }

    /// Edges currently attached to adjacency lists (split edges excluded, segments included).
    pub fn live_edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|e| e.live))
            .map(|(ix, _)| EdgeId(ix as u32))
    }

    /// Edges the caller added (segments excluded), live or split.
    pub fn caller_edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|e| !e.is_segment))
            .map(|(ix, _)| EdgeId(ix as u32))
    }

    pub fn in_edges(&self, n: NodeId) -> &[EdgeId] {
        self.node(n).map(|node| node.incoming()).unwrap_or(&[])
    }

    pub fn out_edges(&self, n: NodeId) -> &[EdgeId] {
        self.node(n).map(|node| node.outgoing()).unwrap_or(&[])
    }

    pub fn degree(&self, n: NodeId) -> usize {
        self.node(n).map(Node::degree).unwrap_or(0)
    }

    pub fn rank_of(&self, n: NodeId) -> i32 {
        self.node(n).map(|node| node.rank).unwrap_or(0)
    }

    /// `rank(target) - rank(source) - 1`; zero means the edge is tight.
    pub fn slack(&self, e: EdgeId) -> i32 {
        let Some(edge) = self.edge(e) else {
            return 0;
        };
        self.rank_of(edge.target) - self.rank_of(edge.source) - 1
    }

    /// Flips the layout direction of a live edge and toggles its `reversed` flag.
    pub fn reverse_edge(&mut self, e: EdgeId) -> Result<()> {
        let (source, target, live) = {
            let edge = self.edge(e).ok_or_else(|| unknown_edge(e))?;
            (edge.source, edge.target, edge.live)
        };
        if live {
            self.unlink(e, source, target);
            self.link(e, target, source);
        }
        if let Some(edge) = self.edge_slot_mut(e) {
            edge.source = target;
            edge.target = source;
            edge.reversed = !edge.reversed;
        }
        Ok(())
    }

    /// Detaches a live edge from the adjacency lists, recording the chain that replaces it.
    pub fn detach_edge(
        &mut self,
        e: EdgeId,
        chain: Vec<NodeId>,
        segments: Vec<EdgeId>,
    ) -> Result<()> {
        let (source, target, live) = {
            let edge = self.edge(e).ok_or_else(|| unknown_edge(e))?;
            (edge.source, edge.target, edge.live)
        };
        if live {
            self.unlink(e, source, target);
            self.detached_count += 1;
        }
        if let Some(edge) = self.edge_slot_mut(e) {
            edge.live = false;
            edge.chain = chain;
            edge.segments = segments;
        }
        Ok(())
    }

    /// Drops every trace of a previous layout: virtual nodes and segments are removed, split
    /// edges are re-attached, reversed edges are flipped back and node layout fields reset.
    pub fn reset_layout(&mut self) {
        let virtual_nodes: Vec<NodeId> = self
            .node_ids()
            .filter(|&n| self.node(n).is_some_and(|node| node.is_virtual))
            .collect();
        for n in virtual_nodes {
            if self.remove_node(n).is_err() {
                continue;
            }
        }

        for edge in self.edges.iter_mut().flatten() {
            if edge.reversed {
                std::mem::swap(&mut edge.source, &mut edge.target);
                edge.reversed = false;
            }
            edge.live = true;
            edge.chain.clear();
            edge.segments.clear();
            edge.points.clear();
            edge.cut_value = 0;
        }

        // Adjacency is rebuilt in edge order so a second layout sees the graph exactly as the
        // caller built it.
        for node in self.nodes.iter_mut().flatten() {
            node.incoming.clear();
            node.outgoing.clear();
        }
        let edge_ids: Vec<EdgeId> = self.edge_ids().collect();
        for e in edge_ids {
            if let Some((source, target)) = self.edge(e).map(|edge| (edge.source, edge.target)) {
                self.link(e, source, target);
            }
        }

        for node in self.nodes.iter_mut().flatten() {
            node.reset_layout();
        }
        self.detached_count = 0;
        self.ranks.clear();
        self.virtual_seq = 0;
    }

    /// Per-rank node lists, sorted by `order` (insertion order on ties).
    pub fn ranks(&self) -> &[Vec<NodeId>] {
        &self.ranks
    }

    /// Regroups nodes by their current rank. Nodes with a negative rank are clamped into
    /// rank 0; callers normalize ranks before relying on the result.
    pub fn rebuild_ranks(&mut self) {
        let mut ranks: Vec<Vec<NodeId>> = Vec::new();
        for (ix, slot) in self.nodes.iter().enumerate() {
            let Some(node) = slot else {
                continue;
            };
            let r = node.rank.max(0) as usize;
            if r >= ranks.len() {
                ranks.resize_with(r + 1, Vec::new);
            }
            ranks[r].push(NodeId(ix as u32));
        }
        for layer in &mut ranks {
            layer.sort_by_key(|&n| self.nodes[n.index()].as_ref().map_or(0, |node| node.order));
        }
        self.ranks = ranks;
    }

    /// Installs a layering and writes each node's `order` from its position.
    pub fn set_layering(&mut self, layering: Vec<Vec<NodeId>>) {
        for layer in &layering {
            for (i, &n) in layer.iter().enumerate() {
                if let Some(node) = self.node_slot_mut(n) {
                    node.order = i;
                }
            }
        }
        self.ranks = layering;
    }
}

fn unknown_node(n: NodeId) -> GraphError {
    GraphError::UnknownNode {
        node: n.to_string(),
    }
}

fn unknown_edge(e: EdgeId) -> GraphError {
    GraphError::UnknownEdge {
        edge: e.to_string(),
    }
}
