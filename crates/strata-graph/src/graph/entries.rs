//! Node and edge records stored in the arenas.

use super::{EdgeId, NodeId};
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(in crate::graph) id: String,
    pub(in crate::graph) width: f64,
    pub(in crate::graph) height: f64,
    pub(in crate::graph) incoming: Vec<EdgeId>,
    pub(in crate::graph) outgoing: Vec<EdgeId>,
    pub(in crate::graph) is_virtual: bool,
    pub(in crate::graph) padding: Option<f64>,

    /// Placement priority multiplier (real nodes only).
    pub weight: u32,

    pub rank: i32,
    pub order: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub pruned: bool,
}

impl Node {
    pub(in crate::graph) fn new(id: String, width: f64, height: f64, is_virtual: bool) -> Self {
        Self {
            id,
            width,
            height,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            is_virtual,
            weight: 1,
            padding: None,
            rank: 0,
            order: 0,
            x: 0.0,
            y: 0.0,
            pruned: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// Horizontal gap override; `None` uses the layout's node padding.
    pub fn padding(&self) -> Option<f64> {
        self.padding
    }

    /// Sets the gap override. Negative and non-finite values are rejected.
    pub fn set_padding(&mut self, padding: Option<f64>) -> Result<()> {
        if let Some(value) = padding.filter(|p| !(p.is_finite() && *p >= 0.0)) {
            return Err(GraphError::InvalidPadding {
                node: self.id.clone(),
                padding: value,
            });
        }
        self.padding = padding;
        Ok(())
    }

    /// Live incoming edges, in insertion order.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Live outgoing edges, in insertion order.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn degree(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub(in crate::graph) fn reset_layout(&mut self) {
        self.rank = 0;
        self.order = 0;
        self.x = 0.0;
        self.y = 0.0;
        self.pruned = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(in crate::graph) source: NodeId,
    pub(in crate::graph) target: NodeId,
    pub(in crate::graph) reversed: bool,
    pub(in crate::graph) live: bool,
    pub(in crate::graph) is_segment: bool,
    pub(in crate::graph) chain: Vec<NodeId>,
    pub(in crate::graph) segments: Vec<EdgeId>,

    pub weight: u32,
    /// Only meaningful for spanning-tree edges while ranks are being optimized.
    pub cut_value: i64,
    /// Bend points in caller direction (source to target as added).
    pub points: Vec<Point>,
}

impl Edge {
    pub(in crate::graph) fn new(source: NodeId, target: NodeId, weight: u32) -> Self {
        Self {
            source,
            target,
            reversed: false,
            live: true,
            is_segment: false,
            chain: Vec::new(),
            segments: Vec::new(),
            weight,
            cut_value: 0,
            points: Vec::new(),
        }
    }

    /// Source in layout direction (after any cycle-breaking reversal).
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Target in layout direction (after any cycle-breaking reversal).
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Endpoints as the caller added them.
    pub fn caller_endpoints(&self) -> (NodeId, NodeId) {
        if self.reversed {
            (self.target, self.source)
        } else {
            (self.source, self.target)
        }
    }

    pub fn other(&self, n: NodeId) -> NodeId {
        if self.source == n {
            self.target
        } else {
            self.source
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// `false` once the edge has been split into segments.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// `true` for unit edges created while splitting a long edge.
    pub fn is_segment(&self) -> bool {
        self.is_segment
    }

    /// Virtual nodes replacing this edge, in layout direction.
    pub fn chain(&self) -> &[NodeId] {
        &self.chain
    }

    pub fn segments(&self) -> &[EdgeId] {
        &self.segments
    }
}
