#![forbid(unsafe_code)]

//! Graph model used by `strata`.
//!
//! Nodes and edges live in flat arenas addressed by [`NodeId`] / [`EdgeId`] handles. Incident
//! edge lists, virtual-node chains and spanning-tree membership are all plain handle lists, so
//! the model has no ownership cycles and every pass can take the whole graph as `&mut`.

pub mod error;
mod graph;

pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Edge, EdgeId, Node, NodeId, Point, alg};
