#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) graph layout.
//!
//! [`layout`] runs the passes in order over one [`DirectedGraph`]: pruning, cycle breaking and
//! longest-path ranking, tight spanning tree + network simplex rank optimization, long-edge
//! population with virtual nodes, vertical placement, median crossing minimization, transpose,
//! priority-method horizontal placement and bend-point routing. Each pass is also exposed as a
//! free function so it can be driven (and tested) on its own.

pub use strata_graph as graph;
pub use strata_graph::{DirectedGraph, Edge, EdgeId, GraphError, Node, NodeId, Point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod model;
pub mod order;
pub mod populate;
pub mod position;
pub mod prune;
pub mod rank;
pub mod route;

mod pipeline;

pub use config::{LayoutConfig, VerticalAlign};
pub use error::{LayoutError, Result};
pub use model::{EdgeLayout, Layout, LayoutDiagnostics, NodeLayout};
pub use pipeline::layout;
