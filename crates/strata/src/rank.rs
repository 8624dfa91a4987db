//! Rank assignment.
//!
//! Ranks come from three passes: [`longest_path`] (cycle breaking plus an initial feasible
//! ranking), [`tight_tree`] (a spanning forest of zero-slack edges) and [`network_simplex`]
//! (cut-value driven optimization of total weighted edge length).

pub mod longest_path;
pub mod network_simplex;
pub mod tight_tree;
pub mod tree;
pub mod util;

pub use tree::SpanningTree;
