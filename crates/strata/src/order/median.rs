//! Median-heuristic crossing minimization.
//!
//! Sweeps alternate downward (keys from predecessors in the rank above) and upward (keys from
//! successors in the rank below). A node's key is the median position of its neighbors in the
//! adjacent rank; an even neighbor count uses the midpoint of the two middle positions, and a
//! node without neighbors there keeps its current position as key. Ranks are re-sorted stably,
//! so equal keys keep their relative order.

use super::{cross_count, positions};
use strata_graph::{DirectedGraph, NodeId, alg};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimizeSummary {
    /// Crossings of the insertion-order layering.
    pub initial: u64,
    /// Crossings of the kept (best-seen) layering.
    pub best: u64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Keys come from the rank above.
    Down,
    /// Keys come from the rank below.
    Up,
}

/// Runs sweeps until crossings reach 0, `stall_limit` consecutive sweeps bring no
/// improvement, or `max_iterations` sweeps have run. Installs the best layering seen.
pub fn run(g: &mut DirectedGraph, max_iterations: usize, stall_limit: usize) -> MinimizeSummary {
    let mut layering: Vec<Vec<NodeId>> = g.ranks().to_vec();
    let initial = cross_count(g, &layering);
    let mut summary = MinimizeSummary {
        initial,
        best: initial,
        iterations: 0,
    };
    let mut best_layering = layering.clone();
    let mut stall: usize = 0;

    while summary.best > 0 && stall < stall_limit && summary.iterations < max_iterations {
        let direction = if summary.iterations % 2 == 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        sweep(g, &mut layering, direction);
        summary.iterations += 1;

        let cc = cross_count(g, &layering);
        trace!(iteration = summary.iterations, crossings = cc, "median sweep");
        if cc < summary.best {
            summary.best = cc;
            best_layering.clone_from(&layering);
            stall = 0;
        } else {
            stall += 1;
        }
    }

    g.set_layering(best_layering);
    summary
}

/// One median sweep over `layering` in `direction`.
pub fn sweep(g: &DirectedGraph, layering: &mut [Vec<NodeId>], direction: Direction) {
    if layering.len() < 2 {
        return;
    }
    let mut pos = positions(g, layering);
    let ranks: Vec<usize> = match direction {
        Direction::Down => (1..layering.len()).collect(),
        Direction::Up => (0..layering.len() - 1).rev().collect(),
    };

    for r in ranks {
        let mut keyed: Vec<(f64, NodeId)> = layering[r]
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let mut neighbor_pos: Vec<f64> = neighbors(g, v, direction)
                    .into_iter()
                    .map(|n| pos[n.index()] as f64)
                    .collect();
                (median(&mut neighbor_pos).unwrap_or(i as f64), v)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        layering[r] = keyed.into_iter().map(|(_, v)| v).collect();
        for (i, &v) in layering[r].iter().enumerate() {
            pos[v.index()] = i;
        }
    }
}

/// Median of `values`; the midpoint of the two middle values for an even count.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

fn neighbors(g: &DirectedGraph, v: NodeId, direction: Direction) -> Vec<NodeId> {
    match direction {
        Direction::Down => alg::predecessors(g, v),
        Direction::Up => alg::successors(g, v),
    }
}
