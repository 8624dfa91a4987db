//! Horizontal placement with the priority method.
//!
//! Each rank is first packed left to right. Relaxation sweeps then pull every node toward the
//! weighted mean center of its neighbors in the adjacent rank. Within a rank nodes move in
//! priority order (virtual nodes first, then real nodes by degree × weight); a node may push
//! lower-priority nodes aside but never moves a node that was already placed in this sweep.

use super::gap;
use crate::config::LayoutConfig;
use strata_graph::{DirectedGraph, NodeId};
use tracing::trace;

const VIRTUAL_PRIORITY: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementSummary {
    pub iterations: usize,
}

pub fn run(g: &mut DirectedGraph, config: &LayoutConfig) -> PlacementSummary {
    let layering: Vec<Vec<NodeId>> = g.ranks().to_vec();
    let mut summary = PlacementSummary::default();
    if layering.is_empty() {
        return summary;
    }

    for layer in &layering {
        pack(g, layer, config.node_padding);
    }

    let priority: Vec<u64> = priorities(g);
    let mut idle_sweeps = 0;
    while summary.iterations < config.max_placement_iterations && idle_sweeps < 2 {
        let downward = summary.iterations % 2 == 0;
        let left_to_right = summary.iterations % 4 < 2;
        let ranks: Vec<usize> = if downward {
            (1..layering.len()).collect()
        } else {
            (0..layering.len() - 1).rev().collect()
        };

        let mut moved: f64 = 0.0;
        for r in ranks {
            moved += place_rank(
                g,
                &layering[r],
                &priority,
                downward,
                left_to_right,
                config.node_padding,
            );
        }
        summary.iterations += 1;
        trace!(iteration = summary.iterations, moved, "placement sweep");
        idle_sweeps = if moved > f64::EPSILON { 0 } else { idle_sweeps + 1 };
    }

    shift_to_origin(g);
    summary
}

/// Packs a rank left to right with the minimum allowed gaps.
pub fn pack(g: &mut DirectedGraph, layer: &[NodeId], node_padding: f64) {
    let mut x: f64 = 0.0;
    for (i, &v) in layer.iter().enumerate() {
        if i > 0 {
            x += gap(g, layer[i - 1], v, node_padding);
        }
        if let Some(node) = g.node_mut(v) {
            node.x = x;
            x += node.width();
        }
    }
}

fn priorities(g: &DirectedGraph) -> Vec<u64> {
    let mut priority = vec![0; g.node_bound()];
    for n in g.node_ids() {
        let Some(node) = g.node(n) else {
            continue;
        };
        priority[n.index()] = if node.is_virtual() {
            VIRTUAL_PRIORITY
        } else {
            node.degree() as u64 * u64::from(node.weight)
        };
    }
    priority
}

/// Places one rank against its neighbors above (`downward`) or below. Returns the total
/// distance nodes moved.
fn place_rank(
    g: &mut DirectedGraph,
    layer: &[NodeId],
    priority: &[u64],
    downward: bool,
    left_to_right: bool,
    node_padding: f64,
) -> f64 {
    let len = layer.len();
    let mut xs: Vec<f64> = layer.iter().map(|&n| x_of(g, n)).collect();
    let widths: Vec<f64> = layer
        .iter()
        .map(|&n| g.node(n).map_or(0.0, |node| node.width()))
        .collect();
    let gaps: Vec<f64> = (1..len)
        .map(|i| gap(g, layer[i - 1], layer[i], node_padding))
        .collect();
    let start = xs.clone();

    let mut sequence: Vec<usize> = (0..len).collect();
    sequence.sort_by(|&a, &b| {
        priority[layer[b].index()]
            .cmp(&priority[layer[a].index()])
            .then_with(|| if left_to_right { a.cmp(&b) } else { b.cmp(&a) })
    });

    let mut placed = vec![false; len];
    for i in sequence {
        let Some(center) = desired_center(g, layer[i], downward) else {
            placed[i] = true;
            continue;
        };
        let desired = center - widths[i] / 2.0;

        // Room needed between a placed neighbor and node `i` includes every unplaced node in
        // between.
        let mut lo = f64::NEG_INFINITY;
        let mut span: f64 = 0.0;
        for j in (0..i).rev() {
            span += widths[j] + gaps[j];
            if placed[j] {
                lo = xs[j] + span;
                break;
            }
        }
        let mut hi = f64::INFINITY;
        let mut span: f64 = 0.0;
        for j in i + 1..len {
            span += widths[j - 1] + gaps[j - 1];
            if placed[j] {
                hi = xs[j] - span;
                break;
            }
        }

        if lo <= hi {
            xs[i] = desired.clamp(lo, hi);
        }
        for k in i + 1..len {
            let min = xs[k - 1] + widths[k - 1] + gaps[k - 1];
            if xs[k] >= min {
                break;
            }
            xs[k] = min;
        }
        for k in (0..i).rev() {
            let max = xs[k + 1] - gaps[k] - widths[k];
            if xs[k] <= max {
                break;
            }
            xs[k] = max;
        }
        placed[i] = true;
    }

    let mut moved: f64 = 0.0;
    for (k, &n) in layer.iter().enumerate() {
        moved += (xs[k] - start[k]).abs();
        if let Some(node) = g.node_mut(n) {
            node.x = xs[k];
        }
    }
    moved
}

/// Edge-weighted mean center of the neighbors of `v` in the adjacent rank.
fn desired_center(g: &DirectedGraph, v: NodeId, downward: bool) -> Option<f64> {
    let edges = if downward {
        g.in_edges(v)
    } else {
        g.out_edges(v)
    };
    let mut total: f64 = 0.0;
    let mut weight_sum: f64 = 0.0;
    for &e in edges {
        let Some(edge) = g.edge(e) else {
            continue;
        };
        let Some(other) = g.node(edge.other(v)) else {
            continue;
        };
        let weight = f64::from(edge.weight.max(1));
        total += weight * other.center_x();
        weight_sum += weight;
    }
    (weight_sum > 0.0).then(|| total / weight_sum)
}

fn x_of(g: &DirectedGraph, n: NodeId) -> f64 {
    g.node(n).map_or(0.0, |node| node.x)
}

fn shift_to_origin(g: &mut DirectedGraph) {
    let ids: Vec<NodeId> = g.node_ids().collect();
    let min_x = ids
        .iter()
        .map(|&n| x_of(g, n))
        .fold(f64::INFINITY, f64::min);
    if !min_x.is_finite() || min_x == 0.0 {
        return;
    }
    for n in ids {
        if let Some(node) = g.node_mut(n) {
            node.x -= min_x;
        }
    }
}
