//! Bend points for split edges.

use strata_graph::{DirectedGraph, EdgeId, Point};

/// Gives every caller edge one bend point per virtual node of its chain (at the virtual
/// node's center), ordered from the caller's source to the caller's target. Edges spanning a
/// single rank get no bend points.
pub fn run(g: &mut DirectedGraph) {
    let edges: Vec<EdgeId> = g.caller_edge_ids().collect();
    for e in edges {
        let Some(edge) = g.edge(e) else {
            continue;
        };
        let mut points: Vec<Point> = edge
            .chain()
            .iter()
            .filter_map(|&v| g.node(v))
            .map(|node| Point {
                x: node.center_x(),
                y: node.center_y(),
            })
            .collect();
        if edge.is_reversed() {
            points.reverse();
        }
        if let Some(edge) = g.edge_mut(e) {
            edge.points = points;
        }
    }
}
