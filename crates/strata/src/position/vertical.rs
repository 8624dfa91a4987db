use crate::config::{LayoutConfig, VerticalAlign};
use strata_graph::{DirectedGraph, NodeId};

/// Top edge and height of each rank band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankBand {
    pub top: f64,
    pub height: f64,
}

/// Assigns `y` to every node from rank heights and `rank_padding`. Returns the rank bands.
pub fn run(g: &mut DirectedGraph, config: &LayoutConfig) -> Vec<RankBand> {
    let ranks: Vec<Vec<NodeId>> = g.ranks().to_vec();
    let mut bands: Vec<RankBand> = Vec::with_capacity(ranks.len());
    let mut top: f64 = 0.0;

    for layer in &ranks {
        let height = layer
            .iter()
            .filter_map(|&n| g.node(n))
            .map(|node| node.height())
            .fold(0.0_f64, f64::max);

        for &n in layer {
            let Some(node) = g.node_mut(n) else {
                continue;
            };
            node.y = if node.is_virtual() {
                top + height / 2.0
            } else {
                match config.vertical_align {
                    VerticalAlign::Top => top,
                    VerticalAlign::Center => top + (height - node.height()) / 2.0,
                }
            };
        }

        bands.push(RankBand { top, height });
        top += height + config.rank_padding;
    }

    bands
}
