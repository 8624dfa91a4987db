use strata_graph::{DirectedGraph, NodeId};

/// Total number of edge crossings between consecutive layers.
pub fn cross_count(g: &DirectedGraph, layering: &[Vec<NodeId>]) -> u64 {
    layering
        .windows(2)
        .map(|pair| two_layer_cross_count(g, &pair[0], &pair[1]))
        .sum()
}

/// Crossings between edges running from `north` to `south`.
///
/// Edges are sorted by (north position, south position) and inversions of the south sequence
/// are counted with an accumulator tree, so the cost is O(E log |south|).
pub fn two_layer_cross_count(g: &DirectedGraph, north: &[NodeId], south: &[NodeId]) -> u64 {
    if south.is_empty() {
        return 0;
    }

    let mut south_pos: Vec<Option<usize>> = vec![None; g.node_bound()];
    for (i, &v) in south.iter().enumerate() {
        south_pos[v.index()] = Some(i);
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g
            .out_edges(v)
            .iter()
            .filter_map(|&e| g.edge(e))
            .filter_map(|edge| south_pos.get(edge.target().index()).copied().flatten())
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<u64> = vec![0; tree_size];

    let mut cc: u64 = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: u64 = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
