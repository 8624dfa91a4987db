//! The layout pipeline.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::LayoutDiagnostics;
use crate::{order, populate, position, prune, rank, route};
use strata_graph::{DirectedGraph, alg};
use tracing::debug;

/// Lays out `g` in place.
///
/// Any previous layout state is discarded first, so running this twice on the same graph
/// gives the same result. Hitting an iteration cap is not an error; it shows up in the
/// returned diagnostics.
pub fn layout(g: &mut DirectedGraph, config: &LayoutConfig) -> Result<LayoutDiagnostics> {
    config.validate()?;
    g.reset_layout();

    let mut diag = LayoutDiagnostics::default();
    if g.is_empty() {
        debug!("empty graph; nothing to lay out");
        return Ok(diag);
    }

    let pruned = prune::run(g, config.max_prune_depth);
    diag.pruned_nodes = pruned.pruned;
    diag.prune_rounds = pruned.rounds;
    debug!(
        pruned = pruned.pruned,
        rounds = pruned.rounds,
        components = alg::components(g).len(),
        "prune"
    );

    diag.reversed_edges = rank::longest_path::break_cycles(g)?;
    rank::longest_path::assign(g);
    debug!(
        reversed_edges = diag.reversed_edges,
        weighted_length = rank::util::weighted_length(g),
        "initial ranks"
    );

    let simplex = rank::network_simplex::run(g, config.max_rank_iterations);
    diag.rank_iterations = simplex.iterations;
    diag.rank_converged = simplex.converged;
    debug!(
        iterations = simplex.iterations,
        converged = simplex.converged,
        weighted_length = rank::util::weighted_length(g),
        "network simplex"
    );

    let populated = populate::run(g, config)?;
    diag.virtual_nodes = populated.virtual_nodes;
    diag.split_edges = populated.split_edges;
    debug!(
        virtual_nodes = populated.virtual_nodes,
        split_edges = populated.split_edges,
        ranks = g.ranks().len(),
        "populate ranks"
    );

    position::vertical::run(g, config);

    let minimized = order::median::run(
        g,
        config.max_crossing_iterations,
        config.crossing_stall_limit,
    );
    diag.crossings_initial = minimized.initial;
    diag.crossings_after_minimizer = minimized.best;
    diag.crossing_iterations = minimized.iterations;
    debug!(
        initial = minimized.initial,
        best = minimized.best,
        iterations = minimized.iterations,
        "median crossing minimization"
    );

    let transposed = order::transpose::run(g);
    diag.transpose_passes = transposed.passes;
    diag.transpose_swaps = transposed.swaps;
    diag.crossings_final = order::cross_count(g, g.ranks());
    debug!(
        passes = transposed.passes,
        swaps = transposed.swaps,
        crossings = diag.crossings_final,
        "transpose"
    );

    let placed = position::priority::run(g, config);
    diag.placement_iterations = placed.iterations;
    debug!(iterations = placed.iterations, "horizontal placement");

    route::run(g);
    Ok(diag)
}
