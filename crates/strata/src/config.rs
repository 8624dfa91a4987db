//! Layout configuration.

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Where a node sits inside its rank's band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Vertical gap between consecutive ranks.
    pub rank_padding: f64,
    /// Horizontal gap between neighbouring nodes of a rank (per-node `padding` overrides it).
    pub node_padding: f64,
    pub vertical_align: VerticalAlign,
    /// Enables pruning when non-zero. Only isolated nodes are pruned, so pruning always
    /// settles in a single round and larger values behave like `1`.
    pub max_prune_depth: usize,
    /// Upper bound on network simplex edge exchanges.
    pub max_rank_iterations: usize,
    /// Upper bound on median sweeps.
    pub max_crossing_iterations: usize,
    /// Median sweeps without improvement before the minimizer gives up.
    pub crossing_stall_limit: usize,
    /// Upper bound on horizontal relaxation sweeps.
    pub max_placement_iterations: usize,
    /// Weight multiplier for a segment with exactly one virtual endpoint.
    pub virtual_weight_single: u32,
    /// Weight multiplier for a segment between two virtual nodes.
    pub virtual_weight_double: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rank_padding: 50.0,
            node_padding: 20.0,
            vertical_align: VerticalAlign::Top,
            max_prune_depth: 64,
            max_rank_iterations: 1000,
            max_crossing_iterations: 24,
            crossing_stall_limit: 4,
            max_placement_iterations: 8,
            virtual_weight_single: 2,
            virtual_weight_double: 8,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("rank_padding", self.rank_padding),
            ("node_padding", self.node_padding),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self.crossing_stall_limit == 0 {
            return Err(invalid("crossing_stall_limit must be at least 1".to_string()));
        }
        if self.virtual_weight_single == 0 || self.virtual_weight_double == 0 {
            return Err(invalid(
                "virtual edge weight multipliers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidConfig { message }
}
