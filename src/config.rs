//! Options for the top-level optimization pipeline.

use crate::select::Strategy;

/// Options for `optimize` and `optimize_grouped`.
#[derive(Debug, Clone, Default)]
pub struct OptimizeConfig {
    /// Which ordering to produce. `None` runs candidate selection.
    pub strategy: Option<Strategy>,
    /// Run one pass of pairwise-swap local search after the strategy.
    pub refine: bool,
    /// Drop pendant degree-≤2 chains before ordering.
    pub prune_branches: bool,
    /// Refuse graphs larger than this; the oracle is O(n⁴) per call.
    pub max_nodes: Option<usize>,
}

impl OptimizeConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
