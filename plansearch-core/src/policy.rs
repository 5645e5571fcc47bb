use thiserror::Error;

/// Conventional weight for weighted A* when the caller has no better choice.
pub const DEFAULT_WEIGHT: u64 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("weighted A* requires weight >= 1, got {0}")]
    WeightTooSmall(u64),
}

/// Node-ordering strategy for the best-first loop. Fixed for the duration of
/// one search invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// `f = g + h`. Optimal with an admissible heuristic.
    AStar,
    /// `f = g + weight * h`. Trades optimality for speed; larger weight is
    /// greedier.
    WeightedAStar { weight: u64 },
    /// `f = h`. Ignores accumulated cost entirely; no optimality guarantee.
    GreedyBestFirst,
}

impl OrderingPolicy {
    /// Validated factory for the weighted variant.
    pub fn weighted(weight: u64) -> Result<Self, PolicyError> {
        if weight < 1 {
            return Err(PolicyError::WeightTooSmall(weight));
        }
        Ok(Self::WeightedAStar { weight })
    }

    /// Priority key for a node with path cost `g` and estimate `h`.
    /// Saturating so the dead-end sentinel cannot wrap.
    pub fn key(&self, g: u64, h: u64) -> u64 {
        match self {
            Self::AStar => g.saturating_add(h),
            Self::WeightedAStar { weight } => g.saturating_add(weight.saturating_mul(h)),
            Self::GreedyBestFirst => h,
        }
    }
}
