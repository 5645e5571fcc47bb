use crate::nodes::SearchNode;
use crate::task::PlanningTask;

/// Sentinel estimate for a state the goal is proven unreachable from.
/// Priority-key arithmetic saturates, so the sentinel never wraps.
pub const DEAD_END: u64 = u64::MAX;

/// Estimates the remaining operator count from a node to the goal.
///
/// Must be deterministic for a given node. Returning [`DEAD_END`] prunes the
/// node from the search. Admissibility is the estimator's contract with the
/// caller, not the engine's.
pub trait Heuristic<T: PlanningTask> {
    fn estimate(&self, node: &SearchNode<T::State, T::Operator>) -> u64;
}

impl<T, F> Heuristic<T> for F
where
    T: PlanningTask,
    F: Fn(&SearchNode<T::State, T::Operator>) -> u64,
{
    fn estimate(&self, node: &SearchNode<T::State, T::Operator>) -> u64 {
        self(node)
    }
}
