use serde::{Deserialize, Serialize};

/// Counters accumulated over one search invocation. Reporting only; the
/// counters never influence control flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes that passed the staleness check and were goal-checked.
    pub expansions: u64,
    /// Successor pairs produced by the task across all expansions.
    pub generated: u64,
    /// Successors pruned because the heuristic reported a dead end.
    pub dead_ends: u64,
    /// Frontier entries discarded because a cheaper path to their state was
    /// already recorded.
    pub stale_dropped: u64,
}

/// Terminal result of a search: an operator sequence from the initial state
/// to a goal state, or `None` when the frontier drained without a goal hit.
/// Unsolvable is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<O> {
    pub plan: Option<Vec<O>>,
    pub stats: SearchStats,
}

impl<O> SearchOutcome<O> {
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_as_plain_counters() {
        let stats = SearchStats { expansions: 6, generated: 5, dead_ends: 1, stale_dropped: 0 };
        let v = serde_json::to_value(&stats).unwrap();
        assert_eq!(v["expansions"], 6);
        assert_eq!(v["dead_ends"], 1);
        let back: SearchStats = serde_json::from_value(v).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn outcome_reports_solved_only_with_a_plan() {
        let solved = SearchOutcome { plan: Some(vec!["op"]), stats: SearchStats::default() };
        let unsolvable: SearchOutcome<&str> = SearchOutcome { plan: None, stats: SearchStats::default() };
        assert!(solved.is_solved());
        assert!(!unsolvable.is_solved());
    }
}
