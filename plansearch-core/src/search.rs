use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use tracing::{debug, info};

use crate::heuristic::{Heuristic, DEAD_END};
use crate::models::{SearchOutcome, SearchStats};
use crate::nodes::SearchNode;
use crate::policy::{OrderingPolicy, PolicyError};
use crate::task::PlanningTask;

/// Frontier entry: priority key, raw estimate and insertion sequence, ordered
/// lexicographically so that among equal keys the lower estimate wins, and
/// among equal estimates the first-inserted entry wins (FIFO).
struct OpenEntry<S, O> {
    key: u64,
    h: u64,
    seq: u64,
    node: Rc<SearchNode<S, O>>,
}

impl<S, O> PartialEq for OpenEntry<S, O> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.h == other.h && self.seq == other.seq
    }
}
impl<S, O> Eq for OpenEntry<S, O> {}
impl<S, O> PartialOrd for OpenEntry<S, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S, O> Ord for OpenEntry<S, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert ordering for min-heap behavior
        (other.key, other.h, other.seq).cmp(&(self.key, self.h, self.seq))
    }
}

/// Runs the best-first loop with the given ordering policy.
///
/// Pops the most promising frontier entry, discards it if a cheaper path to
/// its state was recorded after it was enqueued, tests the goal, and expands
/// successors at unit cost. Successors whose estimate is [`DEAD_END`] are
/// pruned before they touch the frontier or the cost table. Frontier
/// exhaustion means the task is unsolvable from its initial state.
pub fn best_first_search<T, H>(
    task: &T,
    heuristic: &H,
    policy: OrderingPolicy,
) -> SearchOutcome<T::Operator>
where
    T: PlanningTask,
    H: Heuristic<T>,
{
    let mut open = BinaryHeap::new();
    let mut state_cost: HashMap<T::State, u64> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut seq: u64 = 0;
    let mut best_h = u64::MAX;

    let root = SearchNode::root(task.initial_state());
    state_cost.insert(root.state.clone(), 0);

    // The root is enqueued unconditionally: a dead-end estimate saturates its
    // key but the goal check must still run on the initial state.
    let h0 = heuristic.estimate(&root);
    debug!(h = h0, "initial heuristic estimate");
    open.push(OpenEntry { key: policy.key(0, h0), h: h0, seq, node: root });

    while let Some(entry) = open.pop() {
        let node = entry.node;

        // Discard stale entries: a cheaper path to this state was recorded
        // after this entry was enqueued.
        if let Some(best_g) = state_cost.get(&node.state) {
            if *best_g < node.g {
                stats.stale_dropped += 1;
                continue;
            }
        }

        stats.expansions += 1;
        if entry.h < best_h {
            best_h = entry.h;
            debug!(h = best_h, expansions = stats.expansions, "new best heuristic estimate");
        }

        if task.goal_reached(&node.state) {
            info!(plan_length = node.g, expansions = stats.expansions, "goal reached");
            return SearchOutcome { plan: Some(node.extract_plan()), stats };
        }

        for (operator, successor) in task.successors(&node.state) {
            stats.generated += 1;
            let child = SearchNode::child(&node, operator, successor);
            let h = heuristic.estimate(&child);
            if h == DEAD_END {
                stats.dead_ends += 1;
                continue;
            }
            let improved = state_cost
                .get(&child.state)
                .map(|best_g| child.g < *best_g)
                .unwrap_or(true);
            if improved {
                state_cost.insert(child.state.clone(), child.g);
                seq += 1;
                open.push(OpenEntry { key: policy.key(child.g, h), h, seq, node: child });
            }
        }
    }

    info!(expansions = stats.expansions, "frontier exhausted, task unsolvable");
    SearchOutcome { plan: None, stats }
}

/// A* search: `f = g + h`. Returns a minimum-length plan when the heuristic
/// is admissible and consistent.
pub fn astar_search<T, H>(task: &T, heuristic: &H) -> SearchOutcome<T::Operator>
where
    T: PlanningTask,
    H: Heuristic<T>,
{
    best_first_search(task, heuristic, OrderingPolicy::AStar)
}

/// Weighted A* search: `f = g + weight * h`, `weight >= 1`.
pub fn weighted_astar_search<T, H>(
    task: &T,
    heuristic: &H,
    weight: u64,
) -> Result<SearchOutcome<T::Operator>, PolicyError>
where
    T: PlanningTask,
    H: Heuristic<T>,
{
    Ok(best_first_search(task, heuristic, OrderingPolicy::weighted(weight)?))
}

/// Greedy best-first search: `f = h`.
pub fn greedy_best_first_search<T, H>(task: &T, heuristic: &H) -> SearchOutcome<T::Operator>
where
    T: PlanningTask,
    H: Heuristic<T>,
{
    best_first_search(task, heuristic, OrderingPolicy::GreedyBestFirst)
}
