//! Best-first state-space search.
//!
//! [`search`] runs Dijkstra, or A* when the problem supplies a heuristic,
//! over any [`SearchProblem`]. The open set is a binary heap keyed on
//! `(cost + heuristic, insertion order)`, so states with equal priority come
//! out first-in first-out. That makes unit-cost searches behave exactly like
//! breadth-first search, including which of several equally short paths is
//! reported.
//!
//! States that have already been settled with a lower cost are skipped when
//! popped again instead of being removed from the heap.

mod problem;


use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

use rustc_hash::FxHashMap;

pub use problem::{ClosureProblem, Cost, SearchProblem};

/// A cheapest route from a start state to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath<S, C> {
    /// Start to goal, inclusive.
    pub states: Vec<S>,
    pub cost: C,
}

impl<S, C> SearchPath<S, C> {
    /// Number of transitions taken.
    pub fn steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Heap pushes, start states included.
    pub pushed: usize,
    /// Popped entries discarded because a cheaper route was already known.
    pub stale: usize,
}

struct Entry<S, C> {
    priority: C,
    seq: u64,
    cost: C,
    state: S,
}

// BinaryHeap is a max-heap: lowest priority wins, then earliest insertion.
impl<S, C: Ord> Ord for Entry<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, C: Ord> PartialOrd for Entry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> PartialEq for Entry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, C: Ord> Eq for Entry<S, C> {}

/// Cheapest path from `start` to any goal, or `None` when no goal is
/// reachable.
///
/// Step costs must be non-negative. With an admissible heuristic the result
/// is optimal; an overestimating heuristic still returns a valid path whose
/// cost is an upper bound.
pub fn search<P: SearchProblem>(
    problem: &P,
    start: P::State,
) -> Option<SearchPath<P::State, P::Cost>> {
    search_with_stats(problem, [start]).0
}

/// Like [`search`] but seeded with several start states at cost zero.
///
/// The returned path begins at whichever start it was reached from.
pub fn search_from<P, I>(problem: &P, starts: I) -> Option<SearchPath<P::State, P::Cost>>
where
    P: SearchProblem,
    I: IntoIterator<Item = P::State>,
{
    search_with_stats(problem, starts).0
}

/// [`search_from`] that also reports what the search did.
pub fn search_with_stats<P, I>(
    problem: &P,
    starts: I,
) -> (Option<SearchPath<P::State, P::Cost>>, SearchStats)
where
    P: SearchProblem,
    I: IntoIterator<Item = P::State>,
{
    let mut stats = SearchStats::default();
    let mut best: FxHashMap<P::State, P::Cost> = FxHashMap::default();
    let mut parent: FxHashMap<P::State, P::State> = FxHashMap::default();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    for start in starts {
        if best.contains_key(&start) {
            continue;
        }
        let zero = P::Cost::default();
        best.insert(start.clone(), zero);
        open.push(Entry {
            priority: problem.heuristic(&start),
            seq,
            cost: zero,
            state: start,
        });
        seq += 1;
        stats.pushed += 1;
    }

    while let Some(Entry { cost, state, .. }) = open.pop() {
        if best.get(&state).is_some_and(|&known| cost > known) {
            stats.stale += 1;
            continue;
        }

        if problem.is_goal(&state) {
            log::debug!("search reached goal: {stats:?}");
            let states = rebuild_path(&parent, state);
            return (Some(SearchPath { states, cost }), stats);
        }

        stats.expanded += 1;
        log::trace!("expanding state #{} (open set: {})", stats.expanded, open.len());
        for (next, step) in problem.expand(&state) {
            let next_cost = cost + step;
            if best.get(&next).is_some_and(|&known| known <= next_cost) {
                continue;
            }
            best.insert(next.clone(), next_cost);
            parent.insert(next.clone(), state.clone());
            open.push(Entry {
                priority: next_cost + problem.heuristic(&next),
                seq,
                cost: next_cost,
                state: next,
            });
            seq += 1;
            stats.pushed += 1;
        }
    }

    log::debug!("search exhausted without reaching a goal: {stats:?}");
    (None, stats)
}

fn rebuild_path<S: Clone + Eq + Hash>(parent: &FxHashMap<S, S>, goal: S) -> Vec<S> {
    let mut states = vec![goal];
    while let Some(prev) = states.last().and_then(|s| parent.get(s)) {
        states.push(prev.clone());
    }
    states.reverse();
    states
}

/// Breadth-first flood from `start`: every reachable state mapped to its
/// distance in steps.
///
/// ```
/// use aoc_solutions::utils::search::reachable;
///
/// let dist = reachable(0u8, |&n| [n.wrapping_add(1), n.wrapping_add(2)].into_iter().filter(|&m| m < 6));
/// assert_eq!(dist[&5], 3);
/// assert_eq!(dist.len(), 6);
/// ```
pub fn reachable<S, F, I>(start: S, mut expand: F) -> FxHashMap<S, usize>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut dist = FxHashMap::default();
    dist.insert(start.clone(), 0);
    let mut queue = VecDeque::from([(start, 0usize)]);
    while let Some((state, d)) = queue.pop_front() {
        for next in expand(&state) {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back((next, d + 1));
            }
        }
    }
    log::trace!("flood visited {} states", dist.len());
    dist
}
