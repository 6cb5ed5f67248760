//! Trait-based search problem definition.

use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

/// Path costs: non-negative, totally ordered, `Default` is zero.
///
/// Implemented for every type that fits, so `u32`, `u64`, `usize` and
/// friends work out of the box.
pub trait Cost: Copy + Ord + Default + Add<Output = Self> {}

impl<T> Cost for T where T: Copy + Ord + Default + Add<Output = T> {}

/// A state space to explore with [`search`](super::search).
///
/// States must hash and compare structurally: two equal states are
/// interchangeable, and a state must not change once handed to the search.
/// Compound puzzle states (positions of several robots, sets of opened
/// valves) should be canonicalised into a flat, sorted value first.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::search::{search, SearchProblem};
///
/// /// Reach `target` from 1 using "+1" (cost 1) and "*2" (cost 1).
/// struct Doubling {
///     target: u32,
/// }
///
/// impl SearchProblem for Doubling {
///     type State = u32;
///     type Cost = u32;
///
///     fn expand(&self, n: &u32) -> Vec<(u32, u32)> {
///         [n + 1, n * 2]
///             .into_iter()
///             .filter(|&m| m <= self.target)
///             .map(|m| (m, 1))
///             .collect()
///     }
///
///     fn is_goal(&self, n: &u32) -> bool {
///         *n == self.target
///     }
/// }
///
/// let path = search(&Doubling { target: 10 }, 1).unwrap();
/// assert_eq!(path.cost, 4); // 1 -> 2 -> 4 -> 5 -> 10
/// ```
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Cost: Cost;

    /// Successors of `state` with the cost of each step.
    ///
    /// An empty list marks a dead end.
    fn expand(&self, state: &Self::State) -> Vec<(Self::State, Self::Cost)>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimate of the remaining cost, zero at goals.
    ///
    /// Never overestimating keeps results optimal. The default of zero turns
    /// the search into Dijkstra, or plain BFS when every step costs 1.
    fn heuristic(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::default()
    }
}

fn zero<S, C: Default>(_state: &S) -> C {
    C::default()
}

/// Adapts closures to [`SearchProblem`] for quick one-off searches.
///
/// ```rust
/// use aoc_solutions::utils::search::{search, ClosureProblem};
///
/// let problem = ClosureProblem::new(
///     |&n: &i64| vec![(n + 3, 1u32), (n - 2, 1u32)],
///     |&n: &i64| n == 7,
/// )
/// .with_heuristic(|&n: &i64| ((7 - n).unsigned_abs() / 3) as u32);
///
/// assert_eq!(search(&problem, 0).unwrap().cost, 4); // +3 +3 +3 -2
/// ```
pub struct ClosureProblem<S, C, E, G, H = fn(&S) -> C> {
    expand_fn: E,
    goal_fn: G,
    heuristic_fn: H,
    _phantom: PhantomData<fn(&S) -> C>,
}

impl<S, C, E, G, I> ClosureProblem<S, C, E, G>
where
    C: Default,
    E: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
{
    /// Successor and goal closures with a zero heuristic.
    pub fn new(expand_fn: E, goal_fn: G) -> Self {
        Self {
            expand_fn,
            goal_fn,
            heuristic_fn: zero::<S, C>,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, E, G, H> ClosureProblem<S, C, E, G, H> {
    /// Replace the heuristic.
    pub fn with_heuristic<H2>(self, heuristic_fn: H2) -> ClosureProblem<S, C, E, G, H2>
    where
        H2: Fn(&S) -> C,
    {
        ClosureProblem {
            expand_fn: self.expand_fn,
            goal_fn: self.goal_fn,
            heuristic_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, E, G, H, I> SearchProblem for ClosureProblem<S, C, E, G, H>
where
    S: Clone + Eq + Hash,
    C: Cost,
    E: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: Fn(&S) -> bool,
    H: Fn(&S) -> C,
{
    type State = S;
    type Cost = C;

    fn expand(&self, state: &S) -> Vec<(S, C)> {
        (self.expand_fn)(state).into_iter().collect()
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_fn)(state)
    }

    fn heuristic(&self, state: &S) -> C {
        (self.heuristic_fn)(state)
    }
}
