//! The domain-independent IDA*-style search engine — component E.
//!
//! An outer bound-raising loop wraps an inner best-first expansion over a `BinaryHeap`. The
//! inner layer is ordinary A* expansion bounded by the current threshold; any child whose f-value
//! exceeds the bound is pruned and instead contributes to the next threshold, exactly as in the
//! source's `AStarSolver::Solve`. Paths are represented as a reverse-linked list (`Rc<PathLink>`)
//! so that branching nodes share their common prefix instead of cloning an ever-growing action
//! vector per node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use tracing::debug;

use crate::problem::Problem;

struct PathLink<A> {
    action: A,
    parent: Option<Rc<PathLink<A>>>,
}

fn reconstruct<A: Clone>(path: &Option<Rc<PathLink<A>>>) -> Vec<A> {
    let mut actions = Vec::new();
    let mut cursor = path.clone();
    while let Some(link) = cursor {
        actions.push(link.action.clone());
        cursor = link.parent.clone();
    }
    actions.reverse();
    actions
}

struct Node<S, A> {
    state: S,
    path: Option<Rc<PathLink<A>>>,
    path_cost: u64,
    depth: u32,
    f: u64,
}

impl<S, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.depth == other.depth
    }
}
impl<S, A> Eq for Node<S, A> {}

impl<S, A> PartialOrd for Node<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for Node<S, A> {
    /// Smaller f pops first; among equal f, larger depth pops first — a `BinaryHeap` pops the
    /// greatest element, so both comparisons are inverted relative to their natural order.
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| self.depth.cmp(&other.depth))
    }
}

pub struct SolveResult<A> {
    pub cost: u64,
    pub actions: Vec<A>,
    pub iterations: u64,
    pub solved: bool,
}

/// Runs bounded best-first search, raising the bound each time the fringe empties without
/// reaching a goal, until either a goal is found or `max_iterations` outer iterations elapse.
///
/// When the iteration budget is exhausted without a solution, returns the best partial path seen
/// (smallest heuristic value among expanded non-root nodes, first seen wins ties) with
/// `cost = u64::MAX` and `solved = false`.
pub fn solve<P: Problem>(problem: &P, max_iterations: u64) -> SolveResult<P::Action> {
    let initial_state = problem.initial_state();
    let mut bound = problem.heuristic(&initial_state);
    let mut iteration = 0u64;

    let mut best_partial_path: Option<Rc<PathLink<P::Action>>> = None;
    let mut best_partial_heuristic = u64::MAX;

    while iteration < max_iterations {
        debug!(iteration, bound, "starting IDA* iteration");
        let mut fringe: BinaryHeap<Node<P::State, P::Action>> = BinaryHeap::new();
        fringe.push(Node {
            f: problem.heuristic(&initial_state),
            state: initial_state.clone(),
            path: None,
            path_cost: 0,
            depth: 0,
        });

        let mut next_bound = u64::MAX;
        best_partial_path = None;
        best_partial_heuristic = u64::MAX;

        while let Some(node) = fringe.pop() {
            if problem.is_goal(&node.state) {
                return SolveResult {
                    cost: node.path_cost,
                    actions: reconstruct(&node.path),
                    iterations: iteration + 1,
                    solved: true,
                };
            }

            if node.depth != 0 {
                let h = problem.heuristic(&node.state);
                if h < best_partial_heuristic {
                    best_partial_heuristic = h;
                    best_partial_path = node.path.clone();
                }
            }

            for (action, child_state) in problem.enumerate(&node.state) {
                let step_cost = problem.action_cost(&action);
                let child_path_cost = node.path_cost + step_cost;
                let f_child = child_path_cost + problem.heuristic(&child_state);

                if f_child > bound {
                    next_bound = next_bound.min(f_child);
                    continue;
                }

                fringe.push(Node {
                    path: Some(Rc::new(PathLink { action, parent: node.path.clone() })),
                    state: child_state,
                    path_cost: child_path_cost,
                    depth: node.depth + 1,
                    f: f_child,
                });
            }
        }

        if next_bound == u64::MAX {
            break;
        }
        bound = next_bound;
        iteration += 1;
    }

    let actions = reconstruct(&best_partial_path);
    SolveResult { cost: u64::MAX, actions, iterations: iteration, solved: false }
}
