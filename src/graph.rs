//! A fixed-size directed multigraph with the loop-counting query used by the heuristic.
//!
//! Duplicate edges are collapsed: each vertex keeps an ordered set of out-neighbors, so
//! iteration order is deterministic by ascending vertex id.

use std::collections::BTreeSet;

/// A directed graph over the fixed vertex range `[0, vertex_count)`.
#[derive(Debug, Clone)]
pub struct OrientedGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl OrientedGraph {
    pub fn new(vertex_count: usize) -> Self {
        OrientedGraph {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Records a directed edge `u -> v`. Duplicate inserts are no-ops.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.adjacency.len() && v < self.adjacency.len(), "vertex out of range");
        self.adjacency[u].insert(v);
    }

    /// Lower bound on the number of unavoidable cycle re-entries a traversal covering every edge
    /// must incur, given that agents already occupy `occupied` vertices.
    ///
    /// Repeatedly DFSes from every vertex; each time a back edge is found whose tail is not in
    /// `occupied`, the edge is removed and the count incremented, then the whole scan restarts.
    /// The scan is a fixed point: it stops once a full pass over all vertices finds no new cycle.
    pub fn loop_count(&self, occupied: &BTreeSet<usize>) -> usize {
        let mut graph = self.clone();
        let n = graph.adjacency.len();
        let mut count = 0;

        loop {
            let mut visited = vec![false; n];
            let mut on_stack = vec![false; n];
            let mut broke_edge = false;

            for start in 0..n {
                if !visited[start] && graph.break_first_cycle(occupied, start, &mut visited, &mut on_stack) {
                    count += 1;
                    broke_edge = true;
                    break;
                }
            }

            if !broke_edge {
                return count;
            }
        }
    }

    /// DFS from `v`. If a back edge is found, removes it (unless `v` is occupied, in which case
    /// the cycle is absorbed by the agent already starting there) and returns whether an edge was
    /// removed, so the caller can restart the scan.
    fn break_first_cycle(
        &mut self,
        occupied: &BTreeSet<usize>,
        v: usize,
        visited: &mut [bool],
        on_stack: &mut [bool],
    ) -> bool {
        if visited[v] {
            return false;
        }
        visited[v] = true;
        on_stack[v] = true;

        let neighbors: Vec<usize> = self.adjacency[v].iter().copied().collect();
        for w in neighbors {
            if !visited[w] {
                if self.break_first_cycle(occupied, w, visited, on_stack) {
                    on_stack[v] = false;
                    return true;
                }
            } else if on_stack[w] {
                if !occupied.contains(&v) {
                    self.adjacency[v].remove(&w);
                    on_stack[v] = false;
                    return true;
                }
                // `v` is occupied: the cycle is absorbed by the agent starting there, keep going.
            }
        }

        on_stack[v] = false;
        false
    }
}
