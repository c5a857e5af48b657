// Dijkstra shortest path over the graph's adjacency lists
use crate::graph::{Distance, Graph, Weight};
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Display};
use std::hash::Hash;
use tracing::{debug, trace};

/// How the engine picks the next node to settle.
///
/// Both strategies settle nodes in `(distance, key)` order, so ties are
/// broken on key ordering and the two always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// O(V^2) scan of the unvisited set
    LinearScan,
    /// Min-heap with lazy deletion, O((V + E) log V)
    #[default]
    BinaryHeap,
}

/// A minimum-weight path, listed from source to destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath<K> {
    pub path: Vec<K>,
    pub total_weight: Distance,
}

impl<K> ShortestPath<K> {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<K: Display> Display for ShortestPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, " ({})", self.total_weight)
    }
}

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<K> {
    Found(ShortestPath<K>),
    /// Destination is not reachable from the source
    NoPath,
    /// The graph is unweighted; no path is computed for it
    NotWeighted,
}

impl<K> PathOutcome<K> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The path, empty unless one was found
    pub fn path(&self) -> &[K] {
        match self {
            PathOutcome::Found(found) => &found.path,
            _ => &[],
        }
    }

    pub fn total_weight(&self) -> Option<Distance> {
        match self {
            PathOutcome::Found(found) => Some(found.total_weight),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<ShortestPath<K>> {
        match self {
            PathOutcome::Found(found) => Some(found),
            _ => None,
        }
    }
}

/// Dense index over the graph's keys. Indices follow key order.
struct NodeIndex<'g, K> {
    keys: Vec<&'g K>,
    lookup: AHashMap<&'g K, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl<'g, K: Ord + Hash + Display> NodeIndex<'g, K> {
    fn build(graph: &'g Graph<K>) -> Self {
        let keys: Vec<&K> = graph.nodes().collect();
        let lookup: AHashMap<&K, usize> = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();

        // Every edge target is a graph key, so the lookup always hits.
        let adjacency = graph
            .adjacency()
            .map(|(_, edges)| {
                edges
                    .iter()
                    .filter_map(|edge| lookup.get(&edge.target).map(|&v| (v, edge.weight)))
                    .collect()
            })
            .collect();

        Self {
            keys,
            lookup,
            adjacency,
        }
    }

    fn position(&self, key: &K) -> Result<usize> {
        self.lookup
            .get(key)
            .copied()
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Per-query search state
struct Search {
    dist: Vec<Option<Distance>>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl Search {
    fn new(len: usize, source: usize) -> Self {
        let mut dist = vec![None; len];
        dist[source] = Some(0);
        Self {
            dist,
            prev: vec![None; len],
            visited: vec![false; len],
        }
    }

    /// Settle `u` and relax its edges into unvisited targets
    fn settle(&mut self, u: usize, adjacency: &[(usize, Weight)]) -> Vec<usize> {
        self.visited[u] = true;
        let base = self.dist[u].unwrap_or(0);
        trace!(node = u, distance = base, "settled");
        let mut improved = Vec::new();

        for &(v, weight) in adjacency {
            if self.visited[v] {
                continue;
            }
            let candidate = base + Distance::from(weight);
            if self.dist[v].map_or(true, |current| candidate < current) {
                self.dist[v] = Some(candidate);
                self.prev[v] = Some(u);
                improved.push(v);
            }
        }

        improved
    }

    fn run_linear_scan<K>(&mut self, index: &NodeIndex<'_, K>, destination: usize) {
        loop {
            let next = (0..index.adjacency.len())
                .filter(|&i| !self.visited[i])
                .filter_map(|i| self.dist[i].map(|d| (d, i)))
                .min();

            // Nothing reachable is left unvisited.
            let Some((_, u)) = next else { break };
            if u == destination {
                break;
            }
            self.settle(u, &index.adjacency[u]);
        }
    }

    fn run_binary_heap<K>(&mut self, index: &NodeIndex<'_, K>, source: usize, destination: usize) {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, source)));

        while let Some(Reverse((_, u))) = heap.pop() {
            if self.visited[u] {
                continue;
            }
            if u == destination {
                break;
            }
            for v in self.settle(u, &index.adjacency[u]) {
                if let Some(d) = self.dist[v] {
                    heap.push(Reverse((d, v)));
                }
            }
        }
    }

    /// Walk `prev` back from the destination. `None` when it was never reached.
    fn reconstruct(&self, source: usize, destination: usize) -> Option<(Vec<usize>, Distance)> {
        let total = self.dist[destination]?;
        let mut path = vec![destination];
        let mut current = destination;

        while current != source {
            current = self.prev[current]?;
            path.push(current);
        }

        path.reverse();
        Some((path, total))
    }
}

impl<K: Ord + Hash + Clone + Display> Graph<K> {
    /// Minimum-weight path from `source` to `destination` using the
    /// default [`Strategy`].
    ///
    /// Returns [`Error::KeyNotFound`] if either key was never inserted.
    /// Unweighted graphs yield [`PathOutcome::NotWeighted`] and an
    /// unreachable destination yields [`PathOutcome::NoPath`].
    pub fn shortest_path(&self, source: &K, destination: &K) -> Result<PathOutcome<K>> {
        self.shortest_path_with(source, destination, Strategy::default())
    }

    pub fn shortest_path_with(
        &self,
        source: &K,
        destination: &K,
        strategy: Strategy,
    ) -> Result<PathOutcome<K>> {
        let index = NodeIndex::build(self);
        let src = index.position(source)?;
        let dst = index.position(destination)?;

        if !self.is_weighted() {
            debug!(%source, %destination, "graph is unweighted, skipping path search");
            return Ok(PathOutcome::NotWeighted);
        }

        debug!(%source, %destination, ?strategy, nodes = index.len(), "searching shortest path");

        let mut search = Search::new(index.len(), src);
        match strategy {
            Strategy::LinearScan => search.run_linear_scan(&index, dst),
            Strategy::BinaryHeap => search.run_binary_heap(&index, src, dst),
        }

        let Some((positions, total_weight)) = search.reconstruct(src, dst) else {
            debug!(%source, %destination, "destination unreachable");
            return Ok(PathOutcome::NoPath);
        };

        let path: Vec<K> = positions.into_iter().map(|i| index.keys[i].clone()).collect();
        trace!(hops = path.len().saturating_sub(1), total_weight, "path found");

        Ok(PathOutcome::Found(ShortestPath { path, total_weight }))
    }
}
