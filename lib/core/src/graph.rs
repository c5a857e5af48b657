// Adjacency-list graph - node keys and their outgoing edges
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Weight = u32;

/// Path cost. Wide enough that summing `Weight`s along any path cannot overflow.
pub type Distance = u64;

/// Graph-wide flags, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub directed: bool,
    pub weighted: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: true,
        }
    }
}

/// An outgoing edge, stored in the adjacency list of its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<K> {
    pub target: K,
    pub weight: Weight,
}

impl<K> Edge<K> {
    #[inline]
    #[must_use]
    pub fn new(target: K, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// In-memory graph keyed by caller-supplied node keys.
///
/// Every key passed to [`Graph::insert_edge`], as source or destination,
/// is present in the adjacency mapping afterwards, even when it has no
/// outgoing edges. Keys iterate in their `Ord` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<K: Ord> {
    config: GraphConfig,
    adjacency: BTreeMap<K, Vec<Edge<K>>>,
}

impl<K: Ord> Default for Graph<K> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<K: Ord> Graph<K> {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            adjacency: BTreeMap::new(),
        }
    }

    pub fn directed(weighted: bool) -> Self {
        Self::new(GraphConfig {
            directed: true,
            weighted,
        })
    }

    pub fn undirected(weighted: bool) -> Self {
        Self::new(GraphConfig {
            directed: false,
            weighted,
        })
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Outgoing edges of `key` in insertion order
    pub fn edges(&self, key: &K) -> Option<&[Edge<K>]> {
        self.adjacency.get(key).map(Vec::as_slice)
    }

    /// All node keys in key order
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacency.keys()
    }

    /// Nodes paired with their outgoing edges, in key order
    pub fn adjacency(&self) -> impl Iterator<Item = (&K, &[Edge<K>])> + '_ {
        self.adjacency.iter().map(|(k, edges)| (k, edges.as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed edge records. An undirected insertion
    /// counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<K: Ord + Clone> Graph<K> {
    /// Insert `source -> destination`. Undirected graphs also get the
    /// mirrored edge. On an unweighted graph the weight is stored as 0.
    pub fn insert_edge(&mut self, source: K, destination: K, weight: Weight) {
        let weight = if self.config.weighted { weight } else { 0 };

        self.adjacency
            .entry(source.clone())
            .or_default()
            .push(Edge::new(destination.clone(), weight));

        let mirror = self.adjacency.entry(destination).or_default();
        if !self.config.directed {
            mirror.push(Edge::new(source, weight));
        }
    }

    pub fn insert_unweighted(&mut self, source: K, destination: K) {
        self.insert_edge(source, destination, 0);
    }

    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (K, K, Weight)>,
    {
        for (source, destination, weight) in edges {
            self.insert_edge(source, destination, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_insert_registers_destination() {
        let mut graph = Graph::directed(true);
        graph.insert_edge("a", "b", 4);

        assert_eq!(graph.edges(&"a"), Some(&[Edge::new("b", 4)][..]));
        assert!(graph.contains_node(&"b"));
        assert_eq!(graph.edges(&"b"), Some(&[][..]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_undirected_insert_mirrors_edge() {
        let mut graph = Graph::undirected(true);
        graph.insert_edge("a", "b", 7);

        assert_eq!(graph.edges(&"a"), Some(&[Edge::new("b", 7)][..]));
        assert_eq!(graph.edges(&"b"), Some(&[Edge::new("a", 7)][..]));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_unweighted_graph_stores_zero() {
        let mut graph = Graph::directed(false);
        graph.insert_edge("a", "b", 42);
        assert_eq!(graph.edges(&"a").unwrap()[0].weight, 0);
    }

    #[test]
    fn test_duplicates_and_self_loops_kept() {
        let mut graph = Graph::directed(true);
        graph.insert_edge("a", "b", 1);
        graph.insert_edge("a", "b", 1);
        graph.insert_edge("a", "a", 3);

        let edges = graph.edges(&"a").unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Edge::new("a", 3));
        assert_eq!(graph.node_count(), 2);

        let mut undirected = Graph::undirected(true);
        undirected.insert_edge("x", "x", 2);
        assert_eq!(undirected.edges(&"x").unwrap().len(), 2);
    }

    #[test]
    fn test_undirected_keeps_per_node_insertion_order() {
        let mut graph = Graph::undirected(true);
        graph.insert_edge("a", "a", 1);
        graph.insert_edge("a", "b", 2);
        graph.insert_edge("c", "a", 3);

        assert_eq!(
            graph.edges(&"a").unwrap(),
            &[
                Edge::new("a", 1),
                Edge::new("a", 1),
                Edge::new("b", 2),
                Edge::new("c", 3),
            ][..]
        );
    }

    #[test]
    fn test_nodes_in_key_order() {
        let mut graph = Graph::default();
        graph.extend_edges([("m", "z", 1), ("b", "a", 2)]);

        let nodes: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec!["a", "b", "m", "z"]);
        assert!(graph.is_directed());
        assert!(graph.is_weighted());
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<String> = Graph::new(GraphConfig {
            directed: false,
            weighted: false,
        });
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges(&"a".to_string()).is_none());
    }
}
