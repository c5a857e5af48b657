//! # waygraph
//!
//! A small in-memory graph with adjacency dumps and Dijkstra shortest paths.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! waygraph h school
//! waygraph --edges roads.txt --undirected depot harbor
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use waygraph::prelude::*;
//!
//! let graph = waygraph::example_graph(GraphConfig::default());
//! let outcome = graph.shortest_path(&"h".to_string(), &"school".to_string()).unwrap();
//! assert_eq!(outcome.total_weight(), Some(10));
//! ```
//!
//! ## Crate Structure
//!
//! - `waygraph-core` - Graph store, rendering, Dijkstra
//! - [`edge_list`] - plain-text edge list reader used by the CLI

pub mod edge_list;

// Re-export core types
pub use waygraph_core::{
    Distance, Edge, Error, Graph, GraphConfig, PathOutcome, Result, ShortestPath, Strategy,
    Weight,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Distance, Edge, Error, Graph, GraphConfig, PathOutcome, Result, ShortestPath, Strategy,
        Weight,
    };
}

/// Edges of the built-in demo map
pub const EXAMPLE_EDGES: &[(&str, &str, Weight)] = &[
    ("h", "c", 5),
    ("h", "a", 3),
    ("h", "b", 2),
    ("a", "d", 3),
    ("d", "b", 1),
    ("d", "f", 4),
    ("b", "e", 6),
    ("c", "e", 2),
    ("e", "f", 1),
    ("e", "school", 4),
    ("f", "school", 2),
];

/// The demo map with the given flags
pub fn example_graph(config: GraphConfig) -> Graph<String> {
    let mut graph = Graph::new(config);
    graph.extend_edges(
        EXAMPLE_EDGES
            .iter()
            .map(|&(s, d, w)| (s.to_string(), d.to_string(), w)),
    );
    graph
}
