//! # waygraph Core
//!
//! Core library for waygraph, a small in-memory graph with Dijkstra
//! shortest paths.
//!
//! - [`Graph`] - adjacency-list graph keyed by caller-supplied keys
//! - [`Graph::render`] - textual dump of the adjacency structure
//! - [`Graph::shortest_path`] - Dijkstra from one key to another
//!
//! ## Example
//!
//! ```rust
//! use waygraph_core::{Graph, PathOutcome};
//!
//! let mut graph = Graph::directed(true);
//! graph.insert_edge("h", "a", 3);
//! graph.insert_edge("a", "school", 4);
//!
//! for line in graph.render() {
//!     println!("{}", line);
//! }
//!
//! match graph.shortest_path(&"h", &"school").unwrap() {
//!     PathOutcome::Found(found) => assert_eq!(found.total_weight, 7),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod error;
pub mod graph;
pub mod render;

/// Dijkstra's algorithm over a [`Graph`]
///
/// Weights are unsigned, so negative edges cannot be expressed.
pub mod dijkstra;

pub use dijkstra::{PathOutcome, ShortestPath, Strategy};
pub use error::{Error, Result};
pub use graph::{Distance, Edge, Graph, GraphConfig, Weight};
