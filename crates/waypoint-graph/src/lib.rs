//! Waypoint Graph - weighted graphs with ceiling-bounded routing
//!
//! This crate stores an undirected graph with positive integer edge
//! weights in a fixed-size adjacency matrix, and finds the route with the
//! fewest hops between two vertices using only edges lighter than a given
//! ceiling.
//!
//! # Architecture
//!
//! - [`WeightedGraph`] owns the matrix and the edge count. Vertices are
//!   plain indices; naming them is left to the caller.
//! - Path search ([`WeightedGraph::find_path`]) is a BFS that reads the
//!   matrix and never changes it.
//! - [`GraphBuilder`] turns loader output (a vertex count plus edge
//!   triples) into a graph.
//!
//! # Example
//!
//! ```
//! use waypoint_graph::WeightedGraph;
//!
//! # fn main() -> Result<(), waypoint_graph::GraphError> {
//! let mut graph = WeightedGraph::new(4)?;
//! graph.insert_edge(0, 1, 5)?;
//! graph.insert_edge(1, 2, 5)?;
//! graph.insert_edge(0, 2, 20)?;
//! graph.insert_edge(2, 3, 5)?;
//!
//! // The 0-2 edge is too heavy for a ceiling of 10.
//! assert_eq!(graph.find_path(0, 3, 10)?, Some(vec![0, 1, 2, 3]));
//! assert_eq!(graph.find_path(0, 3, 30)?, Some(vec![0, 2, 3]));
//! assert_eq!(graph.find_path(0, 3, 1)?, None);
//! # Ok(())
//! # }
//! ```

mod builder;
mod display;
mod edge;
mod error;
mod graph;
mod path;

pub use builder::GraphBuilder;
pub use display::Listing;
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use graph::{GraphStats, Vertex, WeightedGraph};
pub use path::PathQuery;
