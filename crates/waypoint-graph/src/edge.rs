//! Edge type for graph export.

use crate::graph::Vertex;
use serde::{Deserialize, Serialize};

/// An undirected weighted edge.
///
/// Produced by [`WeightedGraph::edges`](crate::WeightedGraph::edges) with
/// `v <= w`, so each stored edge is reported once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub v: Vertex,
    pub w: Vertex,
    pub weight: u32,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(v: Vertex, w: Vertex, weight: u32) -> Self {
        Self { v, w, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.v, self.w, self.weight)
    }
}
