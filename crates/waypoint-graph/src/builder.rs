//! Graph builder for constructing a graph from edge triples.
//!
//! Loaders hand over a vertex count and a list of `(v, w, weight)`
//! triples; the builder validates and inserts them in order.

use crate::edge::Edge;
use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};

/// Builds a WeightedGraph from a vertex count and a sequence of edges.
///
/// Edges are applied in the order they were added, so when the same pair
/// appears twice the first weight is the one kept.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertices: usize,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertices` vertices.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Queues a single edge.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex, weight: u32) -> &mut Self {
        self.edges.push(Edge::new(v, w, weight));
        self
    }

    /// Queues every `(v, w, weight)` triple from `edges`.
    pub fn add_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (Vertex, Vertex, u32)>,
    {
        self.edges
            .extend(edges.into_iter().map(|(v, w, weight)| Edge::new(v, w, weight)));
        self
    }

    /// Finishes building and returns the graph.
    ///
    /// Fails on the first invalid vertex count, vertex, or zero weight.
    pub fn build(self) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::new(self.vertices)?;
        for edge in self.edges {
            graph.insert_edge(edge.v, edge.w, edge.weight)?;
        }
        Ok(graph)
    }
}

impl WeightedGraph {
    /// Shorthand for building a graph from edge triples in one call.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, u32)>,
    {
        let mut builder = GraphBuilder::new(vertices);
        builder.add_edges(edges);
        builder.build()
    }
}
