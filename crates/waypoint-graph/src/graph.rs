//! Core graph data structure.
//!
//! WeightedGraph stores an undirected graph as a dense adjacency matrix
//! of edge weights. The vertex count is fixed when the graph is created;
//! only edges change afterwards.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertex identifier, an index in `0..vertex_count()`.
pub type Vertex = usize;

/// An undirected graph with positive integer edge weights.
///
/// The matrix is kept symmetric: `weight(v, w) == weight(w, v)` at all
/// times. A cell value of 0 means the vertices are not adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    /// Number of vertices.
    vertices: usize,

    /// Number of unordered vertex pairs with a nonzero weight.
    edges: usize,

    /// Row-major `vertices * vertices` weight matrix.
    weights: Vec<u32>,
}

impl WeightedGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Result<Self> {
        if vertices == 0 {
            return Err(GraphError::InvalidVertexCount(vertices));
        }
        let cells = vertices
            .checked_mul(vertices)
            .ok_or(GraphError::InvalidVertexCount(vertices))?;

        let mut weights = Vec::new();
        weights
            .try_reserve_exact(cells)
            .map_err(|_| GraphError::InvalidVertexCount(vertices))?;
        weights.resize(cells, 0);

        Ok(Self {
            vertices,
            edges: 0,
            weights,
        })
    }

    /// Returns true if `v` names a vertex of this graph.
    pub fn is_valid_vertex(&self, v: Vertex) -> bool {
        v < self.vertices
    }

    pub(crate) fn check_vertex(&self, v: Vertex) -> Result<()> {
        if self.is_valid_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                count: self.vertices,
            })
        }
    }

    fn cell(&self, v: Vertex, w: Vertex) -> usize {
        v * self.vertices + w
    }

    /// Inserts an edge between `v` and `w`.
    ///
    /// If the two vertices are already adjacent nothing changes, not even
    /// the weight: the first insert wins. Returns whether an edge was added.
    pub fn insert_edge(&mut self, v: Vertex, w: Vertex, weight: u32) -> Result<bool> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        if weight == 0 {
            return Err(GraphError::ZeroWeight { v, w });
        }

        let (vw, wv) = (self.cell(v, w), self.cell(w, v));
        if self.weights[vw] != 0 && self.weights[wv] != 0 {
            debug!(
                "Edge {}-{} already present with weight {}, ignoring weight {}",
                v, w, self.weights[vw], weight
            );
            return Ok(false);
        }

        self.weights[vw] = weight;
        self.weights[wv] = weight;
        self.edges += 1;
        Ok(true)
    }

    /// Removes the edge between `v` and `w`, if any.
    ///
    /// Returns whether an edge was removed.
    pub fn remove_edge(&mut self, v: Vertex, w: Vertex) -> Result<bool> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        let (vw, wv) = (self.cell(v, w), self.cell(w, v));
        if self.weights[vw] == 0 && self.weights[wv] == 0 {
            debug!("No edge {}-{} to remove", v, w);
            return Ok(false);
        }

        self.weights[vw] = 0;
        self.weights[wv] = 0;
        self.edges -= 1;
        Ok(true)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Gets the weight of the edge between `v` and `w`.
    ///
    /// Returns None when there is no such edge or either vertex is out of range.
    pub fn weight(&self, v: Vertex, w: Vertex) -> Option<u32> {
        if !self.is_valid_vertex(v) || !self.is_valid_vertex(w) {
            return None;
        }
        match self.weights[self.cell(v, w)] {
            0 => None,
            weight => Some(weight),
        }
    }

    /// Returns true if `v` and `w` are adjacent.
    pub fn has_edge(&self, v: Vertex, w: Vertex) -> bool {
        self.weight(v, w).is_some()
    }

    /// The matrix row of `v`. Empty for an out-of-range vertex.
    pub(crate) fn row(&self, v: Vertex) -> &[u32] {
        if !self.is_valid_vertex(v) {
            return &[];
        }
        let start = self.cell(v, 0);
        &self.weights[start..start + self.vertices]
    }

    /// Iterates over the neighbours of `v` as `(vertex, weight)` pairs in
    /// ascending vertex order.
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = (Vertex, u32)> + '_ {
        self.row(v)
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != 0)
            .map(|(w, &weight)| (w, weight))
    }

    /// Iterates over every edge once, with `v <= w`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertices).flat_map(move |v| {
            self.neighbors(v)
                .filter(move |&(w, _)| w >= v)
                .map(move |(w, weight)| Edge::new(v, w, weight))
        })
    }

    /// Copies the graph into a petgraph `UnGraph`.
    ///
    /// Node `i` of the result carries vertex `i` as its weight and sits at
    /// `NodeIndex::new(i)`.
    pub fn to_ungraph(&self) -> UnGraph<Vertex, u32> {
        let mut graph = UnGraph::with_capacity(self.vertices, self.edges);
        let nodes: Vec<NodeIndex> = (0..self.vertices).map(|v| graph.add_node(v)).collect();

        for edge in self.edges() {
            graph.add_edge(nodes[edge.v], nodes[edge.w], edge.weight);
        }

        graph
    }
}

/// Graph statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
}

impl WeightedGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(graph: &WeightedGraph) {
        for v in 0..graph.vertex_count() {
            for w in 0..graph.vertex_count() {
                assert_eq!(graph.weight(v, w), graph.weight(w, v), "{}-{}", v, w);
            }
        }
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = WeightedGraph::new(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert_eq!(
            WeightedGraph::new(0),
            Err(GraphError::InvalidVertexCount(0))
        );
    }

    #[test]
    fn test_oversized_graph_rejected() {
        assert_eq!(
            WeightedGraph::new(usize::MAX),
            Err(GraphError::InvalidVertexCount(usize::MAX))
        );

        // The cell count fits in usize but the matrix is too large to allocate.
        assert_eq!(
            WeightedGraph::new(1 << 31),
            Err(GraphError::InvalidVertexCount(1 << 31))
        );
    }

    #[test]
    fn test_valid_vertex() {
        let graph = WeightedGraph::new(3).unwrap();
        assert!(graph.is_valid_vertex(0));
        assert!(graph.is_valid_vertex(2));
        assert!(!graph.is_valid_vertex(3));
    }

    #[test]
    fn test_insert_sets_both_directions() {
        let mut graph = WeightedGraph::new(3).unwrap();
        assert!(graph.insert_edge(0, 2, 7).unwrap());

        assert_eq!(graph.weight(0, 2), Some(7));
        assert_eq!(graph.weight(2, 0), Some(7));
        assert_eq!(graph.edge_count(), 1);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_duplicate_insert_keeps_first_weight() {
        let mut graph = WeightedGraph::new(3).unwrap();
        assert!(graph.insert_edge(0, 1, 5).unwrap());
        assert!(!graph.insert_edge(0, 1, 9).unwrap());
        assert!(!graph.insert_edge(1, 0, 9).unwrap());

        assert_eq!(graph.weight(0, 1), Some(5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_insert_invalid_vertex() {
        let mut graph = WeightedGraph::new(2).unwrap();
        let err = graph.insert_edge(0, 2, 1).unwrap_err();
        assert_eq!(err, GraphError::InvalidVertex { vertex: 2, count: 2 });
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_insert_zero_weight_rejected() {
        let mut graph = WeightedGraph::new(2).unwrap();
        assert_eq!(
            graph.insert_edge(0, 1, 0),
            Err(GraphError::ZeroWeight { v: 0, w: 1 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = WeightedGraph::new(3).unwrap();
        graph.insert_edge(1, 2, 4).unwrap();

        assert!(graph.remove_edge(2, 1).unwrap());
        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_missing_edge_is_noop() {
        let mut graph = WeightedGraph::new(3).unwrap();
        graph.insert_edge(0, 1, 4).unwrap();

        assert!(!graph.remove_edge(0, 2).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(0, 1), Some(4));
    }

    #[test]
    fn test_remove_invalid_vertex() {
        let mut graph = WeightedGraph::new(2).unwrap();
        assert!(graph.remove_edge(5, 0).is_err());
    }

    #[test]
    fn test_reinsert_after_remove_takes_new_weight() {
        let mut graph = WeightedGraph::new(2).unwrap();
        graph.insert_edge(0, 1, 3).unwrap();
        graph.remove_edge(0, 1).unwrap();
        graph.insert_edge(0, 1, 8).unwrap();

        assert_eq!(graph.weight(0, 1), Some(8));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut graph = WeightedGraph::new(2).unwrap();
        assert!(graph.insert_edge(1, 1, 2).unwrap());
        assert!(!graph.insert_edge(1, 1, 6).unwrap());

        assert_eq!(graph.weight(1, 1), Some(2));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new(1, 1, 2)]);

        assert!(graph.remove_edge(1, 1).unwrap());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut graph = WeightedGraph::new(5).unwrap();
        graph.insert_edge(2, 4, 1).unwrap();
        graph.insert_edge(2, 0, 3).unwrap();
        graph.insert_edge(2, 3, 2).unwrap();

        let neighbors: Vec<_> = graph.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 3), (3, 2), (4, 1)]);
        assert_eq!(graph.neighbors(9).count(), 0);
    }

    #[test]
    fn test_edges_match_edge_count() {
        let mut graph = WeightedGraph::new(4).unwrap();
        graph.insert_edge(0, 1, 5).unwrap();
        graph.insert_edge(3, 2, 5).unwrap();
        graph.insert_edge(2, 0, 20).unwrap();
        graph.remove_edge(1, 0).unwrap();

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(0, 2, 20), Edge::new(2, 3, 5)]);
        assert_eq!(edges.len(), graph.edge_count());
        assert_symmetric(&graph);
    }

    #[test]
    fn test_weight_out_of_range() {
        let graph = WeightedGraph::new(2).unwrap();
        assert_eq!(graph.weight(0, 7), None);
    }

    #[test]
    fn test_to_ungraph() {
        let mut graph = WeightedGraph::new(3).unwrap();
        graph.insert_edge(0, 1, 5).unwrap();
        graph.insert_edge(1, 2, 6).unwrap();

        let exported = graph.to_ungraph();
        assert_eq!(exported.node_count(), 3);
        assert_eq!(exported.edge_count(), 2);

        let edge = exported
            .find_edge(NodeIndex::new(2), NodeIndex::new(1))
            .unwrap();
        assert_eq!(exported[edge], 6);
        assert_eq!(exported[NodeIndex::new(2)], 2);
    }

    #[test]
    fn test_stats() {
        let mut graph = WeightedGraph::new(4).unwrap();
        graph.insert_edge(0, 3, 1).unwrap();

        let stats = graph.stats();
        assert_eq!(
            stats,
            GraphStats {
                vertex_count: 4,
                edge_count: 1
            }
        );

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"vertex_count":4,"edge_count":1}"#);
    }
}
