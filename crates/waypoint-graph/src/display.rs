//! Human-readable adjacency listing.
//!
//! Vertex names are owned by the caller; the graph only knows indices.

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;
use std::fmt;

/// Adjacency listing of a graph keyed by a caller-supplied name table.
///
/// Prints a header with the vertex and edge counts, then one block per
/// vertex in index order listing each neighbour's name and edge weight.
pub struct Listing<'a, S> {
    graph: &'a WeightedGraph,
    names: &'a [S],
}

impl WeightedGraph {
    /// Returns a displayable listing using `names[v]` as the name of vertex `v`.
    pub fn listing<'a, S: AsRef<str>>(&'a self, names: &'a [S]) -> Result<Listing<'a, S>> {
        if names.len() < self.vertex_count() {
            return Err(GraphError::MissingNames {
                expected: self.vertex_count(),
                found: names.len(),
            });
        }
        Ok(Listing { graph: self, names })
    }
}

impl<S: AsRef<str>> fmt::Display for Listing<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#vertices={}, #edges={}",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        writeln!(f)?;

        for v in 0..self.graph.vertex_count() {
            writeln!(f, "{} {}", v, self.names[v].as_ref())?;
            for (w, weight) in self.graph.neighbors(v) {
                writeln!(f, "\t{} ({})", self.names[w].as_ref(), weight)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
