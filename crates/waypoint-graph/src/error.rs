//! Error types for graph operations.

use crate::graph::Vertex;
use thiserror::Error;

/// Contract violations reported by the graph and the path finder.
///
/// These are caller mistakes, not runtime conditions. Inserting a duplicate
/// edge, removing a missing one, or finding no path are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex count {0}")]
    InvalidVertexCount(usize),

    #[error("vertex {vertex} out of range for graph with {count} vertices")]
    InvalidVertex { vertex: Vertex, count: usize },

    #[error("edge {v}-{w} has weight 0, which means no edge")]
    ZeroWeight { v: Vertex, w: Vertex },

    #[error("path buffer holds {capacity} vertices, need {needed}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("name table has {found} entries, need {expected}")]
    MissingNames { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
