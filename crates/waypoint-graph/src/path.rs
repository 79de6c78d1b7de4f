//! Ceiling-bounded path search.
//!
//! Finds the path with the fewest edges between two vertices, using only
//! edges whose weight is strictly below a caller-supplied ceiling. This is
//! a hop-count search: the total weight of the path plays no part.
//!
//! The search is a BFS over the weight matrix. Neighbours are examined in
//! ascending index order, which decides the winner when several shortest
//! paths exist.

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::iter;
use tracing::{debug, trace};

/// A path query as supplied by an external loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    /// Start vertex.
    pub src: Vertex,
    /// End vertex.
    pub dest: Vertex,
    /// Exclusive upper bound on the weight of usable edges.
    ///
    /// A ceiling of 0 excludes every edge. Loaders reading signed input
    /// should clamp negative ceilings to 0, which keeps the same meaning;
    /// a negative value here fails to deserialize.
    pub max: u32,
}

impl WeightedGraph {
    /// Finds a path from `src` to `dest` over edges lighter than `max`,
    /// writing it into `path`.
    ///
    /// Returns the hop count: the number of vertices written, `src` first
    /// and `dest` last. A return of 0 means no path exists under the
    /// ceiling, and `path` must not be read.
    ///
    /// `path` must hold at least `vertex_count()` entries.
    pub fn find_path_into(
        &self,
        src: Vertex,
        dest: Vertex,
        max: u32,
        path: &mut [Vertex],
    ) -> Result<usize> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        if path.len() < self.vertex_count() {
            return Err(GraphError::BufferTooSmall {
                needed: self.vertex_count(),
                capacity: path.len(),
            });
        }

        if src == dest {
            path[0] = src;
            return Ok(1);
        }

        let Some(parents) = self.search(src, dest, max) else {
            debug!("No path {} -> {} with edges below {}", src, dest, max);
            return Ok(0);
        };

        let hops = write_path(&parents, src, dest, path);
        debug!("Path {} -> {} below {}: {} hops", src, dest, max, hops);
        Ok(hops)
    }

    /// Finds a path from `src` to `dest` over edges lighter than `max`.
    ///
    /// Returns None when the destination cannot be reached under the ceiling.
    pub fn find_path(&self, src: Vertex, dest: Vertex, max: u32) -> Result<Option<Vec<Vertex>>> {
        let mut path = vec![0; self.vertex_count()];
        match self.find_path_into(src, dest, max, &mut path)? {
            0 => Ok(None),
            hops => {
                path.truncate(hops);
                Ok(Some(path))
            }
        }
    }

    /// Runs a [`PathQuery`].
    pub fn query(&self, query: &PathQuery) -> Result<Option<Vec<Vertex>>> {
        self.find_path(query.src, query.dest, query.max)
    }

    /// BFS from `src`, stopping when `dest` leaves the queue.
    ///
    /// Returns the parent of every vertex reached so far, or None if the
    /// queue ran dry first. A vertex is claimed the moment it is queued, so
    /// the parent array is also the visited set. `src` is its own parent.
    fn search(&self, src: Vertex, dest: Vertex, max: u32) -> Option<Vec<Option<Vertex>>> {
        let mut parents: Vec<Option<Vertex>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();

        parents[src] = Some(src);
        queue.push_back(src);

        while let Some(current) = queue.pop_front() {
            if current == dest {
                return Some(parents);
            }
            trace!("Expanding vertex {}", current);

            for (child, &weight) in self.row(current).iter().enumerate() {
                if weight != 0 && weight < max && parents[child].is_none() {
                    parents[child] = Some(current);
                    queue.push_back(child);
                }
            }
        }

        None
    }
}

/// Walks parent links back from `dest` to `src` and stores the path in
/// forward order. Returns the number of vertices stored.
fn write_path(
    parents: &[Option<Vertex>],
    src: Vertex,
    dest: Vertex,
    path: &mut [Vertex],
) -> usize {
    let backwards = iter::successors(Some(dest), |&v| if v == src { None } else { parents[v] });

    let mut hops = 0;
    for (slot, vertex) in path.iter_mut().zip(backwards) {
        *slot = vertex;
        hops += 1;
    }

    path[..hops].reverse();
    hops
}
