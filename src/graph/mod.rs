//! Graph view and shared vertex/edge types used by the elimination
//! algorithms.

/// Vertex identifier: an index into the graph's vertex table.
pub type Vertex = usize;

/// An ordered sequence of all vertices of a graph.  Position `i` is the
/// vertex's *index* in the elimination order; smaller index means earlier
/// eliminated.
pub type VertexOrder = Vec<Vertex>;

/// A set of undirected edges, each stored with its smaller endpoint first.
pub type EdgeSet = indexmap::IndexSet<(Vertex, Vertex)>;

pub(crate) type VertexSet = indexmap::IndexSet<Vertex>;

mod adjacency;

pub use adjacency::*;
