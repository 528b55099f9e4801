use super::{Vertex, VertexSet};
use std::collections::VecDeque;
use thiserror::Error;

/// Error codes returnable from [`AdjacencyGraph`](AdjacencyGraph) construction

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Edge endpoint is not a vertex of the graph")]
    EndpointOutOfBounds,
    #[error("Graph cannot represent a self loop")]
    SelfLoop,
}

/// A simple undirected graph stored as one neighbor set per vertex.
///
/// Every edge appears in the neighbor set of both endpoints; the edge count
/// is maintained separately so it is O(1) to report.

#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    adj: Vec<VertexSet>,
    n_edges: usize,
}

impl AdjacencyGraph {
    /// An edgeless graph on `n_vertices` vertices, numbered `0..n_vertices`.
    pub fn new(n_vertices: usize) -> Self {
        Self {
            adj: vec![VertexSet::new(); n_vertices],
            n_edges: 0,
        }
    }

    /// Build a graph from an edge list, checking that the edges describe a
    /// simple graph on `0..n_vertices`.  Repeated edges are collapsed.
    pub fn from_edges(
        n_vertices: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex)>,
    ) -> Result<Self, GraphError> {
        let mut g = Self::new(n_vertices);

        for (a, b) in edges {
            if a >= n_vertices || b >= n_vertices {
                return Err(GraphError::EndpointOutOfBounds);
            }
            if a == b {
                return Err(GraphError::SelfLoop);
            }
            g.add_edge(a, b);
        }

        Ok(g)
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.n_edges
    }

    pub fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.adj.len()
    }

    /// Iterate the neighbors of `v`.
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adj[v].iter().copied()
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adj[v].len()
    }

    pub fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.adj[a].contains(&b)
    }

    /// Add the undirected edge `a--b`, returning whether it was new.
    /// Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        debug_assert!(a != b, "self loops are not representable");
        debug_assert!(a < self.adj.len() && b < self.adj.len());

        let is_new = self.adj[a].insert(b);
        self.adj[b].insert(a);

        if is_new {
            self.n_edges += 1;
        }
        is_new
    }

    /// Label the connected components by breadth-first search.  Returns one
    /// label per vertex together with the component count; labels are dense
    /// in `0..count`.
    pub fn connected_components(&self) -> (Vec<usize>, usize) {
        const UNSEEN: usize = usize::MAX;

        let mut component = vec![UNSEEN; self.adj.len()];
        let mut queue = VecDeque::new();
        let mut count = 0;

        for start in self.vertices() {
            if component[start] != UNSEEN {
                continue;
            }

            component[start] = count;
            queue.push_back(start);

            while let Some(v) = queue.pop_front() {
                for w in self.neighbors(v) {
                    if component[w] == UNSEEN {
                        component[w] = count;
                        queue.push_back(w);
                    }
                }
            }
            count += 1;
        }

        (component, count)
    }
}

#[test]
fn test_add_edge() {
    let mut g = AdjacencyGraph::new(4);
    assert!(g.add_edge(0, 1));
    assert!(g.add_edge(1, 2));

    // repeated insertion is idempotent in both directions
    assert!(!g.add_edge(2, 1));
    assert_eq!(g.num_edges(), 2);

    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 0));
    assert!(!g.has_edge(0, 2));
    assert_eq!(g.degree(1), 2);
}

#[test]
fn test_from_edges() {
    let g = AdjacencyGraph::from_edges(3, [(0, 1), (1, 2), (1, 0)]).unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_edges(), 2);

    assert!(matches!(
        AdjacencyGraph::from_edges(3, [(0, 3)]),
        Err(GraphError::EndpointOutOfBounds)
    ));
    assert!(matches!(
        AdjacencyGraph::from_edges(3, [(1, 1)]),
        Err(GraphError::SelfLoop)
    ));
}

#[test]
fn test_connected_components() {
    // two triangles and an isolated vertex
    let g = AdjacencyGraph::from_edges(7, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
    let (component, count) = g.connected_components();

    assert_eq!(count, 3);
    assert_eq!(component[0], component[1]);
    assert_eq!(component[0], component[2]);
    assert_eq!(component[3], component[5]);
    assert_ne!(component[0], component[3]);
    assert_ne!(component[6], component[0]);
    assert_ne!(component[6], component[3]);
}
