use super::invperm;
use crate::graph::{AdjacencyGraph, EdgeSet, Vertex, VertexSet};

// ---------------------------
// The FILL family: fill, fill_in and is_perfect_elimination_order are one
// elimination loop with three different edge sinks.
// ---------------------------

// Successor sets of an ordered graph: succ[v] holds the neighbors of v
// that come later in the elimination order.
fn init_successors(g: &AdjacencyGraph, index_of: &[usize]) -> Vec<VertexSet> {
    let mut succ = vec![VertexSet::new(); g.num_vertices()];

    for v in g.vertices() {
        for w in g.neighbors(v) {
            if index_of[v] < index_of[w] {
                succ[v].insert(w);
            }
        }
    }
    succ
}

// View succ[v] and succ[m] at once for distinct v != m.  Splitting the
// slice is required to hold a shared and a mutable reference into the same
// array simultaneously.
fn split_two(succ: &mut [VertexSet], v: Vertex, m: Vertex) -> (&VertexSet, &mut VertexSet) {
    debug_assert!(v != m);

    if v < m {
        let (head, tail) = succ.split_at_mut(m);
        (&head[v], &mut tail[0])
    } else {
        let (head, tail) = succ.split_at_mut(v);
        (&tail[0], &mut head[m])
    }
}

// Eliminate vertices in order.  For each vertex v with a nonempty successor
// set, every successor other than the closest one must be adjacent to the
// closest one in the completed graph; `emit` is called once per missing
// edge, after the successor sets have been updated to include it.  A false
// return from `emit` stops the elimination immediately.
//
// Returns false iff the elimination was stopped.
fn eliminate<F>(order: &[Vertex], index_of: &[usize], succ: &mut [VertexSet], mut emit: F) -> bool
where
    F: FnMut(Vertex, Vertex) -> bool,
{
    for &v in &order[..order.len().saturating_sub(1)] {
        // the closest successor; index_of is a bijection so the minimum
        // is unique
        let Some(&m) = succ[v].iter().min_by_key(|&&w| index_of[w]) else {
            continue;
        };

        let (set_v, set_m) = split_two(succ, v, m);

        for &w in set_v {
            if w != m && set_m.insert(w) && !emit(m, w) {
                return false;
            }
        }
    }
    true
}

/// Compute the chordal completion of the ordered graph, directly adding the
/// fill-in edges to `g`.  Afterwards `order` is a perfect elimination order
/// for `g`.
///
/// `g` must be simple, connected and undirected, and `order` must be a
/// permutation of its vertices.

pub fn fill(g: &mut AdjacencyGraph, order: &[Vertex]) {
    debug_assert_eq!(order.len(), g.num_vertices());

    let index_of = invperm(order);
    let mut succ = init_successors(g, &index_of);

    eliminate(order, &index_of, &mut succ, |m, w| {
        g.add_edge(m, w);
        true
    });
}

/// Compute the fill-in of the ordered graph: the edges the chordal
/// completion adds.  Same elimination as [`fill`](fill), but `g` is left
/// untouched and the edges are returned as canonicalized pairs.

pub fn fill_in(g: &AdjacencyGraph, order: &[Vertex]) -> EdgeSet {
    debug_assert_eq!(order.len(), g.num_vertices());

    let index_of = invperm(order);
    let mut succ = init_successors(g, &index_of);
    let mut fill_in_edges = EdgeSet::new();

    eliminate(order, &index_of, &mut succ, |m, w| {
        let (a, b) = if m < w { (m, w) } else { (w, m) };
        fill_in_edges.insert((a, b));
        true
    });

    fill_in_edges
}

/// Determine whether `order` is a perfect elimination order for `g`, i.e.
/// whether its fill-in is empty.  Stops at the first fill-in edge found.

pub fn is_perfect_elimination_order(g: &AdjacencyGraph, order: &[Vertex]) -> bool {
    debug_assert_eq!(order.len(), g.num_vertices());

    let index_of = invperm(order);
    let mut succ = init_successors(g, &index_of);

    eliminate(order, &index_of, &mut succ, |_, _| false)
}
