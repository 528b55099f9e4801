use super::radix_sort;
use crate::graph::{AdjacencyGraph, Vertex, VertexOrder};
use std::collections::VecDeque;

/// Compute a minimal elimination order of `g`: an order whose fill-in is
/// not a strict superset of the fill-in of any other order.
///
/// `g` must be simple, connected and undirected.  Runs in O(n·e) time for
/// n vertices and e edges.

pub fn lex_m(g: &AdjacencyGraph) -> VertexOrder {
    let n = g.num_vertices();
    let mut order = vec![0; n];
    if n == 0 {
        return order;
    }

    let mut unnumbered = vec![true; n];
    let mut label = vec![0_usize; n];
    let mut n_unique_labels = 1;
    let mut cur_vertex = 0;

    // workspace reused across iterations: one FIFO bucket per label class
    // (labels stay even and dense, so bucket l lives at slot l/2) and the
    // vertices already reached this iteration
    let mut reach: Vec<VecDeque<Vertex>> = vec![VecDeque::new(); n];
    let mut reached = vec![false; n];

    // number vertices from n-1 down to 0
    for index in (0..n).rev() {
        let max_label = 2 * (n_unique_labels - 1);

        unnumbered[cur_vertex] = false;
        order[index] = cur_vertex;

        for bucket in reach.iter_mut() {
            bucket.clear();
        }
        reached.fill(false);

        // reach phase: unnumbered neighbors of cur_vertex are reached
        // outright and their labels incremented
        for v in g.neighbors(cur_vertex) {
            if unnumbered[v] {
                reached[v] = true;
                reach[label[v] / 2].push_back(v);
                label[v] += 1;
            }
        }

        // search chains by ascending label ceiling: a vertex w reachable
        // from cur_vertex through unnumbered vertices labeled below
        // label[w] gets one increment, and exactly one
        for l in (0..=max_label).step_by(2) {
            while let Some(v) = reach[l / 2].pop_front() {
                for w in g.neighbors(v) {
                    if !unnumbered[w] || reached[w] {
                        continue;
                    }
                    reached[w] = true;

                    if label[w] > l {
                        reach[label[w] / 2].push_back(w);
                        label[w] += 1;
                    } else {
                        // same chain class; keep exploring through it
                        reach[l / 2].push_back(w);
                    }
                }
            }
        }

        // relabel phase: compact the labels of the remaining vertices to
        // the dense even sequence 0, 2, .., 2(k-1), preserving their
        // relative label order
        let mut to_relabel: Vec<Vertex> = (0..n).filter(|&v| unnumbered[v]).collect();
        if to_relabel.is_empty() {
            break;
        }
        radix_sort(&mut to_relabel, |&v| label[v]);

        let mut prev_label = label[to_relabel[0]];
        n_unique_labels = 1;

        for &v in &to_relabel {
            if label[v] != prev_label {
                n_unique_labels += 1;
                prev_label = label[v];
            }
            label[v] = 2 * (n_unique_labels - 1);
        }

        // the next vertex to number is the highest-labeled one
        cur_vertex = *to_relabel.last().unwrap();
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::fill_in;

    #[test]
    fn orders_every_vertex_once() {
        let g = AdjacencyGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        let order = lex_m(&g);

        let mut seen = vec![false; 5];
        for &v in &order {
            assert!(!seen[v]);
            seen[v] = true;
        }
    }

    // C4 needs exactly one chord no matter how it is eliminated; a minimal
    // order must produce exactly that one fill edge
    #[test]
    fn four_cycle_fills_one_chord() {
        let g = AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        let order = lex_m(&g);
        assert_eq!(fill_in(&g, &order).len(), 1);
    }

    // a tree is chordal, so the minimal order is perfect
    #[test]
    fn tree_has_empty_fill_in() {
        let g =
            AdjacencyGraph::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]).unwrap();

        let order = lex_m(&g);
        assert!(fill_in(&g, &order).is_empty());
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(lex_m(&AdjacencyGraph::new(0)), Vec::<Vertex>::new());
        assert_eq!(lex_m(&AdjacencyGraph::new(1)), vec![0]);
    }
}
