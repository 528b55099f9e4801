use crate::graph::{AdjacencyGraph, VertexOrder, VertexSet};
use std::collections::HashMap;

// nil link in the block list
const NIL: usize = usize::MAX;

// Doubly linked list of label blocks, arena-backed: blocks are records in
// parallel vectors and the list links are indices, so splicing is O(1) and
// teardown is a single drop.  The head is the highest label; walking
// towards the tail is strictly decreasing label.
struct BlockList {
    members: Vec<VertexSet>,
    prev: Vec<usize>,
    next: Vec<usize>,
    head: usize,
}

impl BlockList {
    // one block holding every vertex, representing the empty label
    fn new(all_vertices: VertexSet) -> Self {
        Self {
            members: vec![all_vertices],
            prev: vec![NIL],
            next: vec![NIL],
            head: 0,
        }
    }

    // a fresh unlinked empty block
    fn push_block(&mut self) -> usize {
        self.members.push(VertexSet::new());
        self.prev.push(NIL);
        self.next.push(NIL);
        self.members.len() - 1
    }

    // splice `block` into the list immediately before `at`
    fn link_before(&mut self, block: usize, at: usize) {
        let before = self.prev[at];

        self.prev[block] = before;
        self.next[block] = at;
        self.prev[at] = block;

        if before == NIL {
            self.head = block;
        } else {
            self.next[before] = block;
        }
    }

    // drop the head block from the list
    fn unlink_head(&mut self) {
        let old_head = self.head;
        self.head = self.next[old_head];

        self.next[old_head] = NIL;
        if self.head != NIL {
            self.prev[self.head] = NIL;
        }
    }
}

/// Compute a perfect elimination order for the chordal graph `g` by
/// lexicographic partition refinement.
///
/// `g` must be simple, connected and undirected.  If `g` is not chordal
/// the result is still a permutation of its vertices, but carries no
/// further guarantee.

pub fn lex_p(g: &AdjacencyGraph) -> VertexOrder {
    let n = g.num_vertices();
    let mut order = vec![0; n];
    if n == 0 {
        return order;
    }

    let mut blocks = BlockList::new(g.vertices().collect());
    let mut block_of = vec![0_usize; n];
    let mut numbered = vec![false; n];

    // blocks created this iteration: old block -> the new block that will
    // be spliced in just before it
    let mut fix: HashMap<usize, usize> = HashMap::new();

    // number vertices from n-1 down to 0
    for index in (0..n).rev() {
        // the highest-labeled unnumbered vertex is any member of the first
        // nonempty block; blocks drained by earlier refinements are
        // unlinked as the scan passes them
        let cur_vertex = loop {
            debug_assert!(blocks.head != NIL, "ran out of blocks before vertices");

            match blocks.members[blocks.head].first() {
                Some(&v) => break v,
                None => blocks.unlink_head(),
            }
        };

        blocks.members[block_of[cur_vertex]].swap_remove(&cur_vertex);
        numbered[cur_vertex] = true;
        order[index] = cur_vertex;

        // promote every unnumbered neighbor into the block just ahead of
        // its current one, creating that block if this iteration has not
        // done so already
        for w in g.neighbors(cur_vertex) {
            if numbered[w] {
                continue;
            }

            let old = block_of[w];
            let new = *fix.entry(old).or_insert_with(|| blocks.push_block());

            blocks.members[old].swap_remove(&w);
            blocks.members[new].insert(w);
            block_of[w] = new;
        }

        // splice the new blocks into the list, each immediately before the
        // block it refined
        for (old, new) in fix.drain() {
            blocks.link_before(new, old);
        }
    }

    order
}
