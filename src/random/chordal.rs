use super::rng_for;
use crate::graph::{AdjacencyGraph, VertexSet};
use derive_builder::Builder;
use itertools::Itertools;
use rand::Rng;

/// Settings for [`random_chordal_graph`](random_chordal_graph)

#[derive(Builder, Debug, Clone)]
pub struct ChordalGenSettings {
    /// upper bound for the number of edges of the generated graph
    #[builder(default = "usize::MAX")]
    pub max_edges: usize,
    /// seed for the random stream; entropy-seeded when `None`
    #[builder(default = "None", setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for ChordalGenSettings {
    fn default() -> Self {
        ChordalGenSettingsBuilder::default().build().unwrap()
    }
}

// union-find over clique indices for the merge phase; union returns the
// surviving root so the caller knows which vertex list absorbs the other
struct DisjointSetUnion {
    parents: Vec<usize>,
    ranks: Vec<usize>,
}

impl DisjointSetUnion {
    fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while root != self.parents[root] {
            self.parents[root] = self.parents[self.parents[root]]; //path halving
            root = self.parents[root];
        }
        root
    }

    // both arguments must already be distinct roots
    fn union(&mut self, r: usize, s: usize) -> usize {
        debug_assert!(r != s && self.parents[r] == r && self.parents[s] == s);

        match self.ranks[r].cmp(&self.ranks[s]) {
            std::cmp::Ordering::Greater => {
                self.parents[s] = r;
                r
            }
            std::cmp::Ordering::Less => {
                self.parents[r] = s;
                s
            }
            std::cmp::Ordering::Equal => {
                self.parents[r] = s;
                self.ranks[s] += 1;
                s
            }
        }
    }
}

/// Generate a random undirected chordal graph as a tree of cliques, using
/// the maximal clique expansion and merge method of Markenzon, Vernet &
/// Araújo, "Two methods for the generation of chordal graphs".
///
/// The result is chordal, connected and simple; clique merging stops once
/// the `max_edges` budget is spent, which bounds the density of the
/// generated graph.

pub fn random_chordal_graph(n_vertices: usize, opts: Option<ChordalGenSettings>) -> AdjacencyGraph {
    let opts = opts.unwrap_or_default();
    let mut rng = rng_for(opts.seed);
    let mut g = AdjacencyGraph::new(n_vertices);
    if n_vertices == 0 {
        return g;
    }

    // expansion: each new vertex either joins an existing clique or
    // branches a new clique off a random separator of one
    let mut cliques: Vec<VertexSet> = vec![[0].into_iter().collect()];
    let mut merge_candidates: Vec<(usize, usize, usize)> = Vec::new();
    let mut n_edges = 0;

    for v in 1..n_vertices {
        let i = rng.gen_range(0..cliques.len());
        let size = cliques[i].len();
        let separator = rng.gen_range(1..=size);

        if separator == size {
            cliques[i].insert(v);
        } else {
            let mut branched: VertexSet = [v].into_iter().collect();
            branched.extend(cliques[i].iter().copied());
            cliques.push(branched);
            merge_candidates.push((i, cliques.len() - 1, separator));
        }
        n_edges += separator;
    }

    // merge: join clique pairs along their separator while the edge
    // budget allows
    let mut dsu = DisjointSetUnion::new(cliques.len());

    while n_edges < opts.max_edges {
        let Some((a, b, separator)) = merge_candidates.pop() else {
            break;
        };

        let ra = dsu.find(a);
        let rb = dsu.find(b);
        if ra == rb {
            continue;
        }

        let gained = (cliques[ra].len() - separator) * (cliques[rb].len() - separator);

        if n_edges + gained <= opts.max_edges {
            let winner = dsu.union(ra, rb);
            let loser = if winner == ra { rb } else { ra };

            let absorbed = std::mem::take(&mut cliques[loser]);
            cliques[winner].extend(absorbed);
            n_edges += gained;
        }
    }

    // realization: each clique contributes a complete subgraph on its
    // first-seen vertices plus one attachment edge into the already
    // realized part
    let mut seen = vec![false; n_vertices];

    for clique in &cliques {
        let (new_vertices, old_vertices): (Vec<_>, Vec<_>) =
            clique.iter().copied().partition(|&v| !seen[v]);

        for &v in &new_vertices {
            seen[v] = true;
        }
        for (&a, &b) in new_vertices.iter().tuple_combinations() {
            g.add_edge(a, b);
        }
        if let (Some(&old), Some(&new)) = (old_vertices.first(), new_vertices.first()) {
            g.add_edge(old, new);
        }
    }

    g
}
