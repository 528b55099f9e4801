use super::rng_for;
use crate::graph::AdjacencyGraph;
use derive_builder::Builder;
use itertools::Itertools;
use rand::Rng;

/// Settings for [`random_connected_graph`](random_connected_graph)

#[derive(Builder, Debug, Clone)]
pub struct ErdosRenyiSettings {
    /// probability of an edge between any distinct pair of vertices
    #[builder(default = "0.5")]
    pub edge_prob: f64,
    /// seed for the random stream; entropy-seeded when `None`
    #[builder(default = "None", setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for ErdosRenyiSettings {
    fn default() -> Self {
        ErdosRenyiSettingsBuilder::default().build().unwrap()
    }
}

/// Generate a random undirected connected graph with an Erdős–Rényi-like
/// model: each unordered pair of distinct vertices becomes an edge with
/// probability `edge_prob`, then components beyond the first are chained
/// together so the result is always connected.  No self loops or parallel
/// edges are produced; `edge_prob = 1` yields the complete graph.

pub fn random_connected_graph(
    n_vertices: usize,
    opts: Option<ErdosRenyiSettings>,
) -> AdjacencyGraph {
    let opts = opts.unwrap_or_default();
    let mut rng = rng_for(opts.seed);
    let mut g = AdjacencyGraph::new(n_vertices);

    for (a, b) in (0..n_vertices).tuple_combinations() {
        if rng.gen_bool(opts.edge_prob) {
            g.add_edge(a, b);
        }
    }

    // chain one representative of every further component onto the
    // previous one so the whole graph becomes connected
    let (component, n_components) = g.connected_components();

    if n_components > 1 {
        let mut seen = vec![false; n_components];
        let mut prev_vertex = 0;
        seen[component[0]] = true;

        for v in 1..n_vertices {
            if !seen[component[v]] {
                seen[component[v]] = true;
                g.add_edge(v, prev_vertex);
                prev_vertex = v;
            }
        }
    }

    g
}
