//! Random graph and vertex order generation, used by the test and
//! benchmark harnesses and available to callers for the same purpose.

use crate::graph::{AdjacencyGraph, VertexOrder};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod chordal;
mod erdos_renyi;

pub use chordal::*;
pub use erdos_renyi::*;

// seeded stream when reproducibility is requested, entropy otherwise
pub(crate) fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generate a uniformly random elimination order for the vertices of `g`.

pub fn random_order(g: &AdjacencyGraph, seed: Option<u64>) -> VertexOrder {
    let mut rng = rng_for(seed);
    let mut order: VertexOrder = g.vertices().collect();
    order.shuffle(&mut rng);
    order
}
