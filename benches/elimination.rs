use chordalg::elimination::{fill, fill_in, lex_m, lex_p};
use chordalg::graph::AdjacencyGraph;
use chordalg::random::{random_connected_graph, random_order, ErdosRenyiSettingsBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const DENSITIES: [(u32, f64); 3] = [(10, 0.1), (50, 0.5), (100, 1.0)];
const SIZES: [usize; 3] = [100, 300, 500];

fn graph_for(n_vertices: usize, edge_prob: f64) -> AdjacencyGraph {
    let opts = ErdosRenyiSettingsBuilder::default()
        .edge_prob(edge_prob)
        .seed(0x1976)
        .build()
        .unwrap();
    random_connected_graph(n_vertices, Some(opts))
}

// fill_in instead of fill: the elimination is identical but the graph is
// left untouched, so each iteration does not pay for a graph clone
fn bench_fill_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_in");

    for (pct, edge_prob) in DENSITIES {
        for n in SIZES {
            let g = graph_for(n, edge_prob);
            let order = random_order(&g, Some(0x1976));

            group.bench_with_input(BenchmarkId::new(format!("d{pct}"), n), &g, |b, g| {
                b.iter(|| black_box(fill_in(g, &order)))
            });
        }
    }
    group.finish();
}

fn bench_lex_m(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_m");

    for (pct, edge_prob) in DENSITIES {
        for n in SIZES {
            let g = graph_for(n, edge_prob);

            group.bench_with_input(BenchmarkId::new(format!("d{pct}"), n), &g, |b, g| {
                b.iter(|| black_box(lex_m(g)))
            });
        }
    }
    group.finish();
}

// lex_p expects chordal input, so sparse graphs are completed first; the
// complete graph is already chordal
fn bench_lex_p(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex_p");

    for (pct, edge_prob) in DENSITIES {
        for n in SIZES {
            let mut g = graph_for(n, edge_prob);
            if edge_prob < 1.0 {
                let order = lex_m(&g);
                fill(&mut g, &order);
            }

            group.bench_with_input(BenchmarkId::new(format!("d{pct}"), n), &g, |b, g| {
                b.iter(|| black_box(lex_p(g)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fill_in, bench_lex_m, bench_lex_p);
criterion_main!(benches);
