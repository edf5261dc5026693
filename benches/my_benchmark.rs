use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use parallel_astar::{a_star_search, bfs_search, parallel_search, Graph, SearchConfig};

fn uniform_map(dim: usize) -> Graph {
    Graph::new(dim, vec![1; dim * dim])
}

/// Roughly every tenth cell is a wall. Corners stay open.
fn random_map(dim: usize) -> Graph {
    let mut rng = WyRand::new_seed(4);
    let mut cells: Vec<u32> = (0..dim * dim)
        .map(|_| rng.generate_range(0_u32..10))
        .collect();
    cells[0] = 1;
    cells[dim * dim - 1] = 1;
    Graph::new(dim, cells)
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn") // Change this to info to see the timing of every single search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequential");

    init();

    for (name, graph) in [("Uniform", uniform_map(64)), ("Random", random_map(64))] {
        let goal = graph.len() - 1;

        let id = format!("A*, {} Map, Map Size: {}", name, graph.dim());
        group.bench_function(&id, |b| b.iter(|| a_star_search(&graph, 0, goal)));

        let id = format!("BFS, {} Map, Map Size: {}", name, graph.dim());
        group.bench_function(&id, |b| b.iter(|| bfs_search(&graph, 0, goal)));
    }
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parallel");
    // Every expansion is a handful of channel round trips, so keep the sample size small.
    group.sample_size(10);

    init();

    for (name, graph) in [("Uniform", uniform_map(32)), ("Random", random_map(32))] {
        let goal = graph.len() - 1;
        for workers in [1, 2, 4, 8] {
            let id = format!(
                "Parallel A*, {} Map, Map Size: {}, Workers: {}",
                name,
                graph.dim(),
                workers
            );
            group.bench_function(&id, |b| {
                b.iter(|| parallel_search(&graph, 0, goal, SearchConfig::with_workers(workers)))
            });
        }
    }
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
