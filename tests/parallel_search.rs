use nanorand::{Rng, WyRand};
use parallel_astar::{bfs_search, io, parallel_search, Graph, NodeId, SearchConfig};

const POOL_SIZES: [usize; 4] = [1, 2, 4, 8];

/// A Grid where roughly every fourth cell is a wall.
fn random_graph(dim: usize, seed: u64) -> Graph {
    let mut rng = WyRand::new_seed(seed);
    let cells = (0..dim * dim)
        .map(|_| if rng.generate_range(0_u32..4) == 0 { 0 } else { rng.generate_range(1_u32..10) })
        .collect();
    Graph::new(dim, cells)
}

/// Checks that `path` walks from `target` to `source` in single steps over passable cells.
fn assert_valid(graph: &Graph, path: &[NodeId], source: NodeId, target: NodeId) {
    assert_eq!(path.first(), Some(&target));
    assert_eq!(path.last(), Some(&source));
    for pair in path.windows(2) {
        assert!(
            graph.are_adjacent(pair[0], pair[1]),
            "{:?} and {:?} are not adjacent",
            graph.position(pair[0]),
            graph.position(pair[1])
        );
    }
    // the source cell itself is never checked
    for &node in &path[..path.len() - 1] {
        assert!(graph.is_passable(node), "{:?} is a wall", graph.position(node));
    }
}

#[test]
fn open_3x3() {
    let graph = Graph::new(3, vec![1; 9]);
    for workers in POOL_SIZES {
        let report = parallel_search(&graph, 0, 8, SearchConfig::with_workers(workers));
        let path = report.nodes();

        assert_eq!(report.cost(), Some(4));
        assert_eq!(path.len(), 5);
        assert_valid(&graph, &path, 0, 8);
    }
}

#[test]
fn wall_between_source_and_target() {
    let graph = Graph::from_rows(&[
        [1, 1, 1], //
        [0, 0, 0],
        [1, 1, 1],
    ]);
    for workers in POOL_SIZES {
        let report = parallel_search(&graph, 0, 8, SearchConfig::with_workers(workers));

        assert_eq!(report.path, None);
        assert!(report.nodes().is_empty());
        assert!(report.gate_history.is_empty());
        assert_eq!(report.workers.len(), workers);
    }
}

#[test]
fn source_is_target() {
    let graph = random_graph(8, 3);
    for workers in POOL_SIZES {
        let report = parallel_search(&graph, 27, 27, SearchConfig::with_workers(workers));

        assert_eq!(report.nodes(), vec![27]);
        assert_eq!(report.cost(), Some(0));
    }
}

#[test]
fn walled_in_source_still_expands() {
    // the source cell is a wall, but its neighbors are not
    let graph = Graph::from_rows(&[
        [0, 1], //
        [1, 1],
    ]);
    let report = parallel_search(&graph, 0, 3, SearchConfig::with_workers(2));

    assert_eq!(report.cost(), Some(2));
    assert_valid(&graph, &report.nodes(), 0, 3);
}

#[test]
fn large_open_grid() {
    let dim = 24;
    let graph = Graph::new(dim, vec![1; dim * dim]);
    let source = graph.node_at((2, 21));
    let target = graph.node_at((19, 3));

    let report = parallel_search(&graph, source, target, SearchConfig::with_workers(8));

    assert_eq!(report.cost(), Some(17 + 18));
    assert_valid(&graph, &report.nodes(), source, target);
}

#[test]
fn agrees_with_bfs() {
    let dim = 14;
    for seed in 0..12 {
        let graph = random_graph(dim, seed);
        let mut rng = WyRand::new_seed(seed + 1000);
        let source = rng.generate_range(0..graph.len());
        let target = rng.generate_range(0..graph.len());
        let expected = bfs_search(&graph, source, target).map(|path| path.cost());

        for workers in POOL_SIZES {
            let report = parallel_search(&graph, source, target, SearchConfig::with_workers(workers));

            assert_eq!(
                report.cost(),
                expected,
                "seed {}, {} workers, {:?} -> {:?}",
                seed,
                workers,
                graph.position(source),
                graph.position(target)
            );
            if let Some(path) = &report.path {
                assert_eq!(path.len(), path.cost() + 1);
                assert_valid(&graph, &path.to_vec(), source, target);
            }
        }
    }
}

#[test]
fn gate_only_decreases() {
    for seed in 0..6 {
        let graph = random_graph(16, seed);
        let report = parallel_search(&graph, 0, graph.len() - 1, SearchConfig::with_workers(8));

        for pair in report.gate_history.windows(2) {
            assert!(pair[0] > pair[1], "gate went from {} to {}", pair[0], pair[1]);
        }
        assert_eq!(report.gate_history.last().copied(), report.cost());
    }
}

#[test]
fn repeated_runs_agree() {
    let graph = random_graph(20, 42);
    let (source, target) = (graph.node_at((0, 1)), graph.node_at((19, 18)));
    let first = parallel_search(&graph, source, target, SearchConfig::with_workers(6)).cost();

    for _ in 0..5 {
        let report = parallel_search(&graph, source, target, SearchConfig::with_workers(6));
        assert_eq!(report.cost(), first);
    }
}

#[test]
fn busy_polling() {
    let graph = random_graph(10, 7);
    let config = SearchConfig {
        workers: 4,
        yield_when_idle: false,
    };
    let report = parallel_search(&graph, 0, 99, config);

    assert_eq!(
        report.cost(),
        bfs_search(&graph, 0, 99).map(|path| path.cost())
    );
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("maze.txt");
    std::fs::write(&input, "4\n1 1 1 1\n0 0 0 1\n1 1 1 1\n1 0 0 0\n").unwrap();

    let graph = io::load_graph(&input, (0, 0), (3, 0)).unwrap();
    let report = parallel_search(&graph, 0, graph.node_at((3, 0)), SearchConfig::default());
    let written = io::write_output(&input, dir.path(), &report.nodes(), &graph).unwrap();

    let text = std::fs::read_to_string(written).unwrap();
    assert_eq!(
        text,
        "10\n(0,0) (0,1) (0,2) (0,3) (1,3) (2,3) (2,2) (2,1) (2,0) (3,0) \n"
    );
}

#[test]
fn endpoint_outside_of_file_grid() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("small.txt");
    std::fs::write(&input, "2\n1 1\n1 1\n").unwrap();

    let error = io::load_graph(&input, (0, 0), (0, 2)).unwrap_err();
    assert!(matches!(error, io::LoadError::OutOfBounds { which: "target", .. }));
}

#[test]
fn written_output_validates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("random.txt");
    let graph = random_graph(12, 9);
    let rows: Vec<String> = graph
        .cells()
        .chunks(graph.dim())
        .map(|row| row.iter().map(u32::to_string).collect::<Vec<_>>().join(" "))
        .collect();
    std::fs::write(&input, format!("12\n{}\n", rows.join("\n"))).unwrap();

    let (source, target) = ((0, 0), (11, 11));
    let graph = io::load_graph(&input, source, target).unwrap();
    let (source, target) = (graph.node_at(source), graph.node_at(target));
    let report = parallel_search(&graph, source, target, SearchConfig::with_workers(4));
    let written = io::write_output(&input, dir.path(), &report.nodes(), &graph).unwrap();

    let (declared, path) = io::load_output(&written).unwrap();
    assert_eq!(
        io::validate_path(&graph, source, target, declared, &path),
        Ok(report.cost())
    );
}

#[test]
fn corrupted_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output_maze.txt");
    let graph = Graph::from_rows(&[
        [1, 1, 1, 1], //
        [0, 0, 0, 1],
        [1, 1, 1, 1],
        [1, 0, 0, 0],
    ]);
    let target = graph.node_at((3, 0));

    // cuts through the wall at (1, 2)
    std::fs::write(
        &output,
        "8\n(0,0) (0,1) (0,2) (1,2) (2,2) (2,1) (2,0) (3,0) \n",
    )
    .unwrap();
    let (declared, path) = io::load_output(&output).unwrap();
    assert_eq!(
        io::validate_path(&graph, 0, target, declared, &path),
        Err(io::ValidationError::Wall((1, 2)))
    );

    std::fs::write(&output, "10\n(0,0) (0,1) (0,2) (0,3) (1,3) \n").unwrap();
    let (declared, path) = io::load_output(&output).unwrap();
    assert_eq!(
        io::validate_path(&graph, 0, target, declared, &path),
        Err(io::ValidationError::CountMismatch { declared: 10, found: 5 })
    );
}
