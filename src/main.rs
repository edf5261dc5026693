use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use parallel_astar::{a_star_search, io, parallel_search, SearchConfig};

/// Finds the shortest Path between two cells of a Grid file with a pool of A* Workers.
#[derive(Parser, Debug)]
#[command(name = "parallel_astar", version, about)]
struct Args {
    /// Grid file: the dimension on the first line, then one line of cells per row (0 = wall)
    input: PathBuf,
    /// Number of Workers (at most 32)
    workers: usize,
    /// Row of the source
    x1: usize,
    /// Column of the source
    y1: usize,
    /// Row of the target
    x2: usize,
    /// Column of the target
    y2: usize,
    /// Directory to write `output_<input>.txt` to
    #[arg(long, default_value = ".")]
    output: PathBuf,
    /// Run the single-threaded A* search instead
    #[arg(long)]
    sequential: bool,
    /// Check a previously written output file against the Grid instead of searching
    #[arg(long, value_name = "OUTPUT")]
    validate: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("PARALLEL_ASTAR_LOG", "info")).init();
    let args = Args::parse();

    let start = Instant::now();
    let source = (args.x1, args.y1);
    let target = (args.x2, args.y2);
    let graph = io::load_graph(&args.input, source, target)
        .with_context(|| format!("could not load {}", args.input.display()))?;
    let (source, target) = (graph.node_at(source), graph.node_at(target));
    info!("initialization took {:?}", start.elapsed());

    if let Some(output) = &args.validate {
        let (declared, path) = io::load_output(output)
            .with_context(|| format!("could not read {}", output.display()))?;
        let cost = io::validate_path(&graph, source, target, declared, &path)
            .with_context(|| format!("{} is not a valid solution", output.display()))?;
        match cost {
            Some(cost) => info!("solution is valid: cost {}", cost),
            None => info!("solution is valid: the target is unreachable"),
        }
        return Ok(());
    }

    let start = Instant::now();
    let nodes = if args.sequential {
        // the parallel search reports target to source
        a_star_search(&graph, source, target)
            .map(|path| path.reversed().to_vec())
            .unwrap_or_default()
    } else {
        parallel_search(&graph, source, target, SearchConfig::with_workers(args.workers)).nodes()
    };
    info!("computation took {:?}", start.elapsed());

    if nodes.is_empty() {
        info!("no path from {:?} to {:?}", (args.x1, args.y1), (args.x2, args.y2));
    }
    let written = io::write_output(&args.input, &args.output, &nodes, &graph)
        .context("could not write the result")?;
    info!("wrote {} nodes to {}", nodes.len(), written.display());
    Ok(())
}
