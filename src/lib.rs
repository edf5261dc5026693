#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find shortest Paths on a square Grid with a pool of concurrent A* Workers.
//!
//! ## Introduction
//! The Grid is a `dim` x `dim` field of cells, where a cell of `0` is a wall and anything else
//! can be walked on. Agents move along the 4 cardinal directions at a Cost of `1` per step, and
//! the Euclidean distance (rounded down) estimates the remaining Cost.
//!
//! Instead of guarding a shared open list and score table with locks, every piece of search
//! state is owned by exactly one thread. The Workers expanding Nodes send requests to those
//! owners and wait for the answer, which makes every read-modify-write on the shared state a
//! single step. Workers keep expanding after the first solution is found, so a cheaper one found
//! later replaces it, and the search ends once every Worker is out of work at the same time.
//! See the [search module](search/index.html) for the details.
//!
//! ## Examples
//! ```
//! use parallel_astar::{parallel_search, Graph, SearchConfig};
//!
//! // 1 = free, 0 = wall
//! let graph = Graph::from_rows(&[
//!     [1, 1, 1, 1],
//!     [0, 0, 0, 1],
//!     [1, 1, 1, 1],
//!     [1, 0, 0, 0],
//! ]);
//! let source = graph.node_at((0, 0));
//! let target = graph.node_at((3, 0));
//!
//! let report = parallel_search(&graph, source, target, SearchConfig::with_workers(4));
//!
//! // the Path walks from the target back to the source
//! let path = report.path.expect("the target is reachable");
//! assert_eq!(path.cost(), 9);
//! assert_eq!(path.first(), Some(&target));
//! assert_eq!(path.last(), Some(&source));
//! ```
//!
//! The sequential [`a_star_search`] and [`bfs_search`] find Paths of the same Cost on a single
//! thread:
//! ```
//! # use parallel_astar::{a_star_search, bfs_search, Graph};
//! let graph = Graph::new(3, vec![1; 9]);
//!
//! assert_eq!(a_star_search(&graph, 0, 8).map(|path| path.cost()), Some(4));
//! assert_eq!(bfs_search(&graph, 0, 8).map(|path| path.cost()), Some(4));
//! ```
//!
//! ### Files
//! Grids are usually read from text files, and the resulting Paths are written back the same way.
//! See the [io module](io/index.html) for the formats.

/// The Type used to reference a Node: the index `row * dim + col` of its cell.
pub type NodeId = usize;

/// A shorthand for Points on the grid, as `(row, col)`
pub type Point = (usize, usize);

pub mod grid;
pub use self::grid::{a_star_search, bfs_search, Graph};

pub mod io;

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path, INFINITY};

pub mod search;
pub use self::search::{parallel_search, SearchConfig, SearchReport, WorkerStats, MAX_WORKERS};
