use crate::{Cost, Point};

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while reading a Grid file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The Grid file could not be opened
    #[error("failed to open {}", path.display())]
    Open {
        /// The file that was opened
        path: PathBuf,
        /// What the OS reported
        #[source]
        source: std::io::Error,
    },
    /// Reading from an opened Grid file failed
    #[error("failed to read grid")]
    Read(#[from] std::io::Error),
    /// There is no line holding the dimension
    #[error("grid file is empty, expected its dimension on the first line")]
    MissingDimension,
    /// The dimension is not a non-negative integer
    #[error("invalid grid dimension {0:?}")]
    InvalidDimension(String),
    /// `dim * dim` cells cannot be addressed
    #[error("grid dimension {0} is too large")]
    DimensionTooLarge(usize),
    /// The source or target is not on the Grid
    #[error("{which} {point:?} lies outside of the {dim}x{dim} grid")]
    OutOfBounds {
        /// `"source"` or `"target"`
        which: &'static str,
        /// The offending `(row, col)`
        point: Point,
        /// The side length of the Grid
        dim: usize,
    },
    /// A cell is not a non-negative integer
    #[error("line {line}: invalid cell value {token:?}")]
    InvalidCell {
        /// 1-based line number in the file
        line: usize,
        /// The text that failed to parse
        token: String,
    },
    /// A row has too few or too many cells
    #[error("line {line}: expected {expected} cells, found {found}")]
    RowLength {
        /// 1-based line number in the file
        line: usize,
        /// The side length of the Grid
        expected: usize,
        /// Cells found on the line
        found: usize,
    },
    /// The file ends before all rows were read
    #[error("expected {expected} rows, found {found}")]
    MissingRows {
        /// The side length of the Grid
        expected: usize,
        /// Rows found in the file
        found: usize,
    },
    /// There are more non-empty lines than rows
    #[error("more than {dim} rows in a {dim}x{dim} grid")]
    TooManyRows {
        /// The side length of the Grid
        dim: usize,
    },
}

/// Writing an output file failed.
#[derive(Debug, Error)]
#[error("failed to write {}", path.display())]
pub struct WriteError {
    /// The file that was written
    pub path: PathBuf,
    /// What the OS reported
    #[source]
    pub source: std::io::Error,
}

/// Everything that can go wrong while reading an output file back in.
#[derive(Debug, Error)]
pub enum ReadOutputError {
    /// The output file could not be opened
    #[error("failed to open {}", path.display())]
    Open {
        /// The file that was opened
        path: PathBuf,
        /// What the OS reported
        #[source]
        source: std::io::Error,
    },
    /// Reading from an opened output file failed
    #[error("failed to read output")]
    Read(#[from] std::io::Error),
    /// There is no line holding the number of Nodes
    #[error("output file is empty, expected the number of nodes on the first line")]
    MissingCount,
    /// The number of Nodes is not a non-negative integer
    #[error("invalid node count {0:?}")]
    InvalidCount(String),
    /// A Node is not written as `(row,col)`
    #[error("invalid node {0:?}, expected (row,col)")]
    InvalidNode(String),
}

/// Why a Path read from an output file is not a shortest Path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The first line disagrees with the Path on the second
    #[error("output claims {declared} nodes, but lists {found}")]
    CountMismatch {
        /// The number on the first line
        declared: usize,
        /// Nodes on the second line
        found: usize,
    },
    /// A Node of the Path is not on the Grid
    #[error("{0:?} lies outside of the grid")]
    OutOfBounds(Point),
    /// The Path does not start at the source or does not end at the target
    #[error("path runs from {found:?} instead of {expected:?}")]
    WrongEndpoints {
        /// The `(source, target)` searched for
        expected: (Point, Point),
        /// The `(first, last)` Node of the Path
        found: (Point, Point),
    },
    /// The Path walks onto a wall
    #[error("path crosses the wall at {0:?}")]
    Wall(Point),
    /// Two consecutive Nodes are not one step apart
    #[error("illegal move from {0:?} to {1:?}")]
    IllegalMove(Point, Point),
    /// The output is empty, but the target can be reached
    #[error("no path listed, but one of cost {optimal} exists")]
    MissingPath {
        /// The Cost of a shortest Path
        optimal: Cost,
    },
    /// The Path is valid, but longer than necessary
    #[error("path costs {cost}, but the shortest one costs {optimal}")]
    NotOptimal {
        /// The Cost of the listed Path
        cost: Cost,
        /// The Cost of a shortest Path
        optimal: Cost,
    },
}
