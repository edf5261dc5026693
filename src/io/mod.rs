//! Reading Grids from and writing Paths to text files, and checking written Paths.
//!
//! ## Grid files
//! The first line holds the side length `dim`, followed by `dim` lines of `dim` whitespace
//! separated cell values. `0` is a wall, anything else can be walked on.
//! ```text
//! 3
//! 1 1 1
//! 0 0 1
//! 1 1 1
//! ```
//!
//! ## Output files
//! The first line holds the number of Nodes in the Path, the second the Path from source to
//! target as `(row,col) ` pairs:
//! ```text
//! 7
//! (0,0) (0,1) (0,2) (1,2) (2,2) (2,1) (2,0)
//! ```

mod error;
pub use self::error::{LoadError, ReadOutputError, ValidationError, WriteError};

mod validate;
pub use self::validate::validate_path;

use crate::{Graph, NodeId, Point};

use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The largest number of cells a Grid file may declare.
pub const MAX_CELLS: usize = u32::MAX as usize;

/// Reads a Grid file, checking that both endpoints lie on the Grid.
pub fn load_graph(path: &Path, source: Point, target: Point) -> Result<Graph, LoadError> {
    let file = fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let graph = parse_graph(BufReader::new(file), source, target)?;
    debug!("loaded {}x{} grid from {}", graph.dim(), graph.dim(), path.display());
    Ok(graph)
}

/// Parses a Grid from any reader. See the [module documentation](self) for the format.
///
/// The endpoints are checked right after the dimension, before the cells are read.
pub fn parse_graph(reader: impl BufRead, source: Point, target: Point) -> Result<Graph, LoadError> {
    let mut lines = reader.lines().enumerate();

    let dim = loop {
        let (_, line) = lines.next().ok_or(LoadError::MissingDimension)?;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        break line
            .parse::<usize>()
            .map_err(|_| LoadError::InvalidDimension(line.to_owned()))?;
    };

    for (which, point) in [("source", source), ("target", target)] {
        if point.0 >= dim || point.1 >= dim {
            return Err(LoadError::OutOfBounds { which, point, dim });
        }
    }

    dim.checked_mul(dim)
        .filter(|&len| len <= MAX_CELLS)
        .ok_or(LoadError::DimensionTooLarge(dim))?;

    // grown row by row, so a bogus header cannot reserve memory the file never fills
    let mut cells = Vec::new();
    let mut rows = 0;
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if rows == dim {
            return Err(LoadError::TooManyRows { dim });
        }
        let line_number = index + 1;
        let before = cells.len();
        for token in line.split_whitespace() {
            let value = token.parse::<u32>().map_err(|_| LoadError::InvalidCell {
                line: line_number,
                token: token.to_owned(),
            })?;
            cells.push(value);
        }
        let found = cells.len() - before;
        if found != dim {
            return Err(LoadError::RowLength {
                line: line_number,
                expected: dim,
                found,
            });
        }
        rows += 1;
    }
    if rows != dim {
        return Err(LoadError::MissingRows {
            expected: dim,
            found: rows,
        });
    }

    Ok(Graph::new(dim, cells))
}

/// Formats a Path (given from target to source) in the output file format.
pub fn format_output(path: &[NodeId], graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", path.len());
    for &node in path.iter().rev() {
        let (row, col) = graph.position(node);
        let _ = write!(out, "({},{}) ", row, col);
    }
    out.push('\n');
    out
}

/// Reads an output file back in. Returns the number of Nodes declared on the first line and the
/// Path listed on the second, from source to target.
pub fn load_output(path: &Path) -> Result<(usize, Vec<Point>), ReadOutputError> {
    let file = fs::File::open(path).map_err(|source| ReadOutputError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_output(BufReader::new(file))
}

/// Parses the output file format. See the [module documentation](self).
///
/// A missing second line is read as an empty Path.
pub fn read_output(reader: impl BufRead) -> Result<(usize, Vec<Point>), ReadOutputError> {
    let mut lines = reader.lines();

    let count = lines.next().ok_or(ReadOutputError::MissingCount)??;
    let count = count.trim();
    let count = count
        .parse::<usize>()
        .map_err(|_| ReadOutputError::InvalidCount(count.to_owned()))?;

    let mut path = Vec::new();
    if let Some(line) = lines.next() {
        for token in line?.split_whitespace() {
            let point =
                parse_point(token).ok_or_else(|| ReadOutputError::InvalidNode(token.to_owned()))?;
            path.push(point);
        }
    }
    Ok((count, path))
}

/// Parses `(row,col)`.
fn parse_point(token: &str) -> Option<Point> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let (row, col) = inner.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

/// The name of the output file for a given input: `output_<input file stem>.txt`.
pub fn output_path(input: &Path, dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("output_{}.txt", stem))
}

/// Writes a Path (given from target to source) next to the other outputs in `dir`.
///
/// Returns where the file was written.
pub fn write_output(
    input: &Path,
    dir: &Path,
    path: &[NodeId],
    graph: &Graph,
) -> Result<PathBuf, WriteError> {
    let output = output_path(input, dir);
    fs::write(&output, format_output(path, graph)).map_err(|source| WriteError {
        path: output.clone(),
        source,
    })?;
    debug!("wrote {} nodes to {}", path.len(), output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = "3\n1 1 1\n0 0 1\n1 1 1\n";

    #[test]
    fn parse() {
        let graph = parse_graph(GRID.as_bytes(), (0, 0), (2, 0)).unwrap();
        assert_eq!(graph, Graph::from_rows(&[[1, 1, 1], [0, 0, 1], [1, 1, 1]]));
    }

    #[test]
    fn parse_tolerates_blank_lines() {
        let graph = parse_graph("\n2\n1 0\n\n0 1\n\n".as_bytes(), (0, 0), (1, 1)).unwrap();
        assert_eq!(graph.cells(), &[1, 0, 0, 1]);
    }

    #[test]
    fn parse_errors() {
        let parse = |text: &str, target| parse_graph(text.as_bytes(), (0, 0), target);

        assert!(matches!(parse("", (0, 0)), Err(LoadError::MissingDimension)));
        assert!(matches!(parse("x\n", (0, 0)), Err(LoadError::InvalidDimension(_))));
        assert!(matches!(
            parse(GRID, (3, 0)),
            Err(LoadError::OutOfBounds { which: "target", .. })
        ));
        assert!(matches!(
            parse("2\n1 1\n", (1, 1)),
            Err(LoadError::MissingRows { expected: 2, found: 1 })
        ));
        assert!(matches!(
            parse("2\n1 1\n1\n", (1, 1)),
            Err(LoadError::RowLength { line: 3, expected: 2, found: 1 })
        ));
        assert!(matches!(
            parse("2\n1 1\n1 a\n", (1, 1)),
            Err(LoadError::InvalidCell { line: 3, .. })
        ));
        assert!(matches!(
            parse("1\n1\n1\n", (0, 0)),
            Err(LoadError::TooManyRows { dim: 1 })
        ));
        // dim * dim overflows
        assert!(matches!(
            parse(&format!("{}\n", usize::MAX / 2), (0, 0)),
            Err(LoadError::DimensionTooLarge(_))
        ));
        assert!(matches!(
            parse("4294967296\n", (0, 0)),
            Err(LoadError::DimensionTooLarge(4294967296))
        ));
        assert!(matches!(
            parse("100000\n1\n", (0, 0)),
            Err(LoadError::DimensionTooLarge(100000))
        ));
        // allowed, but the rows never come
        assert!(matches!(
            parse("60000\n1\n", (0, 0)),
            Err(LoadError::RowLength { line: 2, expected: 60000, found: 1 })
        ));
    }

    #[test]
    fn read_back() {
        let (count, path) = read_output("3\n(0,0) (0,1) (1,1) \n".as_bytes()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(path, vec![(0, 0), (0, 1), (1, 1)]);

        let (count, path) = read_output("0\n\n".as_bytes()).unwrap();
        assert_eq!((count, path), (0, vec![]));

        assert!(matches!(read_output("".as_bytes()), Err(ReadOutputError::MissingCount)));
        assert!(matches!(
            read_output("two\n".as_bytes()),
            Err(ReadOutputError::InvalidCount(_))
        ));
        assert!(matches!(
            read_output("2\n(0,0) (0;1)\n".as_bytes()),
            Err(ReadOutputError::InvalidNode(token)) if token == "(0;1)"
        ));
    }

    #[test]
    fn format() {
        let graph = Graph::new(3, vec![1; 9]);
        // target to source
        let text = format_output(&[8, 5, 2, 1, 0], &graph);
        assert_eq!(text, "5\n(0,0) (0,1) (0,2) (1,2) (2,2) \n");

        assert_eq!(format_output(&[], &graph), "0\n\n");
    }

    #[test]
    fn output_name() {
        let path = output_path(Path::new("grids/maze_10.txt"), Path::new("out"));
        assert_eq!(path, Path::new("out").join("output_maze_10.txt"));
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let graph = Graph::new(2, vec![1; 4]);

        let written = write_output(Path::new("small.txt"), dir.path(), &[3, 1, 0], &graph).unwrap();

        assert_eq!(written, dir.path().join("output_small.txt"));
        assert_eq!(fs::read_to_string(written).unwrap(), "3\n(0,0) (0,1) (1,1) \n");
    }
}
