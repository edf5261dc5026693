mod generic_path;
pub use generic_path::*;

/// The Cost of walking a Path. Every step on the Grid costs `1`.
pub type Cost = usize;

/// Marks a Cost that has not been discovered yet.
pub const INFINITY: Cost = Cost::MAX;
