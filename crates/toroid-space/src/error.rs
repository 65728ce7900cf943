//! Error types for space construction.

use thiserror::Error;

/// Errors arising from axis or torus construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct an axis with zero cells.
    #[error("space must have at least one cell")]
    EmptySpace,
    /// An axis length does not fit the `i32` coordinate range.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension was too large.
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` exceeds [`Torus::MAX_CELLS`](crate::Torus::MAX_CELLS).
    #[error("{width}x{height} grid has {cells} cells, limit is {max}")]
    TooManyCells {
        /// Requested columns.
        width: u32,
        /// Requested rows.
        height: u32,
        /// `width * height`.
        cells: u64,
        /// The largest accepted cell count.
        max: u64,
    },
}
