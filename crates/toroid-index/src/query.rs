//! Result types for lookups and neighbor queries, and the shared
//! offset walker behind them.

use crate::grid::GridIndex;
use std::sync::Arc;
use toroid_core::{Identified, IndexError, Pos};
use toroid_space::Offset;

/// The object a [`find_first`](crate::SpatialIndex::find_first) query
/// matched, with the cell it was found in.
#[derive(Debug)]
pub struct Hit<T> {
    /// The matching object.
    pub object: Arc<T>,
    /// Wrapped cell the object occupies.
    pub pos: Pos,
}

impl<T> Clone for Hit<T> {
    fn clone(&self) -> Self {
        Self {
            object: Arc::clone(&self.object),
            pos: self.pos,
        }
    }
}

/// One entry of a [`collect_bounded`](crate::SpatialIndex::collect_bounded)
/// result.
#[derive(Debug)]
pub struct ViewEntry<T> {
    /// Index into the offset sequence that reached this cell.
    pub offset_index: usize,
    /// Wrapped cell the object occupies.
    pub pos: Pos,
    /// The object.
    pub object: Arc<T>,
}

impl<T> Clone for ViewEntry<T> {
    fn clone(&self) -> Self {
        Self {
            offset_index: self.offset_index,
            pos: self.pos,
            object: Arc::clone(&self.object),
        }
    }
}

/// Outcome of looking an object up by identity and expected position.
#[derive(Debug)]
pub enum PositionCheck<T> {
    /// The object is where the caller thought.
    Match(Arc<T>),
    /// The object exists but is recorded elsewhere.
    Mismatch {
        /// The object, returned anyway.
        object: Arc<T>,
        /// Where the index has it.
        recorded: Pos,
        /// Where the caller asked (wrapped).
        requested: Pos,
    },
}

impl<T> PositionCheck<T> {
    /// The object, regardless of whether the positions agreed.
    pub fn object(&self) -> &Arc<T> {
        match self {
            Self::Match(object) | Self::Mismatch { object, .. } => object,
        }
    }

    /// Whether the positions agreed.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

impl<T: Identified> PositionCheck<T> {
    /// Treat a mismatch as [`IndexError::PositionMismatch`].
    pub fn into_result(self) -> Result<Arc<T>, IndexError> {
        match self {
            Self::Match(object) => Ok(object),
            Self::Mismatch {
                object,
                recorded,
                requested,
            } => Err(IndexError::PositionMismatch {
                id: object.object_id().clone(),
                recorded,
                requested,
            }),
        }
    }
}

/// A live object reached while walking an offset sequence.
pub(crate) struct Step<'a, T> {
    pub index: usize,
    pub offset: &'a Offset,
    pub pos: Pos,
    pub object: &'a Arc<T>,
}

/// Walk `offsets` from `origin`, yielding every live object of every
/// visited cell in offset order, then bucket order within a cell.
///
/// `origin` must already be wrapped. Each offset is visited once; a
/// duplicated offset revisits its cell.
pub(crate) fn walk<'a, T>(
    grid: &'a GridIndex<T>,
    offsets: &'a [Offset],
    origin: Pos,
) -> impl Iterator<Item = Step<'a, T>> + 'a {
    let torus = *grid.torus();
    offsets.iter().enumerate().flat_map(move |(index, offset)| {
        let pos = torus.wrap_offset(origin.x, origin.y, offset.dx, offset.dy);
        grid.live_at(pos).map(move |object| Step {
            index,
            offset,
            pos,
            object,
        })
    })
}
