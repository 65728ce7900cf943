//! Position → bucket storage over a torus.
//!
//! One [`Bucket`] per cell, stored flat in row-major rank order. Every
//! position handed to the grid must already be wrapped.

use crate::bucket::Bucket;
use crate::config::CompactionPolicy;
use std::sync::Arc;
use toroid_core::{Identified, IndexError, Pos};
use toroid_space::Torus;

/// Occupancy figures for a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Live objects across all cells.
    pub live: usize,
    /// Cells holding at least one live object.
    pub occupied_cells: usize,
    /// Slots across all cells, live plus tombstoned.
    pub slots: usize,
    /// Tombstoned slots across all cells.
    pub tombstones: usize,
}

/// Flat bucket array addressed by wrapped position.
#[derive(Debug)]
pub struct GridIndex<T> {
    torus: Torus,
    cells: Vec<Bucket<T>>,
    policy: CompactionPolicy,
}

impl<T> GridIndex<T> {
    /// An empty grid covering every cell of `torus`.
    pub fn new(torus: Torus, policy: CompactionPolicy) -> Self {
        let mut cells = Vec::with_capacity(torus.cell_count());
        cells.resize_with(torus.cell_count(), Bucket::default);
        Self {
            torus,
            cells,
            policy,
        }
    }

    /// The torus this grid covers.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// The active compaction policy.
    pub fn policy(&self) -> CompactionPolicy {
        self.policy
    }

    /// The bucket at wrapped `pos`.
    pub fn bucket(&self, pos: Pos) -> &Bucket<T> {
        &self.cells[self.torus.rank(pos)]
    }

    /// Live objects at wrapped `pos`.
    pub fn live_at(&self, pos: Pos) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.bucket(pos).iter()
    }

    /// Occupied cells with their buckets, in rank order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, &Bucket<T>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_empty())
            .map(|(r, b)| (self.torus.pos_of_rank(r), b))
    }

    /// Empty every bucket.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Bucket::clear);
    }

    /// Occupancy totals.
    pub fn stats(&self) -> IndexStats {
        self.cells.iter().fold(IndexStats::default(), |mut s, b| {
            s.live += b.len();
            s.slots += b.slot_count();
            s.tombstones += b.tombstones();
            if !b.is_empty() {
                s.occupied_cells += 1;
            }
            s
        })
    }
}

impl<T: Identified> GridIndex<T> {
    /// Place `object` at wrapped `pos`.
    pub fn add(&mut self, pos: Pos, object: Arc<T>) -> Result<usize, IndexError> {
        let r = self.torus.rank(pos);
        self.cells[r].insert(object)
    }

    /// Tombstone `id` at wrapped `pos`, returning its object.
    ///
    /// Applies the compaction policy to the touched bucket afterwards.
    pub fn vacate(&mut self, pos: Pos, id: &str) -> Option<Arc<T>> {
        let r = self.torus.rank(pos);
        let bucket = &mut self.cells[r];
        let object = bucket.vacate(id)?;
        if self
            .policy
            .should_compact(bucket.slot_count(), bucket.tombstones())
        {
            bucket.compact();
        }
        Some(object)
    }

    /// The first live object at wrapped `pos`.
    pub fn first(&self, pos: Pos) -> Option<&Arc<T>> {
        self.bucket(pos).first()
    }

    /// Compact every bucket, returning the number of reclaimed slots.
    pub fn compact(&mut self) -> usize {
        self.cells.iter_mut().map(Bucket::compact).sum()
    }
}
