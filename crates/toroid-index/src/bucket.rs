//! Per-cell object storage with tombstone slot reuse.
//!
//! Objects move every game step, so removal never shifts the slot
//! array: a vacated slot becomes a tombstone (`None`) and the next
//! insertion into the same cell reuses the first one it finds. The cost
//! is that tombstones accumulate under churn until the owning grid runs
//! a compaction pass.

use smallvec::SmallVec;
use std::sync::Arc;
use toroid_core::{Identified, IndexError};

/// Inline capacity of a bucket before it spills to the heap.
///
/// Most occupied cells hold one or two objects.
const INLINE_SLOTS: usize = 4;

/// The objects occupying one grid cell.
///
/// Live entries are `Some`, tombstones are `None`. Iteration skips
/// tombstones transparently. Order is insertion order modulo slot reuse
/// and is not stable across [`compact`](Self::compact).
#[derive(Debug)]
pub struct Bucket<T> {
    slots: SmallVec<[Option<Arc<T>>; INLINE_SLOTS]>,
    live: usize,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self {
            slots: SmallVec::new(),
            live: 0,
        }
    }
}

impl<T: Identified> Bucket<T> {
    /// An empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `object`, reusing the first tombstone if there is one.
    ///
    /// Returns the slot index used. Fails with
    /// [`IndexError::IdConflict`] if the identity is already here; the
    /// bucket is left untouched in that case.
    pub fn insert(&mut self, object: Arc<T>) -> Result<usize, IndexError> {
        let id = object.object_id();
        let mut free = None;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                None => {
                    free.get_or_insert(i);
                }
                Some(o) if o.object_id() == id => return Err(IndexError::conflict(id)),
                Some(_) => {}
            }
        }
        let idx = match free {
            Some(i) => {
                self.slots[i] = Some(object);
                i
            }
            None => {
                self.slots.push(Some(object));
                self.slots.len() - 1
            }
        };
        self.live += 1;
        Ok(idx)
    }

    /// Tombstone the slot holding `id` and return its object.
    ///
    /// Returns `None` if no live slot carries that identity.
    pub fn vacate(&mut self, id: &str) -> Option<Arc<T>> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.as_ref().is_some_and(|o| o.object_id().as_str() == id))?;
        self.live -= 1;
        slot.take()
    }

    /// Whether a live slot carries `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|o| o.object_id().as_str() == id)
    }

    /// The first live object, if any.
    pub fn first(&self) -> Option<&Arc<T>> {
        self.iter().next()
    }

    /// Drop every tombstone, keeping live order.
    ///
    /// Returns the number of slots reclaimed. An emptied bucket also
    /// releases any heap storage it had spilled into.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| s.is_some());
        if self.slots.is_empty() {
            self.slots = SmallVec::new();
        }
        before - self.slots.len()
    }
}

impl<T> Bucket<T> {
    /// Live objects, skipping tombstones.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the cell holds no live object.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots, live plus tombstoned.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots.
    pub fn tombstones(&self) -> usize {
        self.slots.len() - self.live
    }

    /// Remove everything and release storage.
    pub fn clear(&mut self) {
        self.slots = SmallVec::new();
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::ObjectId;

    fn obj(id: &str) -> Arc<ObjectId> {
        Arc::new(ObjectId::from(id))
    }

    fn ids(b: &Bucket<ObjectId>) -> Vec<&str> {
        b.iter().map(|o| o.as_str()).collect()
    }

    #[test]
    fn insert_appends_when_no_tombstone() {
        let mut b = Bucket::new();
        assert_eq!(b.insert(obj("a")).unwrap(), 0);
        assert_eq!(b.insert(obj("b")).unwrap(), 1);
        assert_eq!(ids(&b), vec!["a", "b"]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.tombstones(), 0);
    }

    #[test]
    fn vacate_leaves_tombstone_and_insert_reuses_it() {
        let mut b = Bucket::new();
        b.insert(obj("a")).unwrap();
        b.insert(obj("b")).unwrap();
        b.insert(obj("c")).unwrap();

        let gone = b.vacate("b").unwrap();
        assert_eq!(gone.as_str(), "b");
        assert_eq!(b.slot_count(), 3);
        assert_eq!(b.tombstones(), 1);
        assert_eq!(ids(&b), vec!["a", "c"]);

        // The hole at index 1 is filled before appending.
        assert_eq!(b.insert(obj("d")).unwrap(), 1);
        assert_eq!(b.slot_count(), 3);
        assert_eq!(ids(&b), vec!["a", "d", "c"]);
    }

    #[test]
    fn duplicate_identity_rejected_without_mutation() {
        let mut b = Bucket::new();
        b.insert(obj("a")).unwrap();
        b.vacate("a");
        b.insert(obj("x")).unwrap();
        let err = b.insert(obj("x")).unwrap_err();
        assert_eq!(err, IndexError::IdConflict { id: "x".into() });
        assert_eq!(b.len(), 1);
        assert_eq!(b.slot_count(), 1);
    }

    #[test]
    fn duplicate_detected_past_a_tombstone() {
        let mut b = Bucket::new();
        b.insert(obj("a")).unwrap();
        b.insert(obj("b")).unwrap();
        b.vacate("a");
        assert!(b.insert(obj("b")).is_err());
        assert_eq!(b.tombstones(), 1);
    }

    #[test]
    fn vacate_missing_returns_none() {
        let mut b: Bucket<ObjectId> = Bucket::new();
        assert!(b.vacate("ghost").is_none());
        b.insert(obj("a")).unwrap();
        b.vacate("a");
        assert!(b.vacate("a").is_none());
        assert!(b.is_empty());
    }

    #[test]
    fn first_skips_leading_tombstones() {
        let mut b = Bucket::new();
        b.insert(obj("a")).unwrap();
        b.insert(obj("b")).unwrap();
        b.vacate("a");
        assert_eq!(b.first().unwrap().as_str(), "b");
        assert!(b.contains("b"));
        assert!(!b.contains("a"));
    }

    #[test]
    fn compact_reclaims_tombstones_in_order() {
        let mut b = Bucket::new();
        for id in ["a", "b", "c", "d", "e"] {
            b.insert(obj(id)).unwrap();
        }
        b.vacate("a");
        b.vacate("c");
        assert_eq!(b.compact(), 2);
        assert_eq!(b.slot_count(), 3);
        assert_eq!(b.tombstones(), 0);
        assert_eq!(ids(&b), vec!["b", "d", "e"]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = Bucket::new();
        b.insert(obj("a")).unwrap();
        b.insert(obj("b")).unwrap();
        b.vacate("a");
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.slot_count(), 0);
    }
}
