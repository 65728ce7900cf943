//! Identity → object and identity → position.
//!
//! Both views live in one map whose records carry the object handle and
//! its wrapped position together, so they can only change in lock-step.
//! The registry does no locking of its own; [`SpatialIndex`] layers the
//! lock above it.
//!
//! [`SpatialIndex`]: crate::SpatialIndex

use indexmap::IndexMap;
use std::sync::Arc;
use toroid_core::{Identified, IndexError, ObjectId, Pos};

/// What the registry knows about one identity.
#[derive(Debug)]
pub struct Record<T> {
    /// Shared handle to the stored object.
    pub object: Arc<T>,
    /// Current wrapped position.
    pub pos: Pos,
}

impl<T> Clone for Record<T> {
    fn clone(&self) -> Self {
        Self {
            object: Arc::clone(&self.object),
            pos: self.pos,
        }
    }
}

/// Map from identity to [`Record`].
#[derive(Debug)]
pub struct Registry<T> {
    records: IndexMap<ObjectId, Record<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Identified> Registry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `object` at `pos`.
    ///
    /// Fails with [`IndexError::IdConflict`] if the identity is present.
    pub fn insert(&mut self, object: Arc<T>, pos: Pos) -> Result<(), IndexError> {
        let id = object.object_id();
        if self.records.contains_key(id) {
            return Err(IndexError::conflict(id));
        }
        self.records.insert(id.clone(), Record { object, pos });
        Ok(())
    }
}

impl<T> Registry<T> {
    /// Forget `id`, returning its record.
    ///
    /// Fails with [`IndexError::NotFound`] if absent.
    pub fn remove(&mut self, id: &str) -> Result<Record<T>, IndexError> {
        self.records
            .swap_remove(id)
            .ok_or_else(|| IndexError::NotFound { id: id.into() })
    }

    /// Record a new position for `id`, returning the old one.
    ///
    /// Fails with [`IndexError::NotFound`] if absent.
    pub fn update_position(&mut self, id: &str, pos: Pos) -> Result<Pos, IndexError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| IndexError::NotFound { id: id.into() })?;
        Ok(std::mem::replace(&mut record.pos, pos))
    }

    /// The record for `id`.
    pub fn get(&self, id: &str) -> Option<&Record<T>> {
        self.records.get(id)
    }

    /// The object registered under `id`.
    pub fn object(&self, id: &str) -> Option<&Arc<T>> {
        self.records.get(id).map(|r| &r.object)
    }

    /// The recorded position of `id`.
    pub fn position(&self, id: &str) -> Option<Pos> {
        self.records.get(id).map(|r| r.pos)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, keyed by identity.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &Record<T>)> + '_ {
        self.records.iter()
    }

    /// Remove and yield every record.
    pub fn drain(&mut self) -> impl Iterator<Item = (ObjectId, Record<T>)> + '_ {
        self.records.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(id: &str) -> Arc<ObjectId> {
        Arc::new(ObjectId::from(id))
    }

    #[test]
    fn insert_then_lookup() {
        let mut r = Registry::new();
        r.insert(obj("a"), Pos::new(2, 9)).unwrap();
        assert_eq!(r.len(), 1);
        assert!(r.contains("a"));
        assert_eq!(r.position("a"), Some(Pos::new(2, 9)));
        assert_eq!(r.object("a").unwrap().as_str(), "a");
    }

    #[test]
    fn insert_conflict_keeps_original() {
        let mut r = Registry::new();
        r.insert(obj("a"), Pos::new(1, 1)).unwrap();
        let err = r.insert(obj("a"), Pos::new(5, 5)).unwrap_err();
        assert!(matches!(err, IndexError::IdConflict { .. }));
        assert_eq!(r.position("a"), Some(Pos::new(1, 1)));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn remove_absent_is_not_found() {
        let mut r: Registry<ObjectId> = Registry::new();
        assert_eq!(
            r.remove("nope").unwrap_err(),
            IndexError::NotFound { id: "nope".into() }
        );
    }

    #[test]
    fn remove_returns_record() {
        let mut r = Registry::new();
        r.insert(obj("a"), Pos::new(3, 4)).unwrap();
        let rec = r.remove("a").unwrap();
        assert_eq!(rec.pos, Pos::new(3, 4));
        assert!(r.is_empty());
        assert!(r.object("a").is_none());
    }

    #[test]
    fn update_position_returns_old() {
        let mut r = Registry::new();
        r.insert(obj("a"), Pos::new(0, 0)).unwrap();
        assert_eq!(r.update_position("a", Pos::new(7, 7)).unwrap(), Pos::new(0, 0));
        assert_eq!(r.position("a"), Some(Pos::new(7, 7)));
        assert!(matches!(
            r.update_position("b", Pos::new(1, 1)),
            Err(IndexError::NotFound { .. })
        ));
    }

    #[test]
    fn drain_empties() {
        let mut r = Registry::new();
        r.insert(obj("a"), Pos::new(0, 0)).unwrap();
        r.insert(obj("b"), Pos::new(1, 0)).unwrap();
        let mut drained: Vec<_> = r.drain().map(|(id, _)| id).collect();
        drained.sort();
        assert_eq!(drained, vec![ObjectId::from("a"), ObjectId::from("b")]);
        assert!(r.is_empty());
    }
}
