//! The concurrent spatial index.
//!
//! [`SpatialIndex`] owns a [`Registry`] and a [`GridIndex`] behind one
//! reader/writer lock. Mutations take the lock exclusively and check
//! every precondition before touching either structure, so a failed call
//! leaves the index exactly as it was. Reads and all three neighbor
//! queries share the lock.
//!
//! Predicates passed to queries run while the shared lock is held. They
//! must not call mutating methods on the same index, which would
//! deadlock.

use crate::config::{CompactionPolicy, ConfigError, IndexConfig};
use crate::grid::{GridIndex, IndexStats};
use crate::query::{walk, Hit, PositionCheck, ViewEntry};
use crate::registry::Registry;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use toroid_core::{Identified, IndexError, ObjectId, Pos};
use toroid_space::{Offset, SpaceError, Torus};
use tracing::{debug, error, trace};

#[derive(Debug)]
struct State<T> {
    registry: Registry<T>,
    grid: GridIndex<T>,
}

/// A toroidal 2D index of identified objects.
///
/// Every coordinate argument is wrapped onto the torus before use, so
/// callers may pass any `i32` pair. Objects are stored as `Arc<T>`
/// handles; lookups and queries hand out clones of those handles.
///
/// # Examples
///
/// ```
/// use toroid_core::{ObjectId, Pos};
/// use toroid_index::SpatialIndex;
/// use toroid_space::OffsetList;
///
/// let index: SpatialIndex<ObjectId> = SpatialIndex::new(10, 10).unwrap();
/// assert_eq!(index.insert(ObjectId::from("a"), 12, -1).unwrap(), Pos::new(2, 9));
/// index.insert(ObjectId::from("b"), 3, 9).unwrap();
///
/// let near = OffsetList::disk(1);
/// let hit = index.find_first(&near, 2, 9, |o, _, _| o.as_str() == "b").unwrap();
/// assert_eq!(hit.pos, Pos::new(3, 9));
/// assert_eq!(index.to_string(), "SpatialIndex[(10 10) 2]");
/// ```
#[derive(Debug)]
pub struct SpatialIndex<T> {
    torus: Torus,
    state: RwLock<State<T>>,
}

impl<T> SpatialIndex<T> {
    // A poisoned lock still guards a consistent state: mutations check
    // before they write, and predicates only ever hold the read side.
    fn read(&self) -> RwLockReadGuard<'_, State<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The torus the index covers.
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// The active compaction policy.
    pub fn policy(&self) -> CompactionPolicy {
        self.read().grid.policy()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.read().registry.len()
    }

    /// Whether no object is registered.
    pub fn is_empty(&self) -> bool {
        self.read().registry.is_empty()
    }

    /// Occupancy figures, including tombstones.
    pub fn stats(&self) -> IndexStats {
        self.read().grid.stats()
    }

    /// The object registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.read().registry.object(id).cloned()
    }

    /// The wrapped position recorded for `id`.
    pub fn position_of(&self, id: &str) -> Option<Pos> {
        self.read().registry.position(id)
    }

    /// The first live object in the cell at `(x, y)`.
    pub fn first_at(&self, x: i32, y: i32) -> Option<Arc<T>> {
        let pos = self.torus.wrap(x, y);
        let state = self.read();
        let first = state.grid.live_at(pos).next().cloned();
        first
    }

    /// Every live object in the cell at `(x, y)`, in bucket order.
    pub fn all_at(&self, x: i32, y: i32) -> Vec<Arc<T>> {
        let pos = self.torus.wrap(x, y);
        let state = self.read();
        let all = state.grid.live_at(pos).cloned().collect();
        all
    }

    /// A copy of every registered object handle.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.read()
            .registry
            .iter()
            .map(|(_, r)| Arc::clone(&r.object))
            .collect()
    }

    /// Walk `offsets` from `(x, y)` and return the first object
    /// `pred(object, pos, offset)` accepts.
    ///
    /// Cells are visited in offset order, objects within a cell in
    /// bucket order. Stops at the first match; visits every offset
    /// exactly once when nothing matches.
    pub fn find_first<F>(&self, offsets: &[Offset], x: i32, y: i32, mut pred: F) -> Option<Hit<T>>
    where
        F: FnMut(&T, Pos, &Offset) -> bool,
    {
        let origin = self.torus.wrap(x, y);
        let state = self.read();
        let mut steps = walk(&state.grid, offsets, origin);
        steps
            .find(|s| pred(s.object.as_ref(), s.pos, s.offset))
            .map(|s| Hit {
                object: Arc::clone(s.object),
                pos: s.pos,
            })
    }

    /// Collect up to `limit` objects reachable through `offsets` from
    /// `(x, y)`.
    ///
    /// Entries come out in non-decreasing offset index. `limit == 0`
    /// yields nothing.
    pub fn collect_bounded(
        &self,
        offsets: &[Offset],
        x: i32,
        y: i32,
        limit: usize,
    ) -> Vec<ViewEntry<T>> {
        let origin = self.torus.wrap(x, y);
        let state = self.read();
        let steps = walk(&state.grid, offsets, origin);
        let entries = steps
            .take(limit)
            .map(|s| ViewEntry {
                offset_index: s.index,
                pos: s.pos,
                object: Arc::clone(s.object),
            })
            .collect();
        entries
    }

    /// Call `stop(object, pos, offset_index, offset)` for each object
    /// reachable through `offsets` from `(x, y)` until it returns `true`.
    ///
    /// Returns whether the walk was stopped early.
    pub fn iterate_until<F>(&self, offsets: &[Offset], x: i32, y: i32, mut stop: F) -> bool
    where
        F: FnMut(&T, Pos, usize, &Offset) -> bool,
    {
        let origin = self.torus.wrap(x, y);
        let state = self.read();
        let mut steps = walk(&state.grid, offsets, origin);
        steps.any(|s| stop(s.object.as_ref(), s.pos, s.index, s.offset))
    }
}

impl<T: Identified> SpatialIndex<T> {
    /// An empty `width × height` index that never compacts implicitly.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        let torus = Torus::new(width, height)?;
        Ok(Self::from_parts(torus, CompactionPolicy::default()))
    }

    /// An empty index built from a validated [`IndexConfig`].
    pub fn with_config(config: IndexConfig) -> Result<Self, ConfigError> {
        let torus = config.validate()?;
        Ok(Self::from_parts(torus, config.compaction))
    }

    fn from_parts(torus: Torus, policy: CompactionPolicy) -> Self {
        debug!(
            width = torus.width(),
            height = torus.height(),
            ?policy,
            "spatial index created"
        );
        Self {
            torus,
            state: RwLock::new(State {
                registry: Registry::new(),
                grid: GridIndex::new(torus, policy),
            }),
        }
    }

    /// Register `object` at `(x, y)` and return its wrapped position.
    ///
    /// Fails with [`IndexError::IdConflict`] if the identity is already
    /// registered; nothing changes in that case.
    pub fn insert(&self, object: impl Into<Arc<T>>, x: i32, y: i32) -> Result<Pos, IndexError> {
        let pos = self.torus.wrap(x, y);
        let mut guard = self.write();
        insert_locked(&mut guard, object.into(), pos)?;
        Ok(pos)
    }

    /// Insert `object` at `(x, y)`, first removing any object registered
    /// under the same identity.
    ///
    /// Returns the displaced object, if there was one.
    pub fn insert_or_replace(
        &self,
        object: impl Into<Arc<T>>,
        x: i32,
        y: i32,
    ) -> Result<Option<Arc<T>>, IndexError> {
        let object = object.into();
        let pos = self.torus.wrap(x, y);
        let mut guard = self.write();
        let id = object.object_id().as_str();
        let displaced = if guard.registry.contains(id) {
            Some(remove_locked(&mut guard, id)?)
        } else {
            None
        };
        insert_locked(&mut guard, object, pos)?;
        Ok(displaced)
    }

    /// Remove the object registered under `object`'s identity.
    pub fn remove(&self, object: &T) -> Result<Arc<T>, IndexError> {
        self.remove_id(object.object_id().as_str())
    }

    /// Remove the object registered under `id`, returning its handle.
    ///
    /// Fails with [`IndexError::NotFound`] if absent.
    pub fn remove_id(&self, id: &str) -> Result<Arc<T>, IndexError> {
        let mut guard = self.write();
        remove_locked(&mut guard, id)
    }

    /// Move the object registered under `object`'s identity to `(x, y)`
    /// and return the new wrapped position.
    ///
    /// The old slot is vacated and the new one occupied under a single
    /// exclusive lock, so no reader sees the object in both cells or in
    /// neither. Fails with [`IndexError::NotFound`] if absent.
    pub fn relocate(&self, object: &T, x: i32, y: i32) -> Result<Pos, IndexError> {
        let id = object.object_id();
        let to = self.torus.wrap(x, y);
        let mut guard = self.write();
        let state = &mut *guard;
        let from = state
            .registry
            .position(id.as_str())
            .ok_or_else(|| IndexError::not_found(id))?;
        if from == to {
            return Ok(to);
        }
        let handle = state
            .grid
            .vacate(from, id.as_str())
            .ok_or_else(|| inconsistency(id, from, "registered object missing from its cell"))?;
        if state.grid.add(to, Arc::clone(&handle)).is_err() {
            // Put it back where it was; the identity was just vacated so
            // this cannot conflict.
            let _ = state.grid.add(from, handle);
            return Err(inconsistency(id, to, "unregistered duplicate in target cell"));
        }
        state.registry.update_position(id.as_str(), to)?;
        trace!(id = %id, %from, %to, "relocated");
        Ok(to)
    }

    /// Look `id` up and compare its recorded position with `(x, y)`.
    ///
    /// Fails with [`IndexError::NotFound`] if absent. A mismatch is not an
    /// error here; use [`PositionCheck::into_result`] to make it one.
    pub fn get_at(&self, id: &str, x: i32, y: i32) -> Result<PositionCheck<T>, IndexError> {
        let requested = self.torus.wrap(x, y);
        let state = self.read();
        let record = state
            .registry
            .get(id)
            .ok_or_else(|| IndexError::NotFound { id: id.into() })?;
        let object = Arc::clone(&record.object);
        Ok(if record.pos == requested {
            PositionCheck::Match(object)
        } else {
            PositionCheck::Mismatch {
                object,
                recorded: record.pos,
                requested,
            }
        })
    }

    /// Remove every object and return them, releasing bucket storage.
    pub fn drain(&self) -> Vec<Arc<T>> {
        let mut guard = self.write();
        let state = &mut *guard;
        let drained: Vec<Arc<T>> = state.registry.drain().map(|(_, r)| r.object).collect();
        state.grid.clear();
        debug!(count = drained.len(), "spatial index drained");
        drained
    }

    /// Drop every tombstone, returning the number of slots reclaimed.
    pub fn compact(&self) -> usize {
        let reclaimed = self.write().grid.compact();
        debug!(reclaimed, "spatial index compacted");
        reclaimed
    }

    /// Check that the registry and grid agree.
    ///
    /// Reports the first violation found as
    /// [`IndexError::InternalInconsistency`].
    pub fn validate(&self) -> Result<(), IndexError> {
        let state = self.read();
        for (id, record) in state.registry.iter() {
            if !self.torus.contains(record.pos) {
                return Err(inconsistency(id, record.pos, "recorded position is not wrapped"));
            }
            if !state.grid.bucket(record.pos).contains(id.as_str()) {
                return Err(inconsistency(id, record.pos, "registered object missing from its cell"));
            }
        }
        let mut live = 0;
        for (pos, bucket) in state.grid.occupied() {
            for (i, object) in bucket.iter().enumerate() {
                let id = object.object_id();
                if state.registry.position(id.as_str()) != Some(pos) {
                    return Err(inconsistency(id, pos, "cell holds an object registered elsewhere"));
                }
                if bucket.iter().skip(i + 1).any(|o| o.object_id() == id) {
                    return Err(inconsistency(id, pos, "identity stored twice in one cell"));
                }
                live += 1;
            }
        }
        let counted = state.grid.stats().live;
        if live != state.registry.len() || counted != live {
            let detail = format!(
                "{live} live entries ({counted} counted) for {} registered",
                state.registry.len()
            );
            error!(%detail, "spatial index inconsistency");
            return Err(IndexError::InternalInconsistency {
                id: ObjectId::new("*"),
                pos: Pos::default(),
                detail,
            });
        }
        Ok(())
    }
}

fn insert_locked<T: Identified>(
    state: &mut State<T>,
    object: Arc<T>,
    pos: Pos,
) -> Result<(), IndexError> {
    let id = object.object_id().clone();
    state.registry.insert(Arc::clone(&object), pos)?;
    if state.grid.add(pos, object).is_err() {
        state.registry.remove(id.as_str())?;
        return Err(inconsistency(&id, pos, "unregistered duplicate in target cell"));
    }
    trace!(id = %id, %pos, "inserted");
    Ok(())
}

fn remove_locked<T: Identified>(state: &mut State<T>, id: &str) -> Result<Arc<T>, IndexError> {
    let pos = state
        .registry
        .position(id)
        .ok_or_else(|| IndexError::NotFound { id: id.into() })?;
    if state.grid.vacate(pos, id).is_none() {
        return Err(inconsistency(
            &ObjectId::new(id),
            pos,
            "registered object missing from its cell",
        ));
    }
    let record = state.registry.remove(id)?;
    trace!(id, %pos, "removed");
    Ok(record.object)
}

fn inconsistency(id: &ObjectId, pos: Pos, detail: &str) -> IndexError {
    error!(id = %id, %pos, detail, "spatial index inconsistency");
    IndexError::InternalInconsistency {
        id: id.clone(),
        pos,
        detail: detail.to_owned(),
    }
}

impl<T> fmt::Display for SpatialIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpatialIndex[({} {}) {}]",
            self.torus.width(),
            self.torus.height(),
            self.len()
        )
    }
}
