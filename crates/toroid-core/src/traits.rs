//! The identity capability stored values must provide.

use crate::id::ObjectId;
use std::sync::Arc;

/// Anything the spatial index can store.
///
/// The only requirement is a stable, unique identity. The id must not
/// change while the value is registered: the index keys its registry and
/// bucket scans on it, and an id that drifts would strand the entry.
///
/// # Examples
///
/// ```
/// use toroid_core::{Identified, ObjectId};
///
/// struct Monster {
///     id: ObjectId,
///     hp: u32,
/// }
///
/// impl Identified for Monster {
///     fn object_id(&self) -> &ObjectId {
///         &self.id
///     }
/// }
///
/// let m = Monster { id: "orc-1".into(), hp: 12 };
/// assert_eq!(m.object_id().as_str(), "orc-1");
/// # let _ = m.hp;
/// ```
pub trait Identified {
    /// The object's identity.
    fn object_id(&self) -> &ObjectId;
}

impl Identified for ObjectId {
    fn object_id(&self) -> &ObjectId {
        self
    }
}

impl<T: Identified + ?Sized> Identified for Arc<T> {
    fn object_id(&self) -> &ObjectId {
        (**self).object_id()
    }
}

impl<T: Identified + ?Sized> Identified for Box<T> {
    fn object_id(&self) -> &ObjectId {
        (**self).object_id()
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn object_id(&self) -> &ObjectId {
        (**self).object_id()
    }
}
