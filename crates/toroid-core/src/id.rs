//! Strongly-typed identifiers and the [`Pos`] cell coordinate.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Stable, caller-assigned identity of a stored object.
///
/// An immutable string token. The index never interprets its contents;
/// it is only hashed and compared. Cloning is a reference-count bump,
/// so ids can be copied into registry keys and error values freely.
///
/// `ObjectId` borrows as `str`, which lets maps keyed by `ObjectId`
/// be queried with a plain `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    /// Create an id from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:?})", &*self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(v: &str) -> Self {
        Self(Arc::from(v))
    }
}

impl From<String> for ObjectId {
    fn from(v: String) -> Self {
        Self(Arc::from(v))
    }
}

/// A cell position on the grid.
///
/// Positions recorded by the index are always wrapped, i.e.
/// `0 <= x < width` and `0 <= y < height`. Caller-supplied coordinates
/// are plain `i32` pairs and may lie anywhere on the logical plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pos {
    /// Construct a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Pos> for (i32, i32) {
    fn from(p: Pos) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn object_id_borrows_as_str() {
        let mut map: HashMap<ObjectId, u32> = HashMap::new();
        map.insert(ObjectId::new("goblin-7"), 7);
        assert_eq!(map.get("goblin-7"), Some(&7));
        assert_eq!(map.get("goblin-8"), None);
    }

    #[test]
    fn object_id_clone_shares_storage() {
        let a = ObjectId::from("portal");
        let b = a.clone();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn object_id_display_is_raw_token() {
        assert_eq!(ObjectId::from(String::from("x1")).to_string(), "x1");
        assert_eq!(format!("{:?}", ObjectId::from("x1")), "ObjectId(\"x1\")");
    }

    #[test]
    fn pos_tuple_conversions() {
        let p: Pos = (3, -4).into();
        assert_eq!(p, Pos::new(3, -4));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (3, -4));
        assert_eq!(p.to_string(), "(3, -4)");
    }
}
