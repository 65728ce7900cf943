//! Distance-ordered neighbor offset sequences.
//!
//! An [`OffsetList`] is the input to every proximity query: a list of
//! relative `(dx, dy)` steps from an origin, walked in order. Queries
//! consume the sequence exactly as given. [`OffsetList::disk`] and
//! [`OffsetList::square`] build the usual nearest-first orderings;
//! [`OffsetList::from_offsets`] accepts any caller-built sequence without
//! sorting, deduplicating, or validating it.

use std::ops::Deref;

/// One relative step from a query origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    /// Horizontal delta.
    pub dx: i32,
    /// Vertical delta.
    pub dy: i32,
    /// Euclidean length of `(dx, dy)`, carried for caller predicates.
    pub dist: f64,
}

impl Offset {
    /// Create an offset, computing its Euclidean length.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx,
            dy,
            dist: f64::from(dx).hypot(f64::from(dy)),
        }
    }

    /// Chebyshev ring the offset lies on (`0` for the origin itself).
    pub fn ring(&self) -> u32 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }

    fn dist_sq(&self) -> i64 {
        let dx = i64::from(self.dx);
        let dy = i64::from(self.dy);
        dx * dx + dy * dy
    }
}

/// An ordered sequence of [`Offset`]s.
///
/// Dereferences to `[Offset]`, which is what the index queries take.
///
/// # Examples
///
/// ```
/// use toroid_space::{Offset, OffsetList};
///
/// let near = OffsetList::disk(2);
/// // Origin first, then the four orthogonal unit steps.
/// assert_eq!(near[0].dist, 0.0);
/// assert!(near[1..5].iter().all(|o| o.dist == 1.0));
/// assert!(near.windows(2).all(|w| w[0].dist <= w[1].dist));
///
/// // Caller-supplied order is preserved verbatim.
/// let custom = OffsetList::from_offsets([Offset::new(3, 0), Offset::new(0, 0)]);
/// assert_eq!(custom[0].dx, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetList {
    offsets: Vec<Offset>,
}

impl OffsetList {
    /// Every offset with `dx² + dy² <= radius²`, nearest first.
    ///
    /// Ties at equal distance are ordered by `(dy, dx)` so the sequence is
    /// deterministic.
    pub fn disk(radius: u32) -> Self {
        let r = i64::from(radius.min(i32::MAX as u32));
        let r_sq = r * r;
        let mut offsets: Vec<Offset> = square_cells(radius)
            .filter(|o| o.dist_sq() <= r_sq)
            .collect();
        offsets.sort_by_key(|o| (o.dist_sq(), o.dy, o.dx));
        Self { offsets }
    }

    /// Every offset with `max(|dx|, |dy|) <= radius`, ring by ring.
    ///
    /// Within a ring, offsets are ordered by Euclidean distance, then by
    /// `(dy, dx)`.
    pub fn square(radius: u32) -> Self {
        let mut offsets: Vec<Offset> = square_cells(radius).collect();
        offsets.sort_by_key(|o| (o.ring(), o.dist_sq(), o.dy, o.dx));
        Self { offsets }
    }

    /// Wrap an arbitrary sequence, keeping its order.
    pub fn from_offsets(offsets: impl IntoIterator<Item = Offset>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// The offsets as a slice.
    pub fn as_slice(&self) -> &[Offset] {
        &self.offsets
    }

    /// Consume the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<Offset> {
        self.offsets
    }
}

/// All offsets of the `(2r+1)²` square, unordered.
fn square_cells(radius: u32) -> impl Iterator<Item = Offset> {
    let r = radius.min(i32::MAX as u32) as i32;
    (-r..=r).flat_map(move |dy| (-r..=r).map(move |dx| Offset::new(dx, dy)))
}

impl Deref for OffsetList {
    type Target = [Offset];

    fn deref(&self) -> &[Offset] {
        &self.offsets
    }
}

impl AsRef<[Offset]> for OffsetList {
    fn as_ref(&self) -> &[Offset] {
        &self.offsets
    }
}

impl FromIterator<Offset> for OffsetList {
    fn from_iter<I: IntoIterator<Item = Offset>>(iter: I) -> Self {
        Self::from_offsets(iter)
    }
}

impl<'a> IntoIterator for &'a OffsetList {
    type Item = &'a Offset;
    type IntoIter = std::slice::Iter<'a, Offset>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

impl IntoIterator for OffsetList {
    type Item = Offset;
    type IntoIter = std::vec::IntoIter<Offset>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use proptest::prelude::*;

    #[test]
    fn disk_zero_is_origin_only() {
        let d = OffsetList::disk(0);
        assert_eq!(d.len(), 1);
        assert_eq!((d[0].dx, d[0].dy), (0, 0));
        assert_eq!(d[0].ring(), 0);
    }

    #[test]
    fn disk_radius_one_is_plus_shape() {
        let d = OffsetList::disk(1);
        let steps: Vec<_> = d.iter().map(|o| (o.dx, o.dy)).collect();
        assert_eq!(steps, vec![(0, 0), (0, -1), (-1, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn disk_radius_two_cell_count() {
        // Lattice points with x² + y² <= 4: 1 + 4 + 4 + 4 = 13.
        assert_eq!(OffsetList::disk(2).len(), 13);
    }

    #[test]
    fn square_orders_by_ring() {
        let s = OffsetList::square(2);
        assert_eq!(s.len(), 25);
        assert!(s.windows(2).all(|w| w[0].ring() <= w[1].ring()));
        assert_eq!(s[0].ring(), 0);
        assert!(s[1..9].iter().all(|o| o.ring() == 1));
        // Orthogonal neighbours come before diagonals within ring 1.
        assert!(s[1..5].iter().all(|o| o.dist == 1.0));
    }

    #[test]
    fn from_offsets_keeps_duplicates_and_order() {
        let l: OffsetList = [Offset::new(1, 1), Offset::new(0, 0), Offset::new(1, 1)]
            .into_iter()
            .collect();
        let steps: Vec<_> = l.iter().map(|o| (o.dx, o.dy)).collect();
        assert_eq!(steps, vec![(1, 1), (0, 0), (1, 1)]);
    }

    #[test]
    fn offset_dist_metadata() {
        assert_eq!(Offset::new(3, -4).dist, 5.0);
        assert_eq!(Offset::new(-3, 2).ring(), 3);
    }

    proptest! {
        #[test]
        fn disk_is_sorted_unique_and_bounded(radius in 0u32..12) {
            let d = OffsetList::disk(radius);
            let r = f64::from(radius);
            prop_assert!(d.windows(2).all(|w| w[0].dist <= w[1].dist));
            prop_assert!(d.iter().all(|o| o.dist <= r + 1e-9));
            let unique: IndexSet<(i32, i32)> = d.iter().map(|o| (o.dx, o.dy)).collect();
            prop_assert_eq!(unique.len(), d.len());
        }

        #[test]
        fn square_covers_whole_square(radius in 0u32..12) {
            let s = OffsetList::square(radius);
            let side = 2 * radius as usize + 1;
            prop_assert_eq!(s.len(), side * side);
        }
    }
}
