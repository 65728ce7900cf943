//! A single periodic axis (always-wrap boundary).

use crate::error::SpaceError;

/// One axis of a torus.
///
/// Maps any signed coordinate onto `[0, len)` with true mathematical
/// modulo: negative inputs wrap forward, so `-1` lands on `len - 1`
/// rather than staying negative as a truncating remainder would.
///
/// # Examples
///
/// ```
/// use toroid_space::Axis;
///
/// let axis = Axis::new(10).unwrap();
/// assert_eq!(axis.wrap(-1), 9);
/// assert_eq!(axis.wrap(12), 2);
/// assert_eq!(axis.wrap(i32::MIN), axis.wrap(i32::MIN + 10));
///
/// // Wrap-around distance: 0 and 9 are 1 step apart, not 9.
/// assert_eq!(axis.distance(0, 9), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axis {
    len: u32,
}

impl Axis {
    /// Maximum length: coordinates use `i32`, so `len` must fit.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a periodic axis with `len` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        Self::named("len", len)
    }

    /// Like [`new`](Self::new) but reports `name` in the error.
    pub(crate) fn named(name: &'static str, len: u32) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name,
                value: len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { len })
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fold `v` into `[0, len)`.
    #[inline]
    pub fn wrap(&self, v: i32) -> i32 {
        // len <= i32::MAX, so the cast is lossless and the divisor positive.
        v.rem_euclid(self.len as i32)
    }

    /// Fold `base + delta` into `[0, len)` without overflowing `i32`.
    #[inline]
    pub fn wrap_offset(&self, base: i32, delta: i32) -> i32 {
        let sum = i64::from(base) + i64::from(delta);
        sum.rem_euclid(i64::from(self.len)) as i32
    }

    /// Whether `v` is already a wrapped coordinate.
    #[inline]
    pub fn contains(&self, v: i32) -> bool {
        v >= 0 && (v as u32) < self.len
    }

    /// Shortest number of steps between `a` and `b` around the ring.
    ///
    /// Inputs are wrapped first, so any pair of coordinates is accepted.
    pub fn distance(&self, a: i32, b: i32) -> u32 {
        let diff = self.wrap(a).abs_diff(self.wrap(b));
        diff.min(self.len - diff)
    }
}
