//! Two independent periodic axes forming a torus.

use crate::axis::Axis;
use crate::error::SpaceError;
use std::fmt;
use toroid_core::Pos;

/// A `width × height` grid with wrap-around on both axes.
///
/// Motion past one edge reappears at the opposite edge. Each axis wraps
/// independently, so a torus is just two [`Axis`] values; cells are
/// ranked row-major (`y * width + x`) for flat storage.
///
/// # Examples
///
/// ```
/// use toroid_space::Torus;
/// use toroid_core::Pos;
///
/// let t = Torus::new(10, 4).unwrap();
/// assert_eq!(t.cell_count(), 40);
/// assert_eq!(t.wrap(-1, -1), Pos::new(9, 3));
/// assert_eq!(t.rank(Pos::new(9, 3)), 39);
/// assert_eq!(t.chebyshev(Pos::new(0, 0), Pos::new(9, 3)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    x: Axis,
    y: Axis,
}

impl Torus {
    /// Largest accepted `width * height`.
    ///
    /// Indexes allocate one bucket per cell up front, so the ceiling keeps
    /// that allocation within the address space: 2^28 cells on 64-bit
    /// targets, 2^24 elsewhere.
    pub const MAX_CELLS: u64 = if usize::BITS >= 64 { 1 << 28 } else { 1 << 24 };

    /// Create a torus. Both dimensions must be in `1..=i32::MAX` and
    /// their product at most [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        let x = Axis::named("width", width)?;
        let y = Axis::named("height", height)?;
        let cells = u64::from(width) * u64::from(height);
        if cells > Self::MAX_CELLS {
            return Err(SpaceError::TooManyCells {
                width,
                height,
                cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { x, y })
    }

    /// The horizontal axis.
    pub fn x_axis(&self) -> Axis {
        self.x
    }

    /// The vertical axis.
    pub fn y_axis(&self) -> Axis {
        self.y
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.x.len()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.y.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Wrap an arbitrary coordinate pair onto the grid.
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> Pos {
        Pos::new(self.x.wrap(x), self.y.wrap(y))
    }

    /// Wrap `origin + (dx, dy)` without intermediate overflow.
    #[inline]
    pub fn wrap_offset(&self, origin_x: i32, origin_y: i32, dx: i32, dy: i32) -> Pos {
        Pos::new(
            self.x.wrap_offset(origin_x, dx),
            self.y.wrap_offset(origin_y, dy),
        )
    }

    /// Whether `pos` is already wrapped.
    pub fn contains(&self, pos: Pos) -> bool {
        self.x.contains(pos.x) && self.y.contains(pos.y)
    }

    /// Row-major rank of a wrapped position.
    ///
    /// `pos` must satisfy [`contains`](Self::contains); the result is
    /// meaningless otherwise.
    #[inline]
    pub fn rank(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "rank of unwrapped {pos}");
        (pos.y as usize) * (self.width() as usize) + (pos.x as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn pos_of_rank(&self, rank: usize) -> Pos {
        let w = self.width() as usize;
        Pos::new((rank % w) as i32, (rank / w) as i32)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cell_count()).map(move |r| self.pos_of_rank(r))
    }

    /// Chebyshev (king-move) distance on the torus.
    pub fn chebyshev(&self, a: Pos, b: Pos) -> u32 {
        self.x.distance(a.x, b.x).max(self.y.distance(a.y, b.y))
    }

    /// Squared Euclidean distance on the torus.
    pub fn distance_sq(&self, a: Pos, b: Pos) -> u64 {
        let dx = u64::from(self.x.distance(a.x, b.x));
        let dy = u64::from(self.y.distance(a.y, b.y));
        dx * dx + dy * dy
    }
}

impl fmt::Display for Torus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Torus({}x{})", self.width(), self.height())
    }
}
