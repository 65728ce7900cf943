//! Torus topology for the Toroid spatial index.
//!
//! This crate owns the wrap arithmetic that folds an unbounded logical
//! plane onto a fixed grid, and the distance-ordered offset sequences
//! that drive proximity scans.
//!
//! # Contents
//!
//! - [`Axis`]: one periodic axis; maps any `i32` onto `[0, len)`
//! - [`Torus`]: two independent axes, cell ranks, torus distances
//! - [`Offset`] / [`OffsetList`]: relative `(dx, dy)` steps ordered by
//!   distance from an origin
//!
//! ```
//! use toroid_space::{Torus, OffsetList};
//! use toroid_core::Pos;
//!
//! let torus = Torus::new(10, 10).unwrap();
//! assert_eq!(torus.wrap(12, -1), Pos::new(2, 9));
//!
//! let ring1 = OffsetList::disk(1);
//! assert_eq!(ring1.len(), 5);
//! assert_eq!((ring1[0].dx, ring1[0].dy), (0, 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod offset;
pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::Axis;
pub use error::SpaceError;
pub use offset::{Offset, OffsetList};
pub use torus::Torus;
