//! Concurrent toroidal 2D spatial index.
//!
//! Tracks uniquely identified objects by grid position on a
//! wrap-around grid and answers proximity queries driven by
//! distance-ordered offset sequences.
//!
//! # Structure
//!
//! - [`Registry`]: identity → object and identity → position, as one map
//! - [`GridIndex`]: position → [`Bucket`] of objects, with tombstoned
//!   slots reused on insertion
//! - [`SpatialIndex`]: both of the above behind one reader/writer lock,
//!   plus the three neighbor queries ([`find_first`], [`collect_bounded`],
//!   [`iterate_until`])
//! - [`IndexConfig`] / [`CompactionPolicy`]: construction parameters
//!
//! [`find_first`]: SpatialIndex::find_first
//! [`collect_bounded`]: SpatialIndex::collect_bounded
//! [`iterate_until`]: SpatialIndex::iterate_until
//!
//! ```
//! use toroid_core::{ObjectId, Pos};
//! use toroid_index::SpatialIndex;
//! use toroid_space::OffsetList;
//!
//! let index: SpatialIndex<ObjectId> = SpatialIndex::new(10, 10).unwrap();
//! index.insert(ObjectId::from("a"), 12, -1).unwrap();
//! index.relocate(&ObjectId::from("a"), 5, 5).unwrap();
//!
//! let view = index.collect_bounded(&OffsetList::disk(3), 4, 4, 8);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].pos, Pos::new(5, 5));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bucket;
pub mod config;
pub mod grid;
pub mod index;
pub mod query;
pub mod registry;

pub use bucket::Bucket;
pub use config::{CompactionPolicy, ConfigError, IndexConfig};
pub use grid::{GridIndex, IndexStats};
pub use index::SpatialIndex;
pub use query::{Hit, PositionCheck, ViewEntry};
pub use registry::{Record, Registry};
