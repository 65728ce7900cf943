//! Toroid: a concurrent toroidal 2D spatial index.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Toroid sub-crates. For most users, adding `toroid` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // Anything with a stable identity can be indexed.
//! struct Mob {
//!     id: ObjectId,
//!     hostile: bool,
//! }
//! impl Identified for Mob {
//!     fn object_id(&self) -> &ObjectId { &self.id }
//! }
//!
//! // A 64×64 grid that wraps at every edge.
//! let world: SpatialIndex<Mob> = SpatialIndex::new(64, 64).unwrap();
//! world.insert(Mob { id: "rat".into(), hostile: true }, 63, 0).unwrap();
//! world.insert(Mob { id: "cat".into(), hostile: false }, 1, 1).unwrap();
//!
//! // Nearest hostile within radius 3 of the origin, across the seam.
//! let near = OffsetList::disk(3);
//! let hit = world.find_first(&near, 0, 0, |m, _, _| m.hostile).unwrap();
//! assert_eq!(hit.object.id.as_str(), "rat");
//! assert_eq!(hit.pos, Pos::new(63, 0));
//!
//! // Everything visible from the origin, nearest first.
//! let view = world.collect_bounded(&near, 0, 0, 10);
//! assert_eq!(view.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | Identities, positions, the `Identified` trait, index errors |
//! | [`space`] | `toroid-space` | Axis and torus wrap arithmetic, offset sequences |
//! | [`index`] | `toroid-index` | Registry, grid buckets, the concurrent `SpatialIndex` |
//! | [`floor`] | `toroid-floor` | Towers of floors loaded from TOML, portal validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`toroid-core`).
///
/// Contains [`types::ObjectId`], [`types::Pos`], the
/// [`types::Identified`] capability, and [`types::IndexError`].
pub use toroid_core as types;

/// Wrap arithmetic and offset sequences (`toroid-space`).
///
/// Provides [`space::Axis`], [`space::Torus`], and the distance-ordered
/// [`space::OffsetList`] generators.
pub use toroid_space as space;

/// The spatial index (`toroid-index`).
///
/// [`index::SpatialIndex`] is the entry point; [`index::IndexConfig`]
/// builds one from configuration.
pub use toroid_index as index;

/// Towers of floors (`toroid-floor`).
///
/// Load a [`floor::TowerConfig`] and build it with
/// [`floor::FloorManager::init`].
pub use toroid_floor as floor;

/// Common imports for typical Toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
///
/// This imports the most frequently used types: identities and positions,
/// the index and its query results, offsets, and configuration.
pub mod prelude {
    // Core types and traits
    pub use toroid_core::{Identified, ObjectId, Pos};

    // Errors
    pub use toroid_core::IndexError;
    pub use toroid_index::ConfigError;
    pub use toroid_space::SpaceError;

    // Space
    pub use toroid_space::{Offset, OffsetList, Torus};

    // Index
    pub use toroid_index::{
        CompactionPolicy, Hit, IndexConfig, IndexStats, PositionCheck, SpatialIndex, ViewEntry,
    };
}
