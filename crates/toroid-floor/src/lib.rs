//! A tower of toroidal floors built on the Toroid spatial index.
//!
//! Each [`Floor`] is a named [`SpatialIndex`](toroid_index::SpatialIndex)
//! of [`FieldObject`]s populated from a declarative [`TowerConfig`].
//! [`FloorManager::init`] builds all floors in parallel and then checks
//! the references between them: floor names, portal ids, teleport
//! targets, and portal pairing.
//!
//! ```
//! use toroid_floor::{FloorManager, TowerConfig};
//!
//! let tower = TowerConfig::from_toml_str(r#"
//!     [[floors]]
//!     name = "ground"
//!     width = 16
//!     height = 16
//!
//!     [[floors.objects]]
//!     id = "stairs"
//!     x = 3
//!     y = 3
//!     kind = "teleport"
//!     dst_floor = "ground"
//! "#).unwrap();
//!
//! let manager = FloorManager::init(&tower).unwrap();
//! assert_eq!(manager.start_floor().name(), "ground");
//! assert_eq!(manager.object_count(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod floor;
pub mod manager;
pub mod object;

pub use config::{FloorConfig, ObjectConfig, TowerConfig, DEFAULT_MAX_FLOOR_CELLS};
pub use error::FloorError;
pub use floor::Floor;
pub use manager::{FloorManager, PortalSite};
pub use object::{FieldObject, ObjectKind};
