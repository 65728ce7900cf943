//! Error types for tower loading, floor building, and tower validation.

use crate::object::ObjectKind;
use std::path::PathBuf;
use thiserror::Error;
use toroid_core::{IndexError, ObjectId};
use toroid_index::ConfigError;

/// Everything that can go wrong between a tower file and a validated
/// [`FloorManager`](crate::FloorManager).
#[derive(Debug, Error)]
pub enum FloorError {
    /// The tower file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The tower file is not valid TOML for a tower.
    #[error("invalid tower file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The tower has no floors.
    #[error("tower has no floors")]
    EmptyTower,
    /// A floor's grid parameters are invalid.
    #[error("floor {floor}: {source}")]
    Config {
        /// Floor name.
        floor: String,
        /// What was wrong.
        source: ConfigError,
    },
    /// A floor exceeds the tower's cell limit.
    #[error("floor {floor} has {cells} cells, limit is {max}")]
    FloorTooLarge {
        /// Floor name.
        floor: String,
        /// `width * height`.
        cells: usize,
        /// The configured limit.
        max: usize,
    },
    /// An object could not be placed.
    #[error("floor {floor}: {source}")]
    Placement {
        /// Floor name.
        floor: String,
        /// Index failure.
        source: IndexError,
    },
    /// A portal or teleport was configured without its destination.
    #[error("floor {floor}: {kind} {id} has no destination")]
    MissingDestination {
        /// Floor name.
        floor: String,
        /// Object id.
        id: ObjectId,
        /// Object kind.
        kind: ObjectKind,
    },
    /// Two floors share a name.
    #[error("duplicate floor name {name}")]
    DuplicateFloor {
        /// The repeated name.
        name: String,
    },
    /// Two portals share an id somewhere in the tower.
    #[error("duplicate portal id {id} on floors {first} and {second}")]
    DuplicatePortal {
        /// The repeated id.
        id: ObjectId,
        /// Floor of the first occurrence.
        first: String,
        /// Floor of the second occurrence.
        second: String,
    },
    /// A teleport names a floor that does not exist.
    #[error("teleport {id} leads to unknown floor {dst_floor}")]
    UnknownFloor {
        /// Teleport id.
        id: ObjectId,
        /// The missing floor name.
        dst_floor: String,
    },
    /// A portal's destination portal does not exist.
    #[error("portal {id} leads to unknown portal {dst}")]
    UnknownPortal {
        /// Source portal id.
        id: ObjectId,
        /// Missing destination id.
        dst: ObjectId,
    },
    /// A portal leads to a portal of an incompatible kind.
    #[error("portal {id} ({kind}) cannot lead to {dst} ({dst_kind})")]
    PortalMismatch {
        /// Source portal id.
        id: ObjectId,
        /// Source portal kind.
        kind: ObjectKind,
        /// Destination portal id.
        dst: ObjectId,
        /// Destination portal kind.
        dst_kind: ObjectKind,
    },
}
