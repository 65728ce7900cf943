//! Tower configuration loaded from TOML.
//!
//! A tower is an ordered list of floors. Each floor names its grid size,
//! an optional tombstone compaction policy, and the objects to place:
//!
//! ```toml
//! [[floors]]
//! name = "lobby"
//! width = 32
//! height = 32
//!
//! [[floors.objects]]
//! id = "lobby-up"
//! x = 4
//! y = 4
//! kind = "portal_in_out"
//! dst_portal = "attic-down"
//! ```

use crate::error::FloorError;
use crate::object::ObjectKind;
use serde::Deserialize;
use std::path::Path;
use toroid_index::{CompactionPolicy, IndexConfig};

/// Largest floor, in cells, a tower accepts by default.
pub const DEFAULT_MAX_FLOOR_CELLS: usize = 1 << 20;

fn default_max_floor_cells() -> usize {
    DEFAULT_MAX_FLOOR_CELLS
}

/// A whole tower. The first floor is the start floor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TowerConfig {
    /// Upper bound on `width * height` for every floor.
    #[serde(default = "default_max_floor_cells")]
    pub max_floor_cells: usize,
    /// Floors in tower order.
    #[serde(default)]
    pub floors: Vec<FloorConfig>,
}

impl TowerConfig {
    /// Parse a tower from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, FloorError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a tower file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FloorError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FloorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// One floor of a tower.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FloorConfig {
    /// Unique floor name; teleports refer to floors by it.
    pub name: String,
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Tombstone compaction for the floor's object index.
    #[serde(default)]
    pub compaction: CompactionPolicy,
    /// Objects to place when the floor is built.
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl FloorConfig {
    /// The index configuration for this floor.
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::new(self.width, self.height).with_compaction(self.compaction)
    }

    /// Number of cells, saturating.
    pub fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// One object placement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectConfig {
    /// Tower-unique id for portals, floor-unique for everything else.
    pub id: String,
    /// Column; wrapped onto the floor.
    pub x: i32,
    /// Row; wrapped onto the floor.
    pub y: i32,
    /// What the object does.
    pub kind: ObjectKind,
    /// Paired portal id, required for portals.
    #[serde(default)]
    pub dst_portal: Option<String>,
    /// Destination floor name, required for teleports.
    #[serde(default)]
    pub dst_floor: Option<String>,
}
