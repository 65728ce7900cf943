//! The tower: every floor, built together and cross-checked.
//!
//! Floors are independent while they are built, so
//! [`FloorManager::init`] builds them in parallel. Cross-floor references
//! (teleport targets, portal pairs) are only checked once every floor
//! exists; checks run in tower order so the reported error is
//! deterministic.

use crate::config::TowerConfig;
use crate::error::FloorError;
use crate::floor::Floor;
use crate::object::{FieldObject, ObjectKind};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use toroid_core::{Identified, ObjectId, Pos};
use tracing::info;

/// Where a portal lives.
#[derive(Clone, Debug)]
pub struct PortalSite {
    /// Index of the floor in tower order.
    pub floor: usize,
    /// The portal object.
    pub portal: Arc<FieldObject>,
    /// Wrapped position on that floor.
    pub pos: Pos,
}

/// A built and validated tower of floors.
#[derive(Debug)]
pub struct FloorManager {
    floors: Vec<Floor>,
    by_name: IndexMap<String, usize>,
    portals: IndexMap<ObjectId, PortalSite>,
}

impl FloorManager {
    /// Build every floor of `tower` and validate the cross references.
    ///
    /// Fails on the first problem found: an empty tower, an oversized or
    /// invalid floor, a duplicate floor name or portal id, a teleport to
    /// an unknown floor, or a portal whose destination is missing or of
    /// an incompatible kind.
    pub fn init(tower: &TowerConfig) -> Result<Self, FloorError> {
        if tower.floors.is_empty() {
            return Err(FloorError::EmptyTower);
        }
        for cfg in &tower.floors {
            let cells = cfg.cell_count();
            if cells > tower.max_floor_cells {
                return Err(FloorError::FloorTooLarge {
                    floor: cfg.name.clone(),
                    cells,
                    max: tower.max_floor_cells,
                });
            }
        }

        let floors: Vec<Floor> = tower
            .floors
            .par_iter()
            .map(Floor::build)
            .collect::<Result<_, _>>()?;

        let mut by_name = IndexMap::with_capacity(floors.len());
        let mut portals: IndexMap<ObjectId, PortalSite> = IndexMap::new();
        for (i, floor) in floors.iter().enumerate() {
            if by_name.insert(floor.name().to_owned(), i).is_some() {
                return Err(FloorError::DuplicateFloor {
                    name: floor.name().to_owned(),
                });
            }
            for (portal, pos) in floor.placed() {
                if !portal.kind().is_portal() {
                    continue;
                }
                let id = portal.object_id().clone();
                if let Some(first) = portals.get(&id) {
                    return Err(FloorError::DuplicatePortal {
                        id,
                        first: floors[first.floor].name().to_owned(),
                        second: floor.name().to_owned(),
                    });
                }
                portals.insert(id, PortalSite { floor: i, portal, pos });
            }
            info!(
                floor = floor.name(),
                width = floor.width(),
                height = floor.height(),
                objects = floor.objects().len(),
                "floor generated"
            );
        }

        let manager = Self {
            floors,
            by_name,
            portals,
        };
        manager.check_teleports()?;
        manager.check_portals()?;
        info!(
            floors = manager.floors.len(),
            portals = manager.portals.len(),
            start = manager.start_floor().name(),
            "tower ready"
        );
        Ok(manager)
    }

    fn check_teleports(&self) -> Result<(), FloorError> {
        for floor in &self.floors {
            for (object, _) in floor.placed() {
                if object.kind() != ObjectKind::Teleport {
                    continue;
                }
                let dst = object.dst_floor().unwrap_or_default();
                if !self.by_name.contains_key(dst) {
                    return Err(FloorError::UnknownFloor {
                        id: object.object_id().clone(),
                        dst_floor: dst.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_portals(&self) -> Result<(), FloorError> {
        for (id, site) in &self.portals {
            let src = &site.portal;
            let dst_id = src
                .dst_portal()
                .cloned()
                .unwrap_or_else(|| ObjectId::new(""));
            let Some(dst) = self.portals.get(&dst_id) else {
                return Err(FloorError::UnknownPortal {
                    id: id.clone(),
                    dst: dst_id,
                });
            };
            if !src.kind().pairs_with(dst.portal.kind()) {
                return Err(FloorError::PortalMismatch {
                    id: id.clone(),
                    kind: src.kind(),
                    dst: dst_id,
                    dst_kind: dst.portal.kind(),
                });
            }
        }
        Ok(())
    }

    /// Floors in tower order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// The first floor of the tower.
    pub fn start_floor(&self) -> &Floor {
        // init rejects empty towers
        &self.floors[0]
    }

    /// The floor named `name`.
    pub fn floor(&self, name: &str) -> Option<&Floor> {
        self.by_name.get(name).map(|&i| &self.floors[i])
    }

    /// The floor at `index` in tower order.
    pub fn floor_at(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }

    /// Where the portal `id` is.
    pub fn portal(&self, id: &str) -> Option<&PortalSite> {
        self.portals.get(id)
    }

    /// Where stepping through portal `id` lands: the destination floor
    /// and the destination portal's position on it.
    pub fn portal_exit(&self, id: &str) -> Option<(&Floor, Pos)> {
        let dst = self.portals.get(id)?.portal.dst_portal()?;
        let site = self.portals.get(dst)?;
        Some((&self.floors[site.floor], site.pos))
    }

    /// Number of floors.
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Always `false`; a manager holds at least one floor.
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Total objects across all floors.
    pub fn object_count(&self) -> usize {
        self.floors.iter().map(|f| f.objects().len()).sum()
    }
}

impl fmt::Display for FloorManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FloorManager[floors:{} portals:{}]",
            self.floors.len(),
            self.portals.len()
        )
    }
}
