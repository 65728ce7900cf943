//! A single floor: a named toroidal grid of field objects.

use crate::config::{FloorConfig, ObjectConfig};
use crate::error::FloorError;
use crate::object::{FieldObject, ObjectKind};
use std::fmt;
use std::sync::Arc;
use toroid_core::{Identified, ObjectId, Pos};
use toroid_index::SpatialIndex;
use tracing::{debug, warn};

/// A populated floor.
#[derive(Debug)]
pub struct Floor {
    name: String,
    objects: SpatialIndex<FieldObject>,
}

impl Floor {
    /// Build a floor and place every configured object on it.
    ///
    /// Coordinates outside the grid are wrapped, with a warning.
    pub fn build(config: &FloorConfig) -> Result<Self, FloorError> {
        let objects = SpatialIndex::with_config(config.index_config()).map_err(|source| {
            FloorError::Config {
                floor: config.name.clone(),
                source,
            }
        })?;
        let torus = objects.torus();

        for placement in &config.objects {
            let object = field_object(&config.name, placement)?;
            let pos = objects
                .insert(object, placement.x, placement.y)
                .map_err(|source| FloorError::Placement {
                    floor: config.name.clone(),
                    source,
                })?;
            if !torus.contains(Pos::new(placement.x, placement.y)) {
                warn!(
                    floor = %config.name,
                    id = %placement.id,
                    x = placement.x,
                    y = placement.y,
                    %pos,
                    "object placed outside the grid, wrapped"
                );
            }
        }

        debug!(floor = %config.name, %torus, objects = objects.len(), "floor built");
        Ok(Self {
            name: config.name.clone(),
            objects,
        })
    }

    /// The floor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The floor's object index.
    pub fn objects(&self) -> &SpatialIndex<FieldObject> {
        &self.objects
    }

    /// Grid columns.
    pub fn width(&self) -> u32 {
        self.objects.torus().width()
    }

    /// Grid rows.
    pub fn height(&self) -> u32 {
        self.objects.torus().height()
    }

    /// Every object with its position, in placement order.
    pub fn placed(&self) -> Vec<(Arc<FieldObject>, Pos)> {
        self.objects
            .snapshot()
            .into_iter()
            .filter_map(|o| {
                let pos = self.objects.position_of(o.object_id().as_str())?;
                Some((o, pos))
            })
            .collect()
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor[{} {}]", self.name, self.objects)
    }
}

fn field_object(floor: &str, placement: &ObjectConfig) -> Result<FieldObject, FloorError> {
    let id = ObjectId::new(&placement.id);
    let missing = || FloorError::MissingDestination {
        floor: floor.to_owned(),
        id: id.clone(),
        kind: placement.kind,
    };
    Ok(match placement.kind {
        kind if kind.is_portal() => {
            let dst = placement.dst_portal.as_deref().ok_or_else(missing)?;
            FieldObject::portal(id.clone(), kind, dst)
        }
        ObjectKind::Teleport => {
            let dst = placement.dst_floor.as_deref().ok_or_else(missing)?;
            FieldObject::teleport(id.clone(), dst)
        }
        _ => FieldObject::decoration(id.clone()),
    })
}
