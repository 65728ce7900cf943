//! Field objects: the things placed on a floor.

use serde::Deserialize;
use std::fmt;
use toroid_core::{Identified, ObjectId};

/// What a field object does when something steps on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Two-way portal; pairs with another two-way portal.
    PortalInOut,
    /// Entry-only portal; leads to an exit portal.
    PortalIn,
    /// Entry portal that fires without an explicit action.
    PortalAutoIn,
    /// Exit-only portal; the far end of an entry portal.
    PortalOut,
    /// Sends whatever triggers it to another floor.
    Teleport,
    /// Inert scenery.
    Decoration,
}

impl ObjectKind {
    /// Whether this kind takes part in portal pairing.
    pub fn is_portal(self) -> bool {
        matches!(
            self,
            Self::PortalInOut | Self::PortalIn | Self::PortalAutoIn | Self::PortalOut
        )
    }

    /// Whether a portal of this kind may lead to a portal of kind `dst`.
    pub fn pairs_with(self, dst: ObjectKind) -> bool {
        match self {
            Self::PortalInOut => dst == Self::PortalInOut,
            Self::PortalIn | Self::PortalAutoIn => dst == Self::PortalOut,
            Self::PortalOut => matches!(dst, Self::PortalIn | Self::PortalAutoIn),
            Self::Teleport | Self::Decoration => false,
        }
    }

    /// Snake-case name as written in tower files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PortalInOut => "portal_in_out",
            Self::PortalIn => "portal_in",
            Self::PortalAutoIn => "portal_auto_in",
            Self::PortalOut => "portal_out",
            Self::Teleport => "teleport",
            Self::Decoration => "decoration",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object stored in a floor's spatial index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldObject {
    id: ObjectId,
    kind: ObjectKind,
    dst_portal: Option<ObjectId>,
    dst_floor: Option<String>,
}

impl FieldObject {
    /// A portal leading to `dst_portal`.
    pub fn portal(id: impl Into<ObjectId>, kind: ObjectKind, dst_portal: impl Into<ObjectId>) -> Self {
        Self {
            id: id.into(),
            kind,
            dst_portal: Some(dst_portal.into()),
            dst_floor: None,
        }
    }

    /// A teleport to the floor named `dst_floor`.
    pub fn teleport(id: impl Into<ObjectId>, dst_floor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ObjectKind::Teleport,
            dst_portal: None,
            dst_floor: Some(dst_floor.into()),
        }
    }

    /// Scenery with no behavior.
    pub fn decoration(id: impl Into<ObjectId>) -> Self {
        Self {
            id: id.into(),
            kind: ObjectKind::Decoration,
            dst_portal: None,
            dst_floor: None,
        }
    }

    /// The object's kind.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Paired portal id, for portals.
    pub fn dst_portal(&self) -> Option<&ObjectId> {
        self.dst_portal.as_ref()
    }

    /// Destination floor name, for teleports.
    pub fn dst_floor(&self) -> Option<&str> {
        self.dst_floor.as_deref()
    }
}

impl Identified for FieldObject {
    fn object_id(&self) -> &ObjectId {
        &self.id
    }
}

impl fmt::Display for FieldObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}", self.id, self.kind)?;
        if let Some(dst) = &self.dst_portal {
            write!(f, " -> {dst}")?;
        }
        if let Some(dst) = &self.dst_floor {
            write!(f, " -> floor {dst}")?;
        }
        f.write_str("]")
    }
}
