//! Error types for spatial index operations.
//!
//! Every failure is reported to the caller as an [`IndexError`]; no
//! operation retries internally and none aborts the process.

use crate::id::{ObjectId, Pos};
use thiserror::Error;

/// Errors from registry, grid, and spatial index operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Insert of an identity that is already registered.
    #[error("object {id} is already registered")]
    IdConflict {
        /// The conflicting identity.
        id: ObjectId,
    },
    /// The referenced identity is not registered.
    #[error("object {id} not found")]
    NotFound {
        /// The missing identity.
        id: ObjectId,
    },
    /// The identity exists but its recorded position differs from the
    /// position the caller asserted.
    #[error("object {id} is at {recorded}, not {requested}")]
    PositionMismatch {
        /// The identity that was found.
        id: ObjectId,
        /// Where the index has it.
        recorded: Pos,
        /// Where the caller expected it (already wrapped).
        requested: Pos,
    },
    /// The registry and the grid disagree about an identity.
    ///
    /// Signals a broken invariant. Unreachable in a correct build, but
    /// always surfaced as a recoverable error so the caller decides how
    /// severe it is.
    #[error("index inconsistency for {id} at {pos}: {detail}")]
    InternalInconsistency {
        /// The identity involved.
        id: ObjectId,
        /// The cell that was inspected.
        pos: Pos,
        /// What disagreed.
        detail: String,
    },
}

impl IndexError {
    /// The identity the error refers to.
    pub fn id(&self) -> &ObjectId {
        match self {
            Self::IdConflict { id }
            | Self::NotFound { id }
            | Self::PositionMismatch { id, .. }
            | Self::InternalInconsistency { id, .. } => id,
        }
    }

    /// Shorthand for [`IndexError::NotFound`].
    pub fn not_found(id: &ObjectId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    /// Shorthand for [`IndexError::IdConflict`].
    pub fn conflict(id: &ObjectId) -> Self {
        Self::IdConflict { id: id.clone() }
    }
}
