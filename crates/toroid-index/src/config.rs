//! Index configuration, validation, and error types.
//!
//! [`IndexConfig`] is the builder-input for [`SpatialIndex::with_config`].
//! It deserializes from TOML or any other `serde` format so it can be
//! embedded in larger configuration files.
//!
//! [`SpatialIndex::with_config`]: crate::SpatialIndex::with_config

use serde::Deserialize;
use thiserror::Error;
use toroid_space::{SpaceError, Torus};

// ── CompactionPolicy ───────────────────────────────────────────────

/// When a bucket's tombstones are squeezed out.
///
/// Tombstones make removal cheap but accumulate under churn. The default
/// never compacts implicitly; callers can still run
/// [`SpatialIndex::compact`](crate::SpatialIndex::compact) themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CompactionPolicy {
    /// Keep tombstones until an explicit compaction pass.
    #[default]
    Never,
    /// Compact a bucket right after a removal when it has at least
    /// `min_slots` slots and more than `max_ratio` of them are tombstones.
    TombstoneRatio {
        /// Buckets smaller than this are left alone.
        min_slots: usize,
        /// Tombstone fraction, in `(0, 1]`, above which to compact.
        max_ratio: f64,
    },
}

impl CompactionPolicy {
    /// Whether a bucket with `slots` slots and `tombstones` dead ones
    /// should be compacted now.
    pub fn should_compact(&self, slots: usize, tombstones: usize) -> bool {
        match *self {
            Self::Never => false,
            Self::TombstoneRatio {
                min_slots,
                max_ratio,
            } => slots > 0 && slots >= min_slots && tombstones as f64 / slots as f64 > max_ratio,
        }
    }
}

// ── IndexConfig ────────────────────────────────────────────────────

/// Construction parameters for a spatial index.
///
/// ```
/// use toroid_index::{CompactionPolicy, IndexConfig};
///
/// let cfg: IndexConfig = toml::from_str(r#"
///     width = 64
///     height = 32
///     [compaction]
///     mode = "tombstone_ratio"
///     min_slots = 8
///     max_ratio = 0.5
/// "#).unwrap();
/// assert_eq!(cfg.width, 64);
/// assert!(matches!(cfg.compaction, CompactionPolicy::TombstoneRatio { .. }));
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct IndexConfig {
    /// Number of columns. Must be in `1..=i32::MAX`.
    pub width: u32,
    /// Number of rows. Must be in `1..=i32::MAX`, with `width * height`
    /// at most [`Torus::MAX_CELLS`].
    pub height: u32,
    /// Tombstone compaction policy. Default: [`CompactionPolicy::Never`].
    #[serde(default)]
    pub compaction: CompactionPolicy,
}

impl IndexConfig {
    /// A config with the given dimensions and default policy.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            compaction: CompactionPolicy::default(),
        }
    }

    /// Replace the compaction policy.
    pub fn with_compaction(mut self, compaction: CompactionPolicy) -> Self {
        self.compaction = compaction;
        self
    }

    /// Check structural invariants and build the torus.
    pub fn validate(&self) -> Result<Torus, ConfigError> {
        let torus = Torus::new(self.width, self.height)?;
        if let CompactionPolicy::TombstoneRatio { max_ratio, .. } = self.compaction {
            if !max_ratio.is_finite() || max_ratio <= 0.0 || max_ratio > 1.0 {
                return Err(ConfigError::InvalidCompaction { max_ratio });
            }
        }
        Ok(torus)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`IndexConfig::validate`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    #[error("invalid grid dimensions: {0}")]
    Space(#[from] SpaceError),
    /// Compaction ratio is NaN, infinite, or outside `(0, 1]`.
    #[error("compaction max_ratio must be in (0, 1], got {max_ratio}")]
    InvalidCompaction {
        /// The invalid value.
        max_ratio: f64,
    },
}
