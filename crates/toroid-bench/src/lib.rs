//! Benchmark profiles and utilities for the Toroid spatial index.
//!
//! Provides pre-populated indices for benchmarking and examples:
//!
//! - [`reference_profile`]: 256x256 grid (64K cells) with 10K objects
//! - [`stress_profile`]: 1024x1024 grid (~1M cells) with 100K objects
//! - [`random_steps`]: deterministic per-object movement deltas via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use toroid_index::SpatialIndex;
use toroid_space::Torus;
use toroid_test_utils::fixtures::{scatter, Placement};
use toroid_test_utils::TestObject;

/// A populated index together with the placements that filled it.
pub struct Profile {
    /// The index under test.
    pub index: SpatialIndex<TestObject>,
    /// Objects in insertion order, with their raw coordinates.
    pub placements: Vec<Placement>,
}

/// Build a `width × height` index holding `count` seeded objects.
///
/// # Panics
///
/// Panics on zero dimensions; benchmark profiles are fixed.
pub fn populated(width: u32, height: u32, count: usize, seed: u64) -> Profile {
    let torus = Torus::new(width, height).unwrap();
    let index = SpatialIndex::new(width, height).unwrap();
    let placements = scatter(seed, count, &torus);
    for p in &placements {
        index.insert(p.object.clone(), p.x, p.y).unwrap();
    }
    Profile { index, placements }
}

/// Reference profile: 256x256 grid (64K cells), 10K objects.
pub fn reference_profile(seed: u64) -> Profile {
    populated(256, 256, 10_000, seed)
}

/// Stress profile: 1024x1024 grid (~1M cells), 100K objects.
pub fn stress_profile(seed: u64) -> Profile {
    populated(1024, 1024, 100_000, seed)
}

/// `n` deterministic movement deltas in `-max_step..=max_step` per axis.
pub fn random_steps(n: usize, max_step: i32, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(-max_step..=max_step),
                rng.gen_range(-max_step..=max_step),
            )
        })
        .collect()
}
