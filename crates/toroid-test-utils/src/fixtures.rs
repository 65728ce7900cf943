//! Seeded placement fixtures.
//!
//! - [`scatter`]: objects at reproducible random coordinates, including
//!   coordinates far outside the grid so wrap is exercised
//! - [`one_per_cell`]: every cell of a torus occupied exactly once
//! - [`CallCounter`]: counts predicate invocations per offset index

use crate::TestObject;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use toroid_core::Pos;
use toroid_space::Torus;

/// A placement: the object and the raw (unwrapped) coordinates to use.
#[derive(Clone, Debug)]
pub struct Placement {
    pub object: TestObject,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    /// Where the placement lands on `torus`.
    pub fn wrapped(&self, torus: &Torus) -> Pos {
        torus.wrap(self.x, self.y)
    }
}

/// `count` uniquely named objects at seeded coordinates spanning several
/// periods of `torus` in every direction.
pub fn scatter(seed: u64, count: usize, torus: &Torus) -> Vec<Placement> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span_x = torus.width() as i32 * 3;
    let span_y = torus.height() as i32 * 3;
    (0..count)
        .map(|i| Placement {
            object: TestObject::tagged(format!("s{i}"), i as u32),
            x: rng.gen_range(-span_x..=span_x),
            y: rng.gen_range(-span_y..=span_y),
        })
        .collect()
}

/// One object in every cell, named after its coordinates.
pub fn one_per_cell(torus: &Torus) -> Vec<Placement> {
    torus
        .cells()
        .map(|p| Placement {
            object: TestObject::new(format!("c{}_{}", p.x, p.y)),
            x: p.x,
            y: p.y,
        })
        .collect()
}

/// Tallies how often a query reached each offset index.
#[derive(Debug, Default)]
pub struct CallCounter {
    hits: Vec<usize>,
}

impl CallCounter {
    pub fn new(offsets: usize) -> Self {
        Self {
            hits: vec![0; offsets],
        }
    }

    /// Record one visit to `offset_index`.
    pub fn record(&mut self, offset_index: usize) {
        if offset_index >= self.hits.len() {
            self.hits.resize(offset_index + 1, 0);
        }
        self.hits[offset_index] += 1;
    }

    /// Visits per offset index.
    pub fn hits(&self) -> &[usize] {
        &self.hits
    }

    /// Total visits.
    pub fn total(&self) -> usize {
        self.hits.iter().sum()
    }
}
