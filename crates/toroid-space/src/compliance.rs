//! Torus compliance test helpers.
//!
//! These functions verify that a [`Torus`] satisfies the invariants the
//! spatial index relies on. Reused across the torus test module with
//! several grid shapes.

use crate::torus::Torus;
use indexmap::IndexSet;

/// Assert that wrapping an already-wrapped cell returns it unchanged.
pub fn assert_wrap_idempotent(t: &Torus) {
    for p in t.cells() {
        let w = t.wrap(p.x, p.y);
        assert_eq!(w, p, "wrap({p}) = {w}, expected identity");
    }
}

/// Assert that shifting by a whole period on either axis is a no-op.
pub fn assert_wrap_periodic(t: &Torus) {
    let w = t.width() as i32;
    let h = t.height() as i32;
    for p in t.cells() {
        for k in [-2, -1, 1, 2] {
            assert_eq!(t.wrap(p.x + k * w, p.y), p, "x period {k} broke {p}");
            assert_eq!(t.wrap(p.x, p.y + k * h), p, "y period {k} broke {p}");
        }
    }
}

/// Assert that `rank` and `pos_of_rank` are inverse bijections.
pub fn assert_rank_bijective(t: &Torus) {
    let ranks: IndexSet<usize> = t.cells().map(|p| t.rank(p)).collect();
    assert_eq!(ranks.len(), t.cell_count(), "rank has collisions");
    for r in 0..t.cell_count() {
        let p = t.pos_of_rank(r);
        assert!(t.contains(p), "pos_of_rank({r}) = {p} is outside the torus");
        assert_eq!(t.rank(p), r, "rank(pos_of_rank({r})) != {r}");
    }
}

/// Assert that the cell iterator is complete and duplicate-free.
pub fn assert_cells_complete(t: &Torus) {
    let cells: IndexSet<_> = t.cells().collect();
    assert_eq!(
        cells.len(),
        t.cell_count(),
        "cells() yielded {} unique cells, expected {}",
        cells.len(),
        t.cell_count()
    );
}

/// Assert that torus distances are reflexive and symmetric.
pub fn assert_distance_symmetric(t: &Torus) {
    let cells: Vec<_> = t.cells().collect();
    for &a in &cells {
        assert_eq!(t.chebyshev(a, a), 0, "chebyshev({a}, {a}) != 0");
        for &b in &cells {
            assert_eq!(t.chebyshev(a, b), t.chebyshev(b, a));
            assert_eq!(t.distance_sq(a, b), t.distance_sq(b, a));
        }
    }
}

/// Run all compliance checks on a torus.
pub fn run_full_compliance(t: &Torus) {
    assert_wrap_idempotent(t);
    assert_wrap_periodic(t);
    assert_rank_bijective(t);
    assert_cells_complete(t);
    assert_distance_symmetric(t);
}
