//! Integration tests: end-to-end behavior of the spatial index through
//! its public API.

use std::sync::Arc;
use toroid_core::{IndexError, Pos};
use toroid_index::{PositionCheck, SpatialIndex};
use toroid_space::{Offset, OffsetList};
use toroid_test_utils::fixtures::{one_per_cell, CallCounter};
use toroid_test_utils::{objects, TestObject};

fn names(objs: &[Arc<TestObject>]) -> Vec<String> {
    objs.iter().map(|o| o.id.to_string()).collect()
}

// ── Walkthrough ──────────────────────────────────────────────────────

#[test]
fn insert_relocate_remove_on_ten_by_ten() {
    let index = SpatialIndex::<TestObject>::new(10, 10).unwrap();
    let a = TestObject::new("a");

    assert_eq!(index.insert(a.clone(), 12, -1).unwrap(), Pos::new(2, 9));
    assert_eq!(index.position_of("a"), Some(Pos::new(2, 9)));
    assert_eq!(names(&index.all_at(2, 9)), vec!["a"]);

    index.relocate(&a, 5, 5).unwrap();
    assert!(index.all_at(2, 9).is_empty());
    assert_eq!(names(&index.all_at(5, 5)), vec!["a"]);
    assert_eq!(index.len(), 1);

    index.remove(&a).unwrap();
    assert_eq!(index.len(), 0);
    assert!(index.all_at(5, 5).is_empty());
    assert!(index.first_at(5, 5).is_none());
    index.validate().unwrap();
}

#[test]
fn conflict_leaves_prior_state() {
    let index = SpatialIndex::<TestObject>::new(6, 6).unwrap();
    index.insert(TestObject::tagged("a", 1), 0, 0).unwrap();
    index.insert(TestObject::new("b"), 3, 3).unwrap();
    let before = index.stats();

    let err = index.insert(TestObject::tagged("a", 2), 3, 3).unwrap_err();
    assert!(matches!(err, IndexError::IdConflict { .. }));
    assert_eq!(index.stats(), before);
    assert_eq!(index.get("a").unwrap().tag, 1);
    assert_eq!(names(&index.all_at(3, 3)), vec!["b"]);
    index.validate().unwrap();
}

#[test]
fn replace_swaps_instance() {
    let index = SpatialIndex::<TestObject>::new(6, 6).unwrap();
    index.insert(TestObject::tagged("a", 1), 0, 0).unwrap();
    let displaced = index
        .insert_or_replace(TestObject::tagged("a", 2), 1, 1)
        .unwrap()
        .unwrap();
    assert_eq!(displaced.tag, 1);
    assert_eq!(index.get("a").unwrap().tag, 2);
    assert_eq!(index.position_of("a"), Some(Pos::new(1, 1)));
}

#[test]
fn relocate_keeps_registered_instance() {
    let index = SpatialIndex::<TestObject>::new(6, 6).unwrap();
    index.insert(TestObject::tagged("a", 7), 0, 0).unwrap();
    // Any value with the same identity addresses the entry.
    index.relocate(&TestObject::tagged("a", 99), 4, 4).unwrap();
    assert_eq!(index.first_at(4, 4).unwrap().tag, 7);
}

#[test]
fn lookup_by_identity_and_position() {
    let index = SpatialIndex::<TestObject>::new(6, 6).unwrap();
    index.insert(TestObject::new("a"), 2, 2).unwrap();
    assert!(matches!(
        index.get_at("a", 8, -4).unwrap(),
        PositionCheck::Match(_)
    ));
    let err = index.get_at("a", 3, 2).unwrap().into_result().unwrap_err();
    assert_eq!(err.to_string(), "object a is at (2, 2), not (3, 2)");
}

// ── Queries ──────────────────────────────────────────────────────────

#[test]
fn find_first_without_match_visits_every_offset_once() {
    let index = SpatialIndex::<TestObject>::new(9, 9).unwrap();
    let torus = index.torus();
    for p in one_per_cell(&torus) {
        index.insert(p.object, p.x, p.y).unwrap();
    }
    let offsets = OffsetList::square(4);
    let mut counter = CallCounter::new(offsets.len());
    let mut last = None;
    let hit = index.find_first(&offsets, 4, 4, |_, pos, off| {
        let i = offsets
            .iter()
            .position(|o| std::ptr::eq(o, off))
            .unwrap();
        counter.record(i);
        last = Some(pos);
        false
    });
    assert!(hit.is_none());
    assert!(counter.hits().iter().all(|&n| n == 1));
    assert_eq!(counter.total(), offsets.len());
    assert_eq!(last, Some(torus.wrap(8, 8)));
}

#[test]
fn find_first_short_circuits() {
    let index = SpatialIndex::<TestObject>::new(9, 9).unwrap();
    for p in one_per_cell(&index.torus()) {
        index.insert(p.object, p.x, p.y).unwrap();
    }
    let offsets = OffsetList::disk(3);
    let mut calls = 0;
    let hit = index
        .find_first(&offsets, 0, 0, |_, _, off| {
            calls += 1;
            off.dist >= 2.0
        })
        .unwrap();
    // disk order: 1 origin, 4 at distance 1, 4 at sqrt 2, then the first at 2.
    assert_eq!(calls, 10);
    assert_eq!(hit.pos, Pos::new(0, 7));
}

#[test]
fn collect_bounded_in_offset_order_across_the_seam() {
    let index = SpatialIndex::<TestObject>::new(5, 5).unwrap();
    index.insert(TestObject::new("east"), 1, 0).unwrap();
    index.insert(TestObject::new("west"), 4, 0).unwrap();
    index.insert(TestObject::new("here"), 0, 0).unwrap();
    index.insert(TestObject::new("also-here"), 5, 5).unwrap();

    let offsets = OffsetList::disk(1);
    let view = index.collect_bounded(&offsets, 0, 0, 10);
    let got: Vec<(usize, String)> = view
        .iter()
        .map(|e| (e.offset_index, e.object.id.to_string()))
        .collect();
    assert_eq!(
        got,
        vec![
            (0, "here".to_owned()),
            (0, "also-here".to_owned()),
            (2, "west".to_owned()),
            (3, "east".to_owned()),
        ]
    );
    assert_eq!(index.collect_bounded(&offsets, 0, 0, 2).len(), 2);
}

#[test]
fn duplicate_offsets_revisit_cells() {
    let index = SpatialIndex::<TestObject>::new(4, 4).unwrap();
    index.insert(TestObject::new("a"), 1, 1).unwrap();
    let offsets = OffsetList::from_offsets([Offset::new(1, 1), Offset::new(5, -3)]);
    let view = index.collect_bounded(&offsets, 0, 0, 10);
    assert_eq!(view.len(), 2);
    assert_eq!(view[1].offset_index, 1);
}

#[test]
fn iterate_until_walks_in_order_and_stops() {
    let index = SpatialIndex::<TestObject>::new(8, 8).unwrap();
    for p in one_per_cell(&index.torus()) {
        index.insert(p.object, p.x, p.y).unwrap();
    }
    let offsets = OffsetList::disk(2);
    let mut indices = Vec::new();
    let stopped = index.iterate_until(&offsets, 3, 3, |_, _, i, _| {
        indices.push(i);
        i == 6
    });
    assert!(stopped);
    assert_eq!(indices, (0..=6).collect::<Vec<_>>());

    let empty = SpatialIndex::<TestObject>::new(8, 8).unwrap();
    assert!(!empty.iterate_until(&offsets, 0, 0, |_, _, _, _| true));
}

#[test]
fn empty_offset_list_finds_nothing() {
    let index = SpatialIndex::<TestObject>::new(3, 3).unwrap();
    index.insert(TestObject::new("a"), 0, 0).unwrap();
    let none = OffsetList::default();
    assert!(index.find_first(&none, 0, 0, |_, _, _| true).is_none());
    assert!(index.collect_bounded(&none, 0, 0, 5).is_empty());
}

// ── Bulk ─────────────────────────────────────────────────────────────

#[test]
fn drain_then_reuse() {
    let index = SpatialIndex::<TestObject>::new(4, 4).unwrap();
    for p in one_per_cell(&index.torus()) {
        index.insert(p.object, p.x, p.y).unwrap();
    }
    assert_eq!(index.snapshot().len(), 16);
    assert_eq!(index.drain().len(), 16);
    assert!(index.is_empty());
    assert_eq!(index.stats().slots, 0);
    index.insert(TestObject::new("c0_0"), 0, 0).unwrap();
    index.validate().unwrap();
}

#[test]
fn stacked_cell_keeps_order_and_reuses_slots() {
    let index = SpatialIndex::<TestObject>::new(3, 3).unwrap();
    for obj in objects("s", 5) {
        index.insert(obj, 1, 1).unwrap();
    }
    assert_eq!(names(&index.all_at(1, 1)), ["s0", "s1", "s2", "s3", "s4"]);
    assert_eq!(index.get("s3").unwrap().tag, 3);

    index.remove_id("s1").unwrap();
    index.remove_id("s3").unwrap();
    assert_eq!(names(&index.all_at(1, 1)), ["s0", "s2", "s4"]);
    assert_eq!(index.stats().tombstones, 2);

    // New arrivals fill the dead slots before growing the bucket.
    index.insert(TestObject::new("t"), 4, -2).unwrap();
    assert_eq!(names(&index.all_at(1, 1)), ["s0", "t", "s2", "s4"]);
    let stats = index.stats();
    assert_eq!((stats.slots, stats.tombstones, stats.live), (5, 1, 4));
    index.validate().unwrap();
}
