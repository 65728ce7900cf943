//! Wandering agents example.
//!
//! Demonstrates: populate an index → move every agent each tick → count
//! neighbours with a bounded view query → compact tombstones → drain.

use toroid_bench::{random_steps, reference_profile};
use toroid_space::OffsetList;

fn main() {
    println!("=== Toroid Wander Example ===\n");

    let profile = reference_profile(42);
    let index = &profile.index;
    let view = OffsetList::disk(4);
    let mut positions: Vec<(i32, i32)> = profile.placements.iter().map(|p| (p.x, p.y)).collect();

    for tick in 0..100u64 {
        let steps = random_steps(positions.len(), 1, tick);
        for ((p, pos), (dx, dy)) in profile.placements.iter().zip(&mut positions).zip(steps) {
            pos.0 += dx;
            pos.1 += dy;
            index.relocate(&p.object, pos.0, pos.1).unwrap();
        }

        if tick % 25 == 0 || tick == 99 {
            let (x, y) = positions[0];
            let seen = index.collect_bounded(&view, x, y, 16);
            let stats = index.stats();
            println!(
                "  tick {:>3}: agent0 sees {:>2}, occupied={:>5}, tombstones={:>5}",
                tick + 1,
                seen.len(),
                stats.occupied_cells,
                stats.tombstones,
            );
        }
    }

    println!("\ncompacted {} slots", index.compact());
    println!("{index}");
    let drained = index.drain();
    println!("drained {} agents, {index}", drained.len());
}
