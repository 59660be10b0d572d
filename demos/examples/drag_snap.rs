// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated drag across a small scene, printing snap adjustments and
//! alignment events.
//!
//! Three resting boxes are indexed at gesture start; a fourth box is dragged
//! rightward past them. Watch the left/right edges get pulled onto the
//! indexed coordinates and released again as the drag continues.
//!
//! Run:
//! - `cargo run -p snapline_demos --example drag_snap`

use hashbrown::HashSet;
use kurbo::Rect;
use snapline_gesture::{Candidate, DragMods, SnapEvent, SnapSession};

fn main() {
    // The layout snapshot at drag start. Element 99 is the dragged box: it
    // goes into the exclusion set so it cannot snap to itself.
    let candidates = [
        Candidate::new(1_u32, Rect::new(100.0, 50.0, 180.0, 120.0)),
        Candidate::new(2, Rect::new(240.0, 50.0, 320.0, 120.0)),
        Candidate::new(3, Rect::new(400.0, 200.0, 480.0, 280.0)),
        Candidate::new(99, Rect::new(20.0, 300.0, 80.0, 360.0)),
    ];
    let excluded: HashSet<u32> = [99].into_iter().collect();

    let mut session = SnapSession::begin(candidates, &excluded);
    println!(
        "gesture start: {} horizontal / {} vertical coordinates indexed, magnet {}",
        session.indexed_count(snapline_gesture::Axis::Horizontal),
        session.indexed_count(snapline_gesture::Axis::Vertical),
        session.magnet(),
    );

    // Drag the box rightward in 6-unit steps along y = 55.
    let (w, h) = (60.0, 60.0);
    let mut x = 20.0;
    let y = 55.0;
    while x < 340.0 {
        let bounds = Rect::new(x, y, x + w, y + h);
        let response = session.on_move(bounds, DragMods::empty());

        if response.dx != 0.0 || response.dy != 0.0 {
            println!(
                "move to ({x:6.1}, {y:6.1}) -> snapped by ({:+.1}, {:+.1})",
                response.dx, response.dy
            );
        }
        for event in &response.events {
            match event {
                SnapEvent::Aligned {
                    axis,
                    edge,
                    key,
                    anchors,
                } => {
                    println!("  aligned   {axis:?}/{edge:?} at {key} (anchors {anchors:?})");
                }
                SnapEvent::Unaligned { axis, edge } => {
                    println!("  unaligned {axis:?}/{edge:?}");
                }
            }
        }

        x += 6.0;
    }

    let flushed = session.finish();
    println!("gesture end: {} edge(s) released", flushed.len());
}
