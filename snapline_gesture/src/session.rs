// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture snap session: built at drag start, queried on every
//! pointer move, discarded at drag end.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;
use kurbo::Rect;
use smallvec::SmallVec;
use snapline_index::{AxisTree, Nearest};

use crate::types::{Axis, Candidate, DragMods, Edge, SnapEvent};

/// Default magnetic threshold, in coordinate units.
pub const DEFAULT_MAGNET: f64 = 7.0;

/// Round a coordinate to one decimal place.
///
/// Layout sources report sub-pixel jitter; rounding before insertion lands
/// edges that visually coincide on a single tree key. The tree itself
/// compares keys exactly, so normalization is the session's job and happens
/// only on insertion, never on queries.
#[cfg(feature = "std")]
pub fn snap_round(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round a coordinate to one decimal place.
///
/// Layout sources report sub-pixel jitter; rounding before insertion lands
/// edges that visually coincide on a single tree key. The tree itself
/// compares keys exactly, so normalization is the session's job and happens
/// only on insertion, never on queries.
#[cfg(all(not(feature = "std"), feature = "libm"))]
pub fn snap_round(x: f64) -> f64 {
    libm::round(x * 10.0) / 10.0
}

/// The outcome of one pointer-move step.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResponse<E> {
    /// Horizontal snap adjustment for the dragged element; `0.0` when the
    /// horizontal axis did not snap.
    pub dx: f64,
    /// Vertical snap adjustment for the dragged element; `0.0` when the
    /// vertical axis did not snap.
    pub dy: f64,
    /// Alignment transitions produced by this move, begin edge before end
    /// edge, horizontal axis before vertical.
    pub events: SmallVec<[SnapEvent<E>; 4]>,
}

/// A magnet-snap session covering a single drag gesture.
///
/// Created at drag start from a snapshot of candidate bounds: every candidate
/// outside the exclusion set contributes its left/right edges to the
/// horizontal tree and its top/bottom edges to the vertical tree. Each
/// pointer move runs up to two nearest queries per axis and reports at most
/// one snap adjustment per axis plus the alignment transitions. Finishing the
/// gesture discards both trees; nothing persists between gestures, so layouts
/// that changed in the meantime are picked up by the next build.
///
/// The session is exclusively owned by the gesture that created it and is
/// meant to be driven synchronously from pointer-event handlers.
#[derive(Clone, Debug)]
pub struct SnapSession<E> {
    horizontal: AxisTree<E>,
    vertical: AxisTree<E>,
    magnet: f64,
    /// Last notified snap coordinate per (axis, edge); `None` = unaligned.
    status: [Option<f64>; 4],
}

impl<E: Copy + Eq + Hash + Debug> SnapSession<E> {
    /// Start a session with the [default threshold](DEFAULT_MAGNET).
    ///
    /// `excluded` holds the ids that must not be indexed — the dragged
    /// element itself and everything inside it, which would otherwise snap
    /// the element to its own edges.
    pub fn begin<I>(candidates: I, excluded: &HashSet<E>) -> Self
    where
        I: IntoIterator<Item = Candidate<E>>,
    {
        Self::with_magnet(candidates, excluded, DEFAULT_MAGNET)
    }

    /// Start a session with a custom magnetic threshold.
    pub fn with_magnet<I>(candidates: I, excluded: &HashSet<E>, magnet: f64) -> Self
    where
        I: IntoIterator<Item = Candidate<E>>,
    {
        debug_assert!(
            magnet.is_finite() && magnet >= 0.0,
            "magnet threshold must be finite and non-negative; got {magnet:?}"
        );
        let mut horizontal = AxisTree::seeded();
        let mut vertical = AxisTree::seeded();
        for candidate in candidates {
            if excluded.contains(&candidate.id) {
                continue;
            }
            let b = candidate.bounds;
            horizontal.insert(snap_round(b.x0), candidate.id);
            horizontal.insert(snap_round(b.x1), candidate.id);
            vertical.insert(snap_round(b.y0), candidate.id);
            vertical.insert(snap_round(b.y1), candidate.id);
        }
        Self {
            horizontal,
            vertical,
            magnet,
            status: [None; 4],
        }
    }

    /// The magnetic threshold for this session.
    pub fn magnet(&self) -> f64 {
        self.magnet
    }

    /// Number of distinct coordinates indexed on an axis.
    pub fn indexed_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.horizontal.len(),
            Axis::Vertical => self.vertical.len(),
        }
    }

    /// The coordinate an edge is currently snapped to, if any.
    pub fn aligned(&self, axis: Axis, edge: Edge) -> Option<f64> {
        self.status[slot(axis, edge)]
    }

    /// Process one pointer move of the dragged element.
    ///
    /// `bounds` is the element's current (unsnapped) bounding box. Per axis,
    /// the edge closer to an indexed coordinate wins the snap when its
    /// distance is inside the magnetic threshold; an exact distance tie goes
    /// to the begin edge. The winning edge's offset is returned as `dx`/`dy`
    /// for the host to apply. Suspended or locked axes never snap, but still
    /// emit `Unaligned` transitions for edges that were snapped before.
    pub fn on_move(&mut self, bounds: Rect, mods: DragMods) -> MoveResponse<E> {
        let mut events = SmallVec::new();
        let suspend = mods.contains(DragMods::SUSPEND);
        let dx = self.move_axis(
            Axis::Horizontal,
            bounds.x0,
            bounds.x1,
            suspend || mods.contains(DragMods::LOCK_X),
            &mut events,
        );
        let dy = self.move_axis(
            Axis::Vertical,
            bounds.y0,
            bounds.y1,
            suspend || mods.contains(DragMods::LOCK_Y),
            &mut events,
        );
        MoveResponse { dx, dy, events }
    }

    /// End the gesture: discard both trees and flush an
    /// [`SnapEvent::Unaligned`] for every edge still snapped.
    pub fn finish(mut self) -> SmallVec<[SnapEvent<E>; 4]> {
        let mut events = SmallVec::new();
        for axis in Axis::ALL {
            for edge in Edge::ALL {
                self.transition(axis, edge, None, &mut events);
            }
        }
        events
    }

    fn move_axis(
        &mut self,
        axis: Axis,
        begin: f64,
        end: f64,
        suspended: bool,
        events: &mut SmallVec<[SnapEvent<E>; 4]>,
    ) -> f64 {
        let magnet = self.magnet;
        let tree = match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        };
        let near_begin = tree
            .nearest(begin)
            .expect("snap session invariant violated: axis tree lost its sentinel");
        let near_end = tree
            .nearest(end)
            .expect("snap session invariant violated: axis tree lost its sentinel");
        let (db, de) = (near_begin.distance(), near_end.distance());

        let begin_snaps = !suspended && db <= de && db < magnet;
        // A distance tie goes to the begin edge, so the end edge must win strictly.
        let end_snaps = !suspended && de < db && de < magnet;

        let mut delta = 0.0;
        if begin_snaps {
            delta = near_begin.offset;
            self.transition(axis, Edge::Begin, Some(&near_begin), events);
        } else {
            self.transition(axis, Edge::Begin, None, events);
        }
        if end_snaps {
            delta = near_end.offset;
            self.transition(axis, Edge::End, Some(&near_end), events);
        } else {
            self.transition(axis, Edge::End, None, events);
        }
        delta
    }

    /// Record an edge's new alignment state, emitting an event only when the
    /// state actually changed.
    fn transition(
        &mut self,
        axis: Axis,
        edge: Edge,
        snapped: Option<&Nearest<E>>,
        events: &mut SmallVec<[SnapEvent<E>; 4]>,
    ) {
        let idx = slot(axis, edge);
        match snapped {
            Some(hit) => {
                if self.status[idx] != Some(hit.key) {
                    self.status[idx] = Some(hit.key);
                    events.push(SnapEvent::Aligned {
                        axis,
                        edge,
                        key: hit.key,
                        anchors: hit.anchors.clone(),
                    });
                }
            }
            None => {
                if self.status[idx].is_some() {
                    self.status[idx] = None;
                    events.push(SnapEvent::Unaligned { axis, edge });
                }
            }
        }
    }
}

fn slot(axis: Axis, edge: Edge) -> usize {
    match (axis, edge) {
        (Axis::Horizontal, Edge::Begin) => 0,
        (Axis::Horizontal, Edge::End) => 1,
        (Axis::Vertical, Edge::Begin) => 2,
        (Axis::Vertical, Edge::End) => 3,
    }
}
