// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for drag-gesture snapping: axes, edges, candidates, modifier
//! flags, and alignment events.

use kurbo::Rect;
use smallvec::SmallVec;

/// One of the two snapping axes of a drag gesture.
///
/// Each axis owns an independent coordinate tree while a gesture is live.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right edges.
    Horizontal,
    /// Top/bottom edges.
    Vertical,
}

impl Axis {
    /// Both axes, in processing order.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];
}

/// Edge identity along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The leading edge: left on the horizontal axis, top on the vertical.
    Begin,
    /// The trailing edge: right on the horizontal axis, bottom on the vertical.
    End,
}

impl Edge {
    /// Both edges, in processing order. On an exact distance tie the earlier
    /// one ([`Begin`](Self::Begin)) wins the snap.
    pub const ALL: [Self; 2] = [Self::Begin, Self::End];
}

bitflags::bitflags! {
    /// Modifier state for one pointer-move step.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DragMods: u8 {
        /// The override modifier is held: snapping is suspended on both axes
        /// for this move.
        const SUSPEND = 0b0000_0001;
        /// Horizontal position is fixed; the horizontal axis neither moves
        /// nor snaps.
        const LOCK_X = 0b0000_0010;
        /// Vertical position is fixed; the vertical axis neither moves nor
        /// snaps.
        const LOCK_Y = 0b0000_0100;
    }
}

/// A snap candidate supplied by the layout source at gesture start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<E> {
    /// Identifier of the element contributing edges.
    pub id: E,
    /// The element's axis-aligned bounds, in the gesture's coordinate space.
    pub bounds: Rect,
}

impl<E> Candidate<E> {
    /// Create a candidate from an id and its bounds.
    pub fn new(id: E, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

/// Alignment transition for one edge of the dragged element.
///
/// Emitted by the session only when the edge's state actually changes: a
/// fresh snap (or a snap to a different coordinate) raises
/// [`Aligned`](Self::Aligned), and losing a snap raises
/// [`Unaligned`](Self::Unaligned). A move that keeps an edge snapped to the
/// same coordinate emits nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum SnapEvent<E> {
    /// The edge snapped onto an indexed coordinate.
    Aligned {
        /// Axis the snap happened on.
        axis: Axis,
        /// Which edge of the dragged element snapped.
        edge: Edge,
        /// The coordinate the edge now sits on.
        key: f64,
        /// The elements anchoring that coordinate (hosts typically draw a
        /// guide line through them).
        anchors: SmallVec<[E; 2]>,
    },
    /// The edge is no longer snapped to any coordinate.
    Unaligned {
        /// Axis the edge belongs to.
        axis: Axis,
        /// Which edge of the dragged element unsnapped.
        edge: Edge,
    },
}
