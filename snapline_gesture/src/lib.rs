// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapline_gesture --heading-base-level=0

//! Snapline Gesture: drag-session orchestration for magnet snapping.
//!
//! ## Overview
//!
//! A [`SnapSession`] covers exactly one drag gesture. At drag start the host
//! hands it a snapshot of candidate bounds from its layout source; the
//! session rounds every edge coordinate to one decimal place (absorbing
//! sub-pixel layout jitter) and indexes left/right edges into a horizontal
//! [`snapline_index::AxisTree`] and top/bottom edges into a vertical one,
//! each seeded with the sentinel so queries stay total for the whole gesture.
//!
//! On every pointer move the session queries the nearest indexed coordinate
//! for both edges of each axis. The closer edge wins (an exact tie goes to
//! the begin edge) and, when its distance is inside the magnetic threshold,
//! the session reports the adjustment to apply in [`MoveResponse::dx`] /
//! [`MoveResponse::dy`] and raises an [`SnapEvent::Aligned`] notification.
//! Edges that lose their snap raise [`SnapEvent::Unaligned`]. Notifications
//! are edge-triggered: a move that keeps an edge on the same coordinate is
//! silent.
//!
//! Holding the override modifier ([`DragMods::SUSPEND`]) suspends snapping;
//! [`DragMods::LOCK_X`]/[`DragMods::LOCK_Y`] pin one axis, for resize-style
//! drags where only the other axis may move. Ending the gesture with
//! [`SnapSession::finish`] discards both trees and flushes `Unaligned` for
//! everything still snapped — the next gesture rebuilds from a fresh layout
//! snapshot.
//!
//! ## Example
//!
//! ```rust
//! use hashbrown::HashSet;
//! use kurbo::Rect;
//! use snapline_gesture::{Candidate, DragMods, SnapEvent, SnapSession};
//!
//! // Two resting boxes; element 7 is the one being dragged, so its own
//! // edges must not be indexed.
//! let candidates = [
//!     Candidate::new(1_u32, Rect::new(100.0, 50.0, 140.0, 90.0)),
//!     Candidate::new(2, Rect::new(200.0, 50.0, 260.0, 90.0)),
//!     Candidate::new(7, Rect::new(400.0, 400.0, 440.0, 440.0)),
//! ];
//! let excluded: HashSet<u32> = [7].into_iter().collect();
//! let mut session = SnapSession::begin(candidates, &excluded);
//!
//! // The dragged box's left edge sits at 196, four units from the indexed
//! // 200: inside the default magnet, so the session pulls it over.
//! let response = session.on_move(Rect::new(196.0, 300.0, 236.0, 340.0), DragMods::empty());
//! assert_eq!(response.dx, 4.0);
//! assert!(matches!(response.events[0], SnapEvent::Aligned { key, .. } if key == 200.0));
//!
//! // Drag end: discard the trees, un-align whatever was snapped.
//! let flushed = session.finish();
//! assert_eq!(flushed.len(), 1);
//! ```
//!
//! This crate uses `alloc` and supports `no_std` the same way kurbo does:
//! disable the default `std` feature and enable `libm`, which supplies the
//! float rounding that coordinate normalization needs.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("snapline_gesture requires either the `std` or `libm` feature");

mod session;
mod types;

pub use session::{DEFAULT_MAGNET, MoveResponse, SnapSession, snap_round};
pub use types::{Axis, Candidate, DragMods, Edge, SnapEvent};
