// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=snapline_index --heading-base-level=0

//! Snapline Index: a self-splaying coordinate index for magnet snapping.
//!
//! While a UI element is dragged, the edge coordinates of every other
//! on-screen element are indexed into one [`AxisTree`] per axis. Each pointer
//! move then asks "which indexed coordinate is closest to this edge?" and the
//! host snaps the edge onto the answer when it falls within a magnetic
//! threshold.
//!
//! The tree is an ordered multi-map: several elements may legitimately share
//! a coordinate (two boxes with aligned edges), so every key carries a small
//! set of element ids. Rebalancing is done purely by splaying — every touched
//! node is rotated to the root, so the region a drag lingers in stays cheap
//! to re-query under continuous mouse-move traffic. There is no balance
//! bookkeeping; the tree's shape is entirely a function of access history.
//!
//! Trees are built once per drag gesture and discarded at gesture end.
//! Sessions create them with [`AxisTree::seeded`], which plants a sentinel at
//! `+∞` so the tree is never structurally empty while a gesture is live.
//!
//! # Example
//!
//! ```rust
//! use snapline_index::AxisTree;
//!
//! let mut tree: AxisTree<u32> = AxisTree::seeded();
//! tree.insert(100.0, 1);
//! tree.insert(140.0, 2);
//! tree.insert(200.0, 3);
//!
//! // 138 is 2 away from 140 and 38 away from 100.
//! let hit = tree.nearest(138.0).unwrap();
//! assert_eq!(hit.key, 140.0);
//! assert_eq!(hit.offset, 2.0);
//! assert_eq!(hit.anchors.as_slice(), &[2]);
//!
//! // Equal distance on both sides resolves to the smaller key.
//! let hit = tree.nearest(120.0).unwrap();
//! assert_eq!(hit.key, 100.0);
//! ```
//!
//! Coordinates are compared exactly; callers round away sub-pixel layout
//! jitter before inserting (the gesture crate's `snap_round` does this).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod node;
mod tree;

pub use tree::{AxisTree, Iter, Nearest};
