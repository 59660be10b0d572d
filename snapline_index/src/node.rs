// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node storage for the axis tree.

use smallvec::SmallVec;

/// Which child slot a node occupies under its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A single node of the coordinate tree.
///
/// Children are owned top-down through slot indices. `parent` is a plain
/// back-index used only to navigate during rotations; it never participates
/// in ownership.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: f64,
    /// Elements whose edge lies at `key`. Set semantics over a small inline
    /// buffer; non-empty for every node except the sentinel.
    pub(crate) bucket: SmallVec<[V; 2]>,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
    pub(crate) parent: Option<u32>,
}

impl<V> Node<V> {
    pub(crate) fn new(key: f64) -> Self {
        Self {
            key,
            bucket: SmallVec::new(),
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, slot: Option<u32>) {
        match side {
            Side::Left => self.left = slot,
            Side::Right => self.right = slot,
        }
    }
}
