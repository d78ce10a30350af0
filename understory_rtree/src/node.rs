// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-resident nodes and the branches they hold.

use alloc::vec::Vec;

use crate::types::{Aabb2D, union_aabb};

/// Index of a node in the tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// What a branch refers to. Level-0 nodes hold only leaves.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Payload<P> {
    Leaf(P),
    Child(NodeId),
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Branch<T, P> {
    pub(crate) bounds: Aabb2D<T>,
    pub(crate) payload: Payload<P>,
}

impl<T, P> Branch<T, P> {
    pub(crate) const fn leaf(bounds: Aabb2D<T>, payload: P) -> Self {
        Self {
            bounds,
            payload: Payload::Leaf(payload),
        }
    }

    pub(crate) const fn child(bounds: Aabb2D<T>, node: NodeId) -> Self {
        Self {
            bounds,
            payload: Payload::Child(node),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T, P> {
    pub(crate) level: u32,
    pub(crate) children: Vec<Branch<T, P>>,
}

impl<T, P> Node<T, P> {
    pub(crate) fn with_capacity(level: u32, capacity: usize) -> Self {
        Self {
            level,
            children: Vec::with_capacity(capacity),
        }
    }
}

/// Exact union of the branches' bounds, or `None` when there are none.
pub(crate) fn union_bounds<T: PartialOrd + Copy, P>(
    branches: &[Branch<T, P>],
) -> Option<Aabb2D<T>> {
    let (first, rest) = branches.split_first()?;
    Some(rest.iter().fold(first.bounds, |acc, b| union_aabb(acc, b.bounds)))
}
