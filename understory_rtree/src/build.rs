// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk loader: packs a batch of leaf branches into a balanced tree.
//!
//! Each pass groups the current level into nodes of at most `max` branches,
//! laid out as a roughly square grid of `strips × tiles` groups, and emits one
//! parent branch per node. Passes repeat until a single branch is left; that
//! branch is the root.
//!
//! When the level does not divide evenly and the trailing group would fall
//! below `min`, the missing entries (the deficit) are taken from the leading
//! groups, each giving up at most `max - min`, so no group ends up underfull.

use alloc::vec::Vec;

use crate::config::{BuildOrder, Config, Fanout};
use crate::node::{Branch, Node, NodeId, union_bounds};
use crate::types::{Scalar, centroid, cmp_t};

/// Shape of one packing pass over `n` branches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct GroupPlan {
    groups: usize,
    deficit: usize,
    strips: usize,
    tiles: usize,
}

impl GroupPlan {
    fn new(n: usize, fanout: Fanout) -> Self {
        let (min, max) = (fanout.min(), fanout.max());
        let mut groups = n / max;
        let remainder = n % max;
        let mut deficit = 0;
        if remainder > 0 {
            groups += 1;
            if remainder < min {
                deficit = min - remainder;
            }
        }
        let mut strips = 1_usize;
        while strips * strips < groups {
            strips += 1;
        }
        let tiles = groups.div_ceil(strips);
        Self {
            groups,
            deficit,
            strips,
            tiles,
        }
    }
}

/// Pack `leaves` into `nodes` and return the root branch.
///
/// The root of a non-empty tree always points at a node, even for a single item.
pub(crate) fn pack<T: Scalar, P: Copy>(
    nodes: &mut Vec<Node<T, P>>,
    leaves: Vec<Branch<T, P>>,
    config: Config,
) -> Option<Branch<T, P>> {
    if let [leaf] = leaves.as_slice() {
        let id = NodeId::new(nodes.len());
        let mut node = Node::with_capacity(0, 1);
        node.children.push(*leaf);
        nodes.push(node);
        return Some(Branch::child(leaf.bounds, id));
    }
    if leaves.is_empty() {
        return None;
    }

    nodes.reserve_exact(config.fanout.nodes_for(leaves.len()));
    let mut level_branches = leaves;
    let mut level = 0_u32;
    while level_branches.len() > 1 {
        if config.order == BuildOrder::Tiled {
            tile_sort(&mut level_branches, config.fanout);
        }
        level_branches = pack_level(nodes, &level_branches, level, config.fanout);
        level += 1;
    }
    level_branches.pop()
}

/// One grouping pass. Returns the branches of the next level up.
fn pack_level<T: Scalar, P: Copy>(
    nodes: &mut Vec<Node<T, P>>,
    branches: &[Branch<T, P>],
    level: u32,
    fanout: Fanout,
) -> Vec<Branch<T, P>> {
    let (min, max) = (fanout.min(), fanout.max());
    let plan = GroupPlan::new(branches.len(), fanout);
    let mut deficit = plan.deficit;
    let mut next = Vec::with_capacity(plan.groups);
    let mut current = 0;

    'strips: for _ in 0..plan.strips {
        for _ in 0..plan.tiles {
            let mut take = max;
            if deficit > 0 {
                if deficit <= max - min {
                    take -= deficit;
                    deficit = 0;
                } else {
                    take = min;
                    deficit -= max - min;
                }
            }
            let end = (current + take).min(branches.len());
            let group = &branches[current..end];
            let Some(bounds) = union_bounds(group) else {
                break 'strips;
            };
            let id = NodeId::new(nodes.len());
            let mut node = Node::with_capacity(level, group.len());
            node.children.extend_from_slice(group);
            nodes.push(node);
            next.push(Branch::child(bounds, id));
            current = end;
        }
    }
    debug_assert_eq!(
        current,
        branches.len(),
        "packing pass must consume every branch"
    );
    next
}

/// Reorder a level so consecutive runs are spatially close: sort by centre x,
/// cut into vertical strips of `tiles * max` branches, then sort each strip by
/// centre y.
fn tile_sort<T: Scalar, P>(branches: &mut [Branch<T, P>], fanout: Fanout) {
    let plan = GroupPlan::new(branches.len(), fanout);
    branches.sort_by(|a, b| cmp_t(&centroid(&a.bounds).0, &centroid(&b.bounds).0));
    let strip_len = (plan.tiles * fanout.max()).max(1);
    for strip in branches.chunks_mut(strip_len) {
        strip.sort_by(|a, b| cmp_t(&centroid(&a.bounds).1, &centroid(&b.bounds).1));
    }
}
