// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`RTree`] API: one bulk build, then any number of read-only queries.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::ControlFlow;

use crate::build;
use crate::config::Config;
use crate::node::{Branch, Node, Payload};
use crate::types::{Aabb2D, Scalar};

/// A static R-tree over a batch of axis-aligned rectangles.
///
/// The tree is filled exactly once, by one of the `build*` methods or the
/// `bulk_load`/`from_rects` constructors, and is read-only afterwards. Queries
/// take `&self`, so a built tree can be shared between threads freely.
///
/// Leaves carry a payload `P`; by default it is the item's position in the
/// input sequence. Items whose rectangle is empty are never stored.
pub struct RTree<T: Scalar, P: Copy = usize> {
    config: Config,
    root: Option<Branch<T, P>>,
    nodes: Vec<Node<T, P>>,
    num_items: usize,
}

impl<T: Scalar, P: Copy> Default for RTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P: Copy> RTree<T, P> {
    /// Create an empty, unbuilt tree with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty, unbuilt tree with the given build configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            root: None,
            nodes: Vec::new(),
            num_items: 0,
        }
    }

    /// Build the tree, storing a caller-computed payload for every item.
    ///
    /// `bounds_of` is called once per item in input order; items with an empty
    /// rectangle are dropped. `payload_of` receives the item's input position.
    ///
    /// A tree must only be built once. Debug builds assert this; release
    /// builds discard the previous contents.
    pub fn build_with_payload<I, B, F>(
        &mut self,
        items: impl IntoIterator<Item = I>,
        mut bounds_of: B,
        mut payload_of: F,
    ) where
        B: FnMut(&I) -> Aabb2D<T>,
        F: FnMut(usize, &I) -> P,
    {
        debug_assert!(
            self.num_items == 0 && self.root.is_none(),
            "RTree is already built; build it exactly once"
        );
        self.nodes.clear();

        let leaves: Vec<Branch<T, P>> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let bounds = bounds_of(&item);
                if bounds.is_empty() {
                    return None;
                }
                Some(Branch::leaf(bounds, payload_of(i, &item)))
            })
            .collect();
        self.num_items = leaves.len();
        self.root = build::pack(&mut self.nodes, leaves, self.config);
    }

    /// Number of indexed (non-empty) items.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// True if nothing is indexed, either because the tree is unbuilt or
    /// because every input rectangle was empty.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Union of every indexed rectangle, or `None` for an empty tree.
    pub fn bounds(&self) -> Option<Aabb2D<T>> {
        self.root.as_ref().map(|r| r.bounds)
    }

    /// Number of node levels: 0 when empty, 1 when all items fit in one node.
    pub fn depth(&self) -> u32 {
        match self.root.as_ref().map(|r| &r.payload) {
            Some(Payload::Child(id)) => self.nodes[id.get()].level + 1,
            Some(Payload::Leaf(_)) | None => 0,
        }
    }

    /// Number of nodes allocated by the build.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The configuration this tree was (or will be) built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Visit every item whose rectangle overlaps `query`, in traversal order.
    ///
    /// Return [`ControlFlow::Break`] from `f` to stop early; the break is
    /// passed back to the caller.
    pub fn visit<'a, F>(&'a self, query: Aabb2D<T>, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&'a P, &'a Aabb2D<T>) -> ControlFlow<()>,
    {
        if self.num_items == 0 {
            return ControlFlow::Continue(());
        }
        self.descend(&|b: &Aabb2D<T>| b.overlaps(&query), &mut f)
    }

    /// Append the payload of every item overlapping `query` to `out`.
    ///
    /// `out` is never cleared, so results from several queries can accumulate.
    pub fn search_into(&self, query: Aabb2D<T>, out: &mut Vec<P>) {
        let _ = self.visit(query, |p, _| {
            out.push(*p);
            ControlFlow::Continue(())
        });
    }

    /// Payloads of every item overlapping `query`, in traversal order.
    pub fn search(&self, query: Aabb2D<T>) -> Vec<P> {
        let mut out = Vec::new();
        self.search_into(query, &mut out);
        out
    }

    /// Like [`search_into`](Self::search_into), also appending each hit's
    /// stored rectangle to `rects` at the matching position.
    pub fn search_with_bounds(
        &self,
        query: Aabb2D<T>,
        out: &mut Vec<P>,
        rects: &mut Vec<Aabb2D<T>>,
    ) {
        let _ = self.visit(query, |p, b| {
            out.push(*p);
            rects.push(*b);
            ControlFlow::Continue(())
        });
    }

    /// References to the payloads of every item overlapping `query`.
    pub fn search_refs(&self, query: Aabb2D<T>) -> Vec<&P> {
        let mut out = Vec::new();
        let _ = self.visit(query, |p, _| {
            out.push(p);
            ControlFlow::Continue(())
        });
        out
    }

    /// Payloads of every item whose rectangle contains the point.
    pub fn query_point(&self, x: T, y: T) -> Vec<P> {
        let mut out = Vec::new();
        if self.num_items == 0 {
            return out;
        }
        let mut push = |p: &P, _: &Aabb2D<T>| {
            out.push(*p);
            ControlFlow::Continue(())
        };
        let _ = self.descend(&|b: &Aabb2D<T>| b.contains_point(x, y), &mut push);
        out
    }

    /// Every indexed item with its rectangle, in traversal order.
    ///
    /// Meant for debugging dumps; prefer the query methods otherwise.
    pub fn all_bounds(&self) -> Vec<(P, Aabb2D<T>)> {
        let mut out = Vec::with_capacity(self.num_items);
        let mut push = |p: &P, b: &Aabb2D<T>| {
            out.push((*p, *b));
            ControlFlow::Continue(())
        };
        let _ = self.descend(&|_: &Aabb2D<T>| true, &mut push);
        out
    }

    /// Walk the tree from the root, entering only branches whose bounds pass
    /// `hit`. `hit` must be monotone: if it accepts a rectangle it accepts any
    /// rectangle containing it, otherwise pruning would drop matches.
    fn descend<'a, H, F>(&'a self, hit: &H, f: &mut F) -> ControlFlow<()>
    where
        H: Fn(&Aabb2D<T>) -> bool,
        F: FnMut(&'a P, &'a Aabb2D<T>) -> ControlFlow<()>,
    {
        match &self.root {
            Some(root) if hit(&root.bounds) => self.descend_branch(root, hit, f),
            _ => ControlFlow::Continue(()),
        }
    }

    fn descend_branch<'a, H, F>(
        &'a self,
        branch: &'a Branch<T, P>,
        hit: &H,
        f: &mut F,
    ) -> ControlFlow<()>
    where
        H: Fn(&Aabb2D<T>) -> bool,
        F: FnMut(&'a P, &'a Aabb2D<T>) -> ControlFlow<()>,
    {
        match &branch.payload {
            Payload::Leaf(p) => f(p, &branch.bounds),
            Payload::Child(id) => {
                let node = &self.nodes[id.get()];
                for child in &node.children {
                    debug_assert_eq!(
                        node.level == 0,
                        matches!(child.payload, Payload::Leaf(_)),
                        "leaves live exactly at level 0"
                    );
                    if hit(&child.bounds) {
                        self.descend_branch(child, hit, f)?;
                    }
                }
                ControlFlow::Continue(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[Node<T, P>] {
        &self.nodes
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Branch<T, P>> {
        self.root.as_ref()
    }
}

impl<T: Scalar> RTree<T> {
    /// Build the tree from `items`, tagging each leaf with its input position.
    ///
    /// See [`build_with_payload`](Self::build_with_payload) for the rules.
    pub fn build<I, B>(&mut self, items: impl IntoIterator<Item = I>, bounds_of: B)
    where
        B: FnMut(&I) -> Aabb2D<T>,
    {
        self.build_with_payload(items, bounds_of, |i, _| i);
    }

    /// Build the tree directly from rectangles.
    pub fn build_rects(&mut self, rects: impl IntoIterator<Item = Aabb2D<T>>) {
        self.build(rects, |r| *r);
    }

    /// Create a tree with the default configuration and build it from `items`.
    pub fn bulk_load<I, B>(items: impl IntoIterator<Item = I>, bounds_of: B) -> Self
    where
        B: FnMut(&I) -> Aabb2D<T>,
    {
        let mut tree = Self::new();
        tree.build(items, bounds_of);
        tree
    }

    /// Create a tree with the default configuration and build it from rectangles.
    pub fn from_rects(rects: impl IntoIterator<Item = Aabb2D<T>>) -> Self {
        let mut tree = Self::new();
        tree.build_rects(rects);
        tree
    }
}

impl<T: Scalar, P: Copy> Debug for RTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("config", &self.config)
            .field("items", &self.num_items)
            .field("arena_nodes", &self.nodes.len())
            .field("depth", &self.depth())
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

// Convenience type aliases.

/// R-tree with f32 coordinates indexing item positions.
pub type RTreeF32 = RTree<f32>;

/// R-tree with f64 coordinates indexing item positions.
pub type RTreeF64 = RTree<f64>;

/// R-tree with i32 coordinates indexing item positions.
pub type RTreeI32 = RTree<i32>;

/// R-tree with i64 coordinates indexing item positions.
pub type RTreeI64 = RTree<i64>;
