// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rtree --heading-base-level=0

//! Understory R-Tree: a static, bulk-loaded 2D AABB index.
//!
//! Understory R-Tree answers "which of these rectangles overlap this one" for a
//! batch of rectangles that is known up front and never changes, such as the
//! bounds of the draw operations in one recorded frame.
//!
//! - Build once from any sequence of items and a function giving each item's bounds.
//! - Query by rectangle or point; results are item positions (or a payload of your choice).
//! - Queries take `&self`, so a built tree can be searched from many threads at once.
//!
//! The tree is packed sort-tile-recursive style: leaves are grouped into nodes of
//! 6 to 11 branches laid out as a roughly square grid, and the pass repeats on the
//! node bounds until one root remains. Every internal bound is the exact union of
//! its subtree, so queries never miss an overlapping item.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i32`, `i64`) and does not
//! depend on any geometry crate. Enable the `kurbo` feature to convert from and to
//! `kurbo::Rect` and to index Kurbo shapes directly.
//!
//! # Example
//!
//! ```rust
//! use understory_rtree::{Aabb2D, RTree};
//!
//! let rects = [
//!     Aabb2D::new(0, 0, 10, 10),
//!     Aabb2D::new(5, 5, 15, 15),
//!     Aabb2D::new(40, 40, 50, 50),
//! ];
//! let tree = RTree::from_rects(rects);
//!
//! // Items 0 and 1 overlap the query; results are input positions.
//! assert_eq!(tree.search(Aabb2D::new(8, 8, 12, 12)), [0, 1]);
//!
//! // Rectangles are half-open, so touching edges do not count.
//! assert!(tree.search(Aabb2D::new(15, 15, 20, 20)).is_empty());
//! ```
//!
//! Items are arbitrary; only their bounds are stored:
//!
//! ```rust
//! use understory_rtree::{Aabb2D, RTree};
//!
//! struct DrawOp {
//!     bounds: Aabb2D<f64>,
//! }
//!
//! let ops = vec![
//!     DrawOp { bounds: Aabb2D::<f64>::from_xywh(0.0, 0.0, 100.0, 20.0) },
//!     DrawOp { bounds: Aabb2D::<f64>::from_xywh(0.0, 0.0, 0.0, 0.0) }, // empty: skipped
//!     DrawOp { bounds: Aabb2D::<f64>::from_xywh(0.0, 400.0, 100.0, 20.0) },
//! ];
//! let tree = RTree::bulk_load(&ops, |op| op.bounds);
//! assert_eq!(tree.len(), 2);
//!
//! let viewport = Aabb2D::<f64>::from_xywh(0.0, 0.0, 320.0, 240.0);
//! let mut visible = Vec::new();
//! tree.search_into(viewport, &mut visible);
//! assert_eq!(visible, [0]);
//! ```
//!
//! ## Choosing a build order
//!
//! - [`BuildOrder::Input`] (default): items are packed in the order given. This is
//!   ideal when input already has spatial coherence (scan or paint order), and
//!   query results come back in input order.
//! - [`BuildOrder::Tiled`]: each level is sorted by centre x, cut into strips and
//!   sorted by centre y before packing. Prefer it for unordered input.
//!
//! Both orders return exactly the same set of items for every query.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds may assert.

#![no_std]

extern crate alloc;

mod build;
pub mod config;
mod node;
pub mod tree;
pub mod types;

#[cfg(feature = "kurbo")]
mod kurbo_compat;

pub use config::{BuildOrder, Config, Fanout, FanoutError};
pub use tree::{RTree, RTreeF32, RTreeF64, RTreeI32, RTreeI64};
pub use types::{Aabb2D, Scalar};
