// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between [`Aabb2D<f64>`] and Kurbo geometry.

use kurbo::{Rect, Shape};

use crate::tree::RTree;
use crate::types::Aabb2D;

impl From<Rect> for Aabb2D<f64> {
    /// Corners are taken as-is; a Kurbo rect with negative width or height
    /// becomes an empty box and will not be indexed.
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Aabb2D<f64>> for Rect {
    fn from(a: Aabb2D<f64>) -> Self {
        Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
    }
}

impl RTree<f64> {
    /// Build a tree over the bounding boxes of Kurbo shapes.
    ///
    /// Leaves carry each shape's position in `shapes`.
    pub fn from_shapes<S: Shape>(shapes: &[S]) -> Self {
        Self::bulk_load(shapes, |s| Aabb2D::from(s.bounding_box()))
    }
}
