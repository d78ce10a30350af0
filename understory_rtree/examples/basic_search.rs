// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory R-Tree: bulk load rectangles, then query them.

use understory_rtree::{Aabb2D, RTree};

fn main() {
    let rects = [
        Aabb2D::new(0, 0, 10, 10),
        Aabb2D::new(5, 5, 15, 15),
        Aabb2D::new(20, 0, 30, 10),
        // Zero width: never indexed.
        Aabb2D::new(7, 7, 7, 30),
    ];
    let tree = RTree::from_rects(rects);
    println!("{tree:?}");

    let hits = tree.search(Aabb2D::new(6, 6, 25, 8));
    println!("hits for (6,6)-(25,8): {:?}", hits);

    let at = tree.query_point(6, 6);
    println!("hits at (6,6): {:?}", at);
}
