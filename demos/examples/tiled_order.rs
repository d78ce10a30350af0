// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compare input-order and tiled packing on unordered input.
//!
//! Both trees return the same items; the tiled one returns them in spatial
//! rather than input order.
//!
//! Run:
//! - `cargo run -p understory_rtree_demos --example tiled_order`

use kurbo::{Circle, Rect};
use understory_rtree::{Aabb2D, BuildOrder, Config, RTree};

fn scattered_circles(n: usize) -> Vec<Circle> {
    // Deterministic scatter: a multiplicative hash walks the plane out of order.
    (0..n)
        .map(|i| {
            let h = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let x = (h >> 40) as f64 % 1000.0;
            let y = ((h >> 20) & 0xF_FFFF) as f64 % 1000.0;
            Circle::new((x, y), 4.0)
        })
        .collect()
}

fn main() {
    let circles = scattered_circles(2000);
    let input = RTree::from_shapes(&circles);
    let mut tiled: RTree<f64> = RTree::with_config(Config {
        order: BuildOrder::Tiled,
        ..Config::default()
    });
    tiled.build(&circles, |c| kurbo::Shape::bounding_box(*c).into());

    println!("input order: {input:?}");
    println!("tiled:       {tiled:?}");

    let query: Aabb2D<f64> = Rect::new(200.0, 200.0, 300.0, 300.0).into();
    let a = input.search(query);
    let mut b = tiled.search(query);
    println!("input order hits: {:?}", a);
    println!("tiled hits:       {:?}", b);
    b.sort_unstable();
    assert_eq!(a, b, "both build orders find the same items");
}
