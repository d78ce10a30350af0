// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cull a recorded display list against a scrolling viewport.
//!
//! The draw operations of one frame are indexed once; each scroll position then
//! only visits the operations whose bounds overlap the viewport.
//!
//! Run:
//! - `cargo run -p understory_rtree_demos --example display_list_culling`

use kurbo::{Circle, Line, Point, Rect, Shape};
use understory_rtree::{Aabb2D, RTree};

const ROW_H: f64 = 24.0;
const WIDTH: f64 = 320.0;

#[derive(Clone, Debug)]
enum DrawOp {
    Fill(Rect),
    Stroke { line: Line, width: f64 },
    Dot(Circle),
    // Zero-sized clip markers produce empty bounds and are never indexed.
    Marker(Point),
}

impl DrawOp {
    fn bounds(&self) -> Rect {
        match self {
            Self::Fill(r) => *r,
            Self::Stroke { line, width } => line.bounding_box().inflate(width * 0.5, width * 0.5),
            Self::Dot(c) => c.bounding_box(),
            Self::Marker(p) => Rect::from_points(*p, *p),
        }
    }
}

fn record_frame(rows: usize) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(rows * 4);
    for i in 0..rows {
        let y0 = i as f64 * ROW_H;
        ops.push(DrawOp::Fill(Rect::new(0.0, y0, WIDTH, y0 + ROW_H)));
        ops.push(DrawOp::Dot(Circle::new((12.0, y0 + ROW_H * 0.5), 6.0)));
        ops.push(DrawOp::Stroke {
            line: Line::new((0.0, y0 + ROW_H), (WIDTH, y0 + ROW_H)),
            width: 1.0,
        });
        ops.push(DrawOp::Marker(Point::new(0.0, y0)));
    }
    ops
}

fn main() {
    let ops = record_frame(500);
    let tree = RTree::bulk_load(&ops, |op| Aabb2D::from(op.bounds()));
    println!(
        "recorded {} ops, indexed {} (depth {}, {} nodes)",
        ops.len(),
        tree.len(),
        tree.depth(),
        tree.node_count()
    );

    let mut visible = Vec::new();
    for scroll in [0.0, 30.0, 600.0, 11_950.0] {
        let viewport = Rect::new(0.0, scroll, WIDTH, scroll + 100.0);
        visible.clear();
        tree.search_into(viewport.into(), &mut visible);
        let fills = visible
            .iter()
            .filter(|&&i| matches!(ops[i], DrawOp::Fill(_)))
            .count();
        println!(
            "scroll={scroll:.1} -> {} ops to replay ({} fills), first: {:?}",
            visible.len(),
            fills,
            visible.first().map(|&i| &ops[i])
        );
    }
}
