// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time tuning for [`RTree`](crate::RTree).

use core::fmt;

/// Bounds on the number of branches per node.
///
/// These only tune query performance. Any `min >= 2` with `max > min` yields a
/// correct tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fanout {
    min: usize,
    max: usize,
}

impl Fanout {
    /// Default fan-out: between 6 and 11 branches per node.
    pub const DEFAULT: Self = Self { min: 6, max: 11 };

    /// Create a fan-out with the given minimum and maximum branch counts.
    pub const fn new(min: usize, max: usize) -> Result<Self, FanoutError> {
        if min < 2 {
            return Err(FanoutError::MinTooSmall { min });
        }
        if max <= min {
            return Err(FanoutError::MaxNotAboveMin { min, max });
        }
        Ok(Self { min, max })
    }

    /// Minimum number of branches in a non-root node.
    pub const fn min(self) -> usize {
        self.min
    }

    /// Maximum number of branches in any node.
    pub const fn max(self) -> usize {
        self.max
    }

    /// Number of nodes a build of `n` non-empty items allocates.
    ///
    /// Every level of `m` branches packs into `ceil(m / max)` nodes, and a
    /// lone item still gets a level-0 node of its own.
    pub(crate) const fn nodes_for(self, n: usize) -> usize {
        if n == 1 {
            return 1;
        }
        let mut total = 0;
        let mut m = n;
        while m > 1 {
            m = m.div_ceil(self.max);
            total += m;
        }
        total
    }
}

impl Default for Fanout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rejected [`Fanout`] parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FanoutError {
    /// Nodes must be allowed at least two branches.
    MinTooSmall {
        /// The rejected minimum.
        min: usize,
    },
    /// The maximum must exceed the minimum.
    MaxNotAboveMin {
        /// The requested minimum.
        min: usize,
        /// The rejected maximum.
        max: usize,
    },
}

impl fmt::Display for FanoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinTooSmall { min } => {
                write!(f, "minimum fan-out must be at least 2, got {min}")
            }
            Self::MaxNotAboveMin { min, max } => {
                write!(
                    f,
                    "maximum fan-out ({max}) must be greater than the minimum ({min})"
                )
            }
        }
    }
}

impl core::error::Error for FanoutError {}

/// How branches are ordered before being packed into nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuildOrder {
    /// Pack branches in the order they were supplied.
    ///
    /// Best when the input already has spatial coherence, such as the draw
    /// order of a recorded frame. Query results come back in input order.
    #[default]
    Input,
    /// Sort-tile-recursive: at every level, sort by centre x, cut into vertical
    /// strips, and sort each strip by centre y before packing.
    ///
    /// Better pruning for unordered input; results are no longer in input order.
    Tiled,
}

/// Build configuration for an [`RTree`](crate::RTree).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// Branch count bounds per node.
    pub fanout: Fanout,
    /// Packing order.
    pub order: BuildOrder,
}
