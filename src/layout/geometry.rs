// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A measured node box in the shared coordinate space of the flow canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Empty space between the vertical extents of two boxes (zero when they overlap).
    pub fn vertical_gap(&self, other: &LayoutBox) -> f64 {
        (other.top - self.bottom()).max(self.top - other.bottom()).max(0.0)
    }
}

/// An integer point on the canvas. Route coordinates are rounded so repeated recomputation
/// over sub-unit layout noise redraws identical paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub(crate) fn rounded(x: f64, y: f64) -> Self {
        Self { x: round_unit(x), y: round_unit(y) }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

fn round_unit(value: f64) -> i32 {
    // `as` saturates, and NaN maps to zero.
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::{LayoutBox, Point};

    #[test]
    fn edges_and_centers() {
        let b = LayoutBox::new(10.0, 20.0, 100.0, 50.0);

        assert_eq!(b.right(), 110.0);
        assert_eq!(b.bottom(), 70.0);
        assert_eq!(b.center_x(), 60.0);
        assert_eq!(b.center_y(), 45.0);
    }

    #[test]
    fn vertical_gap_is_symmetric_and_zero_on_overlap() {
        let upper = LayoutBox::new(0.0, 0.0, 100.0, 50.0);
        let lower = LayoutBox::new(0.0, 120.0, 100.0, 50.0);
        let beside = LayoutBox::new(150.0, 10.0, 100.0, 50.0);

        assert_eq!(upper.vertical_gap(&lower), 70.0);
        assert_eq!(lower.vertical_gap(&upper), 70.0);
        assert_eq!(upper.vertical_gap(&beside), 0.0);
    }

    #[test]
    fn rounding_snaps_to_nearest_unit() {
        assert_eq!(Point::rounded(10.4, 10.6), Point::new(10, 11));
        assert_eq!(Point::rounded(-0.5, 2.5), Point::new(-1, 3));
        assert_eq!(Point::rounded(f64::NAN, 1.0), Point::new(0, 1));
    }
}
