//! View-space geometry used by hit-testing.
//!
//! Coordinates are device-independent pixels with the origin at the top-left
//! corner and `y` growing downwards, matching how the host reports pointer
//! and touch positions.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};

/// Point in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the per-axis displacement from `origin` to this point.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Displacement is a coordinate difference"
    )]
    pub fn offset_from(self, origin: Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned bounding rectangle of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidRect`] when the width or height is
    /// negative or not finite.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, BoardDomainError> {
        let valid_extent = width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0;
        if !valid_extent || !left.is_finite() || !top.is_finite() {
            return Err(BoardDomainError::InvalidRect { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.top
    }

    /// Right edge.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "Edge is origin plus extent")]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "Edge is origin plus extent")]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical midpoint.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "Midpoint is origin plus half extent")]
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Returns `true` when the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}
