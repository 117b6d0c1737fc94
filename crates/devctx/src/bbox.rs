use devctx_region::{Point, Rect};

use crate::{DcError, Result};

/// Extent of every logical point drawn so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    bounds: Option<(Point, Point)>,
}

impl BoundingBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the box to include `(x, y)`; the first point sets both corners.
    pub fn calc(&mut self, x: i32, y: i32) {
        self.bounds = Some(match self.bounds {
            None => (Point::new(x, y), Point::new(x, y)),
            Some((min, max)) => (
                Point::new(min.x.min(x), min.y.min(y)),
                Point::new(max.x.max(x), max.y.max(y)),
            ),
        });
    }

    pub fn reset(&mut self) {
        self.bounds = None;
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn min_x(&self) -> Result<i32> {
        self.corners().map(|(min, _)| min.x)
    }

    pub fn min_y(&self) -> Result<i32> {
        self.corners().map(|(min, _)| min.y)
    }

    pub fn max_x(&self) -> Result<i32> {
        self.corners().map(|(_, max)| max.x)
    }

    pub fn max_y(&self) -> Result<i32> {
        self.corners().map(|(_, max)| max.y)
    }

    /// Inclusive minimum and maximum corners
    pub fn corners(&self) -> Result<(Point, Point)> {
        self.bounds.ok_or(DcError::NoBoundingBox)
    }

    /// The smallest rectangle containing every added point.
    pub fn rect(&self) -> Option<Rect> {
        let (min, max) = self.bounds?;
        Some(Rect::new(
            min.x,
            min.y,
            max.x.saturating_sub(min.x).saturating_add(1),
            max.y.saturating_sub(min.y).saturating_add(1),
        ))
    }
}
