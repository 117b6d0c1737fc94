//! Logical to device coordinate mapping.
//!
//! A logical coordinate `l` maps to the device coordinate
//! `round(l * s) + o`, where `s` is the effective signed scale of the axis
//! (mapping mode, user scale and axis orientation multiplied together, and
//! negated once more for a right-to-left layout on x) and `o` is the
//! effective device origin. Rounding is half away from zero throughout.
//!
//! Extents (widths and heights) use `round(l * |s|)`: they never change sign
//! and never move with the origin.

use devctx_region::{Point, Rect, Region, Size};

use crate::bbox::BoundingBox;
use crate::mapping::{AxisOrientation, DeviceMetrics, LayoutDirection, MappingMode};
use crate::{DcError, Result};

#[derive(Debug, Clone)]
pub struct CoordinateTransform {
    map_mode: MappingMode,
    metrics: DeviceMetrics,
    user_scale_x: f64,
    user_scale_y: f64,
    axis: AxisOrientation,
    device_origin: Point,
    layout: LayoutDirection,

    // Derived by compute_scale_and_origin
    scale_x: f64,
    scale_y: f64,
    origin_x: i32,
    origin_y: i32,

    bounding_box: BoundingBox,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::new(DeviceMetrics::default())
    }
}

fn to_coord(value: f64) -> i32 {
    // `as` saturates at the i32 bounds
    value.round() as i32
}

/// Order two mapped edges into a half-open device span.
fn device_span(a: i32, b: i32, mirrored: bool) -> (i32, i32) {
    let (lo, hi) = (a.min(b), a.max(b));
    if mirrored {
        (lo.saturating_add(1), hi.saturating_add(1))
    } else {
        (lo, hi)
    }
}

/// Undo the mirrored-axis shift of `device_span`.
fn logical_span(lo: i32, hi: i32, mirrored: bool) -> (i32, i32) {
    if mirrored {
        (lo.saturating_sub(1), hi.saturating_sub(1))
    } else {
        (lo, hi)
    }
}

impl CoordinateTransform {
    pub fn new(metrics: DeviceMetrics) -> Self {
        let mut transform = Self {
            map_mode: MappingMode::Text,
            metrics,
            user_scale_x: 1.0,
            user_scale_y: 1.0,
            axis: AxisOrientation::default(),
            device_origin: Point::default(),
            layout: LayoutDirection::Default,
            scale_x: 1.0,
            scale_y: 1.0,
            origin_x: 0,
            origin_y: 0,
            bounding_box: BoundingBox::new(),
        };
        transform.compute_scale_and_origin();
        transform
    }

    /// Recompute the effective scale and origin from the current settings.
    ///
    /// Every setter calls this, so it only needs to be called by hand after
    /// the device metrics change behind the transform's back.
    pub fn compute_scale_and_origin(&mut self) {
        let mode_x = self.map_mode.pixels_per_unit(self.metrics.ppi_x);
        let mode_y = self.map_mode.pixels_per_unit(self.metrics.ppi_y);

        let mut sign_x = self.axis.sign_x();
        let sign_y = self.axis.sign_y();
        let mut origin_x = self.device_origin.x;

        if self.layout.is_mirrored() {
            sign_x = -sign_x;
            origin_x = (self.metrics.width - 1).saturating_sub(origin_x);
        }

        self.scale_x = mode_x * self.user_scale_x * sign_x;
        self.scale_y = mode_y * self.user_scale_y * sign_y;
        self.origin_x = origin_x;
        self.origin_y = self.device_origin.y;

        log::debug!(
            "Recomputed transform: mode={} scale=({}, {}) origin=({}, {})",
            self.map_mode,
            self.scale_x,
            self.scale_y,
            self.origin_x,
            self.origin_y
        );
    }

    pub fn map_mode(&self) -> MappingMode {
        self.map_mode
    }

    pub fn set_map_mode(&mut self, mode: MappingMode) {
        self.map_mode = mode;
        self.compute_scale_and_origin();
    }

    /// Set the mapping mode from its numeric code.
    pub fn set_map_mode_raw(&mut self, code: i32) -> Result<()> {
        let mode = MappingMode::try_from(code)?;
        self.set_map_mode(mode);
        Ok(())
    }

    pub fn user_scale(&self) -> (f64, f64) {
        (self.user_scale_x, self.user_scale_y)
    }

    /// Set the zoom factors. A negative factor flips its axis on top of
    /// whatever the axis orientation already does; zero is rejected since
    /// the mapping would no longer be invertible.
    pub fn set_user_scale(&mut self, x: f64, y: f64) -> Result<()> {
        for (axis, value) in [("x", x), ("y", y)] {
            if value == 0.0 || !value.is_finite() {
                return Err(DcError::InvalidArgument(format!(
                    "user scale {axis} must be finite and non-zero, got {value}"
                )));
            }
        }
        self.user_scale_x = x;
        self.user_scale_y = y;
        self.compute_scale_and_origin();
        Ok(())
    }

    pub fn axis_orientation(&self) -> AxisOrientation {
        self.axis
    }

    pub fn set_axis_orientation(&mut self, x_left_right: bool, y_bottom_up: bool) {
        self.axis = AxisOrientation::new(x_left_right, y_bottom_up);
        self.compute_scale_and_origin();
    }

    pub fn device_origin(&self) -> Point {
        self.device_origin
    }

    pub fn set_device_origin(&mut self, x: i32, y: i32) {
        self.device_origin = Point::new(x, y);
        self.compute_scale_and_origin();
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout
    }

    pub fn set_layout_direction(&mut self, layout: LayoutDirection) {
        if layout.is_mirrored() && self.metrics.width == 0 {
            log::warn!("Right-to-left layout on a device of unknown width mirrors about x = -1");
        }
        self.layout = layout;
        self.compute_scale_and_origin();
    }

    pub fn metrics(&self) -> DeviceMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: DeviceMetrics) -> Result<()> {
        metrics.validate()?;
        self.metrics = metrics;
        self.compute_scale_and_origin();
        Ok(())
    }

    /// Effective signed device pixels per logical unit on each axis
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Effective device origin, after layout mirroring
    pub fn effective_origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    pub fn logical_to_device_x(&self, x: i32) -> i32 {
        to_coord(f64::from(x) * self.scale_x).saturating_add(self.origin_x)
    }

    pub fn logical_to_device_y(&self, y: i32) -> i32 {
        to_coord(f64::from(y) * self.scale_y).saturating_add(self.origin_y)
    }

    pub fn logical_to_device_x_rel(&self, dx: i32) -> i32 {
        to_coord(f64::from(dx) * self.scale_x.abs())
    }

    pub fn logical_to_device_y_rel(&self, dy: i32) -> i32 {
        to_coord(f64::from(dy) * self.scale_y.abs())
    }

    pub fn device_to_logical_x(&self, x: i32) -> i32 {
        to_coord((f64::from(x) - f64::from(self.origin_x)) / self.scale_x)
    }

    pub fn device_to_logical_y(&self, y: i32) -> i32 {
        to_coord((f64::from(y) - f64::from(self.origin_y)) / self.scale_y)
    }

    pub fn device_to_logical_x_rel(&self, dx: i32) -> i32 {
        to_coord(f64::from(dx) / self.scale_x.abs())
    }

    pub fn device_to_logical_y_rel(&self, dy: i32) -> i32 {
        to_coord(f64::from(dy) / self.scale_y.abs())
    }

    pub fn to_device_point(&self, p: Point) -> Point {
        Point::new(self.logical_to_device_x(p.x), self.logical_to_device_y(p.y))
    }

    pub fn from_device_point(&self, p: Point) -> Point {
        Point::new(self.device_to_logical_x(p.x), self.device_to_logical_y(p.y))
    }

    pub fn to_device_size(&self, size: Size) -> Size {
        Size::new(
            self.logical_to_device_x_rel(size.width),
            self.logical_to_device_y_rel(size.height),
        )
    }

    pub fn from_device_size(&self, size: Size) -> Size {
        Size::new(
            self.device_to_logical_x_rel(size.width),
            self.device_to_logical_y_rel(size.height),
        )
    }

    /// Map a rectangle so that its device pixels are exactly the pixels its
    /// logical points map to.
    ///
    /// On an unmirrored axis the logical edges map straight to device edges.
    /// On a mirrored axis the pixel at the left edge lands on the right of
    /// the device span, so the mapped span is moved one pixel towards
    /// positive device coordinates. Extents stay non-negative either way.
    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        if rect.is_empty() {
            return Rect::default();
        }
        let (left, right) = device_span(
            self.logical_to_device_x(rect.left()),
            self.logical_to_device_x(rect.right()),
            self.scale_x < 0.0,
        );
        let (top, bottom) = device_span(
            self.logical_to_device_y(rect.top()),
            self.logical_to_device_y(rect.bottom()),
            self.scale_y < 0.0,
        );
        Rect::from_corners(Point::new(left, top), Point::new(right, bottom))
    }

    /// Inverse of [`Self::to_device_rect`].
    pub fn from_device_rect(&self, rect: Rect) -> Rect {
        if rect.is_empty() {
            return Rect::default();
        }
        let (left, right) = logical_span(rect.left(), rect.right(), self.scale_x < 0.0);
        let (top, bottom) = logical_span(rect.top(), rect.bottom(), self.scale_y < 0.0);
        Rect::from_corners(
            self.from_device_point(Point::new(left, top)),
            self.from_device_point(Point::new(right, bottom)),
        )
    }

    pub fn to_device_region(&self, region: &Region) -> Region {
        region.map_rects(|r| self.to_device_rect(r))
    }

    pub fn from_device_region(&self, region: &Region) -> Region {
        region.map_rects(|r| self.from_device_rect(r))
    }

    pub fn calc_bounding_box(&mut self, x: i32, y: i32) {
        self.bounding_box.calc(x, y);
    }

    pub fn reset_bounding_box(&mut self) {
        self.bounding_box.reset();
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn min_x(&self) -> Result<i32> {
        self.bounding_box.min_x()
    }

    pub fn max_x(&self) -> Result<i32> {
        self.bounding_box.max_x()
    }

    pub fn min_y(&self) -> Result<i32> {
        self.bounding_box.min_y()
    }

    pub fn max_y(&self) -> Result<i32> {
        self.bounding_box.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_96() -> CoordinateTransform {
        let mut t = CoordinateTransform::default();
        t.set_map_mode(MappingMode::Metric);
        t
    }

    #[test]
    fn test_identity_by_default() {
        let t = CoordinateTransform::default();
        for v in [-100, -1, 0, 1, 37, 10_000] {
            assert_eq!(t.logical_to_device_x(v), v);
            assert_eq!(t.logical_to_device_y(v), v);
            assert_eq!(t.device_to_logical_x(v), v);
            assert_eq!(t.logical_to_device_x_rel(v), v);
        }
    }

    #[test]
    fn test_metric_scaled_with_origin() {
        let mut t = metric_96();
        t.set_user_scale(2.0, 2.0).unwrap();
        t.set_axis_orientation(true, true);
        t.set_device_origin(10, 10);

        // 5 mm at 96 ppi, doubled: 37.795 px -> 38
        assert_eq!(t.logical_to_device_x(5), 48);
        // y grows upwards, so it is negated before the origin is added
        assert_eq!(t.logical_to_device_y(5), -28);

        assert_eq!(t.device_to_logical_x(48), 5);
        assert_eq!(t.device_to_logical_y(-28), 5);
    }

    #[test]
    fn test_negative_scale_composes_with_orientation() {
        let mut t = CoordinateTransform::default();
        t.set_axis_orientation(true, true);
        assert_eq!(t.logical_to_device_x(5), 5);

        t.set_user_scale(-1.0, 1.0).unwrap();
        assert_eq!(t.logical_to_device_x(5), -5);

        // Both flips together cancel out
        t.set_axis_orientation(false, true);
        assert_eq!(t.logical_to_device_x(5), 5);
        assert_eq!(t.scale(), (1.0, -1.0));
    }

    #[test]
    fn test_rel_ignores_orientation_and_origin() {
        let mut t = metric_96();
        t.set_device_origin(100, 200);
        let upright = (t.logical_to_device_x_rel(50), t.logical_to_device_y_rel(50));

        t.set_axis_orientation(false, true);
        t.set_user_scale(-1.0, -1.0).unwrap();
        let flipped = (t.logical_to_device_x_rel(50), t.logical_to_device_y_rel(50));

        assert_eq!(upright, flipped);
        assert_eq!(upright, (189, 189));
        assert_eq!(t.device_to_logical_x_rel(189), 50);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let mut t = CoordinateTransform::default();
        t.set_user_scale(0.5, 0.5).unwrap();
        assert_eq!(t.logical_to_device_x(1), 1);
        assert_eq!(t.logical_to_device_x(-1), -1);
        assert_eq!(t.logical_to_device_x(3), 2);
        assert_eq!(t.logical_to_device_x(-3), -2);
        assert_eq!(t.logical_to_device_x_rel(5), 3);
    }

    #[test]
    fn test_invalid_user_scale() {
        let mut t = CoordinateTransform::default();
        for (x, y) in [(0.0, 1.0), (1.0, 0.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(matches!(
                t.set_user_scale(x, y),
                Err(DcError::InvalidArgument(_))
            ));
        }
        // Rejected values leave the previous scale untouched
        assert_eq!(t.user_scale(), (1.0, 1.0));
    }

    #[test]
    fn test_raw_map_mode() {
        let mut t = CoordinateTransform::default();
        t.set_map_mode_raw(MappingMode::Points.code()).unwrap();
        assert_eq!(t.map_mode(), MappingMode::Points);

        assert!(t.set_map_mode_raw(0).is_err());
        assert_eq!(t.map_mode(), MappingMode::Points);
    }

    #[test]
    fn test_right_to_left_mirrors_about_width() {
        let metrics = DeviceMetrics::new(96, 96, 200, 100).unwrap();
        let mut t = CoordinateTransform::new(metrics);
        t.set_layout_direction(LayoutDirection::RightToLeft);

        assert_eq!(t.logical_to_device_x(0), 199);
        assert_eq!(t.logical_to_device_x(199), 0);
        assert_eq!(t.logical_to_device_y(10), 10);
        assert_eq!(t.device_to_logical_x(150), 49);

        // Extents stay positive
        assert_eq!(t.logical_to_device_x_rel(20), 20);

        t.set_device_origin(10, 0);
        assert_eq!(t.logical_to_device_x(0), 189);
    }

    #[test]
    fn test_rect_normalized_under_flip() {
        let mut t = CoordinateTransform::default();
        t.set_axis_orientation(false, true);
        t.set_device_origin(100, 100);

        // Logical x in 10..30 lands on device 71..=90, y in 10..40 on 61..=90
        let r = t.to_device_rect(Rect::new(10, 10, 20, 30));
        assert_eq!(r, Rect::new(71, 61, 20, 30));
        assert!(r.contains(t.to_device_point(Point::new(10, 10))));
        assert!(r.contains(t.to_device_point(Point::new(29, 39))));
        assert!(!r.contains(t.to_device_point(Point::new(30, 39))));
        assert!(!r.contains(t.to_device_point(Point::new(29, 40))));
        assert_eq!(t.from_device_rect(r), Rect::new(10, 10, 20, 30));
        assert_eq!(t.to_device_rect(Rect::new(0, 0, 0, 5)), Rect::default());
    }

    #[test]
    fn test_metrics_change_rescales() {
        let mut t = metric_96();
        assert_eq!(t.logical_to_device_x(254), 960);

        t.set_metrics(DeviceMetrics::new(300, 300, 0, 0).unwrap())
            .unwrap();
        assert_eq!(t.logical_to_device_x(254), 3000);

        assert!(t.set_metrics(DeviceMetrics {
            ppi_x: 0,
            ..DeviceMetrics::default()
        })
        .is_err());
    }

    #[test]
    fn test_bounding_box_delegation() {
        let mut t = CoordinateTransform::default();
        assert!(matches!(t.min_x(), Err(DcError::NoBoundingBox)));
        t.calc_bounding_box(4, 8);
        t.calc_bounding_box(-1, 2);
        assert_eq!((t.min_x().unwrap(), t.max_x().unwrap()), (-1, 4));
        assert_eq!((t.min_y().unwrap(), t.max_y().unwrap()), (2, 8));
        t.reset_bounding_box();
        assert!(matches!(t.max_y(), Err(DcError::NoBoundingBox)));
    }
}
