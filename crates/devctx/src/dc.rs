use std::ops::{Deref, DerefMut};

use devctx_region::{Point, Rect, Region, Size};

use crate::clip::ClipStack;
use crate::config::DcConfig;
use crate::mapping::DeviceMetrics;
use crate::transform::CoordinateTransform;
use crate::Result;

/// The coordinate and clipping state of one drawing surface.
///
/// Drawing itself belongs to a rendering backend; the context turns logical
/// input into device-space coordinates and the clip region the backend must
/// honour.
#[derive(Debug, Clone, Default)]
pub struct DeviceContext {
    transform: CoordinateTransform,
    clip: ClipStack<Region>,
}

impl DeviceContext {
    pub fn new(metrics: DeviceMetrics) -> Self {
        Self {
            transform: CoordinateTransform::new(metrics),
            clip: ClipStack::new(),
        }
    }

    pub fn from_config(config: &DcConfig) -> Result<Self> {
        Ok(Self {
            transform: config.build_transform()?,
            clip: ClipStack::new(),
        })
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut CoordinateTransform {
        &mut self.transform
    }

    pub fn clip_stack(&self) -> &ClipStack<Region> {
        &self.clip
    }

    /// Device resolution in pixels per inch
    pub fn ppi(&self) -> Size {
        let metrics = self.transform.metrics();
        let to_i32 = |ppi: u32| i32::try_from(ppi).unwrap_or(i32::MAX);
        Size::new(to_i32(metrics.ppi_x), to_i32(metrics.ppi_y))
    }

    pub fn size(&self) -> Size {
        self.transform.metrics().size()
    }

    pub fn size_mm(&self) -> Size {
        self.transform.metrics().size_mm()
    }

    pub fn to_device_point(&self, p: Point) -> Point {
        self.transform.to_device_point(p)
    }

    pub fn to_device_size(&self, size: Size) -> Size {
        self.transform.to_device_size(size)
    }

    /// The clip the backend must apply, in device coordinates. `None` means
    /// the whole surface is drawable.
    pub fn current_effective_clip(&self) -> Option<&Region> {
        self.clip.effective()
    }

    /// Restrict drawing to the intersection of `region`, given in logical
    /// coordinates, and the current clip.
    pub fn set_clipping_region(&mut self, region: impl Into<Region>) {
        let device = self.transform.to_device_region(&region.into());
        self.clip.push(device);
    }

    pub fn set_clipping_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.set_clipping_region(Rect::new(x, y, width, height));
    }

    pub fn set_clipping_point_size(&mut self, origin: Point, size: Size) {
        self.set_clipping_region(Rect::from_point_size(origin, size));
    }

    /// Like [`set_clipping_region`](Self::set_clipping_region), but `region`
    /// is already in device coordinates.
    pub fn set_device_clipping_region(&mut self, region: impl Into<Region>) {
        self.clip.push(region.into());
    }

    /// Remove every clip; the whole surface becomes drawable.
    pub fn destroy_clipping_region(&mut self) {
        log::debug!("Destroying {} clip level(s)", self.clip.depth());
        self.clip.clear();
    }

    /// Bounding box of the current clip in logical coordinates
    pub fn clipping_box(&self) -> Result<Rect> {
        let device = self.clip.clipping_box()?;
        Ok(self.transform.from_device_rect(device))
    }

    pub fn device_clipping_box(&self) -> Result<Rect> {
        self.clip.clipping_box()
    }

    /// Whether a logical point survives the current clip
    pub fn is_visible(&self, p: Point) -> bool {
        self.clip.is_visible(self.transform.to_device_point(p))
    }

    /// Clip to `region` (logical coordinates) until the returned guard drops.
    pub fn clipper(&mut self, region: impl Into<Region>) -> DcClipper<'_> {
        DcClipper::new(self, region)
    }

    pub fn calc_bounding_box(&mut self, x: i32, y: i32) {
        self.transform.calc_bounding_box(x, y);
    }

    pub fn calc_bounding_box_point(&mut self, p: Point) {
        self.calc_bounding_box(p.x, p.y);
    }

    pub fn reset_bounding_box(&mut self) {
        self.transform.reset_bounding_box();
    }

    pub fn min_x(&self) -> Result<i32> {
        self.transform.min_x()
    }

    pub fn max_x(&self) -> Result<i32> {
        self.transform.max_x()
    }

    pub fn min_y(&self) -> Result<i32> {
        self.transform.min_y()
    }

    pub fn max_y(&self) -> Result<i32> {
        self.transform.max_y()
    }
}

/// Scoped clipping region.
///
/// Construction pushes a clip onto the context; dropping the guard restores
/// the clip stack to the depth it had before, whichever way the scope is
/// left. The guard dereferences to the context, so drawing continues through
/// it and nested guards borrow from the outer one.
///
/// If the clipping region is destroyed while the guard is alive, the guard
/// leaves the stack alone on drop: whatever was clipped after the destroy
/// stays in effect.
pub struct DcClipper<'a> {
    dc: &'a mut DeviceContext,
    restore_depth: usize,
    generation: u64,
}

impl<'a> DcClipper<'a> {
    /// Clip to a region in logical coordinates.
    pub fn new(dc: &'a mut DeviceContext, region: impl Into<Region>) -> Self {
        let restore_depth = dc.clip.depth();
        let generation = dc.clip.generation();
        dc.set_clipping_region(region);
        Self {
            dc,
            restore_depth,
            generation,
        }
    }

    pub fn with_rect(dc: &'a mut DeviceContext, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(dc, Rect::new(x, y, width, height))
    }

    /// Clip to a region already in device coordinates.
    pub fn device(dc: &'a mut DeviceContext, region: impl Into<Region>) -> Self {
        let restore_depth = dc.clip.depth();
        let generation = dc.clip.generation();
        dc.set_device_clipping_region(region);
        Self {
            dc,
            restore_depth,
            generation,
        }
    }
}

impl Deref for DcClipper<'_> {
    type Target = DeviceContext;

    fn deref(&self) -> &DeviceContext {
        &*self.dc
    }
}

impl DerefMut for DcClipper<'_> {
    fn deref_mut(&mut self) -> &mut DeviceContext {
        &mut *self.dc
    }
}

impl Drop for DcClipper<'_> {
    fn drop(&mut self) {
        if self.dc.clip.generation() == self.generation {
            self.dc.clip.truncate(self.restore_depth);
        }
    }
}
