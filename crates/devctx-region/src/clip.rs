use crate::geometry::Rect;
use crate::region::Region;

/// Region services a clip stack needs from its backend.
///
/// [`Region`] is the bundled implementation; a rendering backend with its own
/// native region type (scanline regions, platform handles) implements this
/// instead.
pub trait ClipRegion: Clone + std::fmt::Debug {
    fn from_rect(rect: Rect) -> Self;

    fn intersect(&self, other: &Self) -> Self;

    /// `None` for a region that covers nothing
    fn bounding_box(&self) -> Option<Rect>;

    fn is_empty(&self) -> bool {
        self.bounding_box().is_none()
    }
}

impl ClipRegion for Region {
    fn from_rect(rect: Rect) -> Self {
        Region::from_rect(rect)
    }

    fn intersect(&self, other: &Self) -> Self {
        Region::intersect(self, other)
    }

    fn bounding_box(&self) -> Option<Rect> {
        Region::bounding_box(self)
    }

    fn is_empty(&self) -> bool {
        Region::is_empty(self)
    }
}

/// A single rectangle is closed under intersection, which makes it the
/// cheapest possible clip region when only rectangular clips are used.
impl ClipRegion for Rect {
    fn from_rect(rect: Rect) -> Self {
        rect
    }

    fn intersect(&self, other: &Self) -> Self {
        Rect::intersect(self, other).unwrap_or_default()
    }

    fn bounding_box(&self) -> Option<Rect> {
        (!Rect::is_empty(self)).then_some(*self)
    }

    fn is_empty(&self) -> bool {
        Rect::is_empty(self)
    }
}
