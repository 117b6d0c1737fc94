//! Integer geometry for device contexts.
//!
//! [`Rect`] uses half-open extents, [`Region`] is a union of disjoint
//! rectangles, and [`ClipRegion`] is the small set of region operations the
//! clipping pipeline relies on.

mod clip;
mod geometry;
mod region;

pub use clip::ClipRegion;
pub use geometry::{Point, Rect, Size};
pub use region::Region;
