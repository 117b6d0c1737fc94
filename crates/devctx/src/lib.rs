//! Coordinate mapping and clipping for drawing contexts.
//!
//! A [`DeviceContext`] owns a [`CoordinateTransform`] (mapping mode, user
//! scale, axis orientation, device origin and the drawing bounding box) and a
//! [`ClipStack`] of nested clipping regions kept in device coordinates.
//! Rendering is left to a backend, which reads device-space coordinates and
//! the effective clip back out of the context.
//!
//! ```
//! use devctx::{DeviceContext, MappingMode};
//! use devctx::region::{Point, Rect};
//!
//! let mut dc = DeviceContext::default();
//! dc.transform_mut().set_map_mode(MappingMode::Metric);
//! assert_eq!(dc.to_device_point(Point::new(10, 0)), Point::new(38, 0));
//!
//! {
//!     let clipped = dc.clipper(Rect::new(0, 0, 10, 10));
//!     assert!(clipped.is_visible(Point::new(5, 5)));
//!     assert!(!clipped.is_visible(Point::new(50, 5)));
//! }
//! assert!(dc.current_effective_clip().is_none());
//! ```

mod bbox;
mod clip;
mod config;
mod dc;
mod error;
mod mapping;
mod transform;

pub use bbox::BoundingBox;
pub use clip::ClipStack;
pub use config::{DcConfig, MetricsConfig};
pub use dc::{DcClipper, DeviceContext};
pub use error::{DcError, Result};
pub use mapping::{AxisOrientation, DeviceMetrics, LayoutDirection, MappingMode};
pub use transform::CoordinateTransform;

// Re-export the geometry crate for backends
pub use devctx_region as region;
