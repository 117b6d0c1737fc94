use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mapping::{AxisOrientation, DeviceMetrics, LayoutDirection, MappingMode};
use crate::transform::CoordinateTransform;
use crate::Result;

/// Serialized description of a device context's coordinate setup.
///
/// ```toml
/// map_mode = "metric"
/// user_scale = [2.0, 2.0]
/// axis = { x_left_right = true, y_bottom_up = false }
/// device_origin = [10, 10]
/// layout = "rtl"
///
/// [metrics]
/// ppi = [96, 96]
/// size = [800, 600]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DcConfig {
    pub map_mode: MappingMode,
    pub user_scale: [f64; 2],
    pub axis: AxisOrientation,
    pub device_origin: [i32; 2],
    pub layout: LayoutDirection,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    pub ppi: [u32; 2],
    pub size: [i32; 2],
}

impl Default for DcConfig {
    fn default() -> Self {
        Self {
            map_mode: MappingMode::default(),
            user_scale: [1.0, 1.0],
            axis: AxisOrientation::default(),
            device_origin: [0, 0],
            layout: LayoutDirection::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            ppi: [DeviceMetrics::DEFAULT_PPI; 2],
            size: [0, 0],
        }
    }
}

impl From<MetricsConfig> for DeviceMetrics {
    fn from(config: MetricsConfig) -> Self {
        DeviceMetrics {
            ppi_x: config.ppi[0],
            ppi_y: config.ppi[1],
            width: config.size[0],
            height: config.size[1],
        }
    }
}

impl From<DeviceMetrics> for MetricsConfig {
    fn from(metrics: DeviceMetrics) -> Self {
        MetricsConfig {
            ppi: [metrics.ppi_x, metrics.ppi_y],
            size: [metrics.width, metrics.height],
        }
    }
}

impl DcConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading device context config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Capture the settings of an existing transform.
    pub fn from_transform(transform: &CoordinateTransform) -> Self {
        let (sx, sy) = transform.user_scale();
        let origin = transform.device_origin();
        Self {
            map_mode: transform.map_mode(),
            user_scale: [sx, sy],
            axis: transform.axis_orientation(),
            device_origin: [origin.x, origin.y],
            layout: transform.layout_direction(),
            metrics: transform.metrics().into(),
        }
    }

    /// Validate the settings and build the transform they describe.
    pub fn build_transform(&self) -> Result<CoordinateTransform> {
        let metrics = DeviceMetrics::from(self.metrics);
        metrics.validate()?;

        let mut transform = CoordinateTransform::new(metrics);
        transform.set_map_mode(self.map_mode);
        transform.set_user_scale(self.user_scale[0], self.user_scale[1])?;
        transform.set_axis_orientation(self.axis.x_left_right, self.axis.y_bottom_up);
        transform.set_device_origin(self.device_origin[0], self.device_origin[1]);
        transform.set_layout_direction(self.layout);
        Ok(transform)
    }
}
