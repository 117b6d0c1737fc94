use std::fmt;
use std::str::FromStr;

use devctx_region::Size;
use serde::{Deserialize, Serialize};

use crate::{DcError, Result};

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;
const TWIPS_PER_INCH: f64 = 1440.0;

/// Unit of measurement for logical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// One logical unit is one device pixel
    #[default]
    Text,
    /// 1/1440 inch (1/20 point)
    Twips,
    /// 1/72 inch
    Points,
    /// 1 mm
    Metric,
    /// 0.1 mm
    LoMetric,
}

impl MappingMode {
    pub const ALL: [MappingMode; 5] = [
        MappingMode::Text,
        MappingMode::Twips,
        MappingMode::Points,
        MappingMode::Metric,
        MappingMode::LoMetric,
    ];

    /// Numeric code used by toolkits that pass the mode as an integer
    pub fn code(self) -> i32 {
        match self {
            MappingMode::Text => 1,
            MappingMode::Metric => 2,
            MappingMode::LoMetric => 3,
            MappingMode::Twips => 4,
            MappingMode::Points => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MappingMode::Text => "text",
            MappingMode::Twips => "twips",
            MappingMode::Points => "points",
            MappingMode::Metric => "metric",
            MappingMode::LoMetric => "lometric",
        }
    }

    /// Device pixels per logical unit along one axis at the given resolution.
    pub fn pixels_per_unit(self, ppi: u32) -> f64 {
        let ppi = f64::from(ppi);
        match self {
            MappingMode::Text => 1.0,
            MappingMode::Twips => ppi / TWIPS_PER_INCH,
            MappingMode::Points => ppi / POINTS_PER_INCH,
            MappingMode::Metric => ppi / MM_PER_INCH,
            MappingMode::LoMetric => ppi / (MM_PER_INCH * 10.0),
        }
    }
}

impl TryFrom<i32> for MappingMode {
    type Error = DcError;

    fn try_from(code: i32) -> Result<Self> {
        MappingMode::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or_else(|| DcError::InvalidArgument(format!("unknown mapping mode code {code}")))
    }
}

impl FromStr for MappingMode {
    type Err = DcError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        MappingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| DcError::InvalidArgument(format!("unknown mapping mode '{s}'")))
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction from lowest to highest values on each axis.
///
/// The default is x growing to the right and y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOrientation {
    pub x_left_right: bool,
    pub y_bottom_up: bool,
}

impl AxisOrientation {
    pub fn new(x_left_right: bool, y_bottom_up: bool) -> Self {
        Self {
            x_left_right,
            y_bottom_up,
        }
    }

    pub fn sign_x(self) -> f64 {
        if self.x_left_right { 1.0 } else { -1.0 }
    }

    pub fn sign_y(self) -> f64 {
        if self.y_bottom_up { -1.0 } else { 1.0 }
    }
}

impl Default for AxisOrientation {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Horizontal layout of the device surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "ltr")]
    LeftToRight,
    /// The x axis is mirrored about the device width
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_mirrored(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }
}

/// Physical properties of the output device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceMetrics {
    pub ppi_x: u32,
    pub ppi_y: u32,
    /// Device width in pixels, 0 when unknown
    pub width: i32,
    /// Device height in pixels, 0 when unknown
    pub height: i32,
}

impl DeviceMetrics {
    pub const DEFAULT_PPI: u32 = 96;

    pub fn new(ppi_x: u32, ppi_y: u32, width: i32, height: i32) -> Result<Self> {
        let metrics = Self {
            ppi_x,
            ppi_y,
            width,
            height,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ppi_x == 0 || self.ppi_y == 0 {
            return Err(DcError::InvalidArgument(format!(
                "device resolution must be positive, got {}x{} ppi",
                self.ppi_x, self.ppi_y
            )));
        }
        if self.width < 0 || self.height < 0 {
            return Err(DcError::InvalidArgument(format!(
                "device size must not be negative, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Device size in whole millimetres
    pub fn size_mm(&self) -> Size {
        let to_mm = |px: i32, ppi: u32| (f64::from(px) * MM_PER_INCH / f64::from(ppi)).round() as i32;
        Size::new(to_mm(self.width, self.ppi_x), to_mm(self.height, self.ppi_y))
    }
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self {
            ppi_x: Self::DEFAULT_PPI,
            ppi_y: Self::DEFAULT_PPI,
            width: 0,
            height: 0,
        }
    }
}
