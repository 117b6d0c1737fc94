use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use devctx::region::{Point, Rect, Size};
use devctx::{DcConfig, DeviceContext, LayoutDirection, MappingMode};

pub mod commands;

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LayoutArg {
    Ltr,
    Rtl,
}

impl From<LayoutArg> for LayoutDirection {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Ltr => LayoutDirection::LeftToRight,
            LayoutArg::Rtl => LayoutDirection::RightToLeft,
        }
    }
}

/// Options describing the device context, shared by every subcommand.
///
/// Command-line values override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// TOML file describing the context
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Mapping mode (text, twips, points, metric, lometric)
    #[arg(short, long, global = true)]
    pub map_mode: Option<MappingMode>,

    /// User scale as X,Y
    #[arg(short, long, global = true, value_parser = parse_scale, allow_hyphen_values = true)]
    pub scale: Option<(f64, f64)>,

    /// Device origin as X,Y
    #[arg(short, long, global = true, value_parser = parse_point, allow_hyphen_values = true)]
    pub origin: Option<Point>,

    /// Make x grow leftwards
    #[arg(long, global = true)]
    pub flip_x: bool,

    /// Make y grow upwards
    #[arg(long, global = true)]
    pub flip_y: bool,

    /// Layout direction of the device
    #[arg(long, global = true)]
    pub layout: Option<LayoutArg>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

impl ContextArgs {
    pub fn load_config(&self) -> Result<DcConfig> {
        let mut config = match &self.config {
            Some(path) => DcConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => DcConfig::default(),
        };

        if let Some(mode) = self.map_mode {
            config.map_mode = mode;
        }
        if let Some((x, y)) = self.scale {
            config.user_scale = [x, y];
        }
        if let Some(origin) = self.origin {
            config.device_origin = [origin.x, origin.y];
        }
        if self.flip_x {
            config.axis.x_left_right = false;
        }
        if self.flip_y {
            config.axis.y_bottom_up = true;
        }
        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        Ok(config)
    }

    pub fn build_context(&self) -> Result<DeviceContext> {
        let config = self.load_config()?;
        log::debug!("Using context config: {config:?}");
        DeviceContext::from_config(&config).context("Invalid device context settings")
    }
}

fn split_numbers<T: std::str::FromStr>(s: &str, count: usize) -> Result<Vec<T>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != count {
        return Err(format!(
            "expected {count} comma-separated numbers, got '{s}'"
        ));
    }
    parts
        .into_iter()
        .map(|p| p.parse::<T>().map_err(|_| format!("'{p}' is not a valid number")))
        .collect()
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let v = split_numbers::<i32>(s, 2)?;
    Ok(Point::new(v[0], v[1]))
}

pub fn parse_size(s: &str) -> Result<Size, String> {
    let v = split_numbers::<i32>(s, 2)?;
    Ok(Size::new(v[0], v[1]))
}

pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let v = split_numbers::<i32>(s, 4)?;
    Ok(Rect::new(v[0], v[1], v[2], v[3]))
}

pub fn parse_scale(s: &str) -> Result<(f64, f64), String> {
    let v = split_numbers::<f64>(s, 2)?;
    Ok((v[0], v[1]))
}
