use anyhow::Result;
use devctx::DeviceContext;
use devctx::region::Point;
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct MappedPoint {
    logical: Point,
    device: Point,
}

/// Convert logical points to device points. With `reverse`, the inputs are
/// device points and the output runs the other way.
pub fn execute(
    dc: &mut DeviceContext,
    points: &[Point],
    reverse: bool,
    format: OutputFormat,
) -> Result<()> {
    let mapped: Vec<MappedPoint> = points
        .iter()
        .map(|&p| {
            if reverse {
                MappedPoint {
                    logical: dc.transform().from_device_point(p),
                    device: p,
                }
            } else {
                MappedPoint {
                    logical: p,
                    device: dc.to_device_point(p),
                }
            }
        })
        .collect();

    for m in &mapped {
        dc.calc_bounding_box_point(m.logical);
    }

    match format {
        OutputFormat::Text => {
            for m in &mapped {
                let arrow = if reverse { "<-" } else { "->" };
                println!(
                    "({}, {}) {arrow} ({}, {})",
                    m.logical.x, m.logical.y, m.device.x, m.device.y
                );
            }
            if let Some(bounds) = dc.transform().bounding_box().rect() {
                println!("bounding box: {bounds}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&mapped)?);
        }
    }
    Ok(())
}
