use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use devctx::{DcConfig, DeviceContext};
use serde_json::json;

use crate::OutputFormat;

pub fn execute(dc: &DeviceContext, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => output_text(dc),
        OutputFormat::Json => output_json(dc),
    }
}

fn output_text(dc: &DeviceContext) -> Result<()> {
    let t = dc.transform();
    let (user_x, user_y) = t.user_scale();
    let (scale_x, scale_y) = t.scale();
    let axis = t.axis_orientation();
    let origin = t.device_origin();
    let effective = t.effective_origin();
    let ppi = dc.ppi();
    let size = dc.size();
    let size_mm = dc.size_mm();

    println!("{}", "Device Context".bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    let rows = [
        ("Mapping Mode", t.map_mode().to_string()),
        ("User Scale", format!("{user_x} × {user_y}")),
        (
            "Axis",
            format!(
                "x {}, y {}",
                if axis.x_left_right { "→" } else { "←" },
                if axis.y_bottom_up { "↑" } else { "↓" }
            ),
        ),
        ("Device Origin", format!("{}, {}", origin.x, origin.y)),
        ("Layout", format!("{:?}", t.layout_direction())),
        ("Resolution", format!("{} × {} ppi", ppi.width, ppi.height)),
        (
            "Device Size",
            format!(
                "{} × {} px ({} × {} mm)",
                size.width, size.height, size_mm.width, size_mm.height
            ),
        ),
        ("Effective Scale", format!("{scale_x:.4} × {scale_y:.4} px/unit")),
        (
            "Effective Origin",
            format!("{}, {}", effective.x, effective.y),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
    }

    println!("{table}");
    Ok(())
}

fn output_json(dc: &DeviceContext) -> Result<()> {
    let t = dc.transform();
    let (scale_x, scale_y) = t.scale();
    let output = json!({
        "config": DcConfig::from_transform(t),
        "effective_scale": [scale_x, scale_y],
        "effective_origin": t.effective_origin(),
        "size_mm": dc.size_mm(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
