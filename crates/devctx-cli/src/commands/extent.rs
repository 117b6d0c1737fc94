use anyhow::Result;
use devctx::DeviceContext;
use devctx::region::Size;
use serde_json::json;

use crate::OutputFormat;

pub fn execute(
    dc: &DeviceContext,
    extent: Size,
    reverse: bool,
    format: OutputFormat,
) -> Result<()> {
    let (logical, device) = if reverse {
        (dc.transform().from_device_size(extent), extent)
    } else {
        (extent, dc.to_device_size(extent))
    };

    match format {
        OutputFormat::Text => {
            println!(
                "{}x{} (logical) = {}x{} (device)",
                logical.width, logical.height, device.width, device.height
            );
        }
        OutputFormat::Json => {
            let output = json!({ "logical": logical, "device": device });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
