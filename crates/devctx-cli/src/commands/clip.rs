use anyhow::Result;
use devctx::region::Rect;
use devctx::DeviceContext;
use serde_json::json;

use crate::OutputFormat;

/// Push each rectangle as a nested clip and report the effective clip after
/// every step.
pub fn execute(
    dc: &mut DeviceContext,
    rects: &[Rect],
    device: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut steps = Vec::with_capacity(rects.len());

    for &rect in rects {
        if device {
            dc.set_device_clipping_region(rect);
        } else {
            dc.set_clipping_region(rect);
        }

        let device_box = dc.device_clipping_box()?;
        let logical_box = dc.clipping_box()?;
        let rect_count = dc.current_effective_clip().map_or(0, |r| r.len());
        log::debug!("Clip depth {} -> {device_box}", dc.clip_stack().depth());
        steps.push((rect, device_box, logical_box, rect_count));
    }

    match format {
        OutputFormat::Text => {
            for (i, (rect, device_box, logical_box, _)) in steps.iter().enumerate() {
                let state = if device_box.is_empty() { " (empty)" } else { "" };
                println!(
                    "{}. push {rect}: device {device_box}, logical {logical_box}{state}",
                    i + 1
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = steps
                .iter()
                .map(|(rect, device_box, logical_box, rect_count)| {
                    json!({
                        "pushed": rect,
                        "device_box": device_box,
                        "logical_box": logical_box,
                        "rects": rect_count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
