//! PNG rendering of an optimal plan: a bar chart of quantities and one pie per resource.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::info;

use crate::error::Result;
use crate::model::ResourceUsage;
use crate::planner::ProductionPlan;

pub const PANEL_SIZE: u32 = 400;
pub const WIDTH: u32 = PANEL_SIZE * 3;
pub const HEIGHT: u32 = PANEL_SIZE;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0x4C, 0xAF, 0x50]);
pub const GREY: Rgb<u8> = Rgb([0xBD, 0xBD, 0xBD]);
pub const ORANGE: Rgb<u8> = Rgb([0xFF, 0x57, 0x22]);
pub const PURPLE: Rgb<u8> = Rgb([0x9C, 0x27, 0xB0]);

// Panel geometry in pixels.
const MARGIN: u32 = 50;
const BAR_WIDTH: u32 = 100;
const PIE_RADIUS: u32 = 150;

/// Draws the three panels side by side.
pub fn render(plan: &ProductionPlan, hours: &ResourceUsage, material: &ResourceUsage) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::from_pixel(WIDTH, HEIGHT, WHITE);

    draw_bars(&mut img, 0, [plan.qty_a, plan.qty_b]);
    draw_pie(&mut img, PANEL_SIZE, hours, ORANGE);
    draw_pie(&mut img, PANEL_SIZE * 2, material, PURPLE);

    img
}

/// Renders and writes the chart to `path`; the format follows the extension.
pub fn save(
    path: &Path,
    plan: &ProductionPlan,
    hours: &ResourceUsage,
    material: &ResourceUsage,
) -> Result<()> {
    render(plan, hours, material).save(path)?;
    info!(path = %path.display(), "chart saved");
    Ok(())
}

/// Height in pixels of a bar for `qty` when the axis spans `plot_height` pixels.
pub fn bar_height(qty: u64, quantities: [u64; 2], plot_height: u32) -> u32 {
    let max = quantities.iter().copied().max().unwrap_or(0);
    // leave headroom above the tallest bar; an all-zero plan still gets an axis
    let y_limit = 1.2 * if max > 0 { max as f64 } else { 10. };
    ((qty as f64 / y_limit) * plot_height as f64).round() as u32
}

fn draw_bars(img: &mut RgbImage, offset_x: u32, quantities: [u64; 2]) {
    let left = offset_x + MARGIN;
    let right = offset_x + PANEL_SIZE - MARGIN;
    let baseline = PANEL_SIZE - MARGIN;
    let plot_height = baseline - MARGIN;
    let slot = (right - left) / 2;

    for (i, &qty) in quantities.iter().enumerate() {
        let color = if qty > 0 { GREEN } else { GREY };
        let height = bar_height(qty, quantities, plot_height);
        let start_x = left + slot * i as u32 + (slot - BAR_WIDTH) / 2;
        for y in (baseline - height)..baseline {
            for x in start_x..start_x + BAR_WIDTH {
                img.put_pixel(x, y, color);
            }
        }
    }

    // Left and bottom axes only.
    for y in MARGIN..=baseline {
        img.put_pixel(left, y, BLACK);
    }
    for x in left..=right {
        img.put_pixel(x, baseline, BLACK);
    }
}

/// Fraction of the pie given to the used share.
pub fn used_fraction(usage: &ResourceUsage) -> Option<f64> {
    let used = usage.used.max(0.);
    let total = used + usage.remaining();
    if total > 0. { Some(used / total) } else { None }
}

fn draw_pie(img: &mut RgbImage, offset_x: u32, usage: &ResourceUsage, used_color: Rgb<u8>) {
    let cx = (offset_x + PANEL_SIZE / 2) as f64;
    let cy = (PANEL_SIZE / 2) as f64;
    let r = PIE_RADIUS as f64;
    // An empty resource is drawn as a single grey disc.
    let used_degrees = used_fraction(usage).unwrap_or(0.) * 360.;

    for y in (cy - r) as u32..=(cy + r) as u32 {
        for x in (cx - r) as u32..=(cx + r) as u32 {
            let dx = x as f64 - cx;
            let dy = cy - y as f64;
            if dx * dx + dy * dy > r * r {
                continue;
            }
            // Start at 12 o'clock and sweep counter-clockwise.
            let angle = (dy.atan2(dx).to_degrees() - 90.).rem_euclid(360.);
            let color = if angle < used_degrees { used_color } else { GREY };
            img.put_pixel(x, y, color);
        }
    }
}
