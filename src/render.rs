use crate::config::{ACCENT_COLOR, BAR_COLOR};
use crate::error::{IconError, Result};
use crate::models::{AccentCircle, BarSpec, CanvasSpec};
use crate::utils::write_atomically;
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Draws the URL bar glyph on a fresh canvas of the given edge length.
pub fn draw_icon(edge_length: u32) -> Result<RgbImage> {
    if edge_length == 0 {
        return Err(IconError::InvalidSize(edge_length));
    }
    let canvas = CanvasSpec::new(edge_length);
    let mut image = RgbImage::from_pixel(edge_length, edge_length, canvas.background);

    for bar in canvas.bars() {
        fill_bar(&mut image, &bar);
    }
    let accent = canvas.accent();
    fill_accent(&mut image, &accent);

    debug!(
        "Drew {0}x{0} icon: margin {1}, bar thickness {2}, accent box {3:?}",
        edge_length,
        canvas.margin(),
        canvas.bar_thickness(),
        accent
    );
    Ok(image)
}

/// Draws an icon and writes it as PNG to `output_path`, replacing any existing file.
pub fn render_icon(edge_length: u32, output_path: &Path) -> Result<()> {
    let image = draw_icon(edge_length)?;
    write_atomically(output_path, |staged| {
        let mut writer = BufWriter::new(staged.as_file_mut());
        image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| IconError::from_image(output_path, e))?;
        writer.flush().map_err(|e| IconError::io(output_path, e))
    })
}

fn fill_bar(image: &mut RgbImage, bar: &BarSpec) {
    fill_rect(image, bar.x0, bar.y0, bar.x1, bar.y1, BAR_COLOR);
}

fn fill_accent(image: &mut RgbImage, accent: &AccentCircle) {
    fill_ellipse(image, accent.x0, accent.y0, accent.x1, accent.y1, ACCENT_COLOR);
}

/// Fills the inclusive rectangle `[x0..=x1] x [y0..=y1]`, clipped to the image.
fn fill_rect(image: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    if x0 >= width || y0 >= height {
        return;
    }
    for y in y0..=y1.min(height - 1) {
        for x in x0..=x1.min(width - 1) {
            image.put_pixel(x, y, color);
        }
    }
}

/// Fills the ellipse inscribed in the inclusive box `[x0..=x1] x [y0..=y1]`.
/// A pixel is painted when its centre lies inside the ellipse.
fn fill_ellipse(image: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    if x0 >= width || y0 >= height {
        return;
    }
    let cx = (x0 + x1 + 1) as f64 / 2.0;
    let cy = (y0 + y1 + 1) as f64 / 2.0;
    let rx = (x1 + 1 - x0) as f64 / 2.0;
    let ry = (y1 + 1 - y0) as f64 / 2.0;

    for y in y0..=y1.min(height - 1) {
        let dy = (y as f64 + 0.5 - cy) / ry;
        for x in x0..=x1.min(width - 1) {
            let dx = (x as f64 + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                image.put_pixel(x, y, color);
            }
        }
    }
}
