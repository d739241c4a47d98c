use crate::config::{BACKGROUND, BAR_COUNT};
use image::Rgb;

/// A size/file name pair the driver renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

/// The square canvas a single icon is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    pub edge_length: u32,
    pub background: Rgb<u8>,
}

/// One horizontal bar. Corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarSpec {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// Inclusive bounding box of the parameter indicator circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentCircle {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CanvasSpec {
    pub fn new(edge_length: u32) -> Self {
        Self {
            edge_length,
            background: BACKGROUND,
        }
    }

    /// Inset from every edge before anything is drawn.
    pub fn margin(&self) -> u32 {
        self.edge_length / 8
    }

    pub fn bar_thickness(&self) -> u32 {
        self.edge_length / 16
    }

    /// Vertical distance between the tops of consecutive bars.
    pub fn bar_spacing(&self) -> u32 {
        self.edge_length / 4
    }

    /// The three bars, top to bottom. May extend past the canvas for tiny sizes.
    pub fn bars(&self) -> Vec<BarSpec> {
        let margin = self.margin();
        let thickness = self.bar_thickness();
        (0..BAR_COUNT)
            .map(|i| {
                let y = margin + i * self.bar_spacing();
                BarSpec {
                    x0: margin,
                    y0: y,
                    x1: self.edge_length - margin,
                    y1: y + thickness,
                }
            })
            .collect()
    }

    /// Circle tucked into the bottom-right corner; its box overhangs the edge.
    pub fn accent(&self) -> AccentCircle {
        let circle_size = self.edge_length / 8;
        let circle_pos = self.edge_length - self.margin() - circle_size;
        AccentCircle {
            x0: circle_pos,
            y0: circle_pos,
            x1: circle_pos + circle_size * 2,
            y1: circle_pos + circle_size * 2,
        }
    }
}

/// Outcome of one written icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub file_name: String,
    pub size: u32,
    pub bytes: u64,
}
