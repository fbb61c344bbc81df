// intensity.rs - Concentration fields to grayscale pixels

use crate::grid::Buffer;

pub const ALPHA: u8 = 255;

/// Brightness of a cell: `floor((a - b) * 255)` clamped to `0..=255`.
#[inline]
pub fn to_intensity(a: f64, b: f64) -> u8 {
    ((a - b) * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Row-major RGBA pixels, one per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

/// Repaints `frame` from `buffer`, resizing it if the dimensions differ.
pub fn render_into(buffer: &Buffer, frame: &mut Frame) {
    if (frame.width, frame.height) != (buffer.width(), buffer.height()) {
        *frame = Frame::new(buffer.width(), buffer.height());
    }
    for (px, cell) in frame.pixels.chunks_exact_mut(4).zip(buffer.cells()) {
        let c = to_intensity(cell.a, cell.b);
        px.copy_from_slice(&[c, c, c, ALPHA]);
    }
}

pub fn render_rgba(buffer: &Buffer) -> Frame {
    let mut frame = Frame::new(buffer.width(), buffer.height());
    render_into(buffer, &mut frame);
    frame
}
