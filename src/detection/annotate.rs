//! Diagnostic annotation of face photographs.
//!
//! Draws each cell's sampling box and a swatch of the classified color so a
//! misdetection can be spotted by eye in the saved result image.

use image::{ImageBuffer, Rgb};

use super::preprocess::SampleRect;
use crate::cube::Color;

pub const COLOR_SAMPLE_BOX: Rgb<u8> = Rgb([255, 255, 255]);

/// Height of the label swatch drawn above each sampling box.
const LABEL_HEIGHT: u32 = 6;
/// Gap between the swatch and the box.
const LABEL_GAP: u32 = 5;

/// Display color for a classification label.
pub fn swatch_color(color: Color) -> Rgb<u8> {
    match color {
        Color::White => Rgb([255, 255, 255]),
        Color::Yellow => Rgb([255, 213, 0]),
        Color::Red => Rgb([196, 30, 58]),
        Color::Orange => Rgb([255, 88, 0]),
        Color::Blue => Rgb([0, 81, 186]),
        Color::Green => Rgb([0, 158, 96]),
        Color::Unknown => Rgb([255, 0, 255]),
    }
}

/// Marks one sampled cell: outline of the patch plus a label swatch above it.
pub fn annotate_cell(img: &mut ImageBuffer<Rgb<u8>, Vec<u8>>, rect: &SampleRect, color: Color) {
    draw_rect(img, rect.x1, rect.y1, rect.width(), rect.height(), COLOR_SAMPLE_BOX, 1);

    let label_bottom = rect.y1.saturating_sub(LABEL_GAP);
    let label_top = label_bottom.saturating_sub(LABEL_HEIGHT);
    fill_rect(
        img,
        rect.x1,
        label_top,
        rect.width(),
        label_bottom - label_top,
        swatch_color(color),
    );
}

/// Draws a rectangle border on an image.
pub fn draw_rect(
    img: &mut ImageBuffer<Rgb<u8>, Vec<u8>>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    color: Rgb<u8>,
    thickness: u32,
) {
    let (img_w, img_h) = img.dimensions();
    let mut put = |px: u32, py: u32| {
        if px < img_w && py < img_h {
            img.put_pixel(px, py, color);
        }
    };

    for t in 0..thickness {
        // Top and bottom edges
        for dx in 0..w {
            put(x + dx, y + t);
            put(x + dx, y + h.saturating_sub(1 + t));
        }
        // Left and right edges
        for dy in 0..h {
            put(x + t, y + dy);
            put(x + w.saturating_sub(1 + t), y + dy);
        }
    }
}

/// Fills a solid rectangle, clipped to the image.
pub fn fill_rect(
    img: &mut ImageBuffer<Rgb<u8>, Vec<u8>>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    color: Rgb<u8>,
) {
    let (img_w, img_h) = img.dimensions();
    for py in y..(y + h).min(img_h) {
        for px in x..(x + w).min(img_w) {
            img.put_pixel(px, py, color);
        }
    }
}
