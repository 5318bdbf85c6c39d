use image::{ImageBuffer, Rgb};

use super::preprocess::SampleRect;

/// Image whose three channels hold hue (0-180), saturation (0-255) and
/// value (0-255), the 8-bit HSV layout used by common vision libraries.
pub type HsvImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Mean HSV of a sampled region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Converts one RGB pixel to 8-bit HSV with hue halved into 0-180.
pub fn rgb_to_hsv(pixel: &Rgb<u8>) -> Rgb<u8> {
    let r = pixel[0] as f32;
    let g = pixel[1] as f32;
    let b = pixel[2] as f32;

    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };

    let mut h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    // 360 degrees would round to 180, which wraps back to 0 on this scale
    let h = ((h / 2.0).round() as u32 % 180) as u8;
    Rgb([h, s.round() as u8, v as u8])
}

/// Converts a whole RGB image to the 8-bit HSV layout.
pub fn to_hsv(img: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> HsvImage {
    let (width, height) = img.dimensions();
    let mut output = ImageBuffer::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, rgb_to_hsv(pixel));
    }

    output
}

/// Per-channel mean over a region, or None if the region is empty.
pub fn mean_hsv(hsv: &HsvImage, rect: &SampleRect) -> Option<Hsv> {
    if rect.is_empty() {
        return None;
    }

    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for y in rect.y1..rect.y2 {
        for x in rect.x1..rect.x2 {
            let pixel = hsv.get_pixel(x, y);
            sum[0] += pixel[0] as u64;
            sum[1] += pixel[1] as u64;
            sum[2] += pixel[2] as u64;
            count += 1;
        }
    }

    let count = count as f32;
    Some(Hsv::new(
        sum[0] as f32 / count,
        sum[1] as f32 / count,
        sum[2] as f32 / count,
    ))
}
