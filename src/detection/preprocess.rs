use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};

/// Gaussian sigma matching a 5x5 kernel with automatic sigma.
const BLUR_SIGMA: f32 = 1.1;

/// Layout of the 3x3 sticker grid on a normalized face image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    /// Side length of the normalized square image
    pub size: u32,
    /// Offset of the first cell from the top-left corner
    pub margin: u32,
    /// Distance between adjacent cell origins
    pub cell: u32,
    /// Side length of the square patch sampled at each cell center
    pub sample: u32,
}

/// Geometry used for face photographs.
pub const FACE_GRID: GridGeometry = GridGeometry {
    size: 400,
    margin: 20,
    cell: 120,
    sample: 30,
};

/// Half-open pixel rectangle `[x1, x2) x [y1, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl SampleRect {
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }
}

impl GridGeometry {
    /// Center pixel of a grid cell.
    pub fn cell_center(&self, row: u32, col: u32) -> (u32, u32) {
        let half = self.cell / 2;
        (
            self.margin + col * self.cell + half,
            self.margin + row * self.cell + half,
        )
    }

    /// Sampling patch for a grid cell, clamped to the normalized image.
    ///
    /// Cells whose patch falls entirely outside the image come back empty.
    pub fn sample_rect(&self, row: u32, col: u32) -> SampleRect {
        let (cx, cy) = self.cell_center(row, col);
        let half = self.sample / 2;

        SampleRect {
            x1: cx.saturating_sub(half),
            y1: cy.saturating_sub(half),
            x2: (cx + half).min(self.size),
            y2: (cy + half).min(self.size),
        }
    }
}

/// Resizes a face photograph to the grid's square size.
pub fn normalize(
    img: &ImageBuffer<Rgb<u8>, Vec<u8>>,
    geometry: &GridGeometry,
) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    imageops::resize(img, geometry.size, geometry.size, FilterType::Triangle)
}

/// Smooths sensor and compression noise before color sampling.
pub fn smooth(img: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    imageops::blur(img, BLUR_SIGMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_grid_sample_rects() {
        assert_eq!(
            FACE_GRID.sample_rect(0, 0),
            SampleRect { x1: 65, y1: 65, x2: 95, y2: 95 }
        );
        assert_eq!(
            FACE_GRID.sample_rect(1, 2),
            SampleRect { x1: 305, y1: 185, x2: 335, y2: 215 }
        );
        assert_eq!(
            FACE_GRID.sample_rect(2, 2),
            SampleRect { x1: 305, y1: 305, x2: 335, y2: 335 }
        );
    }

    #[test]
    fn test_sample_rect_clamps_to_image() {
        let geometry = GridGeometry { size: 100, margin: 0, cell: 90, sample: 30 };

        // Center (45, 135): x fits, y starts at 120 past the 100px edge
        let rect = geometry.sample_rect(1, 0);
        assert_eq!(rect.x1, 30);
        assert_eq!(rect.x2, 60);
        assert!(rect.is_empty());

        // Center (135, 45): x1=120 > size
        assert!(geometry.sample_rect(0, 1).is_empty());
    }

    #[test]
    fn test_sample_rect_partial_clip() {
        let geometry = GridGeometry { size: 140, margin: 0, cell: 90, sample: 30 };

        // Center (135, 45): patch [120, 150) clipped to [120, 140)
        let rect = geometry.sample_rect(0, 1);
        assert_eq!(rect.width(), 20);
        assert_eq!(rect.height(), 30);
    }

    #[test]
    fn test_normalize_resizes_to_square() {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(640, 480, Rgb([10, 20, 30]));
        let normalized = normalize(&img, &FACE_GRID);

        assert_eq!(normalized.dimensions(), (400, 400));
        let center = normalized.get_pixel(200, 200);
        assert!((center[0] as i32 - 10).abs() <= 1);
        assert!((center[2] as i32 - 30).abs() <= 1);
    }

    #[test]
    fn test_smooth_keeps_flat_regions() {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(50, 50, Rgb([200, 100, 0]));
        let blurred = smooth(&img);

        assert_eq!(blurred.dimensions(), (50, 50));
        let center = blurred.get_pixel(25, 25);
        assert!((center[0] as i32 - 200).abs() <= 1);
        assert!((center[1] as i32 - 100).abs() <= 1);
    }
}
