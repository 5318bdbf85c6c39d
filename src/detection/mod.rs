//! Sticker color detection from face photographs.
//!
//! This module provides:
//! - Image normalization and 3x3 grid sampling geometry
//! - RGB to 8-bit HSV conversion
//! - Ordered threshold classification of sampled patches
//! - Annotated diagnostic images per face

pub mod annotate;
pub mod classify;
pub mod hsv;
pub mod preprocess;

pub use classify::classify;
pub use preprocess::{GridGeometry, FACE_GRID};

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::cube::{Color, CubeState, FaceGrid};
use crate::paths;

/// Classifies the nine stickers of an already decoded face image.
///
/// Returns the grid together with an annotated copy of the normalized image.
pub fn detect_face(
    img: &ImageBuffer<Rgb<u8>, Vec<u8>>,
    geometry: &GridGeometry,
) -> (FaceGrid, ImageBuffer<Rgb<u8>, Vec<u8>>) {
    let mut marked = preprocess::normalize(img, geometry);
    let hsv_img = hsv::to_hsv(&preprocess::smooth(&marked));

    let mut cells = [[Color::Unknown; 3]; 3];
    for (row, row_cells) in cells.iter_mut().enumerate() {
        for (col, cell) in row_cells.iter_mut().enumerate() {
            let rect = geometry.sample_rect(row as u32, col as u32);

            // Empty patch leaves the cell unknown and unmarked
            let Some(mean) = hsv::mean_hsv(&hsv_img, &rect) else {
                continue;
            };

            *cell = classify(&mean);
            annotate::annotate_cell(&mut marked, &rect, *cell);
        }
    }

    (FaceGrid::new(cells), marked)
}

/// Loads a face photograph and classifies its stickers.
pub fn detect_face_colors(
    image_path: &Path,
) -> Result<(FaceGrid, ImageBuffer<Rgb<u8>, Vec<u8>>)> {
    let img = image::open(image_path)
        .context(format!("Failed to read image: {}", image_path.display()))?
        .to_rgb8();

    Ok(detect_face(&img, &FACE_GRID))
}

/// File name of the annotated result for a face.
fn result_file_name(face: char, center: Color) -> String {
    format!("result_{}_{}.jpg", face, center.name())
}

/// Detects every face photograph found in the images directory.
///
/// Faces whose photograph is missing or cannot be decoded are skipped. Each
/// detected face writes an annotated image to the results directory.
pub fn detect_all_faces(config: &AppConfig) -> Result<CubeState> {
    let images_dir = paths::get_images_dir(config);
    let results_dir = paths::get_results_dir(config);
    std::fs::create_dir_all(&results_dir).context(format!(
        "Failed to create results directory: {}",
        results_dir.display()
    ))?;

    let mut cube_state = CubeState::new();

    crate::log("=== Detecting cube faces ===");

    for center in Color::DETECTION_ORDER {
        let img_path = images_dir.join(format!("{}.{}", center.name(), config.image_extension));

        if !img_path.exists() {
            crate::log(&format!("Image not found: {}", img_path.display()));
            continue;
        }

        let Some(face) = center.home_face() else {
            continue;
        };

        crate::log(&format!(
            "Detecting {} (center: {})",
            img_path.display(),
            center
        ));

        let (grid, marked) = match detect_face_colors(&img_path) {
            Ok(detected) => detected,
            Err(e) => {
                crate::log(&format!("Face {} skipped: {:#}", face, e));
                continue;
            }
        };

        cube_state.insert_grid(face, &grid);

        let result_path: PathBuf = results_dir.join(result_file_name(face.letter(), center));
        match marked.save(&result_path) {
            Ok(()) => crate::log(&format!(
                "Face {} result saved: {}",
                face,
                result_path.display()
            )),
            Err(e) => crate::log(&format!(
                "Failed to save annotated image {}: {}",
                result_path.display(),
                e
            )),
        }

        crate::log(&format!("   Detected: {}", format_grid(&grid)));
        if grid.unknown_count() > 0 {
            crate::log(&format!(
                "   Warning: {} sticker(s) on face {} could not be classified",
                grid.unknown_count(),
                face
            ));
        }
    }

    Ok(cube_state)
}

/// One-line rendering of a grid for status output.
fn format_grid(grid: &FaceGrid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Runs the detection pipeline: photographs in, face report out.
///
/// The report is written only when all six faces were detected. Returns the
/// detected state either way.
pub fn run_detection(config: &AppConfig) -> Result<CubeState> {
    let cube_state = detect_all_faces(config)?;

    if cube_state.is_complete() {
        crate::report::display_cube_state(&cube_state);

        let report_path = paths::get_report_path(config);
        crate::report::save_cube_state(&cube_state, &report_path)?;
        crate::log(&format!("Cube state saved to: {}", report_path.display()));
        crate::log("All six faces detected");
        crate::log("Annotated images saved as result_<face>_<center>.jpg");
    } else {
        crate::log(&format!(
            "Detection incomplete: only {}/6 faces detected",
            cube_state.len()
        ));
        let missing: Vec<String> = cube_state
            .missing_faces()
            .iter()
            .map(|face| face.to_string())
            .collect();
        crate::log(&format!("Missing faces: {}", missing.join(", ")));
        if !cube_state.is_empty() {
            crate::report::display_cube_state(&cube_state);
        }
    }

    Ok(cube_state)
}
