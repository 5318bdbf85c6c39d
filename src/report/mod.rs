//! Human-readable face report shared by the detection and conversion steps.
//!
//! This module provides:
//! - Writing a detected cube state to the report file
//! - Parsing a report back into a cube state
//! - Status display of a cube state through the log

pub mod reader;
pub mod writer;

pub use reader::{is_not_found, parse_cube_state};
pub use writer::{display_cube_state, save_cube_state};

use crate::cube::Face;

/// Section heading for a face, e.g. `Up face (UP - white center)`.
pub fn face_description(face: Face) -> String {
    let name = match face {
        Face::U => "Up",
        Face::R => "Right",
        Face::F => "Front",
        Face::D => "Down",
        Face::L => "Left",
        Face::B => "Back",
    };
    format!("{} face ({} - {} center)", name, face.marker(), face.center_color())
}
