//! Cube vocabulary shared by both pipelines.
//!
//! This module provides:
//! - Face identifiers in solver block order
//! - Sticker colors and the fixed color/face tables
//! - Per-face 3x3 grids and the face-keyed cube state

pub mod state;

pub use state::CubeState;

use std::fmt;

/// One of the six cube faces, ordered as the solver expects its blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// Solver block order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Color of this face's center sticker.
    pub fn center_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Blue,
            Face::F => Color::Red,
            Face::D => Color::Yellow,
            Face::L => Color::Green,
            Face::B => Color::Orange,
        }
    }

    /// Uppercase name used as the section marker in the face report.
    pub fn marker(self) -> &'static str {
        match self {
            Face::U => "UP",
            Face::R => "RIGHT",
            Face::F => "FRONT",
            Face::D => "DOWN",
            Face::L => "LEFT",
            Face::B => "BACK",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.marker() == marker)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker color as classified from a photograph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    /// No threshold rule matched the sampled patch.
    Unknown,
}

impl Color {
    /// Order in which face photographs are processed, keyed by center color.
    pub const DETECTION_ORDER: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Unknown => "unknown",
        }
    }

    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "white" => Some(Color::White),
            "yellow" => Some(Color::Yellow),
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "unknown" => Some(Color::Unknown),
            _ => None,
        }
    }

    /// Solver letter for a sticker of this color. `Unknown` has none.
    pub fn face_letter(self) -> Option<char> {
        match self {
            Color::White => Some('U'),
            Color::Yellow => Some('D'),
            Color::Red => Some('F'),
            Color::Orange => Some('B'),
            Color::Blue => Some('R'),
            Color::Green => Some('L'),
            Color::Unknown => None,
        }
    }

    /// Face whose center sticker has this color.
    pub fn home_face(self) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.center_color() == self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors of one face, row-major, as seen in its photograph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceGrid {
    cells: [[Color; 3]; 3],
}

impl FaceGrid {
    pub fn new(cells: [[Color; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Color; 3]; 3] {
        &self.cells
    }

    /// Row-major iteration over all nine stickers.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn unknown_count(&self) -> usize {
        self.iter().filter(|c| *c == Color::Unknown).count()
    }
}
