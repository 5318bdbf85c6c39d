use std::fmt;

use crate::cube::Face;

/// Length of a complete solver string.
pub const STATE_LEN: usize = 54;

/// Stickers per face block.
const BLOCK_LEN: usize = 9;

/// Position of the center sticker inside a block.
const CENTER_OFFSET: usize = 4;

/// Outcome of checking a solver string.
///
/// Only the shape and the six centers are checked; whether the state is
/// physically reachable is left to the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    InvalidLength { expected: usize, actual: usize },
    CenterMismatch { face: Face, found: char },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid => write!(f, "state is valid"),
            Validation::InvalidLength { expected, actual } => write!(
                f,
                "invalid length: expected {} characters, got {}",
                expected, actual
            ),
            Validation::CenterMismatch { face, found } => write!(
                f,
                "center of face {} should be {}, found {}",
                face,
                face.letter(),
                found
            ),
        }
    }
}

/// Absolute index of a face's center sticker.
pub fn center_index(face: Face) -> usize {
    face as usize * BLOCK_LEN + CENTER_OFFSET
}

/// Checks the length and the center stickers of a solver string.
pub fn validate(state: &str) -> Validation {
    let chars: Vec<char> = state.chars().collect();

    if chars.len() != STATE_LEN {
        return Validation::InvalidLength {
            expected: STATE_LEN,
            actual: chars.len(),
        };
    }

    for face in Face::ALL {
        let found = chars[center_index(face)];
        if found != face.letter() {
            return Validation::CenterMismatch { face, found };
        }
    }

    Validation::Valid
}
