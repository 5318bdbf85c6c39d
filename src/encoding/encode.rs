use std::fmt;

use crate::cube::{Color, CubeState, Face};

/// Stand-in for a sticker whose color has no solver letter.
pub const PLACEHOLDER: char = '?';

/// A problem found while encoding; none of them stop the encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeIssue {
    /// A sticker token maps to no face letter and was replaced by `?`.
    UnmappedColor { face: Face, color: String },
    /// A face was absent and contributed no characters.
    MissingFace(Face),
}

impl fmt::Display for EncodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeIssue::UnmappedColor { face, color } => {
                write!(f, "Warning: unknown color '{}' on face {}", color, face)
            }
            EncodeIssue::MissingFace(face) => write!(f, "Error: missing data for face {}", face),
        }
    }
}

/// Result of encoding a cube state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub state: String,
    pub issues: Vec<EncodeIssue>,
}

/// Solver letter for a sticker token, if it names a mapped color.
fn letter_for(token: &str) -> Option<char> {
    Color::from_name(token).and_then(Color::face_letter)
}

/// Encodes a cube state as a solver string in U, R, F, D, L, B block order.
///
/// The result has 54 characters only when all six faces are present with
/// nine stickers each.
pub fn encode(cube_state: &CubeState) -> Encoded {
    let mut state = String::with_capacity(54);
    let mut issues = Vec::new();

    for face in Face::ALL {
        let Some(stickers) = cube_state.get(face) else {
            issues.push(EncodeIssue::MissingFace(face));
            continue;
        };

        for token in stickers {
            match letter_for(token) {
                Some(letter) => state.push(letter),
                None => {
                    issues.push(EncodeIssue::UnmappedColor {
                        face,
                        color: token.clone(),
                    });
                    state.push(PLACEHOLDER);
                }
            }
        }
    }

    Encoded { state, issues }
}
