//! Face-keyed cube state.
//!
//! Stickers are kept as their textual color names so that tokens read back
//! from a report which name no known color survive until encoding.

use std::collections::BTreeMap;

use super::{Face, FaceGrid};

/// Colors of zero to six faces, each a flat row-major sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CubeState {
    faces: BTreeMap<Face, Vec<String>>,
}

impl CubeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a detected face, replacing any previous entry.
    pub fn insert_grid(&mut self, face: Face, grid: &FaceGrid) {
        let stickers = grid.iter().map(|c| c.name().to_string()).collect();
        self.faces.insert(face, stickers);
    }

    /// Records a face from raw color tokens, replacing any previous entry.
    pub fn insert_tokens(&mut self, face: Face, tokens: Vec<String>) {
        self.faces.insert(face, tokens);
    }

    pub fn get(&self, face: Face) -> Option<&[String]> {
        self.faces.get(&face).map(Vec::as_slice)
    }

    pub fn contains(&self, face: Face) -> bool {
        self.faces.contains_key(&face)
    }

    /// Number of faces present.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.faces.len() == Face::ALL.len()
    }

    /// Faces in solver block order with their stickers.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &[String])> {
        self.faces.iter().map(|(face, stickers)| (*face, stickers.as_slice()))
    }

    pub fn missing_faces(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|face| !self.contains(*face))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Color;

    #[test]
    fn test_insert_grid_flattens_row_major() {
        let grid = FaceGrid::new([
            [Color::White, Color::Red, Color::White],
            [Color::White, Color::White, Color::White],
            [Color::White, Color::White, Color::Blue],
        ]);
        let mut state = CubeState::new();
        state.insert_grid(Face::U, &grid);

        let stickers = state.get(Face::U).unwrap();
        assert_eq!(stickers.len(), 9);
        assert_eq!(stickers[1], "red");
        assert_eq!(stickers[8], "blue");
    }

    #[test]
    fn test_iteration_follows_block_order() {
        let mut state = CubeState::new();
        state.insert_tokens(Face::B, vec!["orange".to_string(); 9]);
        state.insert_tokens(Face::U, vec!["white".to_string(); 9]);
        state.insert_tokens(Face::F, vec!["red".to_string(); 9]);

        let order: Vec<Face> = state.iter().map(|(face, _)| face).collect();
        assert_eq!(order, vec![Face::U, Face::F, Face::B]);
        assert_eq!(state.missing_faces(), vec![Face::R, Face::D, Face::L]);
        assert!(!state.is_complete());
    }
}
