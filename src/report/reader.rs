//! Face report parser.
//!
//! A report is a sequence of sections. Each section opens with a heading
//! containing a face marker such as `(UP` and is followed by row lines that
//! hold a quoted color list. Anything else is ignored.

use anyhow::{Context, Result};
use regex::Regex;
use std::io;
use std::path::Path;

use crate::cube::{CubeState, Face};

/// Matches the face marker inside a section heading.
const MARKER_PATTERN: &str = r"\((UP|RIGHT|FRONT|DOWN|LEFT|BACK)\b";

/// Prefix of a row line.
const ROW_PREFIX: &str = "['";

/// Stickers per face.
const FACE_STICKERS: usize = 9;

/// Splits a row line such as `['red', 'blue', 'white']` into its tokens.
fn parse_row(line: &str) -> Vec<String> {
    let cleaned = line.replace(['\'', '[', ']'], "");
    cleaned.split(',').map(|t| t.trim().to_string()).collect()
}

/// Parses report text into a cube state.
///
/// A face is recorded once exactly nine tokens have been collected since its
/// heading. Sections that never reach nine are dropped.
pub fn parse_report(text: &str) -> Result<CubeState> {
    let marker_regex = Regex::new(MARKER_PATTERN)?;

    let mut cube_state = CubeState::new();
    let mut current_face: Option<Face> = None;
    let mut face_data: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if let Some(face) = marker_regex
            .captures(line)
            .and_then(|caps| Face::from_marker(&caps[1]))
        {
            current_face = Some(face);
            face_data.clear();
            continue;
        }

        let Some(face) = current_face else {
            continue;
        };
        if !line.starts_with(ROW_PREFIX) {
            continue;
        }

        face_data.extend(parse_row(line));

        if face_data.len() == FACE_STICKERS {
            cube_state.insert_tokens(face, std::mem::take(&mut face_data));
        }
    }

    Ok(cube_state)
}

/// Reads and parses a report file.
///
/// A missing file keeps its `io::ErrorKind::NotFound` in the error chain; see
/// [`is_not_found`].
pub fn parse_cube_state(path: &Path) -> Result<CubeState> {
    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read report file: {}", path.display()))?;

    parse_report(&text)
}

/// Returns true if the error was caused by a missing file.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::writer::format_report;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_report(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn solved_state() -> CubeState {
        let mut state = CubeState::new();
        for face in Face::ALL {
            state.insert_tokens(face, vec![face.center_color().name().to_string(); 9]);
        }
        state
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row("['red', 'orange', 'blue']"),
            vec!["red", "orange", "blue"]
        );
    }

    #[test]
    fn test_parse_single_section() {
        let report = "Front face (FRONT - red center):
  ['red', 'red', 'white']
  ['red', 'red', 'red']
  ['green', 'red', 'red']
";
        let state = parse_report(report).unwrap();

        assert_eq!(state.len(), 1);
        let front = state.get(Face::F).unwrap();
        assert_eq!(front.len(), 9);
        assert_eq!(front[2], "white");
        assert_eq!(front[6], "green");
    }

    #[test]
    fn test_formatted_report_parses_back() {
        let mut state = solved_state();
        state.insert_tokens(
            Face::L,
            ["green", "red", "green", "green", "green", "unknown", "green", "green", "blue"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );

        let parsed = parse_report(&format_report(&state)).unwrap();

        assert_eq!(parsed, state);
    }

    #[test]
    fn test_report_without_sections_is_empty() {
        let state = parse_report("Cube face detection report\n=====\n\nnothing here\n").unwrap();
        assert!(state.is_empty());

        let state = parse_report("").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_rows_before_any_heading_are_ignored() {
        let report = "['white', 'white', 'white']
Up face (UP - white center):
  ['white', 'white', 'white']
  commentary between rows
  ['white', 'white', 'white']
  ['white', 'white', 'white']
";
        let state = parse_report(report).unwrap();

        assert_eq!(state.get(Face::U).unwrap().len(), 9);
    }

    #[test]
    fn test_incomplete_section_is_dropped() {
        let report = "Up face (UP - white center):
  ['white', 'white', 'white']
  ['white', 'white', 'white']
Right face (RIGHT - blue center):
  ['blue', 'blue', 'blue']
  ['blue', 'blue', 'blue']
  ['blue', 'blue', 'blue']
";
        let state = parse_report(report).unwrap();

        assert!(!state.contains(Face::U));
        assert!(state.contains(Face::R));
    }

    #[test]
    fn test_missing_section_leaves_face_absent() {
        let state = solved_state();
        let full = format_report(&state);
        let without_down: String = full
            .split("\n\n")
            .filter(|block| !block.contains("(DOWN"))
            .collect::<Vec<_>>()
            .join("\n\n");

        let parsed = parse_report(&without_down).unwrap();

        assert_eq!(parsed.len(), 5);
        assert!(!parsed.contains(Face::D));
        assert_eq!(parsed.get(Face::L), state.get(Face::L));
    }

    #[test]
    fn test_unrecognized_tokens_are_kept() {
        let report = "Right face (RIGHT - blue center):
  ['blue', 'purple', 'blue']
  ['blue', 'blue', 'blue']
  ['blue', 'blue', 'blue']
";
        let state = parse_report(report).unwrap();

        assert_eq!(state.get(Face::R).unwrap()[1], "purple");
    }

    #[test]
    fn test_parse_file() {
        let file = create_test_report(&format_report(&solved_state()));
        let state = parse_cube_state(file.path()).unwrap();

        assert!(state.is_complete());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_cube_state(&dir.path().join("cube_state.txt")).unwrap_err();

        assert!(is_not_found(&err));
        assert!(err.to_string().contains("cube_state.txt"));
    }
}
