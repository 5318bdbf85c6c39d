use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::face_description;
use crate::cube::{CubeState, Face};

const REPORT_TITLE: &str = "Cube face detection report";

/// Formats one grid row as a quoted list: `['white', 'red', 'blue']`.
fn format_row(row: &[String]) -> String {
    let quoted: Vec<String> = row.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Renders the full report text for a cube state.
///
/// Faces appear in solver block order; absent faces are left out.
pub fn format_report(cube_state: &CubeState) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for (face, stickers) in cube_state.iter() {
        out.push_str(&format!("{}:\n", face_description(face)));
        for row in stickers.chunks(3) {
            out.push_str(&format!("  {}\n", format_row(row)));
        }
        out.push('\n');
    }

    out
}

/// Writes the report for a cube state, replacing any existing file.
pub fn save_cube_state(cube_state: &CubeState, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .context(format!("Failed to create report file: {}", path.display()))?;

    file.write_all(format_report(cube_state).as_bytes())
        .context("Failed to write report")?;

    Ok(())
}

/// Logs every face of a cube state, noting the ones that are missing.
pub fn display_cube_state(cube_state: &CubeState) {
    let rule = "=".repeat(60);
    crate::log(&rule);
    crate::log(&format!("                 {}", REPORT_TITLE));
    crate::log(&rule);

    for face in Face::ALL {
        match cube_state.get(face) {
            Some(stickers) => {
                crate::log(&format!("{}:", face_description(face)));
                for (i, row) in stickers.chunks(3).enumerate() {
                    crate::log(&format!("  Row {}: {}", i + 1, format_row(row)));
                }
            }
            None => crate::log(&format!("Missing data for {}", face_description(face))),
        }
    }

    crate::log(&rule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row(&tokens(&["white", "red", "blue"])),
            "['white', 'red', 'blue']"
        );
    }

    #[test]
    fn test_format_report_layout() {
        let mut state = CubeState::new();
        state.insert_tokens(
            Face::F,
            tokens(&["red", "red", "red", "white", "red", "red", "red", "red", "green"]),
        );

        let report = format_report(&state);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[3], "Front face (FRONT - red center):");
        assert_eq!(lines[4], "  ['red', 'red', 'red']");
        assert_eq!(lines[5], "  ['white', 'red', 'red']");
        assert_eq!(lines[6], "  ['red', 'red', 'green']");
        assert_eq!(lines[7], "");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_save_cube_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cube_state.txt");

        let mut state = CubeState::new();
        state.insert_tokens(Face::U, vec!["white".to_string(); 9]);
        save_cube_state(&state, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Up face (UP - white center):"));
        assert_eq!(content.matches("['white', 'white', 'white']").count(), 3);
    }
}
