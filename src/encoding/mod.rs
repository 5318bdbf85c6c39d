//! Conversion of a face report into the solver's 54-character notation.
//!
//! This module provides:
//! - Color to face-letter encoding with placeholder handling
//! - Length and center validation of the encoded string
//! - The conversion pipeline: report file in, state file and solution out

pub mod encode;
pub mod validate;

pub use encode::{encode, Encoded};
pub use validate::{validate, Validation, STATE_LEN};

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::AppConfig;
use crate::paths;
use crate::report;
use crate::solver::{self, Solver, TwoPhaseSolver};

/// What the conversion produced.
#[derive(Debug)]
pub struct Conversion {
    pub encoded: Encoded,
    pub validation: Validation,
    /// Normalized move sequence, when the solver was run and succeeded.
    pub solution: Option<String>,
}

/// Writes the encoded state, trimmed, replacing any existing file.
pub fn save_state(state: &str, path: &Path) -> Result<()> {
    std::fs::write(path, state.trim())
        .context(format!("Failed to write state file: {}", path.display()))
}

/// Runs the conversion pipeline.
///
/// Reads the report, encodes and validates it, saves the state file and, when
/// the string is complete, hands it to the solver. Solver failures are logged
/// and leave `solution` empty; only report and state file I/O errors are
/// returned.
pub fn run_conversion(config: &AppConfig, solver: &dyn Solver) -> Result<Conversion> {
    let report_path = paths::get_report_path(config);

    crate::log(&format!("Parsing {}...", report_path.display()));
    let cube_state = report::parse_cube_state(&report_path)?;

    crate::log("Parsed cube state:");
    for (face, stickers) in cube_state.iter() {
        crate::log(&format!("  {}: {:?}", face, stickers));
    }

    crate::log("Encoding cube state...");
    let encoded = encode(&cube_state);
    for issue in &encoded.issues {
        crate::log(&issue.to_string());
    }
    crate::log(&format!("Encoded state: {}", encoded.state));

    crate::log("Validating state...");
    let validation = validate(&encoded.state);
    if validation.is_valid() {
        crate::log(&format!("OK: {}", validation));
    } else {
        crate::log(&format!("Invalid: {}", validation));
    }

    let state_path = paths::get_state_path(config);
    save_state(&encoded.state, &state_path)?;
    crate::log(&format!("Encoded state saved to: {}", state_path.display()));

    let solution = if encoded.state.chars().count() == STATE_LEN {
        let command = TwoPhaseSolver::from_config(&config.solver).command_line(
            &encoded.state,
            config.solver.max_depth,
            config.solver.timeout_secs,
        );
        crate::log(&format!("Solve command: {}", command));

        match solver::solve_state(solver, &encoded.state, &config.solver) {
            Ok(solution) => {
                crate::log(&format!("Solution: {}", solution));
                Some(solution)
            }
            Err(e) => {
                crate::log(&format!("Solve failed: {:#}", e));
                None
            }
        }
    } else {
        crate::log("State incomplete, solver not run");
        None
    };

    Ok(Conversion {
        encoded,
        validation,
        solution,
    })
}
