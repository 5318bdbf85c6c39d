//! Adapter for the external two-phase cube solver.
//!
//! The solver itself is not part of this tool. It is reached through the
//! [`Solver`] trait; the default implementation runs the Python
//! `twophase.solver` module as a child process.

use anyhow::{anyhow, Context, Result};
use std::process::Command;

use crate::config::SolverConfig;

/// Anything that can turn a 54-character state string into a move sequence.
pub trait Solver {
    fn solve(&self, state: &str, max_depth: u32, timeout_secs: u32) -> Result<String>;
}

/// Runs `twophase.solver.solve` through a Python interpreter.
#[derive(Clone, Debug)]
pub struct TwoPhaseSolver {
    program: String,
}

impl TwoPhaseSolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.program.clone())
    }

    /// Python snippet evaluated by the interpreter.
    fn script(state: &str, max_depth: u32, timeout_secs: u32) -> String {
        format!(
            "import twophase.solver as sv; print(sv.solve('{}', {}, {}))",
            state, max_depth, timeout_secs
        )
    }

    /// Shell command equivalent to a solve call, for manual use.
    pub fn command_line(&self, state: &str, max_depth: u32, timeout_secs: u32) -> String {
        format!(
            "{} -c \"{}\"",
            self.program,
            Self::script(state, max_depth, timeout_secs)
        )
    }
}

impl Solver for TwoPhaseSolver {
    fn solve(&self, state: &str, max_depth: u32, timeout_secs: u32) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-c")
            .arg(Self::script(state, max_depth, timeout_secs))
            .output()
            .context(format!("Failed to run solver program: {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Solver failed: {}", stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        // The library reports unsolvable input as text rather than raising
        if stdout.trim_start().starts_with("Error") {
            return Err(anyhow!("Solver rejected state: {}", stdout.trim()));
        }

        Ok(stdout)
    }
}

/// Removes embedded line breaks and surrounding whitespace from solver output.
pub fn normalize_solution(raw: &str) -> String {
    raw.replace(['\r', '\n'], "").trim().to_string()
}

/// Solves a state and returns the normalized move sequence.
pub fn solve_state(solver: &dyn Solver, state: &str, config: &SolverConfig) -> Result<String> {
    let raw = solver.solve(state, config.max_depth, config.timeout_secs)?;
    Ok(normalize_solution(&raw))
}
