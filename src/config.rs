//! Application configuration.
//!
//! Loads settings from config.json at startup. Provides input/output
//! locations and the external solver invocation parameters. Color
//! thresholds are fixed and live in `detection::classify`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// How to reach the external two-phase solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Interpreter that hosts the `twophase.solver` module
    pub program: String,
    /// Maximum solution length in moves
    pub max_depth: u32,
    /// Time budget handed to the solver (seconds)
    pub timeout_secs: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            max_depth: 20,
            timeout_secs: 2,
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory containing `{color}.{ext}` face photographs
    pub images_dir: String,
    /// Directory receiving the report, encoded state and annotated images
    pub results_dir: String,
    /// Extension of the face photographs
    pub image_extension: String,
    /// File name of the human-readable face report
    pub report_file: String,
    /// File name of the encoded 54-character state
    pub state_file: String,
    pub solver: SolverConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_dir: "images".to_string(),
            results_dir: "cube_results".to_string(),
            image_extension: "png".to_string(),
            report_file: "cube_state.txt".to_string(),
            state_file: "kociemba_state.txt".to_string(),
            solver: SolverConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads config from a file, or returns defaults if it is missing or invalid.
    pub fn load(config_path: &Path) -> Self {
        if !config_path.exists() {
            crate::log("config.json not found. Using default config.");
            return Self::default();
        }

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log(&format!("Config loaded from {}", config_path.display()));
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read config.json: {}. Using defaults.",
                    e
                ));
            }
        }

        Self::default()
    }
}

/// Initializes the global configuration from config.json next to the executable.
pub fn init_config() {
    let config_path = crate::paths::get_exe_dir().join("config.json");
    crate::log(&format!("Looking for config at: {}", config_path.display()));
    let _ = CONFIG.set(AppConfig::load(&config_path));
}

/// Returns a reference to the global configuration.
/// Panics if called before init_config().
pub fn get_config() -> &'static AppConfig {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}
