use std::path::PathBuf;
use std::sync::OnceLock;

use crate::config::AppConfig;

static EXE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the directory containing the executable.
pub fn get_exe_dir() -> &'static PathBuf {
    EXE_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Returns the logs directory: `<exe_dir>/logs/`
pub fn get_logs_dir() -> PathBuf {
    get_exe_dir().join("logs")
}

/// Returns the directory holding the face photographs.
pub fn get_images_dir(config: &AppConfig) -> PathBuf {
    PathBuf::from(&config.images_dir)
}

/// Returns the directory for the report, encoded state and annotated images.
pub fn get_results_dir(config: &AppConfig) -> PathBuf {
    PathBuf::from(&config.results_dir)
}

/// Path of the face report: `<results_dir>/<report_file>`
pub fn get_report_path(config: &AppConfig) -> PathBuf {
    get_results_dir(config).join(&config.report_file)
}

/// Path of the encoded solver string: `<results_dir>/<state_file>`
pub fn get_state_path(config: &AppConfig) -> PathBuf {
    get_results_dir(config).join(&config.state_file)
}

/// Ensures all output directories exist. Call at startup.
pub fn ensure_directories(config: &AppConfig) -> std::io::Result<()> {
    std::fs::create_dir_all(get_logs_dir())?;
    std::fs::create_dir_all(get_results_dir(config))?;
    Ok(())
}
