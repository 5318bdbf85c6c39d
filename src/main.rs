//! Cube Scanner
//!
//! Reads photographs of the six faces of a Rubik's Cube, classifies each
//! sticker color, and converts the result into the 54-character notation
//! consumed by a two-phase solver.
//!
//! Usage: `cube-scanner [detect|convert|all]`

mod config;
mod cube;
mod detection;
mod encoding;
mod paths;
mod report;
mod solver;

use anyhow::{anyhow, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

use solver::{Solver, TwoPhaseSolver};

const USAGE: &str = "Usage: cube-scanner [detect|convert|all]";

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    let log_path = paths::get_logs_dir().join("cube_scanner.log");
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Pipeline selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Detect,
    Convert,
    All,
}

impl Command {
    fn parse(arg: Option<&str>) -> Option<Command> {
        match arg {
            None | Some("all") => Some(Command::All),
            Some("detect") => Some(Command::Detect),
            Some("convert") => Some(Command::Convert),
            Some(_) => None,
        }
    }
}

/// Runs detection. Returns true if this run wrote a complete face report.
fn run_detect(config: &config::AppConfig) -> bool {
    match detection::run_detection(config) {
        Ok(cube_state) => cube_state.is_complete(),
        Err(e) => {
            log(&format!("Detection failed: {:#}", e));
            false
        }
    }
}

fn run_convert(config: &config::AppConfig, solver: &dyn Solver) {
    match encoding::run_conversion(config, solver) {
        Ok(conversion) => {
            log(&format!(
                "Conversion finished: {} characters, {} issue(s)",
                conversion.encoded.state.chars().count(),
                conversion.encoded.issues.len()
            ));
            if conversion.solution.is_none() && conversion.validation.is_valid() {
                log("No solution available");
            }
        }
        Err(e) if report::is_not_found(&e) => {
            log(&format!("Error: report file not found: {}", config.report_file));
        }
        Err(e) => log(&format!("Error: {:#}", e)),
    }
}

/// Detection followed by conversion of the report written in the same run.
fn run_all(config: &config::AppConfig, solver: &dyn Solver) {
    if run_detect(config) {
        run_convert(config, solver);
    } else {
        log("Conversion skipped: no complete report was written in this run");
    }
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = if let Some(loc) = panic_info.location() {
            format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            String::new()
        };
        let log_msg = format!("[PANIC]{} {}\n", location, msg);
        eprintln!("{}", log_msg);
        let log_path = paths::get_logs_dir().join("cube_scanner.log");
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            let _ = file.write_all(log_msg.as_bytes());
        }
    }));

    let arg = std::env::args().nth(1);
    let Some(command) = Command::parse(arg.as_deref()) else {
        eprintln!("{}", USAGE);
        return Err(anyhow!("Unknown command: {}", arg.unwrap_or_default()));
    };

    config::init_config();
    paths::ensure_directories(config::get_config())?;

    let config = config::get_config();
    let solver = TwoPhaseSolver::from_config(&config.solver);

    match command {
        Command::Detect => {
            run_detect(config);
        }
        Command::Convert => run_convert(config, &solver),
        Command::All => run_all(config, &solver),
    }

    Ok(())
}
