//! Debug logging system.
//!
//! When debug is enabled in [`Config`], messages are appended to the log
//! file. Nothing is ever written to a console: this is a GUI-subsystem
//! binary and allocating one would flash a window.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use crate::config::Config;

struct Logger {
    log_path: Option<PathBuf>,
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the logger. Call once at startup.
pub fn init(config: &Config) {
    let log_path = if config.debug {
        let path = config.log_path();
        std::fs::write(&path, "=== exec-in-explorer debug log ===\n")
            .is_ok()
            .then_some(path)
    } else {
        None
    };

    let _ = LOGGER.set(Mutex::new(Logger { log_path }));
}

/// Log a message. No-op unless debug logging was enabled.
pub fn log(msg: &str) {
    let Some(logger) = LOGGER.get() else { return };
    let Ok(logger) = logger.lock() else { return };
    let Some(ref path) = logger.log_path else { return };

    if let Ok(mut f) = std::fs::OpenOptions::new().append(true).open(path) {
        let _ = writeln!(f, "{}", msg);
    }
}

/// Convenience macro for formatted logging with [DEBUG] prefix.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!("[DEBUG] {}", format!($($arg)*)))
    };
}
