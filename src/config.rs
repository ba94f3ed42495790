//! Optional settings file.
//!
//! Read from `exec-in-explorer.json` beside the executable. Missing or
//! malformed files fall back to defaults; `EXEC_IN_EXPLORER_DEBUG` forces
//! the debug log on.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "exec-in-explorer.json";
pub const LOG_FILE_NAME: &str = "exec-in-explorer.log";
pub const DEBUG_ENV: &str = "EXEC_IN_EXPLORER_DEBUG";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load from the executable's directory and the environment.
    pub fn load() -> Self {
        let mut config = Self::load_from(&exe_dir().join(CONFIG_FILE_NAME));
        if std::env::var(DEBUG_ENV).is_ok_and(|v| env_flag(&v)) {
            config.debug = true;
        }
        config
    }

    /// Where the debug log goes: `log_file` if set, else beside the executable.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| exe_dir().join(LOG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Directory containing the current executable.
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let config = Config::from_json(r#"{ "debug": true, "log_file": "C:\\temp\\x.log" }"#);
        assert!(config.debug);
        assert_eq!(config.log_file, Some(PathBuf::from(r"C:\temp\x.log")));
    }

    #[test]
    fn missing_fields_default() {
        assert_eq!(Config::from_json("{}"), Config::default());
        assert_eq!(
            Config::from_json(r#"{ "debug": true }"#),
            Config { debug: true, log_file: None }
        );
    }

    #[test]
    fn malformed_json_is_default() {
        assert_eq!(Config::from_json("{ debug: yes"), Config::default());
        assert_eq!(Config::from_json(r#"{ "debug": "sure" }"#), Config::default());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "debug": true }"#).unwrap();
        assert!(Config::load_from(&path).debug);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from(&dir.path().join("nope.json")), Config::default());
    }

    #[test]
    fn log_path_prefers_configured_file() {
        let config = Config::from_json(r#"{ "log_file": "C:\\temp\\x.log" }"#);
        assert_eq!(config.log_path(), PathBuf::from(r"C:\temp\x.log"));
    }

    #[test]
    fn log_path_defaults_beside_executable() {
        let path = Config::default().log_path();
        assert_eq!(path, exe_dir().join(LOG_FILE_NAME));
        assert!(path.ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn env_flag_values() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(env_flag(v), "{v}");
        }
        for v in ["", "0", "false", "off", "debug"] {
            assert!(!env_flag(v), "{v}");
        }
    }
}
