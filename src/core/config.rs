// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{clamp_length, PasswordGenerationOptions, DEFAULT_PASSWORD_LENGTH};

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Clipboard
    pub clipboard_hold: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>, // None: resolved by log_path()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_include_numbers: false,
            default_include_symbols: false,

            // Clipboard
            clipboard_hold: Duration::from_secs(10),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Returns the warnings for values that were ignored or adjusted; the
    /// logger is not up yet, so the caller reports them.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => {
                    let clamped = clamp_length(length);
                    if clamped != length {
                        warnings.push(format!("DEFAULT_PASSWORD_LENGTH {} out of range, using {}", length, clamped));
                    }
                    config.default_password_length = clamped;
                }
                Err(_) => warnings.push(format!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val, config.default_password_length
                )),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_NUMBERS") {
            match parse_bool(&val) {
                Some(include) => config.default_include_numbers = include,
                None => warnings.push(format!("Invalid DEFAULT_INCLUDE_NUMBERS '{}', ignoring", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            match parse_bool(&val) {
                Some(include) => config.default_include_symbols = include,
                None => warnings.push(format!("Invalid DEFAULT_INCLUDE_SYMBOLS '{}', ignoring", val)),
            }
        }

        // Clipboard
        if let Some(val) = lookup("CLIPBOARD_HOLD_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) => config.clipboard_hold = Duration::from_secs(secs),
                Err(_) => warnings.push(format!(
                    "Invalid CLIPBOARD_HOLD_SECS '{}', using {}",
                    val,
                    config.clipboard_hold.as_secs()
                )),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, warnings)
    }

    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions::new(
            self.default_password_length,
            self.default_include_numbers,
            self.default_include_symbols,
        )
    }

    // LOG_FILE, else <app data dir>/passgen.log, else ./passgen.log
    pub fn log_path(&self) -> PathBuf {
        if let Some(file) = &self.log_file {
            return file.clone();
        }
        crate::utils::get_app_data_dir()
            .map(|dir| dir.join("passgen.log"))
            .unwrap_or_else(|| PathBuf::from("./passgen.log"))
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let (config, warnings) = config_from(&[]);
        assert_eq!(config.default_options(), PasswordGenerationOptions::default());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.clipboard_hold, Duration::from_secs(10));
        assert!(warnings.is_empty());
    }

    #[test]
    fn default_does_not_pick_a_log_file() {
        assert_eq!(Config::default().log_file, None);
    }

    #[test]
    fn reads_generation_defaults() {
        let (config, warnings) = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_NUMBERS", "true"),
            ("DEFAULT_INCLUDE_SYMBOLS", "yes"),
            ("CLIPBOARD_HOLD_SECS", "3"),
        ]);
        assert_eq!(config.default_options(), PasswordGenerationOptions::new(24, true, true));
        assert_eq!(config.clipboard_hold, Duration::from_secs(3));
        assert!(warnings.is_empty());
    }

    #[test]
    fn bad_values_keep_defaults_and_warn() {
        let (config, warnings) = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "twelve"),
            ("DEFAULT_INCLUDE_NUMBERS", "maybe"),
            ("CLIPBOARD_HOLD_SECS", "-1"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 12);
        assert!(!config.default_include_numbers);
        assert_eq!(config.clipboard_hold, Duration::from_secs(10));
        assert_eq!(config.log_level, LevelFilter::Info);

        assert_eq!(warnings.len(), 4);
        assert!(warnings.iter().any(|w| w.contains("DEFAULT_PASSWORD_LENGTH 'twelve'")));
        assert!(warnings.iter().any(|w| w.contains("DEFAULT_INCLUDE_NUMBERS 'maybe'")));
        assert!(warnings.iter().any(|w| w.contains("CLIPBOARD_HOLD_SECS '-1'")));
        assert!(warnings.iter().any(|w| w.contains("LOG_LEVEL 'loud'")));
    }

    #[test]
    fn out_of_range_length_is_clamped_with_warning() {
        let (config, warnings) = config_from(&[("DEFAULT_PASSWORD_LENGTH", "2")]);
        assert_eq!(config.default_password_length, 6);
        assert_eq!(warnings, vec!["DEFAULT_PASSWORD_LENGTH 2 out of range, using 6".to_string()]);
    }

    #[test]
    fn reads_logging_settings() {
        let (config, _) = config_from(&[("LOG_LEVEL", "DEBUG"), ("LOG_FILE", "/tmp/pg.log")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/pg.log"));
    }
}
