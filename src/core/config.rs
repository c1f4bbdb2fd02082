// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{GeneratorOptions, Locale, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password keeper
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Presentation
    pub locale: Locale,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: true,

            // Presentation
            locale: Locale::En,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("Ignoring {}='{}': expected a boolean", key, value)),
    }
}

impl Config {
    /// Load configuration from environment variables. The returned
    /// warnings are meant to be logged once the logger is running.
    pub fn load() -> (Self, Vec<String>) {
        let (mut config, mut warnings) = Self::load_from(|key| env::var(key).ok());

        if !matches!(env::var("LOG_FILE").as_deref(), Ok("-")) && config.log_file.is_none() {
            match crate::utils::get_app_data_dir() {
                Ok(dir) => config.log_file = Some(dir.join("passkeeper.log")),
                Err(e) => warnings.push(format!("No data directory ({}), logging to stderr", e)),
            }
        }

        (config, warnings)
    }

    /// Build a configuration from an arbitrary key lookup, collecting a
    /// warning for every value that was ignored or adjusted.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => {
                    let clamped = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                    if clamped != length {
                        warnings.push(format!(
                            "DEFAULT_PASSWORD_LENGTH={} is outside {}..={}, using {}",
                            length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, clamped
                        ));
                    }
                    config.default_password_length = clamped;
                }
                Err(_) => warnings.push(format!("Ignoring DEFAULT_PASSWORD_LENGTH='{}': not a number", val)),
            }
        }

        for (key, slot) in [
            ("DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase),
            ("DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase),
            ("DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers),
            ("DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols),
        ] {
            if let Some(val) = lookup(key) {
                match parse_flag(key, &val) {
                    Ok(flag) => *slot = flag,
                    Err(warning) => warnings.push(warning),
                }
            }
        }

        // Presentation
        if let Some(val) = lookup("LOCALE") {
            match val.parse() {
                Ok(locale) => config.locale = locale,
                Err(e) => warnings.push(format!("{}, using {:?}", e, config.locale)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = match file.trim() {
                "" | "-" => None,
                path => Some(PathBuf::from(path)),
            };
        }

        (config, warnings)
    }

    /// Generator options seeded from the configured defaults.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}
