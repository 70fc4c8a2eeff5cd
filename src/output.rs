//! # Output Configuration
//!
//! Controls CLI output appearance. Color use follows the `--color` flag and
//! the usual environment conventions: `NO_COLOR` (https://no-color.org/),
//! `CLICOLOR=0`, `CLICOLOR_FORCE=1`, and `TERM=dumb`, falling back to the
//! `console` crate's TTY probe in auto mode.

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether styled output should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment and the
    /// `--color` flag value (`always`, `never`, or `auto`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR, even empty, disables colors.
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0") {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// A configuration with colors always disabled.
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Highlight an identity key or path in informational output.
pub fn emphasize(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        style(text).cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Style a success confirmation.
pub fn success(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        style(text).green().to_string()
    } else {
        text.to_string()
    }
}

/// Style a warning or skip diagnostic.
pub fn warning(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        style(text).yellow().to_string()
    } else {
        text.to_string()
    }
}
