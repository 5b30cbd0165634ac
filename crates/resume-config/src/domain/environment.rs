//! Environment selection and the per-environment flag overlay.
//!
//! The front end ships with two overlay records, `DEV` and `PROD`.  Exactly one
//! of them is chosen at load time and its four flags become top-level fields of
//! the configuration record.
//!
//! # Selector rules
//!
//! Selection is total: `"development"` and `"dev"` (ignoring ASCII case and
//! surrounding whitespace) select [`Environment::Development`].  Every other
//! value, including the empty string, selects [`Environment::Production`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which overlay record is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The shipped front end hard-codes this one.
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Maps a selector string onto an environment.
    ///
    /// Never fails: anything that is not a development marker is production.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resume_config::Environment;
    ///
    /// assert_eq!(Environment::from_selector("dev"), Environment::Development);
    /// assert_eq!(Environment::from_selector("staging"), Environment::Production);
    /// ```
    pub fn from_selector(selector: &str) -> Self {
        let normalized = selector.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Returns the overlay flags this environment selects.
    pub fn overlay(&self) -> EnvFlags {
        match self {
            Environment::Development => EnvFlags::development(),
            Environment::Production => EnvFlags::production(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Environment::from_selector(s))
    }
}

/// The four flags carried by the `DEV` and `PROD` overlay records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvFlags {
    /// Enables debug-only UI paths.
    pub debug: bool,
    /// Whether the front end writes diagnostic output to the console.
    pub console_log: bool,
    /// Serve canned data instead of calling the API.
    pub mock_data: bool,
    /// Show the render-timing overlay.
    pub show_performance: bool,
}

impl EnvFlags {
    /// The `DEV` overlay.
    pub const fn development() -> Self {
        Self {
            debug: true,
            console_log: true,
            mock_data: false,
            show_performance: false,
        }
    }

    /// The `PROD` overlay.
    pub const fn production() -> Self {
        Self {
            debug: false,
            console_log: false,
            mock_data: false,
            show_performance: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
