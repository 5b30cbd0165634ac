//! The configuration record: every category plus the active overlay flags.
//!
//! # How the overlay works
//!
//! The record carries both overlay records (`DEV`, `PROD`) and, at the top
//! level, the four flags of whichever one is active:
//!
//! ```text
//! {
//!   "API": { ... }, "UPLOAD": { ... }, ...,
//!   "DEV":  { "DEBUG": true,  ... },
//!   "PROD": { "DEBUG": false, ... },
//!   "DEBUG": true, "CONSOLE_LOG": true, "MOCK_DATA": false, "SHOW_PERFORMANCE": false
//! }
//! ```
//!
//! [`ConfigRecord::for_environment`] builds that shape directly for one of the
//! two environments.  Only the top-level flags differ between the two results;
//! nested categories and the `DEV`/`PROD` records are identical.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::categories::{
    ApiConfig, Defaults, ErrorMessages, FileIcons, Limits, Pages, Shortcuts, StatusCodes,
    StorageConfig, SuccessMessages, Themes, UiConfig, UploadConfig,
};
use super::environment::{EnvFlags, Environment};

/// The complete front-end configuration.
///
/// Field names serialize to the upper-case category keys the front end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[serde(rename = "API")]
    pub api: ApiConfig,
    #[serde(rename = "UPLOAD")]
    pub upload: UploadConfig,
    #[serde(rename = "UI")]
    pub ui: UiConfig,
    #[serde(rename = "STORAGE")]
    pub storage: StorageConfig,
    #[serde(rename = "DEFAULTS")]
    pub defaults: Defaults,
    #[serde(rename = "LIMITS")]
    pub limits: Limits,
    #[serde(rename = "STATUS_CODES")]
    pub status_codes: StatusCodes,
    #[serde(rename = "ERROR_MESSAGES")]
    pub error_messages: ErrorMessages,
    #[serde(rename = "SUCCESS_MESSAGES")]
    pub success_messages: SuccessMessages,
    #[serde(rename = "PAGES")]
    pub pages: Pages,
    #[serde(rename = "FILE_ICONS")]
    pub file_icons: FileIcons,
    #[serde(rename = "THEMES")]
    pub themes: Themes,
    #[serde(rename = "SHORTCUTS")]
    pub shortcuts: Shortcuts,
    /// Overlay used for development.  Kept after the merge.
    #[serde(rename = "DEV")]
    pub dev: EnvFlags,
    /// Overlay used for production.  Kept after the merge.
    #[serde(rename = "PROD")]
    pub prod: EnvFlags,
    /// The active overlay, serialized as top-level `DEBUG`, `CONSOLE_LOG`, ...
    #[serde(flatten)]
    pub active: EnvFlags,
}

impl ConfigRecord {
    /// Builds the fully resolved record for `env`.
    ///
    /// Cannot fail: every value is a compile-time literal.
    pub fn for_environment(env: Environment) -> Self {
        let record = Self::base().with_overlay(env.overlay());
        debug!(
            environment = %env,
            debug = record.active.debug,
            console_log = record.active.console_log,
            "configuration record built"
        );
        record
    }

    /// Copies `overlay` onto the top-level flags and returns the record.
    ///
    /// Nested categories, including `DEV` and `PROD`, are left alone, so
    /// applying the same overlay twice gives the same record as applying it once.
    pub fn with_overlay(mut self, overlay: EnvFlags) -> Self {
        self.apply_overlay(overlay);
        self
    }

    /// In-place form of [`ConfigRecord::with_overlay`].
    pub fn apply_overlay(&mut self, overlay: EnvFlags) {
        self.active = overlay;
    }

    /// The overlay record stored for `env` (`DEV` or `PROD`).
    pub fn overlay_for(&self, env: Environment) -> &EnvFlags {
        match env {
            Environment::Development => &self.dev,
            Environment::Production => &self.prod,
        }
    }

    /// Returns the environment whose overlay matches the active flags, if any.
    ///
    /// `DEV` is checked first; a record whose flags were overlaid with a value
    /// matching neither record yields `None`.
    pub fn active_environment(&self) -> Option<Environment> {
        if self.active == self.dev {
            Some(Environment::Development)
        } else if self.active == self.prod {
            Some(Environment::Production)
        } else {
            None
        }
    }

    /// Consistency problems in the record, one message each.
    ///
    /// Empty for the built-in data.  Records parsed from an export can
    /// violate these, e.g. by dropping the `default` file icon.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.file_icons.0.get(FileIcons::DEFAULT_KEY).is_none() {
            problems.push("FILE_ICONS has no `default` entry".to_string());
        }
        for (ext, glyph) in self.file_icons.iter() {
            if glyph.is_empty() {
                problems.push(format!("FILE_ICONS.{ext} is empty"));
            }
        }
        if self.upload.allowed_types.is_empty() {
            problems.push("UPLOAD.ALLOWED_TYPES is empty".to_string());
        }
        if self.upload.chunk_size == 0 {
            problems.push("UPLOAD.CHUNK_SIZE is zero".to_string());
        } else if self.upload.chunk_size > self.upload.max_file_size {
            problems.push("UPLOAD.CHUNK_SIZE exceeds UPLOAD.MAX_FILE_SIZE".to_string());
        }
        if self.ui.pagination_size == 0 || self.defaults.page_size == 0 {
            problems.push("page sizes must be positive".to_string());
        }

        problems
    }

    /// Literal data before any overlay.  The top-level flags start as `PROD`.
    fn base() -> Self {
        Self {
            api: ApiConfig::default(),
            upload: UploadConfig::default(),
            ui: UiConfig::default(),
            storage: StorageConfig::default(),
            defaults: Defaults::default(),
            limits: Limits::default(),
            status_codes: StatusCodes::default(),
            error_messages: ErrorMessages::default(),
            success_messages: SuccessMessages::default(),
            pages: Pages::default(),
            file_icons: FileIcons::default(),
            themes: Themes::default(),
            shortcuts: Shortcuts::default(),
            dev: EnvFlags::development(),
            prod: EnvFlags::production(),
            active: EnvFlags::production(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_record_has_debug_and_console_log() {
        let record = ConfigRecord::for_environment(Environment::Development);
        assert!(record.active.debug);
        assert!(record.active.console_log);
    }

    #[test]
    fn test_production_record_has_no_debug_or_console_log() {
        let record = ConfigRecord::for_environment(Environment::Production);
        assert!(!record.active.debug);
        assert!(!record.active.console_log);
    }

    #[test]
    fn test_mock_data_and_show_performance_are_off_in_both() {
        for env in [Environment::Development, Environment::Production] {
            let record = ConfigRecord::for_environment(env);
            assert!(!record.active.mock_data, "{env}: MOCK_DATA");
            assert!(!record.active.show_performance, "{env}: SHOW_PERFORMANCE");
        }
    }

    #[test]
    fn test_development_scenario_values() {
        let record = ConfigRecord::for_environment(Environment::Development);
        assert_eq!(record.upload.max_file_size, 104_857_600);
        assert_eq!(record.api.retry_count, 3);
        assert!(record.active.debug);
    }

    #[test]
    fn test_production_scenario_values() {
        let record = ConfigRecord::for_environment(Environment::Production);
        assert_eq!(record.upload.max_file_size, 104_857_600);
        assert!(!record.active.debug);
    }

    #[test]
    fn test_overlay_is_idempotent() {
        // Arrange
        let once = ConfigRecord::base().with_overlay(EnvFlags::development());

        // Act
        let twice = once.clone().with_overlay(EnvFlags::development());

        // Assert
        assert_eq!(once, twice);
    }

    #[test]
    fn test_overlay_leaves_categories_untouched() {
        // Arrange
        let base = ConfigRecord::base();

        // Act
        let merged = base.clone().with_overlay(EnvFlags::development());

        // Assert: everything except the top-level flags is unchanged
        assert_eq!(merged.upload, base.upload);
        assert_eq!(merged.themes, base.themes);
        assert_eq!(merged.file_icons, base.file_icons);
        assert_eq!(merged.storage, base.storage);
        assert_eq!(merged.dev, base.dev);
        assert_eq!(merged.prod, base.prod);
        assert_eq!(
            ConfigRecord {
                active: base.active,
                ..merged
            },
            base
        );
    }

    #[test]
    fn test_dev_and_prod_records_survive_the_merge() {
        let record = ConfigRecord::for_environment(Environment::Development);
        assert_eq!(*record.overlay_for(Environment::Development), EnvFlags::development());
        assert_eq!(*record.overlay_for(Environment::Production), EnvFlags::production());
    }

    #[test]
    fn test_environments_differ_only_in_active_flags() {
        let dev = ConfigRecord::for_environment(Environment::Development);
        let prod = ConfigRecord::for_environment(Environment::Production);
        assert_ne!(dev, prod);
        assert_eq!(dev.with_overlay(EnvFlags::production()), prod);
    }

    #[test]
    fn test_active_environment_detection() {
        let dev = ConfigRecord::for_environment(Environment::Development);
        let prod = ConfigRecord::for_environment(Environment::Production);
        assert_eq!(dev.active_environment(), Some(Environment::Development));
        assert_eq!(prod.active_environment(), Some(Environment::Production));

        let custom = prod.with_overlay(EnvFlags {
            mock_data: true,
            ..EnvFlags::production()
        });
        assert_eq!(custom.active_environment(), None);
    }

    #[test]
    fn test_built_in_record_has_no_problems() {
        for env in [Environment::Development, Environment::Production] {
            let problems = ConfigRecord::for_environment(env).problems();
            assert!(problems.is_empty(), "{env}: {problems:?}");
        }
    }

    #[test]
    fn test_problems_reports_missing_default_icon_and_bad_chunk_size() {
        // Arrange
        let mut record = ConfigRecord::for_environment(Environment::Development);
        record.file_icons.0.shift_remove(FileIcons::DEFAULT_KEY);
        record.file_icons.0.insert("bin".to_string(), String::new());
        record.upload.chunk_size = 0;

        // Act
        let problems = record.problems();

        // Assert
        assert_eq!(
            problems,
            vec![
                "FILE_ICONS has no `default` entry".to_string(),
                "FILE_ICONS.bin is empty".to_string(),
                "UPLOAD.CHUNK_SIZE is zero".to_string(),
            ]
        );
    }

    #[test]
    fn test_problems_accept_any_storage_prefix() {
        let mut record = ConfigRecord::for_environment(Environment::Production);
        record.storage.prefix = "resume.".to_string();
        assert!(record.problems().is_empty());
    }

    #[test]
    fn test_serialized_record_exposes_top_level_flags_and_overlays() {
        // Act
        let json =
            serde_json::to_value(ConfigRecord::for_environment(Environment::Development)).unwrap();

        // Assert
        assert_eq!(json["DEBUG"], true);
        assert_eq!(json["CONSOLE_LOG"], true);
        assert_eq!(json["DEV"]["DEBUG"], true);
        assert_eq!(json["PROD"]["DEBUG"], false);
        assert_eq!(json["UPLOAD"]["MAX_FILE_SIZE"], 104_857_600u64);
        assert_eq!(json["API"]["RETRY_COUNT"], 3);
        assert_eq!(json["FILE_ICONS"]["default"], "📄");
        assert_eq!(json["THEMES"]["dark"]["name"], "深色主题");
        assert_eq!(json["DEFAULTS"]["THEME"], "light");
    }

    #[test]
    fn test_serialized_record_keeps_every_category() {
        let json =
            serde_json::to_value(ConfigRecord::for_environment(Environment::Production)).unwrap();
        let object = json.as_object().expect("record serializes as an object");
        for key in [
            "API",
            "UPLOAD",
            "UI",
            "STORAGE",
            "DEFAULTS",
            "LIMITS",
            "STATUS_CODES",
            "ERROR_MESSAGES",
            "SUCCESS_MESSAGES",
            "PAGES",
            "FILE_ICONS",
            "THEMES",
            "SHORTCUTS",
            "DEV",
            "PROD",
            "DEBUG",
            "CONSOLE_LOG",
            "MOCK_DATA",
            "SHOW_PERFORMANCE",
        ] {
            assert!(object.contains_key(key), "missing top-level key {key}");
        }
        assert_eq!(object.len(), 19);
    }
}
