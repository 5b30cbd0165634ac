//! Export codecs: hand the record to the display layer.
//!
//! | Format   | Render | Parse | Use                                         |
//! |----------|--------|-------|---------------------------------------------|
//! | `json`   | yes    | yes   | Transmissible form sent to the front end    |
//! | `toml`   | yes    | yes   | Human-readable snapshot for review and diff |
//! | `script` | yes    | no    | `<script>` bootstrap defining `CONFIG`      |
//!
//! The script format assigns the JSON record to `window.CONFIG` in a browser
//! and to `module.exports` under a CommonJS loader, so both kinds of front-end
//! caller get the same object.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::ConfigRecord;

/// Errors raised while rendering or parsing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML export: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize TOML export: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The format is render-only.
    #[error("{format} exports cannot be parsed")]
    Unsupported { format: ExportFormat },

    #[error("unknown export format: {0} (expected json, toml or script)")]
    UnknownFormat(String),
}

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
    Script,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
            ExportFormat::Script => "script",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "toml" => Ok(ExportFormat::Toml),
            "script" | "js" => Ok(ExportFormat::Script),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders `record` in `format`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] or [`ExportError::TomlSer`] if serialization fails.
pub fn render(record: &ConfigRecord, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        ExportFormat::Toml => Ok(toml::to_string_pretty(record)?),
        ExportFormat::Script => render_script(record),
    }
}

/// Parses a rendered export back into a record.
///
/// # Errors
///
/// Returns [`ExportError::Unsupported`] for [`ExportFormat::Script`], and a
/// parse error if `text` is not a valid record in `format`.
pub fn parse(format: ExportFormat, text: &str) -> Result<ConfigRecord, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::from_str(text)?),
        ExportFormat::Toml => Ok(toml::from_str(text)?),
        ExportFormat::Script => Err(ExportError::Unsupported { format }),
    }
}

/// Freezes every nested object so the display layer cannot mutate any level.
const SCRIPT_PRELUDE: &str = "\
const deepFreeze = (value) => {
    Object.values(value).forEach((child) => {
        if (child !== null && typeof child === 'object') {
            deepFreeze(child);
        }
    });
    return Object.freeze(value);
};
";

const SCRIPT_EXPORTS: &str = "\
if (typeof window !== 'undefined') {
    window.CONFIG = CONFIG;
}

if (typeof module !== 'undefined' && module.exports) {
    module.exports = CONFIG;
}
";

fn render_script(record: &ConfigRecord) -> Result<String, ExportError> {
    let json = escape_for_script(&serde_json::to_string_pretty(record)?);
    Ok(format!("{SCRIPT_PRELUDE}\nconst CONFIG = deepFreeze({json});\n\n{SCRIPT_EXPORTS}"))
}

/// Makes JSON text safe to embed in an inline `<script>` element.
///
/// `</` would let a string value close the element, and U+2028 / U+2029 are
/// line terminators in older JavaScript parsers.  `<` only ever appears inside
/// JSON strings, so `<\/` keeps the text valid JSON.
fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Environment;

    #[test]
    fn test_format_parses_names() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TOML".parse::<ExportFormat>().unwrap(), ExportFormat::Toml);
        assert_eq!("js".parse::<ExportFormat>().unwrap(), ExportFormat::Script);
        assert!(matches!(
            "yaml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_json_export_is_valid_json_with_upper_case_keys() {
        // Arrange
        let record = ConfigRecord::for_environment(Environment::Development);

        // Act
        let text = render(&record, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        // Assert
        assert_eq!(value["UPLOAD"]["CHUNK_SIZE"], 1_048_576u64);
        assert_eq!(value["DEBUG"], true);
    }

    #[test]
    fn test_toml_export_contains_category_tables() {
        let record = ConfigRecord::for_environment(Environment::Production);
        let text = render(&record, ExportFormat::Toml).unwrap();
        assert!(text.contains("[API]"), "missing [API] table:\n{text}");
        assert!(text.contains("[THEMES.dark]"), "missing dark theme:\n{text}");
        assert!(text.contains("DEBUG = false"), "missing DEBUG flag:\n{text}");
    }

    #[test]
    fn test_script_export_exposes_both_access_paths() {
        let record = ConfigRecord::for_environment(Environment::Development);
        let text = render(&record, ExportFormat::Script).unwrap();
        assert!(text.contains("const CONFIG = deepFreeze({"));
        assert!(text.contains("window.CONFIG = CONFIG;"));
        assert!(text.contains("module.exports = CONFIG;"));
        assert!(text.contains("\"MAX_FILE_SIZE\": 104857600"));
    }

    #[test]
    fn test_script_export_freezes_nested_objects() {
        let record = ConfigRecord::for_environment(Environment::Production);
        let text = render(&record, ExportFormat::Script).unwrap();

        // the freeze must recurse, not stop at the top-level object
        let prelude = &text[..text.find("const CONFIG").unwrap()];
        assert!(prelude.contains("deepFreeze(child);"), "{prelude}");
        assert!(prelude.contains("return Object.freeze(value);"), "{prelude}");
        assert!(!text.contains("const CONFIG = Object.freeze("));
    }

    #[test]
    fn test_script_export_escapes_closing_script_tag() {
        // Arrange
        let mut record = ConfigRecord::for_environment(Environment::Development);
        record.defaults.project_name = "</script><script>alert(1)</script>".to_string();

        // Act
        let text = render(&record, ExportFormat::Script).unwrap();

        // Assert
        assert!(!text.contains("</"), "unescaped `</` in:\n{text}");
        assert!(text.contains(r#""<\/script><script>alert(1)<\/script>""#));
    }

    #[test]
    fn test_script_export_escapes_js_line_terminators() {
        let mut record = ConfigRecord::for_environment(Environment::Development);
        record.defaults.project_description = "line\u{2028}para\u{2029}end".to_string();

        let text = render(&record, ExportFormat::Script).unwrap();

        assert!(!text.contains('\u{2028}'));
        assert!(!text.contains('\u{2029}'));
        assert!(text.contains(r#""line\u2028para\u2029end""#));
    }

    #[test]
    fn test_escaped_script_payload_is_still_valid_json() {
        let mut record = ConfigRecord::for_environment(Environment::Development);
        record.defaults.project_name = "a</b\u{2028}c".to_string();

        let escaped = escape_for_script(&serde_json::to_string(&record).unwrap());
        let restored: ConfigRecord = serde_json::from_str(&escaped).unwrap();

        assert_eq!(restored.defaults.project_name, "a</b\u{2028}c");
    }

    #[test]
    fn test_pages_keep_navigation_order_in_exports() {
        // Arrange
        let record = ConfigRecord::for_environment(Environment::Development);
        let expected = [
            "project-detail",
            "dashboard",
            "resumes",
            "analytics",
            "knowledge",
            "settings",
        ];

        // Act
        let json = render(&record, ExportFormat::Json).unwrap();
        let script = render(&record, ExportFormat::Script).unwrap();

        // Assert
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let routes: Vec<&str> = value["PAGES"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(routes, expected);

        let positions: Vec<usize> = expected
            .iter()
            .map(|route| script.find(&format!("\"{route}\": {{")).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "PAGES out of order in script: {positions:?}"
        );
    }

    #[test]
    fn test_file_icons_keep_authored_order_in_json() {
        let record = ConfigRecord::for_environment(Environment::Development);
        let json = render(&record, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let exts: Vec<&str> = value["FILE_ICONS"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let authored: Vec<&str> = record.file_icons.iter().map(|(ext, _)| ext).collect();
        assert_eq!(exts, authored);
        assert_eq!(exts.last(), Some(&"default"));
    }

    #[test]
    fn test_script_export_cannot_be_parsed() {
        let result = parse(ExportFormat::Script, "const CONFIG = {};");
        assert!(matches!(
            result,
            Err(ExportError::Unsupported {
                format: ExportFormat::Script
            })
        ));
    }

    #[test]
    fn test_parse_invalid_json_returns_error() {
        let result = parse(ExportFormat::Json, "{ not json");
        assert!(matches!(result, Err(ExportError::Json(_))));
    }

    #[test]
    fn test_parse_json_missing_category_returns_error() {
        // A record without UPLOAD is not a valid configuration.
        let result = parse(ExportFormat::Json, r#"{"API": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_toml_returns_error() {
        let result = parse(ExportFormat::Toml, "[[[ not valid toml");
        assert!(matches!(result, Err(ExportError::TomlDe(_))));
    }
}
