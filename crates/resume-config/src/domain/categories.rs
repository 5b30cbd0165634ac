//! The configuration categories and their built-in values.
//!
//! Each category is a plain serde struct whose serialized field names are the
//! upper-case keys the front end reads (`UPLOAD.MAX_FILE_SIZE`, ...).  The
//! `Default` impl of every category carries the shipped values, so
//! `ConfigRecord::for_environment` never reads anything from outside the binary.
//!
//! Timing fields are stored in milliseconds because that is the wire contract;
//! each category also offers `Duration` accessors for Rust callers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyph returned by [`FileIcons::icon_for`] when even the `default` entry is missing.
const FALLBACK_ICON: &str = "📄";

/// Errors raised by the [`Limits`] checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// The value has more characters than the category allows.
    #[error("{field} is too long: {actual} characters (max {max})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// A theme identifier that is not `light` or `dark`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

// ── API ───────────────────────────────────────────────────────────────────────

/// Backend endpoint and retry policy consumed by the front end's HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "BASE_URL")]
    pub base_url: String,
    #[serde(rename = "TIMEOUT")]
    pub timeout_ms: u64,
    #[serde(rename = "RETRY_COUNT")]
    pub retry_count: u32,
    #[serde(rename = "RETRY_DELAY")]
    pub retry_delay_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_ms: 30_000,
            retry_count: 3,
            retry_delay_ms: 1_000,
        }
    }
}

// ── UPLOAD ────────────────────────────────────────────────────────────────────

/// File upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UploadConfig {
    /// Bytes.
    pub max_file_size: u64,
    /// Files accepted in a single batch.
    pub max_files_count: u32,
    /// Lower-case extensions without the leading dot.
    pub allowed_types: Vec<String>,
    /// Bytes per upload chunk.
    pub chunk_size: u64,
}

impl UploadConfig {
    /// Returns `true` if `ext` (with or without a leading dot) is accepted.
    pub fn is_allowed(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.allowed_types.iter().any(|t| *t == ext)
    }

    /// Number of chunks a file of `size` bytes is split into.
    pub fn chunk_count(&self, size: u64) -> u64 {
        if size == 0 || self.chunk_size == 0 {
            return 0;
        }
        size.div_ceil(self.chunk_size)
    }

    pub fn exceeds_max_size(&self, size: u64) -> bool {
        size > self.max_file_size
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        let allowed = [
            "txt", "pdf", "doc", "docx", "md", "jpg", "jpeg", "png", "gif", "svg", "xls", "xlsx",
            "ppt", "pptx", "zip", "rar", "7z",
        ];
        Self {
            max_file_size: 100 * 1024 * 1024,
            max_files_count: 50,
            allowed_types: allowed.iter().map(|s| s.to_string()).collect(),
            chunk_size: 1024 * 1024,
        }
    }
}

// ── UI ────────────────────────────────────────────────────────────────────────

/// UI timing and paging constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(rename = "DEBOUNCE_DELAY")]
    pub debounce_delay_ms: u64,
    #[serde(rename = "THROTTLE_DELAY")]
    pub throttle_delay_ms: u64,
    #[serde(rename = "MESSAGE_DURATION")]
    pub message_duration_ms: u64,
    #[serde(rename = "ANIMATION_DURATION")]
    pub animation_duration_ms: u64,
    #[serde(rename = "PAGINATION_SIZE")]
    pub pagination_size: u32,
    #[serde(rename = "SEARCH_MIN_LENGTH")]
    pub search_min_length: u32,
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_delay_ms)
    }

    pub fn message_duration(&self) -> Duration {
        Duration::from_millis(self.message_duration_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Whether `query` is long enough to trigger a search.
    pub fn is_searchable(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.search_min_length as usize
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: 300,
            throttle_delay_ms: 100,
            message_duration_ms: 3_000,
            animation_duration_ms: 200,
            pagination_size: 20,
            search_min_length: 2,
        }
    }
}

// ── STORAGE ───────────────────────────────────────────────────────────────────

/// Logical names the front end uses for browser storage entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    AppState,
    UserSettings,
    RecentProjects,
    Theme,
}

/// Literal key strings, before the prefix is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StorageKeys {
    pub app_state: String,
    pub user_settings: String,
    pub recent_projects: String,
    pub theme: String,
}

/// Browser storage namespace and expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "PREFIX")]
    pub prefix: String,
    #[serde(rename = "EXPIRE_TIME")]
    pub expire_time_ms: u64,
    #[serde(rename = "KEYS")]
    pub keys: StorageKeys,
}

impl StorageConfig {
    /// Full storage key for `key`, e.g. `ai_resume_app_state`.
    pub fn key(&self, key: StorageKey) -> String {
        let raw = match key {
            StorageKey::AppState => &self.keys.app_state,
            StorageKey::UserSettings => &self.keys.user_settings,
            StorageKey::RecentProjects => &self.keys.recent_projects,
            StorageKey::Theme => &self.keys.theme,
        };
        format!("{}{}", self.prefix, raw)
    }

    pub fn expiry(&self) -> Duration {
        Duration::from_millis(self.expire_time_ms)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefix: "ai_resume_".to_string(),
            expire_time_ms: 7 * 24 * 60 * 60 * 1000,
            keys: StorageKeys {
                app_state: "app_state".to_string(),
                user_settings: "user_settings".to_string(),
                recent_projects: "recent_projects".to_string(),
                theme: "theme".to_string(),
            },
        }
    }
}

// ── DEFAULTS / LIMITS ─────────────────────────────────────────────────────────

/// Values used when the user has not chosen one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Defaults {
    pub project_name: String,
    pub project_description: String,
    pub page_size: u32,
    pub theme: ThemeId,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: "默认项目".to_string(),
            project_description: "系统自动创建的默认项目".to_string(),
            page_size: 20,
            theme: ThemeId::Light,
        }
    }
}

/// Length caps enforced by the front end's forms.  Lengths count characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Limits {
    pub project_name_max_length: usize,
    pub project_desc_max_length: usize,
    pub file_name_max_length: usize,
    pub search_results_max: usize,
}

impl Limits {
    pub fn check_project_name(&self, name: &str) -> Result<(), LimitError> {
        check_length("project name", name, self.project_name_max_length)
    }

    pub fn check_project_description(&self, description: &str) -> Result<(), LimitError> {
        check_length(
            "project description",
            description,
            self.project_desc_max_length,
        )
    }

    pub fn check_file_name(&self, file_name: &str) -> Result<(), LimitError> {
        check_length("file name", file_name, self.file_name_max_length)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            project_name_max_length: 100,
            project_desc_max_length: 500,
            file_name_max_length: 255,
            search_results_max: 100,
        }
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), LimitError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(LimitError::TooLong { field, max, actual });
    }
    Ok(())
}

// ── STATUS_CODES / messages ───────────────────────────────────────────────────

/// HTTP status codes the front end branches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusCodes {
    pub success: u16,
    pub created: u16,
    pub no_content: u16,
    pub bad_request: u16,
    pub unauthorized: u16,
    pub forbidden: u16,
    pub not_found: u16,
    pub internal_error: u16,
}

impl StatusCodes {
    pub fn is_success(code: u16) -> bool {
        (200..300).contains(&code)
    }
}

impl Default for StatusCodes {
    fn default() -> Self {
        Self {
            success: 200,
            created: 201,
            no_content: 204,
            bad_request: 400,
            unauthorized: 401,
            forbidden: 403,
            not_found: 404,
            internal_error: 500,
        }
    }
}

/// User-facing failure texts (zh-CN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ErrorMessages {
    pub network_error: String,
    pub server_error: String,
    pub unauthorized: String,
    pub not_found: String,
    pub validation_error: String,
    pub upload_error: String,
    pub download_error: String,
    pub delete_error: String,
    pub unknown_error: String,
}

impl ErrorMessages {
    /// Picks the message the front end shows for an HTTP failure status.
    pub fn for_status(&self, code: u16) -> &str {
        match code {
            401 => &self.unauthorized,
            404 => &self.not_found,
            400 | 422 => &self.validation_error,
            500..=599 => &self.server_error,
            _ => &self.unknown_error,
        }
    }
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            network_error: "网络连接失败，请检查网络设置".to_string(),
            server_error: "服务器内部错误，请稍后重试".to_string(),
            unauthorized: "未授权访问，请重新登录".to_string(),
            not_found: "请求的资源不存在".to_string(),
            validation_error: "数据验证失败".to_string(),
            upload_error: "文件上传失败".to_string(),
            download_error: "文件下载失败".to_string(),
            delete_error: "删除操作失败".to_string(),
            unknown_error: "未知错误".to_string(),
        }
    }
}

/// User-facing confirmation texts (zh-CN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SuccessMessages {
    pub project_created: String,
    pub project_updated: String,
    pub project_deleted: String,
    pub file_uploaded: String,
    pub file_downloaded: String,
    pub file_deleted: String,
    pub data_saved: String,
    pub data_exported: String,
}

impl Default for SuccessMessages {
    fn default() -> Self {
        Self {
            project_created: "项目创建成功".to_string(),
            project_updated: "项目更新成功".to_string(),
            project_deleted: "项目删除成功".to_string(),
            file_uploaded: "文件上传成功".to_string(),
            file_downloaded: "文件下载成功".to_string(),
            file_deleted: "文件删除成功".to_string(),
            data_saved: "数据保存成功".to_string(),
            data_exported: "数据导出成功".to_string(),
        }
    }
}

// ── PAGES ─────────────────────────────────────────────────────────────────────

/// Navigation metadata for one page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// Route id → page metadata, in navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pages(pub IndexMap<String, PageInfo>);

impl Pages {
    pub fn get(&self, route: &str) -> Option<&PageInfo> {
        self.0.get(route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Pages {
    fn default() -> Self {
        let pages = [
            ("project-detail", "项目管理", "🗂️", "管理项目和文件"),
            ("dashboard", "仪表板", "📊", "查看系统统计信息"),
            ("resumes", "简历管理", "📋", "管理简历数据"),
            ("analytics", "数据分析", "📈", "分析数据趋势"),
            ("knowledge", "知识库", "📚", "知识库管理"),
            ("settings", "系统设置", "⚙️", "系统配置设置"),
        ];
        Self(
            pages
                .into_iter()
                .map(|(route, name, icon, description)| {
                    (
                        route.to_string(),
                        PageInfo {
                            name: name.to_string(),
                            icon: icon.to_string(),
                            description: description.to_string(),
                        },
                    )
                })
                .collect(),
        )
    }
}

// ── FILE_ICONS ────────────────────────────────────────────────────────────────

/// Extension → glyph, with a `default` entry used for anything unlisted.
/// Entries keep their authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileIcons(pub IndexMap<String, String>);

impl FileIcons {
    /// Key of the fallback entry.
    pub const DEFAULT_KEY: &'static str = "default";

    /// Glyph for `ext`, falling back to the `default` entry.
    ///
    /// The lookup ignores case and a leading `.`.
    ///
    /// ```rust
    /// use resume_config::domain::categories::FileIcons;
    ///
    /// let icons = FileIcons::default();
    /// assert_eq!(icons.icon_for(".PDF"), "📑");
    /// assert_eq!(icons.icon_for("exe"), icons.icon_for("default"));
    /// ```
    pub fn icon_for(&self, ext: &str) -> &str {
        let ext = normalize_extension(ext);
        self.0
            .get(&ext)
            .or_else(|| self.0.get(Self::DEFAULT_KEY))
            .map(String::as_str)
            .unwrap_or(FALLBACK_ICON)
    }

    /// Glyph for a file name, using the text after the last `.` as extension.
    pub fn icon_for_file(&self, file_name: &str) -> &str {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self.icon_for(ext),
            _ => self.icon_for(Self::DEFAULT_KEY),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FileIcons {
    fn default() -> Self {
        let icons = [
            ("pdf", "📑"),
            ("doc", "📝"),
            ("docx", "📝"),
            ("txt", "📄"),
            ("md", "📝"),
            ("jpg", "🖼️"),
            ("jpeg", "🖼️"),
            ("png", "🖼️"),
            ("gif", "🖼️"),
            ("svg", "🖼️"),
            ("xls", "📊"),
            ("xlsx", "📊"),
            ("ppt", "📈"),
            ("pptx", "📈"),
            ("zip", "🗜️"),
            ("rar", "🗜️"),
            ("7z", "🗜️"),
            ("mp4", "🎥"),
            ("avi", "🎥"),
            ("mov", "🎥"),
            ("mp3", "🎵"),
            ("wav", "🎵"),
            ("flac", "🎵"),
            (Self::DEFAULT_KEY, "📄"),
        ];
        Self(
            icons
                .into_iter()
                .map(|(ext, glyph)| (ext.to_string(), glyph.to_string()))
                .collect(),
        )
    }
}

// ── THEMES ────────────────────────────────────────────────────────────────────

/// The two built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Light,
    Dark,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeId::Light),
            "dark" => Ok(ThemeId::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Display name plus four CSS colour values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Themes {
    pub light: ThemePalette,
    pub dark: ThemePalette,
}

impl Themes {
    pub fn palette(&self, id: ThemeId) -> &ThemePalette {
        match id {
            ThemeId::Light => &self.light,
            ThemeId::Dark => &self.dark,
        }
    }
}

impl Default for Themes {
    fn default() -> Self {
        Self {
            light: ThemePalette {
                name: "浅色主题".to_string(),
                primary: "#1a73e8".to_string(),
                secondary: "#f8f9fa".to_string(),
                background: "#ffffff".to_string(),
                text: "#333333".to_string(),
            },
            dark: ThemePalette {
                name: "深色主题".to_string(),
                primary: "#4285f4".to_string(),
                secondary: "#2d2d2d".to_string(),
                background: "#1a1a1a".to_string(),
                text: "#ffffff".to_string(),
            },
        }
    }
}

// ── SHORTCUTS ─────────────────────────────────────────────────────────────────

/// Key combination (`ctrl+s`, `escape`, ...) → action identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortcuts(pub IndexMap<String, String>);

impl Shortcuts {
    /// Action bound to `combo`, ignoring case and whitespace around `+`.
    pub fn action_for(&self, combo: &str) -> Option<&str> {
        let key: String = combo
            .split('+')
            .map(|part| part.trim().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("+");
        self.0.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Shortcuts {
    fn default() -> Self {
        let bindings = [
            ("ctrl+r", "refreshData"),
            ("ctrl+n", "newProject"),
            ("ctrl+u", "uploadFile"),
            ("ctrl+s", "saveData"),
            ("ctrl+e", "exportData"),
            ("escape", "closeModal"),
            ("f5", "reload"),
        ];
        Self(
            bindings
                .into_iter()
                .map(|(combo, action)| (combo.to_string(), action.to_string()))
                .collect(),
        )
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
