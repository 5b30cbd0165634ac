//! # resume-config
//!
//! Configuration store for the AI resume manager front end: API endpoint,
//! upload limits, UI timings, storage keys, defaults, status codes, localized
//! messages, page metadata, file icons, themes and keyboard shortcuts.
//!
//! All values are compiled in.  The only input is the environment selector,
//! which decides whether the `DEV` or `PROD` flag overlay becomes the active
//! top-level `DEBUG` / `CONSOLE_LOG` / `MOCK_DATA` / `SHOW_PERFORMANCE` flags.
//!
//! # Layout
//!
//! - **`domain`**: the typed record, its categories and the overlay step.
//! - **`store`**: the resolved record plus dotted-path reads, and the
//!   process-wide slot written once at startup.
//! - **`export`**: JSON, TOML and browser-script renderings for the display layer.
//!
//! # Example
//!
//! ```rust
//! use resume_config::{ConfigStore, Environment};
//!
//! let store = ConfigStore::new(Environment::Production).unwrap();
//! assert_eq!(store.record().upload.max_file_size, 104_857_600);
//! assert_eq!(store.lookup("DEBUG").unwrap(), false);
//! ```

pub mod domain;
pub mod export;
pub mod store;

pub use domain::{ConfigRecord, EnvFlags, Environment};
pub use export::{ExportError, ExportFormat};
pub use store::{ConfigError, ConfigStore};
