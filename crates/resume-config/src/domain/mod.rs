//! Domain types for the resume manager configuration.
//!
//! Everything here is pure data: no I/O, no global state.  The store and export
//! modules build on these types.
//!
//! - [`environment`]: the environment selector and the `DEV`/`PROD` flag overlays.
//! - [`categories`]: one struct per configuration category, with built-in values.
//! - [`record`]: the full record and the overlay step.

pub mod categories;
pub mod environment;
pub mod record;

pub use categories::{FileIcons, LimitError, StorageKey, ThemeId};
pub use environment::{EnvFlags, Environment};
pub use record::ConfigRecord;
