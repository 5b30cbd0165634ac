//! The process-wide configuration store.
//!
//! A [`ConfigStore`] pairs a resolved [`ConfigRecord`] with its JSON tree so
//! that dynamic callers can read values by dotted path (`UPLOAD.MAX_FILE_SIZE`)
//! without re-serializing on every lookup.
//!
//! # Lifecycle
//!
//! ```text
//!  uninitialized ──install(env)──▶ initialized
//! ```
//!
//! The transition happens once.  A second [`install`] with the same
//! environment returns the existing store; a different environment is
//! rejected.  Callers that prefer explicit passing can build a store with
//! [`ConfigStore::new`] and never touch the global slot.

use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ConfigRecord, Environment};

/// The installed store.  Written once by [`install`].
static STORE: OnceLock<ConfigStore> = OnceLock::new();

/// Errors raised by store construction and dotted-path reads.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No value exists at the requested dotted path.
    #[error("unknown configuration path: {path}")]
    UnknownPath { path: String },

    /// The global store was already installed for another environment.
    #[error("configuration already installed for {installed}, cannot install for {requested}")]
    AlreadyInstalled {
        installed: Environment,
        requested: Environment,
    },

    /// The record could not be converted to its JSON tree.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A resolved record plus its JSON tree.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    environment: Environment,
    record: ConfigRecord,
    tree: Value,
}

impl ConfigStore {
    /// Builds the store for `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if the record cannot be turned into
    /// JSON.  The built-in data always serializes.
    pub fn new(env: Environment) -> Result<Self, ConfigError> {
        Self::from_record(env, ConfigRecord::for_environment(env))
    }

    /// Wraps an already-built record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if `record` cannot be serialized.
    pub fn from_record(env: Environment, record: ConfigRecord) -> Result<Self, ConfigError> {
        let tree = serde_json::to_value(&record)?;
        Ok(Self {
            environment: env,
            record,
            tree,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.record
    }

    /// The record as JSON, as sent to the display layer.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Reads the value at a dotted path.
    ///
    /// Segments are matched against object keys verbatim, so keys containing
    /// `-` (`PAGES.project-detail.name`) work.  A numeric segment indexes into
    /// an array (`UPLOAD.ALLOWED_TYPES.0`).  The empty path returns the root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPath`] if any segment does not resolve.
    pub fn lookup(&self, path: &str) -> Result<&Value, ConfigError> {
        if path.is_empty() {
            return Ok(&self.tree);
        }
        path.split('.')
            .try_fold(&self.tree, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
            .ok_or_else(|| ConfigError::UnknownPath {
                path: path.to_string(),
            })
    }

    /// Like [`ConfigStore::lookup`], for paths that must lead to a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPath`] if the path is missing or the value
    /// is not a string.
    pub fn lookup_str(&self, path: &str) -> Result<&str, ConfigError> {
        self.lookup(path)?
            .as_str()
            .ok_or_else(|| ConfigError::UnknownPath {
                path: path.to_string(),
            })
    }

    /// Every leaf path in the store, in authored order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaves(&self.tree, String::new(), &mut out);
        out
    }
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(child, join(key.as_str()), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_leaves(child, join(i.to_string().as_str()), out);
            }
        }
        _ => out.push(prefix),
    }
}

// ── Global accessor ───────────────────────────────────────────────────────────

/// Installs the process-wide store for `env` and returns it.
///
/// Call this once from the entry point.  Later calls with the same
/// environment return the store already installed.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInstalled`] if a store for a different
/// environment is installed, or [`ConfigError::Serialize`] if building the
/// store fails.
pub fn install(env: Environment) -> Result<&'static ConfigStore, ConfigError> {
    let installed = match STORE.get() {
        Some(existing) => existing,
        None => {
            let built = ConfigStore::new(env)?;
            // A racing installer may win; the comparison below then runs
            // against its store.
            STORE.get_or_init(|| {
                debug!(environment = %env, "configuration store installed");
                built
            })
        }
    };
    check_installed(installed, env)
}

/// The installed store, or `None` before [`install`] has run.
pub fn global() -> Option<&'static ConfigStore> {
    STORE.get()
}

fn check_installed(
    existing: &'static ConfigStore,
    requested: Environment,
) -> Result<&'static ConfigStore, ConfigError> {
    if existing.environment == requested {
        Ok(existing)
    } else {
        Err(ConfigError::AlreadyInstalled {
            installed: existing.environment,
            requested,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// The global slot is exercised in `tests/global_store.rs`, which runs in its
// own process.
