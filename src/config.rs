//! Configuration loading for hook installation.
//!
//! The configuration is a small JSON document with two mappings:
//!
//! ```json
//! {
//!   "hooks": { "pre-commit": "default" },
//!   "resource-hooks": { "pre-push": "scripts/pre-push.sh" }
//! }
//! ```
//!
//! `hooks` entries install the built-in script; their values are opaque
//! markers (only the key matters). `resource-hooks` entries copy an
//! existing file from inside the project tree; values are paths, relative
//! to the project root or absolute.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{
    HookError,
    HookResult,
};
use crate::installer::HookSpec;

/// The two hook mappings read from a configuration file.
///
/// Both mappings are sorted maps, so entries are processed (and logged)
/// in a deterministic order on every run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Hook name to inline marker. Presence of a key installs the
    /// default script under that name; the value is ignored.
    #[serde(default)]
    pub hooks: BTreeMap<String, String>,

    /// Hook name to source file path inside the project.
    #[serde(default, rename = "resource-hooks")]
    pub resource_hooks: BTreeMap<String, String>,
}

impl HookConfig {
    /// Load a configuration file from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::ConfigReadFailed`] if the file cannot be
    /// read and [`HookError::ConfigParseFailed`] if it is not a valid
    /// configuration document (including unknown top-level keys, so a
    /// typo like `"resource_hooks"` surfaces instead of being ignored).
    pub fn load(path: &Path) -> HookResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| HookError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| HookError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// True when neither mapping has any entries.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.resource_hooks.is_empty()
    }

    /// Materialize the two mappings into one ordered list of hook specs:
    /// all inline entries first, then all resource entries.
    ///
    /// `inline_body` becomes the script body of every inline entry (the
    /// configured marker values are not used as content).
    pub fn specs(&self, inline_body: &str) -> Vec<HookSpec> {
        let inline = self
            .hooks
            .keys()
            .map(|name| HookSpec::inline(name.as_str(), inline_body));
        let resource = self
            .resource_hooks
            .iter()
            .map(|(name, source)| HookSpec::from_file(name.as_str(), source.as_str()));
        inline.chain(resource).collect()
    }
}
