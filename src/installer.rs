//! Hook installation orchestration.
//!
//! [`Installer`] drives a run: check that `.git/hooks` exists, then walk
//! the configured entries in order, validating each hook name, containing
//! resource sources to the project root, and dispatching to
//! [`HookWriter`]. Name and containment failures abort the run where they
//! occur; hooks written before that point stay written (there is no
//! rollback). A missing resource source is the one tolerated failure: it
//! is recorded as a skip and the run continues.

use std::path::{
    Path,
    PathBuf,
};

use tracing::info;

use crate::config::HookConfig;
use crate::error::{
    HookError,
    HookResult,
};
use crate::hooks::is_valid_hook_name;
use crate::paths;
use crate::writer::HookWriter;

/// The script body installed for every inline hook entry.
///
/// Warns on commit about dependencies with newer versions available. The
/// marker values in the `hooks` mapping do not override this; use
/// [`Installer::with_default_script`] for a different body.
pub const DEFAULT_UPDATE_CHECK_SCRIPT: &str = r#"# Change directory to the project's root
cd "$(git rev-parse --show-toplevel)"

# Check for available dependency updates
dependency_updates=$(cargo update --dry-run --color never 2>&1 \
    | grep '\->' \
    | awk -F ' ' '{if ($3 != $5) print $0}')

if [ -n "$dependency_updates" ]; then
    echo "WARNING: The following dependencies have updates available:"
    echo "$dependency_updates"
fi
"#;

/// Where a hook's content comes from.
#[derive(Debug, Clone)]
pub enum HookSource {
    /// Script body generated in memory; a `#!/bin/sh` shebang line is
    /// prepended on write.
    Inline(String),
    /// Path of an existing script inside the project, copied verbatim.
    FromFile(PathBuf),
}

/// One requested hook installation: a hook name plus its content source.
#[derive(Debug, Clone)]
pub struct HookSpec {
    /// The git hook name, e.g. `pre-commit`.
    pub name: String,
    /// Where the hook's content comes from.
    pub source: HookSource,
}

impl HookSpec {
    /// A spec that writes `body` (behind a shebang line) as `name`.
    pub fn inline(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: HookSource::Inline(body.into()),
        }
    }

    /// A spec that copies the file at `source` as `name`.
    pub fn from_file(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: HookSource::FromFile(source.into()),
        }
    }
}

/// A hook that was (or, in a preflight, would be) written.
#[derive(Debug, Clone)]
pub struct InstalledHook {
    /// The hook name.
    pub name: String,
    /// The destination path under the hook directory.
    pub path: PathBuf,
}

/// A resource hook whose source was missing or not a regular file.
#[derive(Debug, Clone)]
pub struct SkippedHook {
    /// The hook name.
    pub name: String,
    /// The resolved source path that was not usable.
    pub source: PathBuf,
}

/// Per-run aggregation of hook outcomes.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Hooks written to the hook directory, in processing order.
    pub installed: Vec<InstalledHook>,
    /// Resource hooks skipped because their source was unusable.
    pub skipped: Vec<SkippedHook>,
}

/// Installs git hooks into a project's `.git/hooks` directory.
pub struct Installer {
    project_root: PathBuf,
    writer: HookWriter,
    default_script: String,
}

impl Installer {
    /// Create an installer for the project at `project_root`.
    ///
    /// A relative root is resolved against the process working directory;
    /// the stored root is lexically normalized and serves as the
    /// containment boundary for resource hook sources. The hook directory
    /// is `<root>/.git/hooks` and is never created by the installer.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::CurrentDirUnavailable`] if a relative root is
    /// given and the working directory cannot be determined.
    pub fn new(project_root: impl Into<PathBuf>) -> HookResult<Self> {
        let raw = project_root.into();
        let absolute = if raw.is_absolute() {
            raw
        } else {
            std::env::current_dir()
                .map_err(|e| HookError::CurrentDirUnavailable {
                    reason: e.to_string(),
                })?
                .join(raw)
        };
        let project_root = paths::normalize(&absolute);
        let hooks_dir = project_root.join(".git").join("hooks");
        Ok(Self {
            project_root,
            writer: HookWriter::new(hooks_dir),
            default_script: DEFAULT_UPDATE_CHECK_SCRIPT.to_string(),
        })
    }

    /// Replace the script body used for inline hook entries.
    #[must_use]
    pub fn with_default_script(mut self, script: impl Into<String>) -> Self {
        self.default_script = script.into();
        self
    }

    /// The normalized project root acting as the containment boundary.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The hook directory this installer writes into.
    pub fn hooks_dir(&self) -> &Path {
        self.writer.hooks_dir()
    }

    /// Install every hook configured in `config`.
    ///
    /// Inline entries are processed first, then resource entries, each
    /// mapping in its own (sorted) order.
    ///
    /// # Errors
    ///
    /// Fails fast per the run policy: [`HookError::NotARepository`]
    /// before anything is processed, [`HookError::InvalidHookName`] or
    /// [`HookError::SourceOutsideProject`] at the offending entry, and
    /// write/read failures from [`HookWriter`]. Hooks written before the
    /// failing entry remain in place.
    pub fn install(&self, config: &HookConfig) -> HookResult<InstallReport> {
        self.install_specs(&config.specs(&self.default_script))
    }

    /// Install an explicit list of hook specs, in order.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`install`](Self::install).
    pub fn install_specs(&self, specs: &[HookSpec]) -> HookResult<InstallReport> {
        self.ensure_hooks_dir()?;
        let mut report = InstallReport::default();
        for spec in specs {
            self.validate_name(&spec.name)?;
            match &spec.source {
                HookSource::Inline(body) => {
                    info!(hook = %spec.name, "generating hook from inline script");
                    let path = self.writer.write_inline(&spec.name, body)?;
                    report.installed.push(InstalledHook {
                        name: spec.name.clone(),
                        path,
                    });
                }
                HookSource::FromFile(source) => {
                    let resolved = self.contained_source(&spec.name, source)?;
                    info!(
                        hook = %spec.name,
                        source = %resolved.display(),
                        "generating hook from project file"
                    );
                    match self.writer.copy_from_source(&spec.name, &resolved)? {
                        Some(path) => report.installed.push(InstalledHook {
                            name: spec.name.clone(),
                            path,
                        }),
                        None => report.skipped.push(SkippedHook {
                            name: spec.name.clone(),
                            source: resolved,
                        }),
                    }
                }
            }
        }
        Ok(report)
    }

    /// Run the full validation pipeline without writing anything.
    ///
    /// The returned report lists the hooks an [`install`](Self::install)
    /// of the same config would write and the resource entries it would
    /// skip.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`install`](Self::install), minus the
    /// write errors.
    pub fn preflight(&self, config: &HookConfig) -> HookResult<InstallReport> {
        self.ensure_hooks_dir()?;
        let mut report = InstallReport::default();
        for spec in config.specs(&self.default_script) {
            self.validate_name(&spec.name)?;
            match &spec.source {
                HookSource::Inline(_) => report.installed.push(InstalledHook {
                    path: self.hooks_dir().join(&spec.name),
                    name: spec.name,
                }),
                HookSource::FromFile(source) => {
                    let resolved = self.contained_source(&spec.name, source)?;
                    let usable = std::fs::metadata(&resolved)
                        .map(|m| m.is_file())
                        .unwrap_or(false);
                    if usable {
                        report.installed.push(InstalledHook {
                            path: self.hooks_dir().join(&spec.name),
                            name: spec.name,
                        });
                    } else {
                        report.skipped.push(SkippedHook {
                            name: spec.name,
                            source: resolved,
                        });
                    }
                }
            }
        }
        Ok(report)
    }

    fn ensure_hooks_dir(&self) -> HookResult<()> {
        if !self.hooks_dir().is_dir() {
            return Err(HookError::NotARepository {
                hooks_dir: self.hooks_dir().display().to_string(),
            });
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> HookResult<()> {
        if !is_valid_hook_name(name) {
            return Err(HookError::InvalidHookName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a resource source against the project root and reject it
    /// if it escapes the boundary.
    fn contained_source(&self, name: &str, source: &Path) -> HookResult<PathBuf> {
        let resolved = paths::resolve(source, &self.project_root);
        if !paths::is_contained(&resolved, &self.project_root) {
            return Err(HookError::SourceOutsideProject {
                name: name.to_string(),
                path: source.display().to_string(),
            });
        }
        Ok(resolved)
    }
}
