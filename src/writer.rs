//! Writes hook files into the hook directory.
//!
//! Every install goes through a temporary file in the hook directory that
//! is persisted over the destination, so a hook is either fully replaced
//! or left untouched. On success the destination gets owner read, write
//! and execute permission and nothing else, regardless of the process
//! umask or whatever mode a previous hook file had.

use std::fs;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use tracing::warn;

use crate::error::{
    HookError,
    HookResult,
};

/// The shebang line prepended to every inline-generated hook.
pub const SHEBANG: &str = "#!/bin/sh";

/// Exact mode set on installed hooks: owner rwx, no group/other bits.
#[cfg(unix)]
const HOOK_FILE_MODE: u32 = 0o700;

/// Writes and copies hook scripts into a repository's hook directory.
pub struct HookWriter {
    hooks_dir: PathBuf,
}

impl HookWriter {
    /// Create a writer targeting `hooks_dir`.
    ///
    /// The directory is not created; callers check it exists first (its
    /// absence means the project is not a git repository).
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// The hook directory this writer installs into.
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Write an inline hook: a `#!/bin/sh` shebang line followed by
    /// `body`, fully replacing any existing file at `hooks_dir/name`.
    ///
    /// Returns the path of the installed hook.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::HookWriteFailed`] if the file cannot be
    /// written or its permissions cannot be set.
    pub fn write_inline(&self, name: &str, body: &str) -> HookResult<PathBuf> {
        let script = format!("{SHEBANG}\n{body}");
        self.replace_hook_file(name, script.as_bytes())
    }

    /// Copy an external script verbatim to `hooks_dir/name`.
    ///
    /// No shebang is injected; the source is trusted to be a complete
    /// script. If `source` does not exist or is not a regular file the
    /// copy is skipped and `Ok(None)` is returned; optional hook sources
    /// are installed best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::SourceReadFailed`] if an existing source
    /// cannot be read, or [`HookError::HookWriteFailed`] if the
    /// destination cannot be written.
    pub fn copy_from_source(&self, name: &str, source: &Path) -> HookResult<Option<PathBuf>> {
        let is_regular_file = fs::metadata(source).map(|m| m.is_file()).unwrap_or(false);
        if !is_regular_file {
            warn!(
                hook = name,
                source = %source.display(),
                "hook source missing or not a regular file, skipping"
            );
            return Ok(None);
        }
        let bytes = fs::read(source).map_err(|e| HookError::SourceReadFailed {
            name: name.to_string(),
            path: source.display().to_string(),
            reason: e.to_string(),
        })?;
        self.replace_hook_file(name, &bytes).map(Some)
    }

    /// Replace `hooks_dir/name` with `content` all-or-nothing, then set
    /// the fixed hook permissions.
    fn replace_hook_file(&self, name: &str, content: &[u8]) -> HookResult<PathBuf> {
        let dest = self.hooks_dir.join(name);
        let write_failed = |e: &dyn std::fmt::Display| HookError::HookWriteFailed {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&self.hooks_dir)
            .map_err(|e| write_failed(&e))?;
        tmp.write_all(content).map_err(|e| write_failed(&e))?;
        tmp.persist(&dest).map_err(|e| write_failed(&e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dest, fs::Permissions::from_mode(HOOK_FILE_MODE))
                .map_err(|e| write_failed(&e))?;
        }
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer_in(tmp: &TempDir) -> HookWriter {
        let hooks_dir = tmp.path().join("hooks");
        fs::create_dir_all(&hooks_dir).unwrap();
        HookWriter::new(hooks_dir)
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn inline_hook_starts_with_shebang() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);

        let path = writer.write_inline("pre-commit", "echo checked\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#!/bin/sh\necho checked\n");
        assert_eq!(content.lines().next(), Some("#!/bin/sh"));
    }

    #[cfg(unix)]
    #[test]
    fn inline_hook_gets_owner_only_rwx() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);

        let path = writer.write_inline("pre-commit", "true\n").unwrap();

        assert_eq!(mode_of(&path), 0o700);
    }

    #[test]
    fn inline_write_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);

        let first = writer.write_inline("pre-push", "exit 0\n").unwrap();
        let bytes_first = fs::read(&first).unwrap();
        let second = writer.write_inline("pre-push", "exit 0\n").unwrap();
        let bytes_second = fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(bytes_first, bytes_second);
        #[cfg(unix)]
        assert_eq!(mode_of(&second), 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_replaces_content_and_resets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);
        let dest = writer.hooks_dir().join("commit-msg");
        fs::write(&dest, "old content").unwrap();
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o644)).unwrap();

        writer.write_inline("commit-msg", "new\n").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "#!/bin/sh\nnew\n");
        assert_eq!(mode_of(&dest), 0o700);
    }

    #[test]
    fn copy_preserves_source_bytes_verbatim() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);
        // No trailing newline, CRLF in the middle: must survive untouched.
        let source = tmp.path().join("my-hook.sh");
        let bytes = b"#!/bin/bash\r\necho hi".to_vec();
        fs::write(&source, &bytes).unwrap();

        let dest = writer.copy_from_source("pre-push", &source).unwrap().unwrap();

        assert_eq!(fs::read(&dest).unwrap(), bytes);
        #[cfg(unix)]
        assert_eq!(mode_of(&dest), 0o700);
    }

    #[test]
    fn copy_does_not_inject_shebang() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);
        let source = tmp.path().join("plain.sh");
        fs::write(&source, "echo no shebang here\n").unwrap();

        let dest = writer.copy_from_source("post-merge", &source).unwrap().unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "echo no shebang here\n"
        );
    }

    #[test]
    fn missing_source_is_a_skip_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);

        let result = writer
            .copy_from_source("pre-push", &tmp.path().join("absent.sh"))
            .unwrap();

        assert!(result.is_none());
        assert!(!writer.hooks_dir().join("pre-push").exists());
    }

    #[test]
    fn directory_source_is_a_skip_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);
        let dir_source = tmp.path().join("a-directory");
        fs::create_dir_all(&dir_source).unwrap();

        let result = writer.copy_from_source("pre-push", &dir_source).unwrap();

        assert!(result.is_none());
        assert!(!writer.hooks_dir().join("pre-push").exists());
    }

    #[test]
    fn skip_leaves_existing_hook_untouched() {
        let tmp = TempDir::new().unwrap();
        let writer = writer_in(&tmp);
        let dest = writer.hooks_dir().join("pre-push");
        fs::write(&dest, "keep me\n").unwrap();

        let result = writer
            .copy_from_source("pre-push", &tmp.path().join("absent.sh"))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "keep me\n");
    }

    #[test]
    fn write_into_missing_hooks_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let writer = HookWriter::new(tmp.path().join("no-such-dir"));

        let err = writer.write_inline("pre-commit", "true\n").unwrap_err();

        assert!(matches!(err, HookError::HookWriteFailed { .. }));
    }
}
