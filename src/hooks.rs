//! The fixed set of hook names recognized by git.
//!
//! Git only runs hook files whose names match its documented set, so a
//! configured name outside this set would install a file git silently
//! ignores. Validation is exact: case-sensitive, no trimming.

/// Every hook name documented by git, in githooks(5) order.
///
/// Exported so callers can enumerate the set (e.g. `hookwright names`).
pub const GIT_HOOK_NAMES: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

/// Check whether `name` is a hook git will actually run.
///
/// Returns `true` iff `name` exactly matches one of the documented git
/// hook identifiers. No normalization is applied: `"Pre-Commit"`,
/// `" pre-commit"` and `"pre-commit.sh"` are all rejected.
#[must_use]
pub fn is_valid_hook_name(name: &str) -> bool {
    matches!(
        name,
        "applypatch-msg"
            | "pre-applypatch"
            | "post-applypatch"
            | "pre-commit"
            | "pre-merge-commit"
            | "prepare-commit-msg"
            | "commit-msg"
            | "post-commit"
            | "pre-rebase"
            | "post-checkout"
            | "post-merge"
            | "pre-push"
            | "pre-receive"
            | "update"
            | "proc-receive"
            | "post-receive"
            | "post-update"
            | "reference-transaction"
            | "push-to-checkout"
            | "pre-auto-gc"
            | "post-rewrite"
            | "sendemail-validate"
            | "fsmonitor-watchman"
            | "p4-changelist"
            | "p4-prepare-changelist"
            | "p4-post-changelist"
            | "p4-pre-submit"
            | "post-index-change"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_name_is_valid() {
        for name in GIT_HOOK_NAMES {
            assert!(is_valid_hook_name(name), "rejected: {}", name);
        }
    }

    #[test]
    fn common_client_side_hooks_are_valid() {
        assert!(is_valid_hook_name("pre-commit"));
        assert!(is_valid_hook_name("pre-push"));
        assert!(is_valid_hook_name("commit-msg"));
        assert!(is_valid_hook_name("post-merge"));
    }

    #[test]
    fn empty_and_unknown_names_are_invalid() {
        assert!(!is_valid_hook_name(""));
        assert!(!is_valid_hook_name("not-a-hook"));
        assert!(!is_valid_hook_name("precommit"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(!is_valid_hook_name("Pre-Commit"));
        assert!(!is_valid_hook_name("PRE-PUSH"));
    }

    #[test]
    fn no_trimming_is_applied() {
        assert!(!is_valid_hook_name(" pre-commit"));
        assert!(!is_valid_hook_name("pre-commit "));
        assert!(!is_valid_hook_name("pre-commit\n"));
    }

    #[test]
    fn substrings_and_supersets_are_invalid() {
        assert!(!is_valid_hook_name("pre"));
        assert!(!is_valid_hook_name("pre-commit.sh"));
        assert!(!is_valid_hook_name("my-pre-commit"));
    }

    #[test]
    fn path_separators_are_invalid() {
        assert!(!is_valid_hook_name("hooks/pre-commit"));
        assert!(!is_valid_hook_name("../pre-commit"));
    }
}
