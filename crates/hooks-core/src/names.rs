//! The closed sets of recognized hook and option names
//!
//! Both sets are process-wide constants, shared read-only by the
//! validator and the synchronizer. Hook iteration order is the order of
//! [`VALID_HOOKS`].

/// The tool's own name: binary name, `package.json` dependency name, and
/// the manifest key the config falls back to.
pub const TOOL_NAME: &str = "git-hooks";

/// Base name of the default external config file (`git-hooks.toml`,
/// `git-hooks.json`, ...).
pub const DEFAULT_CONFIG_BASE: &str = "git-hooks";

/// Every hook name git recognizes, in githooks(5) order.
pub const VALID_HOOKS: [&str; 28] = [
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

/// Non-hook configuration keys.
pub const VALID_OPTIONS: [&str; 1] = [PRESERVE_UNUSED];

/// Option controlling whether undeclared hooks are left on disk.
pub const PRESERVE_UNUSED: &str = "preserveUnused";

/// Whether `name` is one of the recognized git hooks.
pub fn is_known_hook(name: &str) -> bool {
    VALID_HOOKS.contains(&name)
}

/// Whether `name` is one of the recognized options.
pub fn is_known_option(name: &str) -> bool {
    VALID_OPTIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_membership() {
        assert!(is_known_hook("pre-commit"));
        assert!(is_known_hook("post-index-change"));
        assert!(!is_known_hook("bogus-hook"));
        assert!(!is_known_hook("preserveUnused"));
    }

    #[test]
    fn test_option_membership() {
        assert!(is_known_option("preserveUnused"));
        assert!(!is_known_option("pre-commit"));
    }

    /// The two sets must stay disjoint; a name in both would make the
    /// synchronizer treat an option as an installable hook.
    #[test]
    fn test_hooks_and_options_are_disjoint() {
        for option in VALID_OPTIONS {
            assert!(
                !is_known_hook(option),
                "option '{option}' collides with a hook name"
            );
        }
    }

    #[test]
    fn test_no_duplicate_hook_names() {
        let mut sorted = VALID_HOOKS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), VALID_HOOKS.len());
    }
}
