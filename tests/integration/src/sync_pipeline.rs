//! End-to-end tests for the resolve -> validate -> synchronize pipeline
//!
//! Exercises the complete flow over temporary repositories, including
//! worktree-style `gitdir:` indirection and the preserve-unused policy.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use hooks_core::{remove_hooks, resolve_config, set_hooks_from_config};

/// Set up a project directory with a `.git` dir and a package.json.
fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    fs::write(temp.path().join("package.json"), manifest).unwrap();
    temp
}

fn hook_path(root: &Path, hook: &str) -> std::path::PathBuf {
    root.join(".git").join("hooks").join(hook)
}

fn sync(root: &Path, custom: Option<&str>) {
    let config = resolve_config(root, custom).unwrap();
    set_hooks_from_config(root, &config).unwrap();
}

#[test]
fn test_pipeline_from_manifest_config() {
    let temp = setup_project(r#"{ "git-hooks": { "pre-commit": "npm test" } }"#);

    sync(temp.path(), None);

    let content = fs::read_to_string(hook_path(temp.path(), "pre-commit")).unwrap();
    assert_eq!(content, "#!/bin/sh\nnpm test");
}

#[test]
fn test_pipeline_from_external_config_file() {
    let temp = setup_project("{}");
    fs::write(
        temp.path().join("git-hooks.yaml"),
        "pre-push: cargo test --all\n",
    )
    .unwrap();

    sync(temp.path(), None);

    let content = fs::read_to_string(hook_path(temp.path(), "pre-push")).unwrap();
    assert_eq!(content, "#!/bin/sh\ncargo test --all");
}

#[test]
fn test_pipeline_reconfiguration_replaces_and_prunes() {
    let temp = setup_project("{}");
    fs::write(temp.path().join("git-hooks.json"), r#"{ "pre-commit": "a", "pre-push": "b" }"#)
        .unwrap();
    sync(temp.path(), None);
    assert!(hook_path(temp.path(), "pre-push").exists());

    // Drop pre-push and change pre-commit
    fs::write(temp.path().join("git-hooks.json"), r#"{ "pre-commit": "c" }"#).unwrap();
    sync(temp.path(), None);

    let content = fs::read_to_string(hook_path(temp.path(), "pre-commit")).unwrap();
    assert_eq!(content, "#!/bin/sh\nc");
    assert!(!hook_path(temp.path(), "pre-push").exists());
}

#[test]
fn test_pipeline_preserve_unused_survives_reconfiguration() {
    let temp = setup_project("{}");
    fs::write(temp.path().join("git-hooks.json"), r#"{ "post-merge": "keepme" }"#).unwrap();
    sync(temp.path(), None);

    fs::write(
        temp.path().join("git-hooks.json"),
        r#"{ "pre-commit": "x", "preserveUnused": ["post-merge"] }"#,
    )
    .unwrap();
    sync(temp.path(), None);

    let kept = fs::read_to_string(hook_path(temp.path(), "post-merge")).unwrap();
    assert_eq!(kept, "#!/bin/sh\nkeepme");
}

#[test]
fn test_pipeline_writes_through_worktree_indirection() {
    let temp = TempDir::new().unwrap();

    // Shared metadata under main/.git, worktree gitdir nested inside it
    let shared = temp.path().join("main").join(".git");
    let worktree_gitdir = shared.join("worktrees").join("feature");
    fs::create_dir_all(&worktree_gitdir).unwrap();
    fs::write(worktree_gitdir.join("commondir"), "../..\n").unwrap();

    let worktree = temp.path().join("feature");
    fs::create_dir(&worktree).unwrap();
    fs::write(
        worktree.join(".git"),
        format!("gitdir: {}\n", worktree_gitdir.display()),
    )
    .unwrap();
    fs::write(worktree.join("git-hooks.toml"), "pre-commit = \"npm test\"\n").unwrap();

    sync(&worktree, None);

    // The hook lands in the shared metadata directory, not the worktree
    let hook = shared.join("hooks").join("pre-commit");
    assert_eq!(fs::read_to_string(hook).unwrap(), "#!/bin/sh\nnpm test");
}

#[test]
fn test_pipeline_invalid_config_never_touches_disk() {
    let temp = setup_project(r#"{ "git-hooks": { "pre-commit": "valid fallback" } }"#);
    fs::write(temp.path().join("git-hooks.toml"), "bogus-hook = \"x\"\n").unwrap();

    let result = resolve_config(temp.path(), None);
    assert!(matches!(
        result,
        Err(hooks_core::Error::ConfigInvalid { .. })
    ));
    assert!(!hook_path(temp.path(), "pre-commit").exists());
}

#[test]
fn test_pipeline_uninstall_after_install() {
    let temp = setup_project(r#"{ "git-hooks": { "pre-commit": "x", "commit-msg": "y" } }"#);
    sync(temp.path(), None);
    assert!(hook_path(temp.path(), "pre-commit").exists());
    assert!(hook_path(temp.path(), "commit-msg").exists());

    remove_hooks(temp.path()).unwrap();

    assert!(!hook_path(temp.path(), "pre-commit").exists());
    assert!(!hook_path(temp.path(), "commit-msg").exists());
}

#[test]
fn test_pipeline_sync_from_nested_directory() {
    let temp = setup_project(r#"{ "git-hooks": { "pre-commit": "npm test" } }"#);
    let nested = temp.path().join("packages").join("app");
    fs::create_dir_all(&nested).unwrap();

    // Config resolves against the project root, hooks land in its .git
    let config = resolve_config(temp.path(), None).unwrap();
    set_hooks_from_config(&nested, &config).unwrap();

    assert!(hook_path(temp.path(), "pre-commit").exists());
}
