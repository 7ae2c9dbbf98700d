//! Repository metadata directory discovery
//!
//! Walks upward from a starting directory to find `.git`, following the
//! `gitdir:` indirection files used by worktrees and submodules, and
//! recovers a consuming project's root from a dependency install path.

use std::path::Path;

use hooks_fs::{NormalizedPath, io};

use crate::names::TOOL_NAME;

/// Locate the repository metadata directory for `start`.
///
/// Tests `<candidate>/.git` for the starting directory and each ancestor
/// in turn. A `.git` directory is returned as-is (canonicalized); a `.git`
/// file is a worktree/submodule pointer whose `gitdir: <path>` target is
/// followed, honoring a `commondir` file inside the target when present.
///
/// The walk is a bounded loop over the path's segments; it terminates
/// after at most one step per segment. Returns `None` when no repository
/// is found, including when `start` is the filesystem root itself.
pub fn resolve_git_root(start: &Path) -> Option<NormalizedPath> {
    let normalized = NormalizedPath::new(start);
    let mut segments: Vec<String> = normalized.segments().map(str::to_owned).collect();

    while !segments.is_empty() {
        let dir = segments.join("/");
        if dir.is_empty() {
            // Walked past the last named segment of an absolute path.
            break;
        }

        let candidate = NormalizedPath::new(&dir).join(".git");
        if candidate.is_dir() {
            return Some(candidate.canonicalized());
        }
        if candidate.is_file()
            && let Some(root) = follow_gitdir_pointer(&candidate)
        {
            return Some(root);
        }

        segments.pop();
    }

    tracing::debug!(start = %normalized, "no .git found up to the filesystem root");
    None
}

/// Resolve a `.git` pointer file to the real metadata directory.
///
/// The pointer holds a single `gitdir: <path>` line. When the referenced
/// gitdir contains a `commondir` file, its trimmed content names the
/// shared metadata root relative to the gitdir (the worktree case);
/// otherwise the gitdir itself is the root (the submodule case).
fn follow_gitdir_pointer(pointer: &NormalizedPath) -> Option<NormalizedPath> {
    let content = io::read_text(pointer).ok()?;
    let target = content.strip_prefix("gitdir:")?.trim();
    if target.is_empty() {
        return None;
    }

    let mut git_dir = NormalizedPath::new(target);
    if !git_dir.is_absolute()
        && let Some(parent) = pointer.parent()
    {
        git_dir = parent.join(git_dir.as_str());
    }

    let common_file = git_dir.join("commondir");
    if common_file.is_file() {
        let common = io::read_text(&common_file).ok()?;
        let common = common.trim();
        let shared = if NormalizedPath::new(common).is_absolute() {
            NormalizedPath::new(common)
        } else {
            git_dir.join(common)
        };
        return Some(shared.canonicalized());
    }

    Some(git_dir.canonicalized())
}

/// Recover `<project>` from `<project>/node_modules/git-hooks`.
///
/// Handles the package-manager staging layouts: a `.pnpm` or `.store`
/// segment truncates the path at the store directory (dropping the
/// enclosing `node_modules` as well), and a yarn `unplugged` virtual
/// layout cannot be resolved at all. Splits on both separators so host
/// paths from either platform work.
pub fn project_root_from_dependency_path(install_path: &str) -> Option<String> {
    let segments: Vec<&str> = install_path.split(['/', '\\']).collect();

    if let Some(idx) = segments.iter().position(|s| *s == ".pnpm") {
        return Some(truncate_at_store(&segments, idx));
    }
    if let Some(idx) = segments.iter().position(|s| *s == ".store") {
        return Some(truncate_at_store(&segments, idx));
    }
    if segments.contains(&".yarn") && segments.contains(&"unplugged") {
        return None;
    }
    if segments.len() > 2 && segments[segments.len() - 2..] == ["node_modules", TOOL_NAME] {
        return Some(segments[..segments.len() - 2].join("/"));
    }

    None
}

fn truncate_at_store(segments: &[&str], marker: usize) -> String {
    let mut end = marker;
    if end > 0 && segments[end - 1] == "node_modules" {
        end -= 1;
    }
    segments[..end].join("/")
}
