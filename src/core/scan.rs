use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::{Path, PathBuf},
};

/* =========================== Filesystem & paths ============================ */

#[must_use]
pub fn path_to_unix(p: &Path) -> String {
    let mut s = String::new();
    for (i, comp) in p.iter().enumerate() {
        if i > 0 {
            s.push('/');
        }
        s.push_str(&comp.to_string_lossy());
    }
    s
}

/// Comma-separated filter text -> lowercased token set.
///
/// Shared by the extension field and the ignore field; empty tokens are
/// dropped, so `"py, ,ts"` and `"py,ts"` parse the same.
#[must_use]
pub fn parse_filter_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|tok| tok.trim().to_lowercase())
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Text after the last dot, lowercased; empty string for extensionless
/// files (including dotfiles like `.gitignore`).
fn ext_lower(p: &Path) -> String {
    p.extension()
        .map(|os| os.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/* ================================ Scanner ================================== */

/// Recursively enumerates files under `root` that pass both filters, as
/// forward-slash paths relative to `root`, sorted ascending.
///
/// A file survives when its relative path, lowercased, contains none of
/// `ignore_patterns` as a substring (matching anywhere in the path, not just
/// at segment boundaries) and its last-dot extension is a member of
/// `include_exts`. An empty `include_exts` yields an empty result; there is
/// no implicit match-everything mode.
///
/// Symlinked directories are followed with no cycle detection; a symlink
/// loop will not terminate. Known limitation.
#[must_use]
pub fn scan_root(
    root: &Path,
    include_exts: &HashSet<String>,
    ignore_patterns: &HashSet<String>,
) -> Vec<String> {
    if include_exts.is_empty() {
        return Vec::new();
    }

    let exts: HashSet<String> = include_exts.iter().map(|e| e.to_lowercase()).collect();
    let patterns: Vec<String> = ignore_patterns.iter().map(|p| p.to_lowercase()).collect();

    let mut out = Vec::new();
    walk(root, "", &exts, &patterns, &mut out);
    out.sort();
    out
}

fn walk(
    dir: &Path,
    rel_prefix: &str,
    exts: &HashSet<String>,
    patterns: &[String],
    out: &mut Vec<String>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            log::warn!("skipping unreadable directory {}: {err}", dir.display());
            return;
        }
    };

    for ent in entries.flatten() {
        let name = ent.file_name().to_string_lossy().into_owned();
        let rel = if rel_prefix.is_empty() {
            name
        } else {
            format!("{rel_prefix}/{name}")
        };
        let rel_lower = rel.to_lowercase();
        let path = ent.path();

        if path.is_dir() {
            // Every descendant path starts with this prefix, so pruning a
            // matching directory cannot change any per-file verdict.
            if patterns.iter().any(|p| rel_lower.contains(p.as_str())) {
                continue;
            }
            walk(&path, &rel, exts, patterns, out);
            continue;
        }

        if !path.is_file() {
            continue;
        }
        if patterns.iter().any(|p| rel_lower.contains(p.as_str())) {
            continue;
        }
        if exts.contains(&ext_lower(&path)) {
            out.push(rel);
        }
    }
}

/* =========================== Gitignore bootstrap =========================== */

/// Non-empty, non-`#` lines of `<root>/.gitignore`, verbatim.
///
/// Lines are consumed as literal substrings; no glob interpretation.
#[must_use]
pub fn gitignore_patterns(root: &Path) -> Vec<String> {
    let Ok(bytes) = fs::read(root.join(".gitignore")) else {
        return Vec::new();
    };
    String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Unions `extra` into the comma-joined ignore text. Additive only: every
/// pattern already in `current` survives. The result is sorted and
/// deduplicated.
#[must_use]
pub fn merge_ignore_text(current: &str, extra: &[String]) -> String {
    let mut set: BTreeSet<String> = current
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    set.extend(extra.iter().cloned());
    set.into_iter().collect::<Vec<_>>().join(",")
}

/// First candidate that is an existing directory, canonicalized.
///
/// Drop events and the root-path field can both deliver several paths; only
/// the first valid directory becomes the new scan root.
#[must_use]
pub fn first_directory(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|p| p.is_dir())
        .map(|p| dunce::canonicalize(p).unwrap_or_else(|_| p.clone()))
}
