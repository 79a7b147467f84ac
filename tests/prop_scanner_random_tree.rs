use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use code_exporter::core::scan_root;

/// ===== Generators =====
/// Directory names carry a `d` prefix and file bases an `f` prefix so a
/// generated file can never collide with a generated directory on disk.
fn dirseg() -> impl Strategy<Value = String> {
    "d[A-Za-z0-9_\\-]{1,7}".prop_map(|s| s)
}

fn seg() -> impl Strategy<Value = String> {
    "f[A-Za-z0-9_\\-]{1,7}".prop_map(|s| s)
}

fn extseg() -> impl Strategy<Value = String> {
    "[a-z]{1,3}".prop_map(|s| s)
}

#[derive(Clone, Debug)]
struct FileSpec {
    dirs: Vec<String>,
    fname: String,
}

fn filename() -> impl Strategy<Value = String> {
    prop_oneof![
        seg(), // extensionless
        (seg(), extseg()).prop_map(|(base, e)| format!("{base}.{e}")),
        (seg(), extseg(), extseg()).prop_map(|(base, e1, e2)| format!("{base}.{e1}.{e2}")),
    ]
}

fn file_spec() -> impl Strategy<Value = FileSpec> {
    (prop::collection::vec(dirseg(), 0..=2), filename())
        .prop_map(|(dirs, fname)| FileSpec { dirs, fname })
}

/// ===== Helpers =====
fn make_on_disk(root: &Path, files: &[FileSpec]) -> BTreeSet<String> {
    let mut created = BTreeSet::new();
    for f in files {
        let mut p = root.to_path_buf();
        for d in &f.dirs {
            p.push(d);
        }
        fs::create_dir_all(&p).unwrap();
        p.push(&f.fname);
        fs::write(&p, "x").unwrap();

        let mut rel = f.dirs.join("/");
        if !rel.is_empty() {
            rel.push('/');
        }
        rel.push_str(&f.fname);
        created.insert(rel);
    }
    created
}

fn last_ext_lower(fname: &str) -> String {
    Path::new(fname)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Deterministic, data-derived filter sets so runs are reproducible:
/// extensions are a lexicographic half of the present ones, ignore patterns
/// are the even-length directory names (which, being plain substrings, may
/// incidentally match inside file names too — exactly the contract).
fn derive_filters(created: &BTreeSet<String>) -> (HashSet<String>, HashSet<String>) {
    let mut present_exts: BTreeSet<String> = BTreeSet::new();
    let mut dir_names: BTreeSet<String> = BTreeSet::new();
    for rel in created {
        let (dirs, fname) = match rel.rsplit_once('/') {
            Some((d, f)) => (d, f),
            None => ("", rel.as_str()),
        };
        present_exts.insert(last_ext_lower(fname));
        for d in dirs.split('/').filter(|s| !s.is_empty()) {
            dir_names.insert(d.to_string());
        }
    }

    let exts_vec: Vec<_> = present_exts.into_iter().collect();
    let half = exts_vec.len().div_ceil(2);
    let include_exts: HashSet<String> = exts_vec.into_iter().take(half).collect();

    let ignore: HashSet<String> = dir_names
        .into_iter()
        .filter(|d| d.len() % 2 == 0)
        .map(|d| d.to_lowercase())
        .collect();

    (include_exts, ignore)
}

/// Oracle for a single relative path.
fn should_survive(rel: &str, exts: &HashSet<String>, ignore: &HashSet<String>) -> bool {
    let lower = rel.to_lowercase();
    if ignore.iter().any(|p| lower.contains(p.as_str())) {
        return false;
    }
    let fname = rel.rsplit_once('/').map_or(rel, |(_, f)| f);
    exts.contains(&last_ext_lower(fname))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    #[test]
    fn scan_agrees_with_oracle_on_random_trees(
        files in prop::collection::vec(file_spec(), 1..24)
    ) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let created = make_on_disk(root, &files);
        let (exts, ignore) = derive_filters(&created);

        let got = scan_root(root, &exts, &ignore);

        // Sorted, no duplicates.
        let mut sorted = got.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&got, &sorted);

        // Exact agreement with the per-path oracle.
        let expected: Vec<String> = created
            .iter()
            .filter(|rel| should_survive(rel, &exts, &ignore))
            .cloned()
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn scan_never_leaks_an_ignored_path(
        files in prop::collection::vec(file_spec(), 1..24)
    ) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let created = make_on_disk(root, &files);
        let (exts, ignore) = derive_filters(&created);

        for rel in scan_root(root, &exts, &ignore) {
            let lower = rel.to_lowercase();
            prop_assert!(!ignore.iter().any(|p| lower.contains(p.as_str())));
            let fname = rel.rsplit_once('/').map_or(rel.as_str(), |(_, f)| f);
            prop_assert!(exts.contains(&last_ext_lower(fname)));
        }
    }
}
