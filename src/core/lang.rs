use std::collections::{BTreeMap, BTreeSet, HashSet};

/* ============================ Language selection =========================== */

/// One row of the language selector dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub name: String,
    pub extensions: Vec<String>,
    pub selected: bool,
}

/// Builds the selector rows from the configured mapping. A language starts
/// checked when any of its extensions is already in the current extension
/// set.
#[must_use]
pub fn language_choices(
    mapping: &BTreeMap<String, Vec<String>>,
    current_exts: &HashSet<String>,
) -> Vec<LanguageChoice> {
    mapping
        .iter()
        .map(|(name, exts)| LanguageChoice {
            name: name.clone(),
            extensions: exts.clone(),
            selected: exts.iter().any(|e| current_exts.contains(e)),
        })
        .collect()
}

/// Union of the selected languages' extensions, sorted and comma-joined.
/// This replaces the extension field wholesale when the dialog is applied.
#[must_use]
pub fn extensions_for(mapping: &BTreeMap<String, Vec<String>>, selected: &[String]) -> String {
    let mut exts: BTreeSet<String> = BTreeSet::new();
    for name in selected {
        if let Some(xs) = mapping.get(name) {
            exts.extend(xs.iter().cloned());
        }
    }
    exts.into_iter().collect::<Vec<_>>().join(",")
}
