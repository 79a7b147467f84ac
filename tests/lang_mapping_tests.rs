use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, HashSet};

use code_exporter::core::{extensions_for, language_choices};

fn mapping() -> BTreeMap<String, Vec<String>> {
    let mut m = BTreeMap::new();
    m.insert(
        "Python".to_string(),
        vec!["py".to_string()],
    );
    m.insert(
        "TypeScript".to_string(),
        vec!["ts".to_string(), "tsx".to_string()],
    );
    m.insert(
        "JavaScript".to_string(),
        vec!["js".to_string(), "jsx".to_string()],
    );
    m
}

#[test]
fn language_is_preselected_when_any_extension_is_active() {
    let current: HashSet<String> = ["tsx".to_string()].into_iter().collect();
    let choices = language_choices(&mapping(), &current);

    let by_name: Vec<(&str, bool)> = choices
        .iter()
        .map(|c| (c.name.as_str(), c.selected))
        .collect();
    assert_eq!(
        by_name,
        vec![("JavaScript", false), ("Python", false), ("TypeScript", true)]
    );
}

#[test]
fn extensions_for_unions_sorts_and_joins() {
    let got = extensions_for(
        &mapping(),
        &["TypeScript".to_string(), "Python".to_string()],
    );
    assert_eq!(got, "py,ts,tsx");
}

#[test]
fn unknown_language_names_are_ignored() {
    let got = extensions_for(&mapping(), &["Cobol".to_string()]);
    assert_eq!(got, "");
}
