//! Shared family fixture.

use lineage_storage::Forest;

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Gus ─┬─ Alice ─┬─ Bob ─── Dan, Eve
///      │         ├─ Carol ─ Fay
///      │         └─ Ida ─── Jay, Kit
///      └─ Jon ───── Kim
pub fn family() -> Forest {
    let mut forest = Forest::new();
    let births: [(&str, &[&str], &[i32]); 7] = [
        ("", &["Gus"], &[1850]),
        ("Gus", &["Alice", "Jon"], &[1900, 1905]),
        ("Alice", &["Bob", "Carol", "Ida"], &[1920, 1922, 1925]),
        ("Bob", &["Dan", "Eve"], &[1945, 1948]),
        ("Carol", &["Fay"], &[1950]),
        ("Ida", &["Jay", "Kit"], &[1951, 1953]),
        ("Jon", &["Kim"], &[1930]),
    ];
    for (parent, children, dates) in births {
        forest.register(parent, &names(children), dates).unwrap();
    }
    forest
}

/// Names of the people behind `ids`.
pub fn named(forest: &Forest, ids: &[lineage_foundation::PersonId]) -> Vec<String> {
    ids.iter()
        .map(|&id| forest.name_of(id).unwrap().to_string())
        .collect()
}
