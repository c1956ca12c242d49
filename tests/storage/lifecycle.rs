//! Integration tests for clearing, snapshots, pedigrees, and statistics

use lineage_storage::{Forest, ForestStats};

use crate::fixture::{family, names};

#[test]
fn clear_removes_everyone() {
    let mut forest = family();
    let removed = forest.clear();
    assert_eq!(removed, 12);
    assert!(forest.is_empty());
    assert_eq!(forest.names().count(), 0);
    assert!(forest.lookup("").is_some());
}

#[test]
fn handles_go_stale_after_clear() {
    let mut forest = family();
    let bob = forest.lookup("Bob").unwrap();
    forest.clear();
    forest.register("", &names(&["Bob"]), &[1920]).unwrap();

    assert!(forest.person(bob).is_err());
    let reborn = forest.lookup("Bob").unwrap();
    assert_ne!(reborn, bob);
}

#[test]
fn clear_then_rebuild() {
    let mut forest = family();
    forest.clear();
    forest.register("", &names(&["Zoe"]), &[1950]).unwrap();
    forest.register("Zoe", &names(&["Ann"]), &[1975]).unwrap();
    assert_eq!(forest.len(), 2);
    assert!(!forest.contains("Alice"));
}

#[test]
fn snapshots_do_not_see_later_changes() {
    let mut forest = family();
    let snapshot = forest.clone();
    forest.clear();

    assert!(forest.is_empty());
    assert_eq!(snapshot.len(), 12);
    assert!(snapshot.contains("Kit"));
}

#[test]
fn pedigree_lists_descendants_with_depth() {
    let forest = family();
    let carol = forest.lookup("Carol").unwrap();
    let listed: Vec<_> = forest
        .pedigree(carol)
        .unwrap()
        .into_iter()
        .map(|entry| (entry.depth, entry.name, entry.born))
        .collect();
    assert_eq!(
        listed,
        vec![(0, "Carol".to_string(), 1922), (1, "Fay".to_string(), 1950)]
    );
}

#[test]
fn pedigree_is_depth_first() {
    let forest = family();
    let alice = forest.lookup("Alice").unwrap();
    let order: Vec<_> = forest
        .pedigree(alice)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(
        order,
        vec!["Alice", "Bob", "Dan", "Eve", "Carol", "Fay", "Ida", "Jay", "Kit"]
    );
}

#[test]
fn stats_count_families_and_generations() {
    let mut forest = family();
    assert_eq!(
        forest.stats(),
        ForestStats {
            people: 12,
            families: 1,
            generations: 4,
        }
    );

    forest.register("", &names(&["Zoe"]), &[1860]).unwrap();
    assert_eq!(forest.stats().families, 2);
    assert_eq!(Forest::new().stats(), ForestStats::default());
}
