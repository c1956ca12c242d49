//! Integration tests for relation lookup and birth-order narrowing

use lineage_foundation::{Modifiers, Relation, RelationStep};
use lineage_storage::Forest;

use crate::fixture::{family, named, names};

fn kin(forest: &Forest, name: &str, relation: Relation, modifiers: Modifiers) -> Vec<String> {
    let id = forest.lookup(name).unwrap();
    let found = forest
        .kin(id, &RelationStep::new(relation, modifiers))
        .unwrap();
    named(forest, &found)
}

fn plain(forest: &Forest, name: &str, relation: Relation) -> Vec<String> {
    kin(forest, name, relation, Modifiers::NONE)
}

// =============================================================================
// Relations
// =============================================================================

#[test]
fn parent_and_child() {
    let forest = family();
    assert_eq!(plain(&forest, "Bob", Relation::Parent), vec!["Alice"]);
    assert_eq!(plain(&forest, "Bob", Relation::Child), vec!["Dan", "Eve"]);
    assert!(plain(&forest, "Kit", Relation::Child).is_empty());
}

#[test]
fn founders_have_no_parent_or_siblings() {
    let mut forest = family();
    forest.register("", &names(&["Zoe"]), &[1860]).unwrap();
    assert!(plain(&forest, "Gus", Relation::Parent).is_empty());
    assert!(plain(&forest, "Gus", Relation::Sibling).is_empty());
    assert!(plain(&forest, "Gus", Relation::Ancestor).is_empty());
}

#[test]
fn siblings_exclude_self() {
    let forest = family();
    assert_eq!(plain(&forest, "Carol", Relation::Sibling), vec!["Bob", "Ida"]);
    assert!(plain(&forest, "Fay", Relation::Sibling).is_empty());
}

#[test]
fn grandparents() {
    let forest = family();
    assert_eq!(plain(&forest, "Dan", Relation::Grandparent), vec!["Alice"]);
    assert_eq!(
        kin(&forest, "Dan", Relation::Grandparent, Modifiers::GREAT),
        vec!["Gus"]
    );
    assert!(plain(&forest, "Alice", Relation::Grandparent).is_empty());
}

#[test]
fn aunts_and_uncles() {
    let forest = family();
    assert_eq!(
        plain(&forest, "Dan", Relation::AuntOrUncle),
        vec!["Carol", "Ida"]
    );
    assert_eq!(
        kin(&forest, "Dan", Relation::AuntOrUncle, Modifiers::GREAT),
        vec!["Jon"]
    );
    assert!(plain(&forest, "Alice", Relation::AuntOrUncle).is_empty());
}

#[test]
fn cousins_are_every_descendant_of_aunts_and_uncles() {
    let forest = family();
    assert_eq!(plain(&forest, "Dan", Relation::Cousin), vec!["Fay", "Jay", "Kit"]);
    assert_eq!(
        plain(&forest, "Kim", Relation::Cousin),
        vec!["Bob", "Dan", "Eve", "Carol", "Fay", "Ida", "Jay", "Kit"]
    );
}

#[test]
fn grandchildren_skip_a_generation() {
    let forest = family();
    assert_eq!(
        plain(&forest, "Alice", Relation::Grandchild),
        vec!["Dan", "Eve", "Fay", "Jay", "Kit"]
    );
    assert_eq!(
        plain(&forest, "Gus", Relation::Grandchild),
        vec!["Bob", "Carol", "Ida", "Kim"]
    );
}

#[test]
fn ancestors_nearest_first() {
    let forest = family();
    assert_eq!(
        plain(&forest, "Jay", Relation::Ancestor),
        vec!["Ida", "Alice", "Gus"]
    );
}

#[test]
fn descendants_depth_first() {
    let forest = family();
    assert_eq!(
        plain(&forest, "Alice", Relation::Descendant),
        vec!["Bob", "Dan", "Eve", "Carol", "Fay", "Ida", "Jay", "Kit"]
    );
}

#[test]
fn nieces_and_nephews_are_unresolved() {
    let forest = family();
    assert!(plain(&forest, "Bob", Relation::NieceOrNephew).is_empty());
}

#[test]
fn relatives_span_the_whole_family() {
    let forest = family();
    let found = plain(&forest, "Kim", Relation::Relative);
    assert_eq!(found.len(), forest.len() - 1);
    assert!(!found.contains(&"Kim".to_string()));
    assert_eq!(found[0], "Gus");
}

#[test]
fn identity_is_the_pivot() {
    let forest = family();
    assert_eq!(plain(&forest, "Eve", Relation::Identity), vec!["Eve"]);
}

// =============================================================================
// Narrowing
// =============================================================================

#[test]
fn oldest_and_youngest_collapse() {
    let forest = family();
    assert_eq!(
        kin(&forest, "Alice", Relation::Child, Modifiers::OLDEST),
        vec!["Bob"]
    );
    assert_eq!(
        kin(&forest, "Alice", Relation::Child, Modifiers::YOUNGEST),
        vec!["Ida"]
    );
    assert!(kin(&forest, "Kit", Relation::Child, Modifiers::YOUNGEST).is_empty());
}

#[test]
fn oldest_keeps_the_smallest_birth_value() {
    let forest = family();
    let alice = forest.lookup("Alice").unwrap();
    let children = forest
        .kin(alice, &RelationStep::new(Relation::Child, Modifiers::NONE))
        .unwrap();
    let births: Vec<i32> = children
        .iter()
        .map(|&id| forest.person(id).unwrap().born())
        .collect();

    let pick = |modifiers| {
        let found = forest
            .kin(alice, &RelationStep::new(Relation::Child, modifiers))
            .unwrap();
        assert_eq!(found.len(), 1);
        forest.person(found[0]).unwrap().born()
    };
    assert_eq!(Some(pick(Modifiers::OLDEST)), births.iter().copied().min());
    assert_eq!(Some(pick(Modifiers::YOUNGEST)), births.iter().copied().max());
}

#[test]
fn older_and_younger_compare_with_the_pivot() {
    let forest = family();
    assert_eq!(
        kin(&forest, "Carol", Relation::Sibling, Modifiers::OLDER),
        vec!["Bob"]
    );
    assert_eq!(
        kin(&forest, "Carol", Relation::Sibling, Modifiers::YOUNGER),
        vec!["Ida"]
    );
    assert!(kin(&forest, "Bob", Relation::Sibling, Modifiers::OLDER).is_empty());
}

#[test]
fn narrowing_happens_before_collapsing() {
    let forest = family();
    let mods = Modifiers::YOUNGER | Modifiers::OLDEST;
    // Dan is the pivot: younger cousins are all of them, the oldest is Fay.
    assert_eq!(kin(&forest, "Dan", Relation::Cousin, mods), vec!["Fay"]);
}

#[test]
fn modifiers_without_records_do_not_filter() {
    let forest = family();
    assert_eq!(
        kin(&forest, "Alice", Relation::Child, Modifiers::LIVING | Modifiers::COMMON),
        vec!["Bob", "Carol", "Ida"]
    );
}
