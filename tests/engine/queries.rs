//! Integration tests for read commands

use lineage_engine::{Payload, ResultCode};
use lineage_foundation::ErrorKind;

use crate::fixture::{ask, family, names};

// =============================================================================
// Query
// =============================================================================

#[test]
fn children_in_birth_order() {
    let mut interp = family();
    assert_eq!(
        names(&mut interp, "who are Alice's children"),
        vec!["Bob", "Carol", "Ida"]
    );
}

#[test]
fn cousins_across_two_branches() {
    let mut interp = family();
    assert_eq!(
        names(&mut interp, "who are Dan's cousins?"),
        vec!["Fay", "Jay", "Kit"]
    );
}

#[test]
fn object_clause() {
    let mut interp = family();
    assert_eq!(
        names(&mut interp, "who are the children of Bob's youngest sibling"),
        vec!["Jay", "Kit"]
    );
}

#[test]
fn great_relations() {
    let mut interp = family();
    assert_eq!(names(&mut interp, "who is Dan's great grandfather"), vec!["Gus"]);
    assert_eq!(names(&mut interp, "who are Fay's great uncles"), vec!["Jon"]);
}

#[test]
fn birth_order_modifiers() {
    let mut interp = family();
    assert_eq!(names(&mut interp, "who is Eve's older brother"), vec!["Dan"]);
    assert_eq!(
        names(&mut interp, "who is Alice's eldest grandchild"),
        vec!["Dan"]
    );
    assert_eq!(
        names(&mut interp, "who are Bob's younger siblings"),
        vec!["Carol", "Ida"]
    );
}

#[test]
fn ancestors_stop_below_the_root() {
    let mut interp = family();
    assert_eq!(
        names(&mut interp, "who are Kit's ancestors"),
        vec!["Ida", "Alice", "Gus"]
    );
}

#[test]
fn lonely_child_has_no_siblings() {
    let mut interp = family();
    let response = ask(&mut interp, "who is Fay's sibling");
    assert_eq!(response.code, ResultCode::NoResults);
    assert!(response.diagnostics.is_empty());
}

#[test]
fn unknown_person() {
    let mut interp = family();
    let response = ask(&mut interp, "who are Zed's children");
    assert_eq!(response.code, ResultCode::BadQuery);
    assert_eq!(response.diagnostics[0].kind, ErrorKind::NoSubject("Zed".into()));
    assert_eq!(response.payload, Payload::None);
}

#[test]
fn grammar_errors_still_answer() {
    let mut interp = family();
    let response = ask(&mut interp, "who are Alice's children 19x0");
    assert_eq!(response.code, ResultCode::BadQuery);
    assert_eq!(
        response.payload,
        Payload::Names(vec!["Bob".into(), "Carol".into(), "Ida".into()])
    );
}

// =============================================================================
// Count, Test, Print, Stats
// =============================================================================

#[test]
fn count() {
    let mut interp = family();
    let response = ask(&mut interp, "how many are Alice's grandchildren");
    assert_eq!(response.payload, Payload::Count(5));

    let none = ask(&mut interp, "how many are Kit's children");
    assert_eq!(none.payload, Payload::Count(0));
    assert_eq!(none.code, ResultCode::NoResults);
}

#[test]
fn test_with_comparison_names() {
    let mut interp = family();
    assert_eq!(
        ask(&mut interp, "is Kit Alice's grandchild").payload,
        Payload::Verdict(true)
    );
    assert_eq!(
        ask(&mut interp, "is Kim Alice's grandchild").payload,
        Payload::Verdict(false)
    );
}

#[test]
fn test_without_comparison_names() {
    let mut interp = family();
    assert_eq!(
        ask(&mut interp, "are Bob's children").payload,
        Payload::Verdict(true)
    );
}

#[test]
fn print_shows_a_pedigree() {
    let mut interp = family();
    let Payload::Pedigree(entries) = ask(&mut interp, "print Ida").payload else {
        panic!("expected a pedigree");
    };
    let listed: Vec<_> = entries
        .iter()
        .map(|entry| (entry.depth, entry.name.as_str(), entry.born))
        .collect();
    assert_eq!(
        listed,
        vec![(0, "Ida", 1925), (1, "Jay", 1951), (1, "Kit", 1953)]
    );
}

#[test]
fn bare_print_shows_every_family() {
    let mut interp = family();
    let Payload::Pedigree(entries) = ask(&mut interp, "print").payload else {
        panic!("expected a pedigree");
    };
    assert_eq!(entries.len(), 12);
    assert_eq!(entries[0].name, "Gus");
    assert_eq!(entries[0].depth, 0);
}

#[test]
fn stats() {
    let mut interp = family();
    let Payload::Stats(stats) = ask(&mut interp, "what").payload else {
        panic!("expected stats");
    };
    assert_eq!(stats.people, 12);
    assert_eq!(stats.families, 1);
    assert_eq!(stats.generations, 4);
}
