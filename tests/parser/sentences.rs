//! Integration tests for whole-sentence parsing
//!
//! Each test feeds a full line through tokenizer, classifier, grammar and
//! normalizer, and checks the resulting pipeline.

use lineage_foundation::{Command, ErrorCategory, ErrorKind, Modifiers, Relation, RelationStep};
use lineage_parser::{Query, QueryParser, Vocabulary};
use proptest::prelude::*;

fn parse(line: &str) -> Query {
    QueryParser::default().parse(line).unwrap()
}

fn step(relation: Relation, modifiers: Modifiers) -> RelationStep {
    RelationStep::new(relation, modifiers)
}

fn anchor(name: &str) -> RelationStep {
    RelationStep::anchor(name)
}

// =============================================================================
// Reads
// =============================================================================

#[test]
fn object_clause_follows_the_subject() {
    let query = parse("who are the children of Bob's youngest sibling?");
    assert_eq!(query.command, Command::Query);
    assert_eq!(
        query.steps,
        vec![
            anchor("Bob"),
            step(Relation::Sibling, Modifiers::YOUNGEST),
            step(Relation::Child, Modifiers::NONE),
        ]
    );
    assert!(query.is_valid());
}

#[test]
fn possessive_chain() {
    let query = parse("who is Bob's eldest sister's youngest child");
    assert_eq!(
        query.steps,
        vec![
            anchor("Bob"),
            step(Relation::Sibling, Modifiers::OLDEST),
            step(Relation::Child, Modifiers::YOUNGEST),
        ]
    );
}

#[test]
fn great_composes_with_relations() {
    let query = parse("who are Fay's great aunts");
    assert_eq!(
        query.steps,
        vec![anchor("Fay"), step(Relation::AuntOrUncle, Modifiers::GREAT)]
    );
}

#[test]
fn sentence_without_command_prints() {
    let query = parse("Alice's grandchildren");
    assert_eq!(query.command, Command::Print);
    assert_eq!(
        query.steps,
        vec![anchor("Alice"), step(Relation::Grandchild, Modifiers::NONE)]
    );
}

#[test]
fn count_ignores_filler() {
    let query = parse("how many are Alice's grandchildren?");
    assert_eq!(query.command, Command::Count);
    assert_eq!(query.subject(), Some("Alice"));
    assert_eq!(query.steps.len(), 2);
}

#[test]
fn test_keeps_comparison_names() {
    let query = parse("is Kit Alice's grandchild");
    assert_eq!(query.command, Command::Test);
    assert_eq!(query.subject(), Some("Alice"));
    assert_eq!(query.names, vec!["Kit"]);
    assert!(query.is_valid());
}

#[test]
fn stats_and_clear_take_no_operands() {
    assert_eq!(parse("what").command, Command::Stats);
    let clear = parse("clear");
    assert_eq!(clear.command, Command::Clear);
    assert!(clear.steps.is_empty());
    assert!(clear.is_valid());
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn start_and_new_register_a_founder() {
    for line in ["start Alice 1900", "new Alice 1900", "started Alice 1900"] {
        let query = parse(line);
        assert_eq!(query.command, Command::New, "{line}");
        assert_eq!(query.steps, vec![RelationStep::identity()]);
        assert_eq!(query.names, vec!["Alice"]);
        assert_eq!(query.dates, vec![1900]);
    }
}

#[test]
fn start_with_several_founders() {
    let query = parse("start Alice 1900, Zoe 1910");
    assert_eq!(query.names, vec!["Alice", "Zoe"]);
    assert_eq!(query.dates, vec![1900, 1910]);
    assert!(query.is_valid());
}

#[test]
fn births_after_a_relation_phrase() {
    let query = parse("beget Bob's children Dan 1945, Eve 1948");
    assert_eq!(query.command, Command::Add);
    assert_eq!(query.subject(), Some("Bob"));
    assert_eq!(query.names, vec!["Dan", "Eve"]);
    assert_eq!(query.dates, vec![1945, 1948]);
    assert!(query.is_valid());
}

#[test]
fn births_after_the_parent() {
    let query = parse("Alice had Bob 1920, Carol 1922");
    assert_eq!(query.command, Command::Add);
    assert_eq!(query.steps, vec![anchor("Alice")]);
    assert_eq!(query.names, vec!["Bob", "Carol"]);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn rejected_word_is_dropped() {
    let query = parse("youngest Alice");
    assert_eq!(query.steps, vec![anchor("Alice")]);
    assert_eq!(query.diagnostics.len(), 1);
    let error = &query.diagnostics[0];
    assert_eq!(
        error.kind,
        ErrorKind::UnexpectedToken {
            word: "youngest".into(),
            found: "modifier",
        }
    );
    assert_eq!(error.context.as_ref().and_then(|c| c.word), Some(0));
}

#[test]
fn projective_after_a_name() {
    let query = parse("who is Bob's child of Alice");
    assert!(
        query
            .diagnostics
            .iter()
            .any(|e| e.kind == ErrorKind::MisplacedProjective)
    );
}

#[test]
fn two_bare_names_before_a_command() {
    let query = parse("Bob Carol had Dan 1950");
    assert_eq!(query.command, Command::Add);
    assert!(
        query
            .diagnostics
            .iter()
            .any(|e| matches!(e.kind, ErrorKind::AmbiguousSubject(ref names) if names.len() == 2))
    );
}

#[test]
fn malformed_date() {
    let query = parse("Alice had Bob 19x0");
    let kinds: Vec<_> = query.diagnostics.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::InvalidDate("19x0".into()),
            ErrorKind::DateMismatch { names: 1, dates: 0 },
        ]
    );
}

#[test]
fn founder_is_required() {
    let query = parse("start");
    assert!(
        query
            .diagnostics
            .iter()
            .any(|e| e.category() == ErrorCategory::NoSubject)
    );
}

// =============================================================================
// Parser Reuse
// =============================================================================

#[test]
fn custom_vocabulary() {
    let mut vocab = Vocabulary::standard();
    vocab.register_relation("offspring", Relation::Descendant);
    let mut parser = QueryParser::new(vocab);
    let query = parser.parse("who are Alice's offspring").unwrap();
    assert_eq!(
        query.steps,
        vec![anchor("Alice"), step(Relation::Descendant, Modifiers::NONE)]
    );
}

#[test]
fn word_at_a_time_matches_whole_line() {
    let mut parser = QueryParser::default();
    for word in ["who", "are", "Alice", "s", "children"] {
        parser.feed(word);
    }
    let fed = parser.finish();
    assert_eq!(fed, parse("who are Alice's children"));
}

#[test]
fn dump_names_the_command() {
    let dump = parse("who are Alice's children").to_string();
    assert!(dump.starts_with("command:     QUERY"));
    assert!(dump.contains("Alice"));
}

// =============================================================================
// Properties
// =============================================================================

fn sentence() -> impl Strategy<Value = Vec<String>> {
    let word = prop::sample::select(vec![
        "who", "are", "had", "start", "is", "how", "print", "of", "s", "the", "youngest",
        "great", "older", "child", "sibling", "cousins", "aunt", "Alice", "Bob", "Carol",
        "1900", "1920", "19x0",
    ]);
    prop::collection::vec(word.prop_map(String::from), 0..12)
}

proptest! {
    #[test]
    fn births_always_pair_up_or_complain(words in sentence()) {
        let query = QueryParser::default().parse_words(&words);
        if query.command != Command::Test {
            prop_assert!(query.names.len() == query.dates.len() || !query.is_valid());
        }
    }

    #[test]
    fn births_never_stay_in_the_pipeline(words in sentence()) {
        let query = QueryParser::default().parse_words(&words);
        if matches!(query.command, Command::Add | Command::New) {
            for step in query.steps.iter().skip(1) {
                prop_assert!(step.anchor_name().is_none());
            }
        }
    }
}
