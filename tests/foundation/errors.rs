//! Integration tests for Error types
//!
//! Tests error construction, display, context, and categories.

use lineage_foundation::{Error, ErrorCategory, ErrorContext, ErrorKind, PersonId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unexpected_token() {
    let err = Error::unexpected_token("youngest", "modifier");
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
    assert_eq!(format!("{err}"), "unexpected modifier 'youngest'");
}

#[test]
fn error_no_subject() {
    let err = Error::no_subject("Zed");
    assert_eq!(err.kind, ErrorKind::NoSubject("Zed".into()));
    assert!(format!("{err}").contains("Zed"));
}

#[test]
fn error_date_mismatch() {
    let err = Error::date_mismatch(3, 1);
    let msg = format!("{err}");
    assert!(msg.contains("3 names"));
    assert!(msg.contains("1 dates"));
}

#[test]
fn error_stale_person() {
    let id = PersonId::new(5, 2);
    let err = Error::stale_person(id);
    assert!(matches!(err.kind, ErrorKind::StalePerson(_)));
    assert!(format!("{err}").contains('5'));
}

#[test]
fn error_ambiguous_subject_lists_names() {
    let err = Error::new(ErrorKind::AmbiguousSubject(vec!["Bob".into(), "Carol".into()]));
    assert_eq!(format!("{err}"), "ambiguous subject: Bob, Carol");
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn grammar_errors_share_a_category() {
    let grammar = [
        Error::unexpected_token("of", "projective"),
        Error::new(ErrorKind::InvalidDate("19x0".into())),
        Error::new(ErrorKind::AmbiguousSubject(vec![])),
        Error::new(ErrorKind::MisplacedProjective),
    ];
    for err in grammar {
        assert_eq!(err.category(), ErrorCategory::Grammar, "{err}");
    }
}

#[test]
fn user_facing_categories() {
    assert_eq!(Error::no_subject("").category(), ErrorCategory::NoSubject);
    assert_eq!(
        Error::date_mismatch(1, 0).category(),
        ErrorCategory::DateMismatch
    );
    assert_eq!(
        Error::new(ErrorKind::NoObjects).category(),
        ErrorCategory::NoObjects
    );
    assert_eq!(
        Error::person_not_found(PersonId::new(1, 0)).category(),
        ErrorCategory::Internal
    );
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new().with_line(4).with_word(2);
    assert_eq!(ctx.to_string(), "at line 4, word 2");
    assert_eq!(ErrorContext::new().with_word(0).to_string(), "at word 0");
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn at_line_keeps_word_position() {
    let err = Error::unexpected_token("Bob", "name")
        .with_context(ErrorContext::new().with_word(3))
        .at_line(9);
    let ctx = err.context.unwrap();
    assert_eq!(ctx.line, Some(9));
    assert_eq!(ctx.word, Some(3));
}

#[test]
fn at_line_without_context() {
    let err = Error::no_subject("Zed").at_line(2);
    assert_eq!(err.context, Some(ErrorContext::new().with_line(2)));
}
