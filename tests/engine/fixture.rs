//! The scripted Gus family, loaded through the interpreter.

use lineage_engine::{Interpreter, Response};

pub const FAMILY: &str = include_str!("../fixtures/family.txt");

pub fn family() -> Interpreter {
    let mut interp = Interpreter::new();
    for line in FAMILY.lines() {
        if let Some(response) = interp.evaluate(line) {
            assert!(response.is_ok(), "fixture line failed: {line}");
        }
    }
    interp
}

pub fn ask(interp: &mut Interpreter, line: &str) -> Response {
    interp.evaluate(line).unwrap()
}

pub fn names(interp: &mut Interpreter, line: &str) -> Vec<String> {
    ask(interp, line).names().unwrap_or_default().to_vec()
}
