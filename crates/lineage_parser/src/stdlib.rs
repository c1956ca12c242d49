//! Standard English kinship vocabulary.
//!
//! Relation words are listed in singular form; the vocabulary strips a
//! trailing plural `s` before lookup, so "cousins" and "siblings" need no
//! entries of their own.

use lineage_foundation::{Command, Modifiers, Relation};

/// Standard relation words.
pub const RELATIONS: &[(&str, Relation)] = &[
    // Parents
    ("parent", Relation::Parent),
    ("mother", Relation::Parent),
    ("father", Relation::Parent),
    // Children
    ("child", Relation::Child),
    ("children", Relation::Child),
    ("kid", Relation::Child),
    ("son", Relation::Child),
    ("daughter", Relation::Child),
    // Siblings
    ("sibling", Relation::Sibling),
    ("brother", Relation::Sibling),
    ("sister", Relation::Sibling),
    // Parents' siblings
    ("aunt", Relation::AuntOrUncle),
    ("uncle", Relation::AuntOrUncle),
    // Two generations apart
    ("grandparent", Relation::Grandparent),
    ("grandmother", Relation::Grandparent),
    ("grandfather", Relation::Grandparent),
    ("grandchild", Relation::Grandchild),
    ("grandchildren", Relation::Grandchild),
    ("grandson", Relation::Grandchild),
    ("granddaughter", Relation::Grandchild),
    // Collateral
    ("cousin", Relation::Cousin),
    ("niece", Relation::NieceOrNephew),
    ("nephew", Relation::NieceOrNephew),
    // Lines
    ("descendent", Relation::Descendant),
    ("descendant", Relation::Descendant),
    ("ancestor", Relation::Ancestor),
    ("relative", Relation::Relative),
];

/// Standard modifier words.
pub const MODIFIERS: &[(&str, Modifiers)] = &[
    ("youngest", Modifiers::YOUNGEST),
    ("eldest", Modifiers::OLDEST),
    ("oldest", Modifiers::OLDEST),
    ("younger", Modifiers::YOUNGER),
    ("elder", Modifiers::OLDER),
    ("older", Modifiers::OLDER),
    ("great", Modifiers::GREAT),
    ("common", Modifiers::COMMON),
    ("living", Modifiers::LIVING),
    ("dead", Modifiers::DEAD),
];

/// Standard command words.
pub const COMMANDS: &[(&str, Command)] = &[
    // Births
    ("beget", Command::Add),
    ("had", Command::Add),
    ("birthed", Command::Add),
    // New family
    ("start", Command::New),
    ("started", Command::New),
    ("new", Command::New),
    // Reads
    ("print", Command::Print),
    ("tell", Command::Print),
    ("who", Command::Query),
    ("how", Command::Count),
    ("what", Command::Stats),
    ("is", Command::Test),
    ("are", Command::Test),
    // Reset
    ("clear", Command::Clear),
];
