//! Rule file loading and parsing for zombie.
//!
//! This module handles:
//! - TOML rule file parsing
//! - Kind declaration and registration
//! - Resolving declared rules into a rule book

pub mod parser;
pub mod types;

pub use parser::{load_rule_book, parse_rule_file, parse_rule_str};
pub use types::{KindDecl, RuleBook, RuleDecl, RuleFile};
