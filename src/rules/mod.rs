//! Rule matching and exception transformation for zombie.
//!
//! This module handles:
//! - Transformation rules and their message templates
//! - First-match rule selection by kind hierarchy
//! - Building replacement exceptions and raising them with or without a cause

pub mod builder;
pub mod matcher;
pub mod raiser;
pub mod rule;
pub mod template;

pub use builder::{build, resolve_message};
pub use matcher::{Shadowing, find_match, shadowed_rules};
pub use raiser::{raise, raise_transformed};
pub use rule::{Message, Rule};
pub use template::{ORIGINAL_ERROR_MESSAGE, Template, TemplateError};
