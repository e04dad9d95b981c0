//! Zombie - raise errors from the dead as new error kinds.
//!
//! This library maps "an error of kind A escaped" to "raise an error of kind B
//! instead", including:
//! - Error kinds with an explicit parent hierarchy
//! - Ordered transformation rules, first match wins
//! - Replacement messages: original, literal, or templated
//! - Chaining the replacement to the original, or deliberately severing it
//! - Scope adapters for blocks and functions, and TOML rule files
//!
//! # Example
//!
//! ```
//! use zombie::{Exception, Kind, Reraise, Rule};
//!
//! let error = Kind::root("Error");
//! let key = error.subkind("KeyError");
//! let value = error.subkind("ValueError");
//!
//! let reraise = Reraise::new(vec![
//!     Rule::new(&key, &value)
//!         .with_template("Error: ${original_error_message}")
//!         .chained(),
//! ]);
//!
//! let lookup = reraise.wrap(|name: &str| -> Result<u32, Exception> {
//!     Err(Exception::new(&key, format!("no entry for {name}")))
//! });
//!
//! let raised = lookup("answer").unwrap_err().into_exception().unwrap();
//! assert_eq!(raised.kind(), &value);
//! assert_eq!(raised.message(), "Error: no entry for answer");
//! assert_eq!(raised.explicit_cause().unwrap().kind(), &key);
//! ```

pub mod config;
pub mod error;
pub mod exception;
pub mod kind;
pub mod logging;
pub mod reraise;
pub mod rules;

pub use error::{Result, ZombieError};
pub use exception::{Cause, Exception};
pub use kind::{Kind, KindRegistry};
pub use reraise::{Reraise, ReraiseExt, reraise};
pub use rules::{Message, Rule, Template};
