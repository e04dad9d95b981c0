//! Scope adapters: apply rules around a block or around a function.
//!
//! Both adapters stay out of the way on success. Rules are only consulted when
//! an error escapes the protected code.

use crate::error::{Result, ZombieError};
use crate::exception::Exception;
use crate::rules::{Rule, raise_transformed};
use std::sync::Arc;

/// An ordered, shareable set of rules applied to protected code.
///
/// Built from a single [`Rule`] or any ordered collection of them.
///
/// ```
/// use zombie::{Exception, Kind, Reraise, Rule};
///
/// let key = Kind::root("KeyError");
/// let value = Kind::root("ValueError");
/// let reraise = Reraise::new(Rule::new(&key, &value).with_message("A KeyError occurred"));
///
/// let result: Result<(), _> = reraise.run(|| Err(Exception::new(&key, "missing")));
/// let raised = result.unwrap_err().into_exception().unwrap();
/// assert_eq!(raised.kind(), &value);
/// assert_eq!(raised.message(), "A KeyError occurred");
/// ```
#[derive(Debug, Clone)]
pub struct Reraise {
	rules: Arc<[Rule]>,
}

impl Reraise {
	pub fn new(rules: impl Into<Reraise>) -> Self {
		rules.into()
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Run `block`, transforming any error that escapes it.
	pub fn run<T, E, F>(&self, block: F) -> Result<T>
	where
		F: FnOnce() -> std::result::Result<T, E>,
		E: Into<Exception>,
	{
		block().map_err(|err| self.handle(err))
	}

	/// Wrap `function` so every call transforms the errors escaping it.
	///
	/// Functions of several arguments take them as a tuple.
	pub fn wrap<A, T, E, F>(&self, function: F) -> impl Fn(A) -> Result<T> + use<A, T, E, F>
	where
		F: Fn(A) -> std::result::Result<T, E>,
		E: Into<Exception>,
	{
		let reraise = self.clone();
		move |args| reraise.run(|| function(args))
	}

	/// Transform an exception that has already escaped protected code.
	pub fn handle(&self, caught: impl Into<Exception>) -> ZombieError {
		raise_transformed(&self.rules, caught.into())
	}
}

impl From<Rule> for Reraise {
	fn from(rule: Rule) -> Self {
		Reraise {
			rules: Arc::from([rule]),
		}
	}
}

impl From<Vec<Rule>> for Reraise {
	fn from(rules: Vec<Rule>) -> Self {
		Reraise {
			rules: Arc::from(rules),
		}
	}
}

impl From<&[Rule]> for Reraise {
	fn from(rules: &[Rule]) -> Self {
		Reraise {
			rules: Arc::from(rules),
		}
	}
}

impl<const N: usize> From<[Rule; N]> for Reraise {
	fn from(rules: [Rule; N]) -> Self {
		Reraise {
			rules: Arc::from(rules),
		}
	}
}

/// Run `block` under `rules`.
pub fn reraise<T, E, F>(rules: impl Into<Reraise>, block: F) -> Result<T>
where
	F: FnOnce() -> std::result::Result<T, E>,
	E: Into<Exception>,
{
	Reraise::new(rules).run(block)
}

/// Apply rules to a `Result` that already carries an exception.
pub trait ReraiseExt<T> {
	fn reraise(self, reraise: &Reraise) -> Result<T>;
}

impl<T, E: Into<Exception>> ReraiseExt<T> for std::result::Result<T, E> {
	fn reraise(self, reraise: &Reraise) -> Result<T> {
		self.map_err(|err| reraise.handle(err))
	}
}
