//! The runtime error value that rules match on and produce.

use crate::kind::Kind;
use std::fmt;

/// Separator printed between links of an explicit cause chain.
pub const DIRECT_CAUSE_SEPARATOR: &str =
	"The above exception was the direct cause of the following exception:";

/// How an exception relates to whatever it was raised in place of.
#[derive(Debug, Clone, Default)]
pub enum Cause {
	/// Nothing recorded.
	#[default]
	Unset,
	/// The link to the handled exception was deliberately severed.
	Suppressed,
	/// Explicitly caused by another exception.
	Explicit(Box<Exception>),
}

/// An error of some [`Kind`] with a message and an optional cause.
///
/// The stringified form of an exception is exactly its message.
#[derive(Debug, Clone)]
pub struct Exception {
	kind: Kind,
	message: String,
	cause: Cause,
}

impl Exception {
	pub fn new(kind: &Kind, message: impl Into<String>) -> Self {
		Exception {
			kind: kind.clone(),
			message: message.into(),
			cause: Cause::Unset,
		}
	}

	pub fn kind(&self) -> &Kind {
		&self.kind
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn cause(&self) -> &Cause {
		&self.cause
	}

	/// The explicit cause, if one was recorded.
	pub fn explicit_cause(&self) -> Option<&Exception> {
		match &self.cause {
			Cause::Explicit(cause) => Some(cause.as_ref()),
			_ => None,
		}
	}

	pub fn is_cause_suppressed(&self) -> bool {
		matches!(self.cause, Cause::Suppressed)
	}

	/// True if this exception's kind is `kind` or descends from it.
	pub fn is_a(&self, kind: &Kind) -> bool {
		self.kind.is_a(kind)
	}

	/// Record `cause` as the direct cause of this exception.
	pub fn with_cause(mut self, cause: Exception) -> Self {
		self.cause = Cause::Explicit(Box::new(cause));
		self
	}

	/// Mark this exception as deliberately detached from whatever it replaced.
	pub fn suppress_cause(mut self) -> Self {
		self.cause = Cause::Suppressed;
		self
	}

	/// This exception followed by each explicit cause, newest first.
	pub fn chain(&self) -> Chain<'_> {
		Chain { next: Some(self) }
	}

	/// Render the explicit cause chain oldest first, one `Kind: message` entry
	/// per exception.
	pub fn report(&self) -> String {
		let mut entries: Vec<String> = self.chain().map(Exception::headline).collect();
		entries.reverse();
		let separator = format!("\n\n{DIRECT_CAUSE_SEPARATOR}\n\n");
		entries.join(separator.as_str())
	}

	fn headline(&self) -> String {
		if self.message.is_empty() {
			self.kind.name().to_string()
		} else {
			format!("{}: {}", self.kind, self.message)
		}
	}
}

impl fmt::Display for Exception {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for Exception {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.explicit_cause()
			.map(|cause| cause as &(dyn std::error::Error + 'static))
	}
}

/// Iterator returned by [`Exception::chain`].
pub struct Chain<'a> {
	next: Option<&'a Exception>,
}

impl<'a> Iterator for Chain<'a> {
	type Item = &'a Exception;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.explicit_cause();
		Some(current)
	}
}
