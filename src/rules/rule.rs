use crate::kind::Kind;
use crate::rules::template::Template;
use std::fmt;

/// What message the replacement exception carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Message {
	/// Reuse the original exception's message.
	#[default]
	Original,
	/// Use this text verbatim.
	Literal(String),
	/// Interpolate the original message into a template.
	Template(Template),
}

impl From<&str> for Message {
	fn from(text: &str) -> Self {
		Message::Literal(text.to_string())
	}
}

impl From<String> for Message {
	fn from(text: String) -> Self {
		Message::Literal(text)
	}
}

impl From<Template> for Message {
	fn from(template: Template) -> Self {
		Message::Template(template)
	}
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Message::Original => f.write_str("None"),
			Message::Literal(text) => write!(f, "{text:?}"),
			Message::Template(template) => write!(f, "Template({:?})", template.as_str()),
		}
	}
}

/// One candidate substitution: exceptions that are an `original_kind` get
/// replaced by a `new_kind`.
///
/// Rules are immutable once built and may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Rule {
	original_kind: Kind,
	new_kind: Kind,
	message: Message,
	chain_cause: bool,
}

impl Rule {
	/// Replace `original_kind` (and its descendants) with `new_kind`, keeping the
	/// original message and suppressing the cause.
	pub fn new(original_kind: &Kind, new_kind: &Kind) -> Self {
		Rule {
			original_kind: original_kind.clone(),
			new_kind: new_kind.clone(),
			message: Message::Original,
			chain_cause: false,
		}
	}

	pub fn with_message(mut self, message: impl Into<Message>) -> Self {
		self.message = message.into();
		self
	}

	pub fn with_template(self, template: impl Into<String>) -> Self {
		self.with_message(Template::new(template))
	}

	/// Record the caught exception as the replacement's direct cause.
	pub fn chained(self) -> Self {
		self.with_chain_cause(true)
	}

	pub fn with_chain_cause(mut self, chain_cause: bool) -> Self {
		self.chain_cause = chain_cause;
		self
	}

	pub fn original_kind(&self) -> &Kind {
		&self.original_kind
	}

	pub fn new_kind(&self) -> &Kind {
		&self.new_kind
	}

	pub fn message(&self) -> &Message {
		&self.message
	}

	pub fn chain_cause(&self) -> bool {
		self.chain_cause
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Rule(original_kind={}, new_kind={}, message={}, chain_cause={})",
			self.original_kind, self.new_kind, self.message, self.chain_cause
		)
	}
}
