use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// The one placeholder a message template may reference.
pub const ORIGINAL_ERROR_MESSAGE: &str = "original_error_message";

/// `$$`, `$name`, `${name}`, or a bare `$` that starts none of those.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(concat!(
		r"\$(?:(?P<escaped>\$)",
		r"|(?P<named>[_A-Za-z][_A-Za-z0-9]*)",
		r"|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}",
		r"|(?P<invalid>))",
	))
	.expect("placeholder pattern is valid")
});

/// Why a message template could not be substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
	#[error("unknown placeholder `{0}`")]
	UnknownPlaceholder(String),

	#[error("invalid placeholder at byte {position}")]
	InvalidPlaceholder { position: usize },
}

/// A message template interpolated with the original error message.
///
/// Syntax: `$original_error_message` or `${original_error_message}`, with `$$`
/// producing a literal `$`. Nothing is checked until substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	source: String,
}

impl Template {
	pub fn new(source: impl Into<String>) -> Self {
		Template {
			source: source.into(),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Substitute `original_error_message` into the template.
	pub fn substitute(&self, original_error_message: &str) -> Result<String, TemplateError> {
		let mut out = String::with_capacity(self.source.len() + original_error_message.len());
		let mut last = 0;

		for caps in PLACEHOLDER.captures_iter(&self.source) {
			let Some(whole) = caps.get(0) else {
				continue;
			};
			out.push_str(&self.source[last..whole.start()]);
			out.push_str(resolve(&caps, whole.start(), original_error_message)?);
			last = whole.end();
		}
		out.push_str(&self.source[last..]);

		Ok(out)
	}

	/// Check that every placeholder in the template is known and well formed.
	pub fn validate(&self) -> Result<(), TemplateError> {
		self.substitute("").map(|_| ())
	}
}

fn resolve<'a>(
	caps: &Captures<'_>,
	position: usize,
	original_error_message: &'a str,
) -> Result<&'a str, TemplateError> {
	if caps.name("escaped").is_some() {
		return Ok("$");
	}
	match caps.name("named").or_else(|| caps.name("braced")) {
		Some(name) if name.as_str() == ORIGINAL_ERROR_MESSAGE => Ok(original_error_message),
		Some(name) => Err(TemplateError::UnknownPlaceholder(name.as_str().to_string())),
		None => Err(TemplateError::InvalidPlaceholder { position }),
	}
}

impl fmt::Display for Template {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}
