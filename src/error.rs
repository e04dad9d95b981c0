use crate::exception::Exception;
use crate::rules::TemplateError;
use std::path::PathBuf;

/// Library-level structured errors for zombie.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ZombieError {
	/// The exception leaving a protected scope: either the caught one, untouched,
	/// or the replacement built from the first matching rule.
	#[error(transparent)]
	Raised(Exception),

	#[error("Message template {template:?} could not be substituted")]
	TemplateSubstitution {
		template: String,
		#[source]
		source: TemplateError,
		/// The exception that was being transformed.
		original: Box<Exception>,
	},

	#[error("Cannot instantiate {kind} with message {message:?}: kind takes no message")]
	Construction {
		kind: String,
		message: String,
		original: Box<Exception>,
	},

	#[error("Unknown error kind: {name}")]
	UnknownKind { name: String },

	#[error("Error kind already registered: {name}")]
	DuplicateKind { name: String },

	#[error("Failed to read rule file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },
}

impl ZombieError {
	/// The raised exception, if this error is one.
	pub fn exception(&self) -> Option<&Exception> {
		match self {
			ZombieError::Raised(exception) => Some(exception),
			_ => None,
		}
	}

	/// Consume the error, yielding the raised exception if this error is one.
	pub fn into_exception(self) -> Option<Exception> {
		match self {
			ZombieError::Raised(exception) => Some(exception),
			_ => None,
		}
	}

	/// The exception that was being transformed when building its replacement failed.
	pub fn original(&self) -> Option<&Exception> {
		match self {
			ZombieError::TemplateSubstitution { original, .. }
			| ZombieError::Construction { original, .. } => Some(original.as_ref()),
			_ => None,
		}
	}
}

impl From<Exception> for ZombieError {
	fn from(exception: Exception) -> Self {
		ZombieError::Raised(exception)
	}
}

/// Result type alias using ZombieError.
pub type Result<T> = std::result::Result<T, ZombieError>;
