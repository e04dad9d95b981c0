use crate::error::{Result, ZombieError};
use crate::exception::Exception;
use crate::rules::rule::{Message, Rule};
use crate::rules::template::TemplateError;

/// Resolve the message a replacement built from `rule` will carry.
pub fn resolve_message(
	rule: &Rule,
	caught: &Exception,
) -> std::result::Result<String, TemplateError> {
	match rule.message() {
		Message::Original => Ok(caught.to_string()),
		Message::Literal(text) => Ok(text.clone()),
		Message::Template(template) => {
			let message = template.substitute(&caught.to_string())?;
			tracing::debug!(template = %template, %message, "substituted message template");
			Ok(message)
		}
	}
}

/// Construct the replacement for `caught` described by `rule`.
///
/// Only constructs: the result has no cause recorded yet and nothing is raised.
pub fn build(rule: &Rule, caught: &Exception) -> Result<Exception> {
	let message = resolve_message(rule, caught).map_err(|source| {
		let template = match rule.message() {
			Message::Template(template) => template.as_str().to_string(),
			_ => String::new(),
		};
		ZombieError::TemplateSubstitution {
			template,
			source,
			original: Box::new(caught.clone()),
		}
	})?;

	rule.new_kind().instantiate(message, caught)
}
