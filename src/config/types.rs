use crate::kind::KindRegistry;
use crate::reraise::Reraise;
use crate::rules::Rule;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level contents of a `zombie.toml` rule file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RuleFile {
	/// Error kinds to declare, parents before children.
	#[serde(default)]
	pub kinds: Vec<KindDecl>,

	/// Transformation rules. First matching rule wins.
	#[serde(default)]
	pub rules: Vec<RuleDecl>,
}

/// Declaration of one error kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct KindDecl {
	/// Unique name of the kind.
	pub name: String,

	/// Name of an already declared parent kind.
	#[serde(default)]
	pub parent: Option<String>,

	/// Whether the kind can carry a message.
	#[serde(default = "default_takes_message")]
	pub takes_message: bool,
}

fn default_takes_message() -> bool {
	true
}

/// Declaration of one transformation rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RuleDecl {
	/// Kind to catch, including its descendants.
	pub original: String,

	/// Kind to raise instead.
	pub new: String,

	/// Literal message (mutually exclusive with template).
	pub message: Option<String>,

	/// Message template using `${original_error_message}` (mutually exclusive with message).
	pub template: Option<String>,

	/// Record the caught exception as the direct cause.
	#[serde(default, alias = "chain_cause")]
	pub chain: bool,
}

impl RuleDecl {
	/// Validate that mutually exclusive fields are not both set.
	pub fn validate(&self) -> Result<(), crate::error::ZombieError> {
		if self.message.is_some() && self.template.is_some() {
			return Err(crate::error::ZombieError::MutuallyExclusive {
				option1: "message".to_string(),
				option2: "template".to_string(),
			});
		}

		Ok(())
	}
}

impl RuleFile {
	/// Validate all rules in this file.
	pub fn validate(&self) -> Result<(), crate::error::ZombieError> {
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}

/// Kinds and rules resolved from a rule file.
#[derive(Debug, Clone)]
pub struct RuleBook {
	/// Every kind known while compiling, caller-supplied ones included.
	pub kinds: KindRegistry,

	/// Rules in file order.
	pub rules: Vec<Rule>,

	/// The file these rules came from.
	pub source: PathBuf,
}

impl RuleBook {
	/// Scope adapter applying this book's rules.
	pub fn reraise(&self) -> Reraise {
		Reraise::new(self.rules.as_slice())
	}
}
