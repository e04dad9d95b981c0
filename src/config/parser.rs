use crate::config::types::{RuleBook, RuleDecl, RuleFile};
use crate::error::{Result, ZombieError};
use crate::kind::KindRegistry;
use crate::rules::{Rule, Template};
use std::path::Path;

/// Parse a rule file from the given path.
pub fn parse_rule_file(path: &Path) -> Result<RuleFile> {
	let content = std::fs::read_to_string(path).map_err(|source| {
		ZombieError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		}
	})?;

	parse_rule_str(&content, path)
}

/// Parse a rule file from a string (useful for testing).
pub fn parse_rule_str(content: &str, path: &Path) -> Result<RuleFile> {
	let file: RuleFile =
		toml::from_str(content).map_err(|source| ZombieError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed file
	file.validate()?;

	Ok(file)
}

impl RuleFile {
	/// Register this file's kinds on top of `kinds` and resolve its rules.
	pub fn compile(&self, mut kinds: KindRegistry, source: &Path) -> Result<RuleBook> {
		for decl in &self.kinds {
			kinds.register(&decl.name, decl.parent.as_deref(), decl.takes_message)?;
		}

		let rules = self
			.rules
			.iter()
			.map(|decl| compile_rule(decl, &kinds))
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(
			source = %source.display(),
			kinds = kinds.len(),
			rules = rules.len(),
			"compiled rule file"
		);

		Ok(RuleBook {
			kinds,
			rules,
			source: source.to_path_buf(),
		})
	}
}

fn compile_rule(decl: &RuleDecl, kinds: &KindRegistry) -> Result<Rule> {
	let original = kinds.resolve(&decl.original)?;
	let new = kinds.resolve(&decl.new)?;

	let mut rule = Rule::new(&original, &new).with_chain_cause(decl.chain);
	if let Some(ref message) = decl.message {
		rule = rule.with_message(message.as_str());
	}
	if let Some(ref template) = decl.template {
		rule = rule.with_message(Template::new(template.as_str()));
	}

	Ok(rule)
}

/// Convenience function to parse and compile a rule file with no pre-registered kinds.
pub fn load_rule_book(path: &Path) -> Result<RuleBook> {
	parse_rule_file(path)?.compile(KindRegistry::new(), path)
}
