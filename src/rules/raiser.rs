use crate::error::ZombieError;
use crate::exception::Exception;
use crate::rules::builder::build;
use crate::rules::matcher::find_match;
use crate::rules::rule::Rule;

/// Produce the error that leaves a protected scope after `caught` escaped it.
///
/// With no rule, `caught` is handed back exactly as received. With a rule, the
/// replacement is built and either chained to `caught` as its direct cause or
/// explicitly cut off from it. Failures while building surface as their own
/// errors; nothing is swallowed.
pub fn raise(rule: Option<&Rule>, caught: Exception) -> ZombieError {
	let Some(rule) = rule else {
		tracing::debug!(kind = %caught.kind(), "no transformation matched, re-raising original");
		return ZombieError::Raised(caught);
	};

	tracing::debug!(exception = %caught, %rule, "transforming exception");
	let replacement = match build(rule, &caught) {
		Ok(replacement) => replacement,
		Err(err) => return err,
	};

	let replacement = if rule.chain_cause() {
		tracing::info!(
			new_kind = %rule.new_kind(),
			original_kind = %caught.kind(),
			message = %replacement,
			"raising transformed exception from original"
		);
		replacement.with_cause(caught)
	} else {
		tracing::info!(
			new_kind = %rule.new_kind(),
			message = %replacement,
			"raising transformed exception"
		);
		replacement.suppress_cause()
	};

	ZombieError::Raised(replacement)
}

/// Match `caught` against `rules` and raise accordingly.
pub fn raise_transformed(rules: &[Rule], caught: Exception) -> ZombieError {
	let rule = find_match(&caught, rules);
	raise(rule, caught)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::kind::Kind;
	use std::error::Error;

	#[test]
	fn test_no_rule_reraises_original() {
		let key = Kind::root("KeyError");
		let inner = Exception::new(&key, "inner");
		let caught = Exception::new(&key, "Original error message").with_cause(inner);

		let raised = raise(None, caught).into_exception().unwrap();
		assert_eq!(raised.kind(), &key);
		assert_eq!(raised.message(), "Original error message");
		assert_eq!(raised.explicit_cause().unwrap().message(), "inner");
	}

	#[test]
	fn test_chained_rule_records_cause() {
		let key = Kind::root("KeyError");
		let value = Kind::root("ValueError");
		let rule = Rule::new(&key, &value).with_message("An error occurred").chained();

		let raised = raise(Some(&rule), Exception::new(&key, "Original error message"))
			.into_exception()
			.unwrap();
		assert_eq!(raised.kind(), &value);
		assert_eq!(raised.message(), "An error occurred");
		assert_eq!(raised.explicit_cause().unwrap().kind(), &key);
		assert!(raised.source().is_some());
	}

	#[test]
	fn test_unchained_rule_suppresses_cause() {
		let key = Kind::root("KeyError");
		let value = Kind::root("ValueError");
		let rule = Rule::new(&key, &value).with_message("An error occurred");

		let raised = raise(Some(&rule), Exception::new(&key, "Original error message"))
			.into_exception()
			.unwrap();
		assert!(raised.is_cause_suppressed());
		assert!(raised.explicit_cause().is_none());
	}

	#[test]
	fn test_template_failure_is_not_masked() {
		let key = Kind::root("KeyError");
		let value = Kind::root("ValueError");
		let rule = Rule::new(&key, &value).with_template("${missing}");

		let err = raise(Some(&rule), Exception::new(&key, "boom"));
		assert!(matches!(err, ZombieError::TemplateSubstitution { .. }));
		assert!(err.exception().is_none());
		assert_eq!(err.original().unwrap().message(), "boom");
	}

	#[test]
	fn test_raise_transformed_uses_first_match() {
		let key = Kind::root("KeyError");
		let type_error = Kind::root("TypeError");
		let value = Kind::root("ValueError");
		let runtime = Kind::root("RuntimeError");
		let rules = vec![
			Rule::new(&key, &value).with_message("List transformation error"),
			Rule::new(&type_error, &runtime).with_message("Another list transformation error"),
		];

		let raised = raise_transformed(&rules, Exception::new(&type_error, "bad type"))
			.into_exception()
			.unwrap();
		assert_eq!(raised.kind(), &runtime);
		assert_eq!(raised.message(), "Another list transformation error");
	}

	#[test]
	fn test_raise_transformed_empty_rules() {
		let key = Kind::root("KeyError");
		let raised = raise_transformed(&[], Exception::new(&key, "Original error message"))
			.into_exception()
			.unwrap();
		assert_eq!(raised.kind(), &key);
		assert_eq!(raised.message(), "Original error message");
	}
}
