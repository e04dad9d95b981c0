use crate::exception::Exception;
use crate::rules::rule::Rule;

impl Rule {
	/// Check if this rule applies to the given exception.
	///
	/// A rule applies when the exception's kind is the rule's original kind or
	/// descends from it.
	pub fn matches(&self, exception: &Exception) -> bool {
		exception.is_a(self.original_kind())
	}
}

/// Find the first rule that applies to `exception`.
///
/// Rules are tried in the order given, never by specificity: an early broad
/// rule shadows any later rule it also covers.
pub fn find_match<'a>(exception: &Exception, rules: &'a [Rule]) -> Option<&'a Rule> {
	rules.iter().find(|rule| rule.matches(exception))
}

/// A rule that can never fire because an earlier rule covers its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowing {
	/// Index of the unreachable rule.
	pub index: usize,

	/// Index of the first earlier rule that catches everything it would.
	pub shadowed_by: usize,
}

/// Report every rule made unreachable by an earlier, equal or broader rule.
pub fn shadowed_rules(rules: &[Rule]) -> Vec<Shadowing> {
	rules
		.iter()
		.enumerate()
		.filter_map(|(index, rule)| {
			rules[..index]
				.iter()
				.position(|earlier| rule.original_kind().is_a(earlier.original_kind()))
				.map(|shadowed_by| Shadowing { index, shadowed_by })
		})
		.collect()
}
