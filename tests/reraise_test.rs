use std::cell::Cell;
use std::sync::Arc;
use std::thread;

use zombie::{Exception, Kind, Reraise, ReraiseExt, Rule, ZombieError, reraise};

struct Kinds {
	error: Kind,
	lookup: Kind,
	key: Kind,
	type_error: Kind,
	value: Kind,
	runtime: Kind,
}

fn kinds() -> Kinds {
	let error = Kind::root("Error");
	let lookup = error.subkind("LookupError");
	Kinds {
		key: lookup.subkind("KeyError"),
		type_error: error.subkind("TypeError"),
		value: error.subkind("ValueError"),
		runtime: error.subkind("RuntimeError"),
		error,
		lookup,
	}
}

fn raised<T: std::fmt::Debug>(result: zombie::Result<T>) -> Exception {
	result
		.unwrap_err()
		.into_exception()
		.expect("expected a raised exception")
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_no_match_is_transparent() {
	let k = kinds();
	let reraise = Reraise::new(vec![
		Rule::new(&k.type_error, &k.runtime),
		Rule::new(&k.key, &k.value).chained(),
	]);

	let original = Exception::new(&k.lookup, "boom").with_cause(Exception::new(&k.error, "root"));
	let exception = raised(reraise.run(|| Err::<(), _>(original)));

	assert_eq!(exception.kind(), &k.lookup);
	assert_eq!(exception.message(), "boom");
	assert_eq!(exception.explicit_cause().unwrap().message(), "root");
}

#[test]
fn test_empty_rule_list_is_transparent() {
	let k = kinds();
	let exception = raised(reraise(Vec::<Rule>::new(), || {
		Err::<(), _>(Exception::new(&k.key, "boom"))
	}));

	assert_eq!(exception.kind(), &k.key);
	assert_eq!(exception.message(), "boom");
	assert!(!exception.is_cause_suppressed());
}

#[test]
fn test_first_match_wins_over_more_specific() {
	let k = kinds();
	let reraise = Reraise::new([
		Rule::new(&k.error, &k.runtime).with_message("broad"),
		Rule::new(&k.key, &k.value).with_message("specific"),
	]);

	let exception = raised(reraise.run(|| Err::<(), _>(Exception::new(&k.key, "boom"))));
	assert_eq!(exception.kind(), &k.runtime);
	assert_eq!(exception.message(), "broad");
}

#[test]
fn test_ancestor_rule_catches_subkind() {
	let k = kinds();
	let reraise = Reraise::new(
		Rule::new(&k.error, &k.value)
			.with_message("An error occurred")
			.chained(),
	);

	let exception = raised(
		reraise.run(|| Err::<(), _>(Exception::new(&k.key, "Original error message"))),
	);
	assert_eq!(exception.kind(), &k.value);
	assert_eq!(exception.message(), "An error occurred");
	assert_eq!(exception.explicit_cause().unwrap().kind(), &k.key);
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_default_message_is_original() {
	let k = kinds();
	let reraise = Reraise::new(Rule::new(&k.key, &k.value));

	let exception = raised(reraise.run(|| Err::<(), _>(Exception::new(&k.key, "boom"))));
	assert_eq!(exception.message(), "boom");
}

#[test]
fn test_template_substitution() {
	let k = kinds();
	let reraise = Reraise::new(
		Rule::new(&k.key, &k.value).with_template("err: ${original_error_message}"),
	);

	let exception = raised(reraise.run(|| Err::<(), _>(Exception::new(&k.key, "boom"))));
	assert_eq!(exception.message(), "err: boom");
}

#[test]
fn test_unknown_placeholder_surfaces_distinct_error() {
	let k = kinds();
	let reraise = Reraise::new(Rule::new(&k.key, &k.value).with_template("err: ${detail}"));

	let err = reraise
		.run(|| Err::<(), _>(Exception::new(&k.key, "boom")))
		.unwrap_err();
	match err {
		ZombieError::TemplateSubstitution { ref original, .. } => {
			assert_eq!(original.kind(), &k.key);
		}
		other => panic!("Expected TemplateSubstitution error, got {other:?}"),
	}
}

#[test]
fn test_construction_failure_propagates() {
	let k = kinds();
	let halt = Kind::new("Halt", Some(&k.error), false);
	let reraise = Reraise::new(Rule::new(&k.key, &halt));

	let err = reraise
		.run(|| Err::<(), _>(Exception::new(&k.key, "boom")))
		.unwrap_err();
	assert!(matches!(err, ZombieError::Construction { .. }));
	assert_eq!(err.original().unwrap().message(), "boom");
}

// ============================================================================
// Cause chaining
// ============================================================================

#[test]
fn test_chain_flag_records_original_as_cause() {
	let k = kinds();
	let reraise = Reraise::new(Rule::new(&k.key, &k.value).chained());

	let exception = raised(reraise.run(|| Err::<(), _>(Exception::new(&k.key, "boom"))));
	let cause = exception.explicit_cause().unwrap();
	assert_eq!(cause.kind(), &k.key);
	assert_eq!(cause.message(), "boom");
	assert!(exception.report().contains("direct cause"));
}

#[test]
fn test_default_suppresses_cause() {
	let k = kinds();
	let reraise = Reraise::new(Rule::new(&k.key, &k.value));

	let exception = raised(reraise.run(|| Err::<(), _>(Exception::new(&k.key, "boom"))));
	assert!(exception.is_cause_suppressed());
	assert!(exception.explicit_cause().is_none());
	assert_eq!(exception.report(), "ValueError: boom");
}

// ============================================================================
// Scope adapters
// ============================================================================

#[test]
fn test_success_path_returns_value_untouched() {
	let k = kinds();
	let reraise = Reraise::new(vec![
		Rule::new(&k.error, &k.runtime),
		Rule::new(&k.key, &k.value).with_template("${bogus}"),
	]);

	let calls = Cell::new(0);
	let double = reraise.wrap(|x: i32| {
		calls.set(calls.get() + 1);
		Ok::<_, Exception>(x * 2)
	});

	assert_eq!(double(21).unwrap(), 42);
	assert_eq!(calls.get(), 1);
	assert_eq!(reraise.run(|| Ok::<_, Exception>("done")).unwrap(), "done");
}

#[test]
fn test_wrapped_function_transforms_errors() {
	let k = kinds();
	let reraise = Reraise::new(vec![
		Rule::new(&k.key, &k.value).with_message("List transformation error").chained(),
		Rule::new(&k.type_error, &k.runtime)
			.with_message("Another list transformation error")
			.chained(),
	]);

	let key = k.key.clone();
	let type_error = k.type_error.clone();
	let fail = reraise.wrap(move |which: u8| -> Result<(), Exception> {
		match which {
			0 => Err(Exception::new(&key, "Original error message")),
			_ => Err(Exception::new(&type_error, "Original type error message")),
		}
	});

	let first = raised(fail(0));
	assert_eq!(first.kind(), &k.value);
	assert_eq!(first.message(), "List transformation error");

	let second = raised(fail(1));
	assert_eq!(second.kind(), &k.runtime);
	assert_eq!(second.message(), "Another list transformation error");
	assert_eq!(second.explicit_cause().unwrap().kind(), &k.type_error);
}

#[test]
fn test_host_errors_convert_into_exceptions() {
	#[derive(Debug)]
	struct MissingKey(&'static str);

	let k = kinds();
	let key = k.key.clone();
	let reraise = Reraise::new(
		Rule::new(&k.lookup, &k.value).with_template("lookup failed: $original_error_message"),
	);

	struct Host {
		key: Kind,
		err: MissingKey,
	}
	impl From<Host> for Exception {
		fn from(host: Host) -> Self {
			Exception::new(&host.key, host.err.0)
		}
	}

	let result: Result<(), Host> = Err(Host {
		key,
		err: MissingKey("user"),
	});
	let exception = raised(result.reraise(&reraise));
	assert_eq!(exception.message(), "lookup failed: user");
}

#[test]
fn test_rules_are_shareable_across_threads() {
	let k = kinds();
	let reraise = Arc::new(Reraise::new(Rule::new(&k.key, &k.value).chained()));

	let handles: Vec<_> = (0..4)
		.map(|i| {
			let reraise = Arc::clone(&reraise);
			let key = k.key.clone();
			thread::spawn(move || {
				reraise
					.handle(Exception::new(&key, format!("boom {i}")))
					.into_exception()
					.unwrap()
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		let exception = handle.join().unwrap();
		assert_eq!(exception.kind(), &k.value);
		assert_eq!(exception.message(), format!("boom {i}"));
	}
}
