//! Error kinds and their hierarchy.
//!
//! A [`Kind`] plays the role of an exception class: it has a name, an optional
//! parent, and identity. Matching a rule against an exception asks whether the
//! exception's kind *is a* rule's kind, walking the parent chain the same way a
//! catch clause for a supertype catches its subtypes.

use crate::error::{Result, ZombieError};
use crate::exception::Exception;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An error category. Cheap to clone; clones share identity.
///
/// Equality is identity, not name: two kinds created separately with the same
/// name are different kinds.
#[derive(Clone)]
pub struct Kind(Arc<KindDef>);

struct KindDef {
	name: String,
	parent: Option<Kind>,
	takes_message: bool,
}

impl Kind {
	/// Create a kind with full control over its shape.
	///
	/// `takes_message = false` declares a kind that cannot be instantiated with a
	/// non-empty message, see [`Kind::instantiate`].
	pub fn new(name: impl Into<String>, parent: Option<&Kind>, takes_message: bool) -> Self {
		Kind(Arc::new(KindDef {
			name: name.into(),
			parent: parent.cloned(),
			takes_message,
		}))
	}

	/// Create a kind with no parent.
	pub fn root(name: impl Into<String>) -> Self {
		Self::new(name, None, true)
	}

	/// Create a kind whose parent is `self`.
	pub fn subkind(&self, name: impl Into<String>) -> Self {
		Self::new(name, Some(self), true)
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	pub fn parent(&self) -> Option<&Kind> {
		self.0.parent.as_ref()
	}

	pub fn takes_message(&self) -> bool {
		self.0.takes_message
	}

	/// Iterate over this kind followed by each of its ancestors, nearest first.
	pub fn ancestors(&self) -> Ancestors<'_> {
		Ancestors { next: Some(self) }
	}

	/// True if `self` is `ancestor` or descends from it.
	pub fn is_a(&self, ancestor: &Kind) -> bool {
		self.ancestors().any(|kind| kind == ancestor)
	}

	/// Build an exception of this kind carrying `message`.
	///
	/// Fails for kinds that take no message when `message` is non-empty.
	/// `original` is the exception being transformed, kept on the error.
	pub fn instantiate(&self, message: String, original: &Exception) -> Result<Exception> {
		if !self.takes_message() && !message.is_empty() {
			return Err(ZombieError::Construction {
				kind: self.name().to_string(),
				message,
				original: Box::new(original.clone()),
			});
		}
		Ok(Exception::new(self, message))
	}
}

impl PartialEq for Kind {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for Kind {}

impl Hash for Kind {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::hash(Arc::as_ptr(&self.0), state);
	}
}

impl fmt::Debug for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Kind").field(&self.name()).finish()
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Iterator returned by [`Kind::ancestors`].
pub struct Ancestors<'a> {
	next: Option<&'a Kind>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = &'a Kind;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.parent();
		Some(current)
	}
}

/// Name-indexed table of kinds, in registration order.
///
/// Parents must be registered before their children, so the hierarchy built
/// through a registry is always acyclic.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
	order: Vec<Kind>,
	by_name: HashMap<String, Kind>,
}

impl KindRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an existing kind under its own name.
	pub fn insert(&mut self, kind: Kind) -> Result<()> {
		if self.by_name.contains_key(kind.name()) {
			return Err(ZombieError::DuplicateKind {
				name: kind.name().to_string(),
			});
		}
		self.by_name.insert(kind.name().to_string(), kind.clone());
		self.order.push(kind);
		Ok(())
	}

	/// Create and register a kind whose parent is looked up by name.
	pub fn register(
		&mut self,
		name: &str,
		parent: Option<&str>,
		takes_message: bool,
	) -> Result<Kind> {
		let parent = parent.map(|p| self.resolve(p)).transpose()?;
		let kind = Kind::new(name, parent.as_ref(), takes_message);
		self.insert(kind.clone())?;
		Ok(kind)
	}

	pub fn get(&self, name: &str) -> Option<&Kind> {
		self.by_name.get(name)
	}

	/// Look up a kind by name, failing with `UnknownKind`.
	pub fn resolve(&self, name: &str) -> Result<Kind> {
		self.get(name).cloned().ok_or_else(|| ZombieError::UnknownKind {
			name: name.to_string(),
		})
	}

	/// Kinds in registration order.
	pub fn kinds(&self) -> &[Kind] {
		&self.order
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
