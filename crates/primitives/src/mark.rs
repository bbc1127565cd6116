//! Style spans (marks) attached to runs of inline content.

use serde_json::{Map, Value};

/// Attribute payload carried by marks and nodes.
///
/// Kept loosely typed: attribute shapes are defined by the document schema,
/// and extensions pick out the keys they understand.
pub type Attrs = Map<String, Value>;

/// An instance of a mark type applied over a run of inline content.
///
/// Extensions query marks at a position; they never construct the marks that
/// live in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
	/// Schema name of the mark type (e.g. `"link"`, `"strong"`).
	pub type_name: String,
	/// Type-specific attributes (e.g. `href` and `title` for links).
	pub attrs: Attrs,
}

impl Mark {
	/// Creates a mark with no attributes.
	pub fn new(type_name: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			attrs: Attrs::new(),
		}
	}

	/// Adds an attribute, for building queries and fixtures.
	pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
		self.attrs.insert(key.into(), value);
		self
	}

	/// Looks up an attribute by key.
	pub fn attr(&self, key: &str) -> Option<&Value> {
		self.attrs.get(key)
	}

	/// True when this mark is of the named type.
	pub fn is(&self, type_name: &str) -> bool {
		self.type_name == type_name
	}
}
