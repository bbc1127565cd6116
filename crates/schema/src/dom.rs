//! DOM serialization shapes used by node and mark specs.
//!
//! Serialization is described as data: an output tree with a content hole,
//! and parse rules matching source elements or inline styles. The host's DOM
//! layer interprets these; nothing here touches a real document.

use vellum_primitives::Attrs;

/// A DOM output tree produced when serializing a node or mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOutput {
	/// An element with string attributes and child outputs.
	Element {
		/// Tag name, possibly derived from attrs (e.g. `h2` for headings).
		tag: String,
		/// Serialized DOM attributes in emission order.
		attrs: Vec<(String, String)>,
		/// Child outputs; at most one [`DomOutput::Hole`] in the tree.
		children: Vec<DomOutput>,
	},
	/// The content hole: the node's own content renders here.
	Hole,
}

impl DomOutput {
	/// Creates an element with no attributes or children.
	pub fn element(tag: impl Into<String>) -> Self {
		Self::Element {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Creates an element whose single child is the content hole.
	pub fn content_element(tag: impl Into<String>) -> Self {
		Self::element(tag).child(Self::Hole)
	}

	/// Adds a DOM attribute.
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		if let Self::Element { attrs, .. } = &mut self {
			attrs.push((key.into(), value.into()));
		}
		self
	}

	/// Adds a DOM attribute when `value` is present.
	pub fn attr_opt(self, key: impl Into<String>, value: Option<String>) -> Self {
		match value {
			Some(value) => self.attr(key, value),
			None => self,
		}
	}

	/// Appends a child output.
	pub fn child(mut self, output: DomOutput) -> Self {
		if let Self::Element { children, .. } = &mut self {
			children.push(output);
		}
		self
	}

	/// Tag name for element outputs.
	pub fn tag(&self) -> Option<&str> {
		match self {
			Self::Element { tag, .. } => Some(tag),
			Self::Hole => None,
		}
	}
}

/// A rule describing DOM content that parses into a node or mark.
#[derive(Clone)]
pub enum ParseRule {
	/// Match a source element by tag name.
	Tag {
		/// Tag to match, optionally with an attribute requirement
		/// (e.g. `a[href]`).
		tag: &'static str,
		/// Attrs implied by the match itself (e.g. `h2` implies level 2).
		attrs: Option<Attrs>,
		/// Derives attrs from the source element's attributes. Returning
		/// `None` rejects the match.
		get_attrs: Option<fn(&Attrs) -> Option<Attrs>>,
		/// Keep whitespace exactly as written (code blocks).
		preserve_whitespace: bool,
	},
	/// Match an inline style declaration by property name.
	Style {
		/// CSS property name to match.
		prop: &'static str,
		/// Accepts or rejects the property value.
		accept: fn(&str) -> bool,
	},
}

impl ParseRule {
	/// A plain tag rule with no attribute handling.
	pub fn tag(tag: &'static str) -> Self {
		Self::Tag {
			tag,
			attrs: None,
			get_attrs: None,
			preserve_whitespace: false,
		}
	}

	/// A tag rule whose match implies fixed attrs.
	pub fn tag_with_attrs(tag: &'static str, attrs: Attrs) -> Self {
		Self::Tag {
			tag,
			attrs: Some(attrs),
			get_attrs: None,
			preserve_whitespace: false,
		}
	}

	/// A tag rule deriving attrs from the source element.
	pub fn tag_with(tag: &'static str, get_attrs: fn(&Attrs) -> Option<Attrs>) -> Self {
		Self::Tag {
			tag,
			attrs: None,
			get_attrs: Some(get_attrs),
			preserve_whitespace: false,
		}
	}

	/// A style rule for the given property.
	pub fn style(prop: &'static str, accept: fn(&str) -> bool) -> Self {
		Self::Style { prop, accept }
	}
}

impl std::fmt::Debug for ParseRule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Tag {
				tag,
				attrs,
				preserve_whitespace,
				..
			} => f
				.debug_struct("Tag")
				.field("tag", tag)
				.field("attrs", attrs)
				.field("preserve_whitespace", preserve_whitespace)
				.finish_non_exhaustive(),
			Self::Style { prop, .. } => {
				f.debug_struct("Style").field("prop", prop).finish_non_exhaustive()
			}
		}
	}
}
