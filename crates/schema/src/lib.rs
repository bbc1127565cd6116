//! Declarative document schema for the vellum data model.
//!
//! A [`Schema`] is a validated set of node and mark specs: what kinds of
//! content a document may contain, which groups they belong to, and how each
//! kind serializes to and parses from the DOM. Specs are pure data plus
//! serialization functions; the document model itself lives in the host.

use rustc_hash::FxHashMap;
use serde_json::Value;
use vellum_primitives::Attrs;

/// DOM output trees and parse rules.
pub mod dom;
/// Mark specs for the default document schema.
pub mod marks;
/// Node specs for the default document schema.
pub mod nodes;

pub use dom::{DomOutput, ParseRule};

/// Declaration of a single attribute on a node or mark type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSpec {
	/// Attribute name.
	pub name: &'static str,
	/// Default value; `None` means the attribute is required.
	pub default: Option<Value>,
}

impl AttrSpec {
	/// An attribute that must be supplied.
	pub fn required(name: &'static str) -> Self {
		Self { name, default: None }
	}

	/// An attribute with a default value.
	pub fn with_default(name: &'static str, default: Value) -> Self {
		Self {
			name,
			default: Some(default),
		}
	}
}

/// Specification of a node type.
#[derive(Debug, Clone)]
pub struct NodeSpec {
	/// Schema name of the node type.
	pub name: &'static str,
	/// Content expression (e.g. `"block+"`, `"inline*"`); `None` for leaves.
	pub content: Option<&'static str>,
	/// Group this node belongs to (e.g. `"block"`, `"inline"`).
	pub group: Option<&'static str>,
	/// True for inline nodes.
	pub inline: bool,
	/// Declared attributes.
	pub attrs: Vec<AttrSpec>,
	/// Defining nodes survive content replacement (list items, headings).
	pub defining: bool,
	/// True when the node can be dragged as a unit.
	pub draggable: bool,
	/// False only for nodes that can never be node-selected.
	pub selectable: bool,
	/// True for verbatim-content nodes (code blocks).
	pub code: bool,
	/// True when the node is opaque to the editor (no editable content).
	pub atom: bool,
	/// Mark set allowed inside; `Some("")` forbids all marks.
	pub marks: Option<&'static str>,
	/// DOM content that parses into this node.
	pub parse_dom: Vec<ParseRule>,
	/// DOM serialization; `None` for non-rendered types (doc, text).
	pub to_dom: Option<fn(&Attrs) -> DomOutput>,
}

impl NodeSpec {
	/// A node in the `"block"` group.
	pub fn block(name: &'static str) -> Self {
		Self {
			group: Some("block"),
			..Self::leaf(name)
		}
	}

	/// A leaf node with no content, group, or serialization.
	pub fn leaf(name: &'static str) -> Self {
		Self {
			name,
			content: None,
			group: None,
			inline: false,
			attrs: Vec::new(),
			defining: false,
			draggable: false,
			selectable: true,
			code: false,
			atom: false,
			marks: None,
			parse_dom: Vec::new(),
			to_dom: None,
		}
	}
}

/// Specification of a mark type.
#[derive(Debug, Clone)]
pub struct MarkSpec {
	/// Schema name of the mark type.
	pub name: &'static str,
	/// Group this mark belongs to (e.g. `"textformatting"`).
	pub group: Option<&'static str>,
	/// Declared attributes.
	pub attrs: Vec<AttrSpec>,
	/// Whether the mark extends to content typed at its edge.
	pub inclusive: bool,
	/// Mark set this mark excludes (`"_"` excludes everything).
	pub excludes: Option<&'static str>,
	/// DOM content that parses into this mark.
	pub parse_dom: Vec<ParseRule>,
	/// DOM serialization.
	pub to_dom: fn(&Attrs) -> DomOutput,
}

/// Schema construction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	/// Two node specs share a name.
	#[error("duplicate node type: {0}")]
	DuplicateNode(String),
	/// Two mark specs share a name.
	#[error("duplicate mark type: {0}")]
	DuplicateMark(String),
}

/// A validated set of node and mark specs with name lookup.
#[derive(Debug, Clone)]
pub struct Schema {
	nodes: Vec<NodeSpec>,
	marks: Vec<MarkSpec>,
	node_index: FxHashMap<&'static str, usize>,
	mark_index: FxHashMap<&'static str, usize>,
}

impl Schema {
	/// Builds a schema, validating that type names are unique.
	pub fn new(nodes: Vec<NodeSpec>, marks: Vec<MarkSpec>) -> Result<Self, SchemaError> {
		let mut node_index = FxHashMap::default();
		for (idx, node) in nodes.iter().enumerate() {
			if node_index.insert(node.name, idx).is_some() {
				return Err(SchemaError::DuplicateNode(node.name.to_string()));
			}
		}
		let mut mark_index = FxHashMap::default();
		for (idx, mark) in marks.iter().enumerate() {
			if mark_index.insert(mark.name, idx).is_some() {
				return Err(SchemaError::DuplicateMark(mark.name.to_string()));
			}
		}
		Ok(Self {
			nodes,
			marks,
			node_index,
			mark_index,
		})
	}

	/// The default document schema used by the CommonMark data model.
	pub fn commonmark() -> Self {
		Self::new(nodes::commonmark_nodes(), marks::commonmark_marks())
			.expect("built-in schema is valid")
	}

	/// Looks up a node spec by name.
	pub fn node(&self, name: &str) -> Option<&NodeSpec> {
		self.node_index.get(name).map(|&idx| &self.nodes[idx])
	}

	/// Looks up a mark spec by name.
	pub fn mark(&self, name: &str) -> Option<&MarkSpec> {
		self.mark_index.get(name).map(|&idx| &self.marks[idx])
	}

	/// All node specs in declaration order.
	pub fn nodes(&self) -> &[NodeSpec] {
		&self.nodes
	}

	/// All mark specs in declaration order.
	pub fn marks(&self) -> &[MarkSpec] {
		&self.marks
	}

	/// Node specs belonging to the given group.
	pub fn nodes_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a NodeSpec> {
		self.nodes.iter().filter(move |node| node.group == Some(group))
	}

	/// Mark specs belonging to the given group.
	pub fn marks_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a MarkSpec> {
		self.marks.iter().filter(move |mark| mark.group == Some(group))
	}
}
