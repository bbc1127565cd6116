//! Command item descriptors rendered by the menu widget.

use serde::{Deserialize, Serialize};

/// Category a default item set is drawn from.
///
/// The host's command registry groups commands by the kind of content they
/// apply to; the inline menu pulls its defaults from these two categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
	/// Commands that apply to inline content (emphasis, links, code spans).
	Inline,
	/// Commands that apply to block nodes (headings, lists, quotes).
	Block,
}

impl ItemCategory {
	/// Stable category name used by the host's command-group registry.
	pub fn as_str(&self) -> &'static str {
		match self {
			ItemCategory::Inline => "inline",
			ItemCategory::Block => "block",
		}
	}
}

/// A single command item shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
	/// Command name invoked when the item is activated.
	pub command: String,
	/// Text shown in the menu.
	pub label: String,
	/// Optional detail shown next to the label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl MenuItem {
	/// Creates an item for the given command.
	pub fn new(command: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			label: label.into(),
			detail: None,
		}
	}

	/// Attaches a detail string.
	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail = Some(detail.into());
		self
	}
}

/// A named group of items rendered together, separated from other groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
	/// Group name, used for separators and diagnostics.
	pub name: String,
	/// Items in display order.
	pub items: Vec<MenuItem>,
}

impl ItemGroup {
	/// Creates a group with the given items.
	pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
		Self {
			name: name.into(),
			items,
		}
	}
}
