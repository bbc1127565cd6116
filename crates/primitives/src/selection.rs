//! Selection values describing the user's focus in the document.
//!
//! A selection is immutable for the duration of an editor tick; the host
//! replaces it wholesale whenever editor state changes. UI extensions only
//! read selections, they never construct or mutate the live one.

/// A position in the document, measured in model positions (not bytes).
///
/// This is the canonical coordinate space the host exposes to extensions.
pub type DocPos = usize;

/// The user's current caret, range, or node focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
	/// An empty selection: a caret sitting between two positions.
	Caret {
		/// The caret position.
		head: DocPos,
	},
	/// A non-empty range from anchor to head.
	Range {
		/// The fixed end of the range.
		anchor: DocPos,
		/// The moving end of the range (cursor position).
		head: DocPos,
	},
	/// A selected node, either a block or an inline atom.
	Node {
		/// Position of the selected node.
		at: DocPos,
		/// Whether the selected node is block-level.
		block: bool,
	},
}

impl Selection {
	/// Creates a caret selection at `head`.
	pub fn caret(head: DocPos) -> Self {
		Self::Caret { head }
	}

	/// Creates a range selection from `anchor` to `head`.
	pub fn range(anchor: DocPos, head: DocPos) -> Self {
		Self::Range { anchor, head }
	}

	/// Creates a node selection at `at`.
	pub fn node(at: DocPos, block: bool) -> Self {
		Self::Node { at, block }
	}

	/// True when no content is selected.
	///
	/// A degenerate range (anchor equal to head) counts as empty; hosts
	/// normally report that shape as a caret, but nothing downstream should
	/// depend on them doing so.
	pub fn is_empty(&self) -> bool {
		match *self {
			Self::Caret { .. } => true,
			Self::Range { anchor, head } => anchor == head,
			Self::Node { .. } => false,
		}
	}

	/// The active end of the selection.
	pub fn head(&self) -> DocPos {
		match *self {
			Self::Caret { head } | Self::Range { head, .. } => head,
			Self::Node { at, .. } => at,
		}
	}

	/// True when a node (block or inline) is selected.
	pub fn is_node(&self) -> bool {
		matches!(self, Self::Node { .. })
	}

	/// True when the selected node is block-level.
	pub fn is_block_node(&self) -> bool {
		matches!(self, Self::Node { block: true, .. })
	}
}
