//! Anchor coordinate resolution for the floating menu.
//!
//! Two pure algorithms over host-reported geometry: a top-center anchor for
//! range selections, and a top-edge anchor for node selections. Both fall
//! back to [`Anchor::ZERO`] instead of failing when geometry is missing.

use vellum_primitives::{Anchor, ClientRect};

/// Tolerance, in client units, for treating two edges as coincident.
const EDGE_TOLERANCE: f64 = 1.0;

/// Cap on how far right of a node's left edge its anchor may sit. Wide nodes
/// anchor near their start instead of drifting toward their middle.
const NODE_ANCHOR_BIAS: f64 = 20.0;

/// Anchor at the top edge of the rendered selection, horizontally centered.
///
/// Rectangles are merged into one bounding box only while they stay on the
/// first rectangle's visual line. Zero-width rectangles at the start of the
/// range are skipped when picking the reference rectangle, and zero-area
/// artifacts that rendering engines insert at inline-style boundaries are
/// excluded from the bounds. An artifact is recognized by the next rectangle
/// starting at (nearly) the same left edge; the last rectangle is always
/// counted.
pub fn top_center_of_selection(rects: &[ClientRect]) -> Anchor {
	let Some(first) = rects.first() else {
		return Anchor::ZERO;
	};

	let mut left = first.left;
	let mut right = first.right;
	let mut top = first.top;
	let mut idx = 1;
	while left == right && idx < rects.len() {
		let rect = rects[idx];
		left = rect.left;
		right = rect.right;
		top = rect.top;
		idx += 1;
	}

	for current in idx..rects.len() {
		let rect = rects[current];
		let same_line = rect.top < first.bottom - EDGE_TOLERANCE;
		let last = current == rects.len() - 1;
		let artifact = !last && (rects[current + 1].left - rect.left).abs() <= EDGE_TOLERANCE;
		if same_line && !artifact {
			left = left.min(rect.left);
			right = right.max(rect.right);
			top = top.min(rect.top);
		}
	}

	Anchor {
		left: (left + right) / 2.0,
		top,
	}
}

/// Anchor at the top edge of a selected node's bounding box.
///
/// Horizontally the anchor sits at the box center, capped at
/// [`NODE_ANCHOR_BIAS`] past the left edge. A node selection that is not
/// rendered yet yields the neutral anchor.
pub fn top_of_node_selection(rect: Option<ClientRect>) -> Anchor {
	let Some(rect) = rect else {
		return Anchor::ZERO;
	};
	Anchor {
		left: rect.center_x().min(rect.left + NODE_ANCHOR_BIAS),
		top: rect.top,
	}
}
