//! Host editor seam.
//!
//! Everything the inline menu needs from the editor is expressed here as a
//! query interface. The host delivers lifecycle signals by calling into the
//! controller; the controller reads state back through this trait.

use vellum_primitives::{Anchor, ClientRect, DocPos, Mark, Selection};

use crate::items::{ItemCategory, ItemGroup};
use crate::signal::SignalSet;

/// Editor capabilities consumed by the inline menu.
pub trait EditorHost {
	/// The current selection. Stable within one editor tick.
	fn selection(&self) -> Selection;

	/// Whether the editor currently holds input focus.
	fn has_focus(&self) -> bool;

	/// Style spans active at a document position.
	fn marks_at(&self, pos: DocPos) -> Vec<Mark>;

	/// Client coordinates of a document position.
	fn coords_at_pos(&self, pos: DocPos) -> Anchor;

	/// Client rectangles covering the rendered selection, in visual order.
	///
	/// May be empty when the selection is not rendered yet; may include
	/// zero-width rectangles at range endpoints and style boundaries.
	fn selection_rects(&self) -> Vec<ClientRect>;

	/// Bounding box of the node currently rendered as selected, if any.
	fn selected_node_rect(&self) -> Option<ClientRect>;

	/// Default grouped command items for a registry category.
	fn command_groups(&self, category: ItemCategory) -> Vec<ItemGroup>;

	/// Registers interest in the given lifecycle signals. The host is
	/// expected to deliver each subscribed signal to
	/// [`InlineMenu::handle_signal`] until [`unsubscribe`] is called.
	///
	/// [`InlineMenu::handle_signal`]: crate::controller::InlineMenu::handle_signal
	/// [`unsubscribe`]: EditorHost::unsubscribe
	fn subscribe(&mut self, signals: SignalSet);

	/// Withdraws the subscription made by [`subscribe`].
	///
	/// [`subscribe`]: EditorHost::subscribe
	fn unsubscribe(&mut self);

	/// Preloads the fonts the menu glyphs need. Called once per controller
	/// construction; implementations must be idempotent.
	fn preload_fonts(&mut self);
}
