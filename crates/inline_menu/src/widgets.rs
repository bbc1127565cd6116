//! Widget seams owned by the controller.
//!
//! The tooltip and menu widgets are collaborators supplied by the host; the
//! controller only issues open/close/show requests and never reaches into
//! their internal state. One widget pair belongs to exactly one controller.

use serde_json::Value;
use vellum_primitives::{Anchor, Mark};

use crate::items::ItemGroup;

/// Attributes of a hyperlink mark under the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttrs {
	/// Link target.
	pub href: String,
	/// Optional link title.
	pub title: Option<String>,
}

impl LinkAttrs {
	/// Extracts link attributes from a `"link"` mark.
	///
	/// Returns `None` for marks of any other type, and for malformed link
	/// marks without a string `href`.
	pub fn from_mark(mark: &Mark) -> Option<Self> {
		if !mark.is("link") {
			return None;
		}
		let href = mark.attr("href")?.as_str()?.to_string();
		let title = mark
			.attr("title")
			.and_then(Value::as_str)
			.map(str::to_string);
		Some(Self { href, title })
	}
}

/// Content displayed inside the tooltip surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipContent {
	/// A hyperlink preview for the mark under the caret.
	LinkPreview(LinkAttrs),
}

/// A positioned floating panel.
///
/// Implementations own their transition state; a close issued mid-transition
/// must be safe.
pub trait TooltipWidget {
	/// Opens the tooltip (or moves it, if already open) at the given anchor.
	fn open(&mut self, content: TooltipContent, at: Anchor);
	/// Closes the tooltip.
	fn close(&mut self);
	/// Releases the widget's resources. Called once, on controller teardown.
	fn detach(&mut self);
}

/// A command menu rendered into a display surface shared with the tooltip.
pub trait MenuWidget {
	/// Renders the item groups at the given anchor.
	fn show(&mut self, items: &[ItemGroup], at: Anchor);
	/// True while the user is interacting with the menu (a dropdown or
	/// submenu is open). While active, the controller suppresses updates;
	/// the host re-arms evaluation by calling [`InlineMenu::force`] from
	/// the widget's completion callback.
	///
	/// [`InlineMenu::force`]: crate::controller::InlineMenu::force
	fn is_active(&self) -> bool;
}
