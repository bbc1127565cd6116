//! Inline menu controller.
//!
//! On every admitted update tick the controller decides which floating panel
//! belongs near the selection (a block menu, a range menu, a link preview,
//! or none) and applies that decision to the widget pair it owns. The
//! decision is computed as a [`MenuAction`] value first and applied in a
//! separate phase, so the scheduler can discard a superseded decision
//! without side effects.

use std::sync::Arc;

use vellum_primitives::{Anchor, DocPos};

use crate::config::{InlineMenuConfig, InlineMenuSetting};
use crate::coords;
use crate::host::EditorHost;
use crate::items::{ItemCategory, ItemGroup};
use crate::signal::{Signal, SignalSet};
use crate::update::{UpdateScheduler, UpdateTicket};
use crate::widgets::{LinkAttrs, MenuWidget, TooltipContent, TooltipWidget};

/// Signals the controller subscribes to.
pub const SUBSCRIBED_SIGNALS: SignalSet = SignalSet::CHANGE
	.union(SignalSet::SELECTION_CHANGE)
	.union(SignalSet::BLUR);

/// A deferred UI decision: computed on one tick, consumed exactly once by
/// the apply phase.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
	/// Close whatever panel is open.
	CloseTooltip,
	/// Show a command menu at the anchor.
	ShowMenu {
		/// Item groups to render.
		items: Arc<[ItemGroup]>,
		/// Anchor for the menu surface.
		coords: Anchor,
	},
	/// Show a hyperlink preview at the anchor.
	ShowLinkPreview {
		/// The link under the caret.
		link: LinkAttrs,
		/// Anchor for the preview, at the caret.
		coords: Anchor,
	},
}

impl MenuAction {
	/// Stable action name for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			MenuAction::CloseTooltip => "close-tooltip",
			MenuAction::ShowMenu { .. } => "show-menu",
			MenuAction::ShowLinkPreview { .. } => "show-link-preview",
		}
	}
}

/// The inline menu controller. One instance per editor; owns its tooltip
/// and menu widgets exclusively.
pub struct InlineMenu {
	items: Arc<[ItemGroup]>,
	node_items: Arc<[ItemGroup]>,
	show_links: bool,
	update: UpdateScheduler,
	tooltip: Box<dyn TooltipWidget>,
	menu: Box<dyn MenuWidget>,
	detached: bool,
}

impl InlineMenu {
	/// Constructs a controller and attaches it to the host.
	///
	/// Resolves the configured item sets against the host's command-group
	/// registry, preloads menu fonts, and subscribes to
	/// [`SUBSCRIBED_SIGNALS`]. The widget pair must not be shared with any
	/// other controller.
	pub fn new<H: EditorHost>(
		host: &mut H,
		config: InlineMenuConfig,
		tooltip: Box<dyn TooltipWidget>,
		menu: Box<dyn MenuWidget>,
	) -> Self {
		let items: Arc<[ItemGroup]> = config
			.items
			.unwrap_or_else(|| host.command_groups(ItemCategory::Inline))
			.into();
		let node_items: Arc<[ItemGroup]> = config
			.node_items
			.unwrap_or_else(|| host.command_groups(ItemCategory::Block))
			.into();

		host.preload_fonts();
		host.subscribe(SUBSCRIBED_SIGNALS);
		tracing::debug!(show_links = config.show_links, "menu.attach");

		Self {
			items,
			node_items,
			show_links: config.show_links,
			update: UpdateScheduler::new(SUBSCRIBED_SIGNALS),
			tooltip,
			menu,
			detached: false,
		}
	}

	/// Entry point for host signal delivery.
	pub fn handle_signal<H: EditorHost>(&mut self, host: &H, signal: Signal) {
		let Some(ticket) = self.update.on_signal(signal) else {
			return;
		};
		self.run_cycle(host, ticket);
		self.drain_forced(host);
	}

	/// Re-evaluates unconditionally.
	///
	/// Wired by the host as the menu widget's completion callback: this is
	/// the only way evaluation is re-armed after the widget's
	/// [`is_active`](MenuWidget::is_active) flag clears. Activity state is
	/// never polled.
	pub fn force<H: EditorHost>(&mut self, host: &H) {
		self.update.force();
		self.drain_forced(host);
	}

	fn drain_forced<H: EditorHost>(&mut self, host: &H) {
		while self.update.take_forced() {
			let Some(ticket) = self.update.begin_forced() else {
				return;
			};
			self.run_cycle(host, ticket);
		}
	}

	fn run_cycle<H: EditorHost>(&mut self, host: &H, ticket: UpdateTicket) {
		let action = self.prepare_update(host);
		if !self.update.should_apply(ticket) {
			tracing::trace!("menu.update.superseded");
			return;
		}
		match action {
			Some(action) => self.apply(action),
			None => tracing::trace!("menu.update.suppressed"),
		}
	}

	/// Decides the next UI action for the current editor state.
	///
	/// Returns `None` while the menu widget is active: recomputation is
	/// suppressed entirely so the panel is not yanked away mid-interaction.
	/// Coordinates are only measured in branches that show something, so a
	/// tick that closes the panel does no layout reads.
	pub fn prepare_update<H: EditorHost>(&self, host: &H) -> Option<MenuAction> {
		if self.menu.is_active() {
			return None;
		}

		let selection = host.selection();
		let action = if !host.has_focus() {
			MenuAction::CloseTooltip
		} else if selection.is_block_node() {
			MenuAction::ShowMenu {
				items: self.node_items.clone(),
				coords: coords::top_of_node_selection(host.selected_node_rect()),
			}
		} else if !selection.is_empty() {
			let coords = if selection.is_node() {
				coords::top_of_node_selection(host.selected_node_rect())
			} else {
				coords::top_center_of_selection(&host.selection_rects())
			};
			MenuAction::ShowMenu {
				items: self.items.clone(),
				coords,
			}
		} else if self.show_links
			&& let Some(link) = Self::link_under_cursor(host, selection.head())
		{
			MenuAction::ShowLinkPreview {
				coords: host.coords_at_pos(selection.head()),
				link,
			}
		} else {
			MenuAction::CloseTooltip
		};
		Some(action)
	}

	fn link_under_cursor<H: EditorHost>(host: &H, head: DocPos) -> Option<LinkAttrs> {
		host.marks_at(head).iter().find_map(LinkAttrs::from_mark)
	}

	fn apply(&mut self, action: MenuAction) {
		tracing::trace!(action = action.kind(), "menu.apply");
		match action {
			MenuAction::CloseTooltip => self.tooltip.close(),
			MenuAction::ShowMenu { items, coords } => self.menu.show(&items, coords),
			MenuAction::ShowLinkPreview { link, coords } => {
				self.tooltip.open(TooltipContent::LinkPreview(link), coords);
			}
		}
	}

	/// Detaches from the host and releases the widgets. Idempotent.
	pub fn detach<H: EditorHost>(&mut self, host: &mut H) {
		if self.detached {
			return;
		}
		self.detached = true;
		self.update.detach();
		self.tooltip.detach();
		host.unsubscribe();
		tracing::debug!("menu.detach");
	}
}

/// Applies the host's `inlineMenu` setting to a controller slot.
///
/// Tears down any previous controller, then constructs a new one when the
/// setting enables the feature. `widgets` supplies a fresh widget pair and
/// is only called when one is needed.
pub fn configure<H, F>(
	slot: &mut Option<InlineMenu>,
	host: &mut H,
	setting: InlineMenuSetting,
	widgets: F,
) where
	H: EditorHost,
	F: FnOnce() -> (Box<dyn TooltipWidget>, Box<dyn MenuWidget>),
{
	if let Some(mut previous) = slot.take() {
		previous.detach(host);
	}
	if let Some(config) = setting.into_config() {
		let (tooltip, menu) = widgets();
		*slot = Some(InlineMenu::new(host, config, tooltip, menu));
	}
}

#[cfg(test)]
mod tests;
