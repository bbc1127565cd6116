use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};
use vellum_primitives::{Anchor, ClientRect, DocPos, Mark, Selection};

use super::*;
use crate::items::MenuItem;

#[derive(Debug, Clone, PartialEq)]
enum WidgetCall {
	MenuShown { first_group: String, at: Anchor },
	TooltipOpened { content: TooltipContent, at: Anchor },
	TooltipClosed,
	TooltipDetached,
}

#[derive(Default)]
struct WidgetLog {
	calls: RefCell<Vec<WidgetCall>>,
}

impl WidgetLog {
	fn push(&self, call: WidgetCall) {
		self.calls.borrow_mut().push(call);
	}

	fn take(&self) -> Vec<WidgetCall> {
		std::mem::take(&mut *self.calls.borrow_mut())
	}
}

struct TestTooltip(Rc<WidgetLog>);

impl TooltipWidget for TestTooltip {
	fn open(&mut self, content: TooltipContent, at: Anchor) {
		self.0.push(WidgetCall::TooltipOpened { content, at });
	}

	fn close(&mut self) {
		self.0.push(WidgetCall::TooltipClosed);
	}

	fn detach(&mut self) {
		self.0.push(WidgetCall::TooltipDetached);
	}
}

struct TestMenu {
	log: Rc<WidgetLog>,
	active: Rc<Cell<bool>>,
}

impl MenuWidget for TestMenu {
	fn show(&mut self, items: &[ItemGroup], at: Anchor) {
		let first_group = items.first().map(|group| group.name.clone()).unwrap_or_default();
		self.log.push(WidgetCall::MenuShown { first_group, at });
	}

	fn is_active(&self) -> bool {
		self.active.get()
	}
}

struct TestHost {
	selection: Selection,
	focus: bool,
	marks: Option<(DocPos, Vec<Mark>)>,
	rects: Vec<ClientRect>,
	node_rect: Option<ClientRect>,
	subscribed: Option<SignalSet>,
	font_loads: u32,
}

impl Default for TestHost {
	fn default() -> Self {
		Self {
			selection: Selection::caret(0),
			focus: true,
			marks: None,
			rects: Vec::new(),
			node_rect: None,
			subscribed: None,
			font_loads: 0,
		}
	}
}

impl EditorHost for TestHost {
	fn selection(&self) -> Selection {
		self.selection
	}

	fn has_focus(&self) -> bool {
		self.focus
	}

	fn marks_at(&self, pos: DocPos) -> Vec<Mark> {
		match &self.marks {
			Some((at, marks)) if *at == pos => marks.clone(),
			_ => Vec::new(),
		}
	}

	fn coords_at_pos(&self, pos: DocPos) -> Anchor {
		Anchor::new(pos as f64 * 8.0, 42.0)
	}

	fn selection_rects(&self) -> Vec<ClientRect> {
		self.rects.clone()
	}

	fn selected_node_rect(&self) -> Option<ClientRect> {
		self.node_rect
	}

	fn command_groups(&self, category: ItemCategory) -> Vec<ItemGroup> {
		match category {
			ItemCategory::Inline => vec![ItemGroup::new(
				"inline-format",
				vec![
					MenuItem::new("toggle_strong", "Bold"),
					MenuItem::new("toggle_em", "Italic"),
				],
			)],
			ItemCategory::Block => vec![ItemGroup::new(
				"block-type",
				vec![
					MenuItem::new("make_heading", "Heading"),
					MenuItem::new("wrap_blockquote", "Quote"),
				],
			)],
		}
	}

	fn subscribe(&mut self, signals: SignalSet) {
		self.subscribed = Some(signals);
	}

	fn unsubscribe(&mut self) {
		self.subscribed = None;
	}

	fn preload_fonts(&mut self) {
		self.font_loads += 1;
	}
}

struct Fixture {
	log: Rc<WidgetLog>,
	active: Rc<Cell<bool>>,
}

fn inline_menu_with(host: &mut TestHost, config: InlineMenuConfig) -> (InlineMenu, Fixture) {
	let log = Rc::new(WidgetLog::default());
	let active = Rc::new(Cell::new(false));
	let menu = InlineMenu::new(
		host,
		config,
		Box::new(TestTooltip(log.clone())),
		Box::new(TestMenu {
			log: log.clone(),
			active: active.clone(),
		}),
	);
	(menu, Fixture { log, active })
}

fn inline_menu(host: &mut TestHost) -> (InlineMenu, Fixture) {
	inline_menu_with(host, InlineMenuConfig::default())
}

fn link_mark(href: &str) -> Mark {
	Mark::new("link")
		.with_attr("href", json!(href))
		.with_attr("title", Value::Null)
}

fn same_line_rects() -> Vec<ClientRect> {
	vec![
		ClientRect::new(10.0, 100.0, 50.0, 110.0),
		ClientRect::new(50.0, 100.0, 90.0, 110.0),
	]
}

#[test]
fn construction_attaches_to_host() {
	let mut host = TestHost::default();
	let (_menu, _fixture) = inline_menu(&mut host);
	assert_eq!(host.subscribed, Some(SUBSCRIBED_SIGNALS));
	assert_eq!(host.font_loads, 1);
}

#[test]
fn unfocused_editor_closes_tooltip() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	host.focus = false;
	let (menu, _fixture) = inline_menu(&mut host);

	// Focus loss overrides the range-menu policy.
	assert_eq!(menu.prepare_update(&host), Some(MenuAction::CloseTooltip));
}

#[test]
fn block_node_selection_shows_node_items() {
	let mut host = TestHost::default();
	host.selection = Selection::node(5, true);
	host.node_rect = Some(ClientRect::new(10.0, 40.0, 200.0, 90.0));
	let (menu, _fixture) = inline_menu(&mut host);

	let MenuAction::ShowMenu { items, coords } = menu.prepare_update(&host).unwrap() else {
		panic!("expected a menu action");
	};
	assert_eq!(items[0].name, "block-type");
	assert_eq!(coords, Anchor::new(30.0, 40.0));
}

#[test]
fn block_node_selection_without_rendered_node_uses_neutral_anchor() {
	let mut host = TestHost::default();
	host.selection = Selection::node(5, true);
	let (menu, _fixture) = inline_menu(&mut host);

	let MenuAction::ShowMenu { coords, .. } = menu.prepare_update(&host).unwrap() else {
		panic!("expected menu");
	};
	assert_eq!(coords, Anchor::ZERO);
}

#[test]
fn range_selection_shows_inline_items_at_top_center() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	let (menu, _fixture) = inline_menu(&mut host);

	let MenuAction::ShowMenu { items, coords } = menu.prepare_update(&host).unwrap() else {
		panic!("expected a menu action");
	};
	assert_eq!(items[0].name, "inline-format");
	assert_eq!(coords, Anchor::new(50.0, 100.0));
}

#[test]
fn inline_node_selection_uses_the_node_anchor() {
	let mut host = TestHost::default();
	host.selection = Selection::node(4, false);
	host.node_rect = Some(ClientRect::new(10.0, 40.0, 30.0, 60.0));
	// Rects would give a different anchor; the node box must win.
	host.rects = same_line_rects();
	let (menu, _fixture) = inline_menu(&mut host);

	let MenuAction::ShowMenu { items, coords } = menu.prepare_update(&host).unwrap() else {
		panic!("expected a menu action");
	};
	assert_eq!(items[0].name, "inline-format");
	assert_eq!(coords, Anchor::new(20.0, 40.0));
}

#[test]
fn caret_in_link_shows_preview() {
	let mut host = TestHost::default();
	host.selection = Selection::caret(7);
	host.marks = Some((7, vec![Mark::new("strong"), link_mark("https://x")]));
	let (menu, _fixture) = inline_menu(&mut host);

	let action = menu.prepare_update(&host).unwrap();
	assert_eq!(
		action,
		MenuAction::ShowLinkPreview {
			link: LinkAttrs {
				href: "https://x".to_string(),
				title: None,
			},
			coords: Anchor::new(56.0, 42.0),
		}
	);
}

#[test]
fn caret_outside_any_link_closes_tooltip() {
	let mut host = TestHost::default();
	host.selection = Selection::caret(3);
	let (menu, _fixture) = inline_menu(&mut host);
	assert_eq!(menu.prepare_update(&host), Some(MenuAction::CloseTooltip));
}

#[test]
fn link_preview_can_be_disabled() {
	let mut host = TestHost::default();
	host.selection = Selection::caret(7);
	host.marks = Some((7, vec![link_mark("https://x")]));
	let config = InlineMenuConfig {
		show_links: false,
		..InlineMenuConfig::default()
	};
	let (menu, _fixture) = inline_menu_with(&mut host, config);
	assert_eq!(menu.prepare_update(&host), Some(MenuAction::CloseTooltip));
}

#[test]
fn config_item_overrides_replace_registry_defaults() {
	let mut host = TestHost::default();
	host.selection = Selection::range(1, 5);
	host.rects = same_line_rects();
	let config = InlineMenuConfig {
		items: Some(vec![ItemGroup::new(
			"custom",
			vec![MenuItem::new("toggle_em", "Italic")],
		)]),
		..InlineMenuConfig::default()
	};
	let (menu, _fixture) = inline_menu_with(&mut host, config);

	let MenuAction::ShowMenu { items, .. } = menu.prepare_update(&host).unwrap() else {
		panic!("expected menu");
	};
	assert_eq!(items[0].name, "custom");
}

#[test]
fn active_menu_suppresses_recomputation() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	let (mut menu, fixture) = inline_menu(&mut host);

	fixture.active.set(true);
	assert_eq!(menu.prepare_update(&host), None);

	menu.handle_signal(&host, Signal::SelectionChange);
	assert_eq!(fixture.log.take(), Vec::new());
}

#[test]
fn completion_callback_rearms_evaluation() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	let (mut menu, fixture) = inline_menu(&mut host);

	fixture.active.set(true);
	menu.handle_signal(&host, Signal::SelectionChange);
	assert_eq!(fixture.log.take(), Vec::new());

	// The widget's completion callback is the only re-arm path.
	fixture.active.set(false);
	menu.force(&host);
	assert_eq!(
		fixture.log.take(),
		vec![WidgetCall::MenuShown {
			first_group: "inline-format".to_string(),
			at: Anchor::new(50.0, 100.0),
		}]
	);
}

#[test]
fn prepare_update_is_idempotent() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	let (menu, _fixture) = inline_menu(&mut host);

	let first = menu.prepare_update(&host);
	let second = menu.prepare_update(&host);
	assert_eq!(first, second);
}

#[test]
fn signal_delivery_applies_the_decision() {
	let mut host = TestHost::default();
	host.selection = Selection::range(4, 12);
	host.rects = same_line_rects();
	let (mut menu, fixture) = inline_menu(&mut host);

	menu.handle_signal(&host, Signal::SelectionChange);
	assert_eq!(
		fixture.log.take(),
		vec![WidgetCall::MenuShown {
			first_group: "inline-format".to_string(),
			at: Anchor::new(50.0, 100.0),
		}]
	);

	host.focus = false;
	menu.handle_signal(&host, Signal::Blur);
	assert_eq!(fixture.log.take(), vec![WidgetCall::TooltipClosed]);
}

#[test]
fn detach_releases_widgets_and_subscription() {
	let mut host = TestHost::default();
	let (mut menu, fixture) = inline_menu(&mut host);
	assert!(host.subscribed.is_some());

	menu.detach(&mut host);
	assert_eq!(host.subscribed, None);
	assert_eq!(fixture.log.take(), vec![WidgetCall::TooltipDetached]);

	// Idempotent, and dead to further delivery.
	menu.detach(&mut host);
	menu.handle_signal(&host, Signal::SelectionChange);
	menu.force(&host);
	assert_eq!(fixture.log.take(), Vec::new());
}

#[test]
fn configure_replaces_and_tears_down_instances() {
	let mut host = TestHost::default();
	let mut slot: Option<InlineMenu> = None;
	let log_a = Rc::new(WidgetLog::default());
	let log_b = Rc::new(WidgetLog::default());

	let widgets = |log: &Rc<WidgetLog>| {
		let tooltip: Box<dyn TooltipWidget> = Box::new(TestTooltip(log.clone()));
		let menu: Box<dyn MenuWidget> = Box::new(TestMenu {
			log: log.clone(),
			active: Rc::new(Cell::new(false)),
		});
		(tooltip, menu)
	};

	configure(&mut slot, &mut host, InlineMenuSetting::Toggle(true), || {
		widgets(&log_a)
	});
	assert!(slot.is_some());
	assert_eq!(host.font_loads, 1);

	// Reconfiguring tears the old instance down before attaching the new.
	configure(
		&mut slot,
		&mut host,
		InlineMenuSetting::Config(InlineMenuConfig::default()),
		|| widgets(&log_b),
	);
	assert!(slot.is_some());
	assert_eq!(log_a.take(), vec![WidgetCall::TooltipDetached]);
	assert_eq!(host.font_loads, 2);

	configure(&mut slot, &mut host, InlineMenuSetting::Toggle(false), || {
		unreachable!("no widgets needed to disable")
	});
	assert!(slot.is_none());
	assert_eq!(log_b.take(), vec![WidgetCall::TooltipDetached]);
	assert_eq!(host.subscribed, None);
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
	prop_oneof![
		(0usize..64).prop_map(Selection::caret),
		(0usize..64, 0usize..64).prop_map(|(anchor, head)| Selection::range(anchor, head)),
		(0usize..64, any::<bool>()).prop_map(|(at, block)| Selection::node(at, block)),
	]
}

proptest! {
	#[test]
	fn suppression_dominates_every_state(
		selection in selection_strategy(),
		focus: bool,
		linked: bool,
	) {
		let mut host = TestHost::default();
		host.selection = selection;
		host.focus = focus;
		if linked {
			host.marks = Some((selection.head(), vec![link_mark("https://x")]));
		}
		let (menu, fixture) = inline_menu(&mut host);
		fixture.active.set(true);
		prop_assert_eq!(menu.prepare_update(&host), None);
	}

	#[test]
	fn empty_selection_without_link_always_closes(head in 0usize..64) {
		let mut host = TestHost::default();
		host.selection = Selection::caret(head);
		let (menu, _fixture) = inline_menu(&mut host);
		prop_assert_eq!(menu.prepare_update(&host), Some(MenuAction::CloseTooltip));
	}

	#[test]
	fn node_items_appear_only_for_block_nodes(
		selection in selection_strategy(),
		linked: bool,
	) {
		let mut host = TestHost::default();
		host.selection = selection;
		host.rects = same_line_rects();
		host.node_rect = Some(ClientRect::new(10.0, 40.0, 80.0, 90.0));
		if linked {
			host.marks = Some((selection.head(), vec![link_mark("https://x")]));
		}
		let (menu, _fixture) = inline_menu(&mut host);

		if let Some(MenuAction::ShowMenu { items, .. }) = menu.prepare_update(&host) {
			if items[0].name == "block-type" {
				prop_assert!(selection.is_block_node());
			} else {
				prop_assert!(!selection.is_block_node());
				prop_assert!(!selection.is_empty());
			}
		}
	}
}
