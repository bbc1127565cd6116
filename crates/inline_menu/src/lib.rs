//! Contextual inline menu for vellum editors.
//!
//! Shows a floating command menu near the user's selection (block commands
//! for a selected block node, inline commands for a range), a hyperlink
//! preview when the caret rests on a link, and nothing otherwise.
//!
//! The host editor, tooltip widget, and menu widget are collaborators behind
//! traits ([`EditorHost`], [`TooltipWidget`], [`MenuWidget`]). On each
//! lifecycle signal the host delivers, the controller computes a deferred
//! [`MenuAction`] and applies it to the widgets, with the update scheduler
//! guaranteeing a superseded decision is never applied out of order.
//!
//! Hosts enable the feature through [`InlineMenuSetting`] and [`configure`].

/// Host-facing configuration for the `inlineMenu` feature flag.
pub mod config;
/// The controller: decision policy and apply phase.
pub mod controller;
/// Anchor coordinate resolution over host-reported geometry.
pub mod coords;
/// Host editor seam.
pub mod host;
/// Command item descriptors rendered by the menu widget.
pub mod items;
/// Editor lifecycle signals and subscription sets.
pub mod signal;
/// Update scheduling and ordering guarantees.
pub mod update;
/// Widget seams owned by the controller.
pub mod widgets;

pub use config::{InlineMenuConfig, InlineMenuSetting};
pub use controller::{InlineMenu, MenuAction, SUBSCRIBED_SIGNALS, configure};
pub use host::EditorHost;
pub use items::{ItemCategory, ItemGroup, MenuItem};
pub use signal::{Signal, SignalSet};
pub use update::{UpdateScheduler, UpdateTicket};
pub use widgets::{LinkAttrs, MenuWidget, TooltipContent, TooltipWidget};
