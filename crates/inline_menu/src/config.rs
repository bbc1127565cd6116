//! Host-facing configuration for the `inlineMenu` feature flag.
//!
//! The flag's value is either a plain toggle or a configuration record, so
//! host config files can write `false`, `true`, or a map.

use serde::{Deserialize, Serialize};

use crate::items::ItemGroup;

/// Configuration record for an enabled inline menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineMenuConfig {
	/// Item groups shown for range selections. `None` uses the host's
	/// `"inline"` command groups.
	pub items: Option<Vec<ItemGroup>>,
	/// Item groups shown for block-node selections. `None` uses the host's
	/// `"block"` command groups.
	pub node_items: Option<Vec<ItemGroup>>,
	/// Whether to preview hyperlink marks under the caret.
	pub show_links: bool,
}

impl Default for InlineMenuConfig {
	fn default() -> Self {
		Self {
			items: None,
			node_items: None,
			show_links: true,
		}
	}
}

/// Value of the host's `inlineMenu` feature flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InlineMenuSetting {
	/// Plain toggle; `true` enables the menu with default configuration.
	Toggle(bool),
	/// Enabled with explicit configuration.
	Config(InlineMenuConfig),
}

impl InlineMenuSetting {
	/// The configuration to construct a controller with, or `None` when the
	/// feature is disabled.
	pub fn into_config(self) -> Option<InlineMenuConfig> {
		match self {
			Self::Toggle(false) => None,
			Self::Toggle(true) => Some(InlineMenuConfig::default()),
			Self::Config(config) => Some(config),
		}
	}
}

impl Default for InlineMenuSetting {
	fn default() -> Self {
		Self::Toggle(false)
	}
}
