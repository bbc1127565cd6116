//! Editor lifecycle signals consumed by the inline menu.
//!
//! The host delivers these synchronously from its own update cycle; there is
//! no event bus. Extensions declare the fixed set of signals they care about
//! at subscription time.

use bitflags::bitflags;

/// A named lifecycle signal emitted by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
	/// Document content changed.
	Change,
	/// The selection moved or changed shape.
	SelectionChange,
	/// The editor lost input focus.
	Blur,
}

impl Signal {
	/// Stable signal name, used for subscription wiring and diagnostics.
	pub fn as_str(&self) -> &'static str {
		match self {
			Signal::Change => "change",
			Signal::SelectionChange => "selection-change",
			Signal::Blur => "blur",
		}
	}
}

bitflags! {
	/// A set of lifecycle signals, used as a subscription filter.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct SignalSet: u8 {
		/// [`Signal::Change`]
		const CHANGE = 1 << 0;
		/// [`Signal::SelectionChange`]
		const SELECTION_CHANGE = 1 << 1;
		/// [`Signal::Blur`]
		const BLUR = 1 << 2;
	}
}

impl From<Signal> for SignalSet {
	fn from(signal: Signal) -> Self {
		match signal {
			Signal::Change => SignalSet::CHANGE,
			Signal::SelectionChange => SignalSet::SELECTION_CHANGE,
			Signal::Blur => SignalSet::BLUR,
		}
	}
}
