//! Update scheduling for the inline menu.
//!
//! Coalesces host lifecycle signals into compute→apply cycles. Each admitted
//! signal bumps a generation counter and yields an [`UpdateTicket`]; an
//! action computed under a ticket is applied only while that ticket is still
//! the newest, so a superseded computation is discarded instead of clobbering
//! fresher UI state (last-write-wins, never out of order).
//!
//! Everything here is synchronous: the host delivers signals from its own
//! update cycle, and the controller computes and applies inside that
//! delivery. The ticket guard encodes the ordering invariant rather than
//! working around actual concurrency.

use crate::signal::{Signal, SignalSet};

/// Handle for one in-flight compute→apply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTicket {
	generation: u64,
}

/// Admission and ordering control for controller updates.
#[derive(Debug)]
pub struct UpdateScheduler {
	signals: SignalSet,
	generation: u64,
	forced: bool,
	detached: bool,
}

impl UpdateScheduler {
	/// Creates a scheduler subscribed to the given signals.
	pub fn new(signals: SignalSet) -> Self {
		Self {
			signals,
			generation: 0,
			forced: false,
			detached: false,
		}
	}

	/// The signals this scheduler admits.
	pub fn subscribed(&self) -> SignalSet {
		self.signals
	}

	/// Admits a delivered signal.
	///
	/// Returns a ticket for the new cycle, or `None` when the scheduler is
	/// detached or not subscribed to the signal.
	pub fn on_signal(&mut self, signal: Signal) -> Option<UpdateTicket> {
		if self.detached || !self.signals.contains(signal.into()) {
			return None;
		}
		self.generation += 1;
		tracing::trace!(
			signal = signal.as_str(),
			generation = self.generation,
			"menu.update.tick"
		);
		Some(UpdateTicket {
			generation: self.generation,
		})
	}

	/// Begins a forced cycle, regardless of signal subscription.
	pub fn begin_forced(&mut self) -> Option<UpdateTicket> {
		if self.detached {
			return None;
		}
		self.generation += 1;
		tracing::trace!(generation = self.generation, "menu.update.forced");
		Some(UpdateTicket {
			generation: self.generation,
		})
	}

	/// True while `ticket` still names the newest cycle.
	pub fn should_apply(&self, ticket: UpdateTicket) -> bool {
		!self.detached && ticket.generation == self.generation
	}

	/// Requests an unconditional re-evaluation at the next opportunity.
	///
	/// Wired to the menu widget's completion callback: a submenu closing
	/// must retrigger evaluation even without a new editor signal.
	pub fn force(&mut self) {
		if !self.detached {
			self.forced = true;
		}
	}

	/// Drains a pending force request.
	pub fn take_forced(&mut self) -> bool {
		std::mem::take(&mut self.forced)
	}

	/// Stops admitting signals and force requests. Irreversible.
	pub fn detach(&mut self) {
		self.detached = true;
		self.forced = false;
		tracing::debug!("menu.update.detach");
	}

	/// True once [`detach`](UpdateScheduler::detach) has run.
	pub fn is_detached(&self) -> bool {
		self.detached
	}
}
