//! Simulated export as an explicit state machine.
//!
//! The machine never touches a clock. Each transition that needs a delay
//! hands back a [`Timer`]; the caller schedules it and reports back with
//! [`ExportMachine::fire`]. Only the most recently issued ticket is honoured,
//! so a superseded or cancelled timer that still fires is a no-op.

use std::time::Duration;

use log::debug;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::config::ExportTiming;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
	Pdf,
	Png,
	Jpeg,
	Link,
}

impl ExportFormat {
	pub fn name(self) -> &'static str {
		match self {
			ExportFormat::Pdf => "PDF Document",
			ExportFormat::Png => "PNG Image",
			ExportFormat::Jpeg => "JPEG Image",
			ExportFormat::Link => "Shareable Link",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			ExportFormat::Pdf => "High-quality document for printing and sharing",
			ExportFormat::Png => "High-resolution image with transparent background",
			ExportFormat::Jpeg => "Compressed image format for web sharing",
			ExportFormat::Link => "Create a public link to share your mind map",
		}
	}

	pub fn badge(self) -> &'static str {
		match self {
			ExportFormat::Pdf => "PDF",
			ExportFormat::Png => "PNG",
			ExportFormat::Jpeg => "JPEG",
			ExportFormat::Link => "URL",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportState {
	#[default]
	Idle,
	Exporting(ExportFormat),
	Completed(ExportFormat),
}

impl ExportState {
	pub fn format(self) -> Option<ExportFormat> {
		match self {
			ExportState::Idle => None,
			ExportState::Exporting(f) | ExportState::Completed(f) => Some(f),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
	pub ticket: Ticket,
	pub delay: Duration,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
	#[error("{0} export is already running or still shown as completed")]
	AlreadyRunning(ExportFormat),
}

#[derive(Clone, Debug)]
pub struct ExportMachine {
	state: ExportState,
	timing: ExportTiming,
	issued: u64,
	pending: Option<Ticket>,
}

impl ExportMachine {
	pub fn new(timing: ExportTiming) -> Self {
		Self {
			state: ExportState::Idle,
			timing,
			issued: 0,
			pending: None,
		}
	}

	pub fn state(&self) -> ExportState {
		self.state
	}

	/// Enters `exporting(format)`. A different format in flight or on
	/// display is superseded; repeating the current one is rejected.
	pub fn start(&mut self, format: ExportFormat) -> Result<Timer, ExportError> {
		if self.state.format() == Some(format) {
			return Err(ExportError::AlreadyRunning(format));
		}
		if let Some(stale) = self.pending.take() {
			debug!("{:?} superseded by {format}, dropping {stale:?}", self.state);
		}
		self.state = ExportState::Exporting(format);
		Ok(self.arm(self.timing.export_duration))
	}

	/// Applies the transition `ticket` was issued for. Returns the follow-up
	/// timer, if any.
	pub fn fire(&mut self, ticket: Ticket) -> Option<Timer> {
		if self.pending != Some(ticket) {
			debug!("ignoring stale {ticket:?}");
			return None;
		}
		self.pending = None;
		match self.state {
			ExportState::Exporting(format) => {
				debug!("{format} export completed");
				self.state = ExportState::Completed(format);
				Some(self.arm(self.timing.reset_delay))
			}
			ExportState::Completed(_) => {
				self.state = ExportState::Idle;
				None
			}
			ExportState::Idle => None,
		}
	}

	/// Returns to `idle`, handing back the ticket the caller must cancel.
	pub fn close(&mut self) -> Option<Ticket> {
		self.state = ExportState::Idle;
		self.pending.take()
	}

	fn arm(&mut self, delay: Duration) -> Timer {
		self.issued += 1;
		let ticket = Ticket(self.issued);
		self.pending = Some(ticket);
		Timer { ticket, delay }
	}
}
