//! Diagnostic sinks
//!
//! A sink receives one [`DiagnosticEntry`] per changed dependency. The
//! tracker renders values before handing them over, so sinks do not need to
//! know the dependency type.
//!
//! | Sink | Destination |
//! |------|-------------|
//! | [`TracingSink`] | `tracing` events (default) |
//! | [`ConsoleSink`] | browser console / stderr |
//! | [`MemorySink`] | an in-memory list, for inspection and tests |

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::console::{self, ConsoleMethod};
use crate::options::LogLevel;

/// `tracing` target used for change events
pub const TRACING_TARGET: &str = "depwatch";

/// Text shown for a previous value that did not exist
pub const ABSENT_VALUE: &str = "undefined";

/// One changed dependency, rendered for output
///
/// `Display` produces the log line format:
///
/// ```text
/// [label] Dependency 2 changed:
/// 2
///
/// 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
	/// Label of the tracker that produced the entry
	pub label: Option<String>,
	/// 1-based position of the dependency
	pub index: usize,
	/// Rendered previous value, [`ABSENT_VALUE`] if there was none
	pub previous: String,
	/// Rendered current value
	pub current: String,
}

impl fmt::Display for DiagnosticEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(label) = &self.label {
			write!(f, "[{label}] ")?;
		}
		write!(
			f,
			"Dependency {} changed:\n{}\n\n{}",
			self.index, self.previous, self.current
		)
	}
}

/// Destination for dependency change entries
pub trait DiagnosticSink {
	/// Receive one entry
	fn emit(&self, entry: &DiagnosticEntry);
}

/// Emits each entry as a `tracing` event
///
/// Events use the [`TRACING_TARGET`] target and carry `index`, `previous`,
/// `current` and `label` fields. The event message is the entry's
/// `Display` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TracingSink {
	level: LogLevel,
}

impl TracingSink {
	/// Create a sink that emits at `level`
	pub fn new(level: LogLevel) -> Self {
		Self { level }
	}

	/// Level events are emitted at
	pub fn level(&self) -> LogLevel {
		self.level
	}
}

impl DiagnosticSink for TracingSink {
	fn emit(&self, entry: &DiagnosticEntry) {
		// Callsite levels must be constants, hence one arm per level
		macro_rules! emit_at {
			($level:ident) => {
				tracing::event!(
					target: TRACING_TARGET,
					tracing::Level::$level,
					index = entry.index,
					previous = %entry.previous,
					current = %entry.current,
					label = ?entry.label,
					"{}",
					entry
				)
			};
		}

		match self.level {
			LogLevel::Trace => emit_at!(TRACE),
			LogLevel::Debug => emit_at!(DEBUG),
			LogLevel::Info => emit_at!(INFO),
			LogLevel::Warn => emit_at!(WARN),
			LogLevel::Error => emit_at!(ERROR),
		}
	}
}

/// Writes each entry to the developer console
///
/// Uses `console.*` on `wasm32` and stderr elsewhere. The default level
/// writes with `console.log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleSink {
	level: LogLevel,
}

impl ConsoleSink {
	/// Create a sink that writes at `level`
	pub fn new(level: LogLevel) -> Self {
		Self { level }
	}

	/// Console method entries are written with
	pub fn method(&self) -> ConsoleMethod {
		ConsoleMethod::from(self.level)
	}

	/// Method and text written for `entry`
	pub fn render(&self, entry: &DiagnosticEntry) -> (ConsoleMethod, String) {
		(self.method(), entry.to_string())
	}
}

impl DiagnosticSink for ConsoleSink {
	fn emit(&self, entry: &DiagnosticEntry) {
		let (method, text) = self.render(entry);
		console::write(method, &text);
	}
}

/// Collects entries in memory
///
/// Clones share the same buffer, so a clone can be handed to a tracker
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	entries: Rc<RefCell<Vec<DiagnosticEntry>>>,
}

impl MemorySink {
	/// Create an empty sink
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of the collected entries
	pub fn entries(&self) -> Vec<DiagnosticEntry> {
		self.entries.borrow().clone()
	}

	/// Remove and return the collected entries
	pub fn take(&self) -> Vec<DiagnosticEntry> {
		core::mem::take(&mut *self.entries.borrow_mut())
	}

	/// Rendered log lines of the collected entries
	pub fn lines(&self) -> Vec<String> {
		self.entries.borrow().iter().map(ToString::to_string).collect()
	}

	/// Number of collected entries
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Whether nothing has been collected
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}

impl DiagnosticSink for MemorySink {
	fn emit(&self, entry: &DiagnosticEntry) {
		self.entries.borrow_mut().push(entry.clone());
	}
}
