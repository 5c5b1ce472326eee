//! Dependency Tracker
//!
//! Remembers the dependency list passed on the previous invocation and
//! reports which positions hold a different value on the next one.
//!
//! ## Rules
//!
//! - The first invocation only records the list. So does any invocation
//!   following an empty list, since there is nothing to compare against.
//! - Positions are compared pairwise with `PartialEq`, up to the length of
//!   the current list. Positions past the end of the previous list count as
//!   changed, with an absent previous value. Entries dropped from the end are
//!   not reported.
//! - The stored list is replaced in full after every invocation.
//!
//! ## Example
//!
//! ```
//! use depwatch_hooks::{DependencyTracker, MemorySink, TrackerOptions};
//!
//! let sink = MemorySink::new();
//! let mut tracker = DependencyTracker::with_options(TrackerOptions::default().with_sink(sink.clone()));
//!
//! tracker.track(vec![1, 2, 3]);
//! let deps = tracker.track(vec![1, 5, 3]);
//!
//! assert_eq!(deps, vec![1, 5, 3]);
//! assert_eq!(sink.lines(), vec!["Dependency 2 changed:\n2\n\n5"]);
//! ```

use std::fmt;

use crate::options::TrackerOptions;
use crate::sink::{ABSENT_VALUE, DiagnosticEntry};

/// A position whose value differs from the previous invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyChange<T> {
	/// 1-based position in the dependency list
	pub index: usize,
	/// Value at this position on the previous invocation, `None` if the list was shorter
	pub previous: Option<T>,
	/// Value at this position now
	pub current: T,
}

impl<T: fmt::Debug> DependencyChange<T> {
	/// Render this change for a sink
	pub fn to_entry(&self, label: Option<&str>) -> DiagnosticEntry {
		DiagnosticEntry {
			label: label.map(String::from),
			index: self.index,
			previous: match &self.previous {
				Some(value) => format!("{value:?}"),
				None => ABSENT_VALUE.to_string(),
			},
			current: format!("{:?}", self.current),
		}
	}
}

/// Compare two dependency lists position by position.
///
/// Only positions of `current` are visited. See the [module docs](self) for
/// how length differences are handled.
pub fn diff_dependencies<T>(previous: &[T], current: &[T]) -> Vec<DependencyChange<T>>
where
	T: PartialEq + Clone,
{
	current
		.iter()
		.enumerate()
		.filter_map(|(i, dep)| match previous.get(i) {
			Some(prev) if prev == dep => None,
			prev => Some(DependencyChange {
				index: i + 1,
				previous: prev.cloned(),
				current: dep.clone(),
			}),
		})
		.collect()
}

/// Tracks one dependency list across invocations
///
/// This is the framework-independent form; keep it in a field of whatever
/// owns the render cycle. [`use_track_dependency_changes`](crate::use_track_dependency_changes)
/// keeps one in a hook slot.
pub struct DependencyTracker<T> {
	previous: Vec<T>,
	options: TrackerOptions,
}

impl<T> DependencyTracker<T>
where
	T: PartialEq + Clone + fmt::Debug,
{
	/// Create a tracker that reports through `tracing`
	pub fn new() -> Self {
		Self::with_options(TrackerOptions::default())
	}

	/// Create a tracker with explicit options
	pub fn with_options(options: TrackerOptions) -> Self {
		Self {
			previous: Vec::new(),
			options,
		}
	}

	/// Compare `deps` with the stored list, emit an entry per change and
	/// return `deps` unchanged.
	pub fn track(&mut self, deps: Vec<T>) -> Vec<T> {
		self.record(&deps);
		deps
	}

	/// Compare `deps` with the stored list and emit an entry per change.
	///
	/// Returns the changes that were found.
	pub fn record(&mut self, deps: &[T]) -> Vec<DependencyChange<T>> {
		let changes = self.observe(deps);
		if self.options.is_enabled() {
			let label = self.options.label();
			for change in &changes {
				self.options.emit(&change.to_entry(label));
			}
		}
		changes
	}

	/// Compare `deps` with the stored list without emitting anything.
	///
	/// The stored list is still replaced by `deps`.
	pub fn observe(&mut self, deps: &[T]) -> Vec<DependencyChange<T>> {
		let changes = if self.previous.is_empty() {
			tracing::trace!(entries = deps.len(), "dependency tracker primed");
			Vec::new()
		} else {
			diff_dependencies(&self.previous, deps)
		};

		self.previous.clear();
		self.previous.extend_from_slice(deps);
		changes
	}

	/// The list stored by the last invocation
	pub fn previous(&self) -> &[T] {
		&self.previous
	}

	/// Forget the stored list
	pub fn reset(&mut self) {
		self.previous.clear();
	}

	/// Options in use
	pub fn options(&self) -> &TrackerOptions {
		&self.options
	}
}

impl<T> Default for DependencyTracker<T>
where
	T: PartialEq + Clone + fmt::Debug,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T: fmt::Debug> fmt::Debug for DependencyTracker<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DependencyTracker")
			.field("previous", &self.previous)
			.field("options", &self.options)
			.finish()
	}
}
