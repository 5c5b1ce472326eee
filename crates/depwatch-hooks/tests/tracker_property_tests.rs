//! Property-based tests for DependencyTracker
//!
//! Uses proptest to check the comparison rules over arbitrary dependency lists.

use depwatch_hooks::{DependencyTracker, MemorySink, TrackerOptions};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn tracker(sink: &MemorySink) -> DependencyTracker<i32> {
	DependencyTracker::with_options(TrackerOptions::default().with_sink(sink.clone()))
}

/// A non-empty list plus a copy where a chosen set of positions was changed
fn list_with_changes() -> impl Strategy<Value = (Vec<i32>, Vec<i32>, BTreeSet<usize>)> {
	prop::collection::vec((any::<i32>(), any::<bool>()), 1..16).prop_map(|entries| {
		let base: Vec<i32> = entries.iter().map(|(v, _)| *v).collect();
		let changed: Vec<i32> = entries
			.iter()
			.map(|(v, flip)| if *flip { v.wrapping_add(1) } else { *v })
			.collect();
		let positions = entries
			.iter()
			.enumerate()
			.filter(|(_, (_, flip))| *flip)
			.map(|(i, _)| i)
			.collect();
		(base, changed, positions)
	})
}

proptest! {
	#[test]
	fn prop_first_call_is_silent(deps in prop::collection::vec(any::<i32>(), 0..32)) {
		let sink = MemorySink::new();
		tracker(&sink).track(deps);
		prop_assert!(sink.is_empty());
	}

	#[test]
	fn prop_equal_lists_are_silent(deps in prop::collection::vec(any::<i32>(), 0..32)) {
		let sink = MemorySink::new();
		let mut tracker = tracker(&sink);
		tracker.track(deps.clone());
		tracker.track(deps);
		prop_assert!(sink.is_empty());
	}

	#[test]
	fn prop_one_entry_per_changed_position((base, changed, positions) in list_with_changes()) {
		let sink = MemorySink::new();
		let mut tracker = tracker(&sink);
		tracker.track(base.clone());
		tracker.track(changed.clone());

		let entries = sink.entries();
		prop_assert_eq!(entries.len(), positions.len());
		for (entry, position) in entries.iter().zip(positions.iter()) {
			prop_assert_eq!(entry.index, position + 1);
			prop_assert_eq!(&entry.previous, &base[*position].to_string());
			prop_assert_eq!(&entry.current, &changed[*position].to_string());
		}
	}

	#[test]
	fn prop_track_returns_input(
		first in prop::collection::vec(any::<i32>(), 0..16),
		second in prop::collection::vec(any::<i32>(), 0..16),
	) {
		let sink = MemorySink::new();
		let mut tracker = tracker(&sink);
		prop_assert_eq!(tracker.track(first.clone()), first);
		prop_assert_eq!(tracker.track(second.clone()), second.clone());
		prop_assert_eq!(tracker.previous(), second.as_slice());
	}

	#[test]
	fn prop_entries_bounded_by_current_length(
		first in prop::collection::vec(any::<i32>(), 1..16),
		second in prop::collection::vec(any::<i32>(), 0..16),
	) {
		let sink = MemorySink::new();
		let mut tracker = tracker(&sink);
		tracker.track(first.clone());
		tracker.track(second.clone());

		let entries = sink.entries();
		prop_assert!(entries.len() <= second.len());
		for entry in &entries {
			prop_assert!(entry.index >= 1 && entry.index <= second.len());
			if entry.index > first.len() {
				prop_assert_eq!(entry.previous.as_str(), "undefined");
			}
		}
	}
}
