//! Dependency change tracking
//!
//! This module provides access to depwatch-hooks: the
//! `use_track_dependency_changes` hook, the framework-independent
//! `DependencyTracker`, diagnostic sinks and tracker options.
//!
//! ## Example
//!
//! ```rust
//! use depwatch::hooks::{DependencyTracker, MemorySink, TrackerOptions};
//!
//! let sink = MemorySink::new();
//! let mut tracker = DependencyTracker::with_options(TrackerOptions::default().with_sink(sink.clone()));
//!
//! tracker.track(vec!["a"]);
//! tracker.track(vec!["a", "b"]);
//!
//! assert_eq!(sink.lines(), vec!["Dependency 2 changed:\nundefined\n\n\"b\""]);
//! ```

pub use depwatch_hooks::*;
