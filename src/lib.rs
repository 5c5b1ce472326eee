//! # depwatch
//!
//! Find out which dependency keeps re-running your effect.
//!
//! depwatch provides a React-style hook that remembers a component's
//! dependency list between renders and logs every position whose value
//! changed, plus the small hook runtime it runs on.
//!
//! ## Crates
//!
//! - [`hooks`]: `use_track_dependency_changes`, the standalone
//!   `DependencyTracker`, sinks and options (`depwatch-hooks`)
//! - [`reactive`]: Component scopes, `use_ref` and `use_effect_with_deps`
//!   (`depwatch-reactive`)
//!
//! ## Quick Example
//!
//! ```
//! use depwatch::prelude::*;
//!
//! let sink = MemorySink::new();
//! let scope = Scope::new();
//!
//! for page in [1, 1, 2] {
//!     let options = TrackerOptions::default().with_sink(sink.clone());
//!     scope
//!         .cycle(|| use_track_dependency_changes_with(vec![page], options))
//!         .unwrap();
//! }
//!
//! assert_eq!(sink.lines(), vec!["Dependency 1 changed:\n1\n\n2"]);
//! ```

pub mod hooks;
pub mod reactive;

/// Commonly used types and hooks
pub mod prelude {
	pub use crate::hooks::{
		ByRef, DependencyTracker, LogLevel, MemorySink, TrackerOptions, TrackerSettings,
		use_track_dependency_changes, use_track_dependency_changes_with,
	};
	pub use crate::reactive::{HookError, Ref, Scope, use_effect_with_deps, use_ref};
}
