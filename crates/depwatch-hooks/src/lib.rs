//! depwatch-hooks - Dependency Change Tracking
//!
//! A debugging hook that watches a dependency list across renders and logs
//! which entries changed, to find what keeps re-running an effect or memo.
//!
//! ## Modules
//!
//! - [`tracker`]: The framework-independent [`DependencyTracker`]
//! - [`hook`]: [`use_track_dependency_changes`] for components rendered by `depwatch-reactive`
//! - [`identity`]: [`ByRef`] for reference-identity comparison
//! - [`sink`]: Where change entries go (`tracing`, console, memory)
//! - [`options`]: Per-tracker options and environment settings
//! - [`console`]: Developer console output used by [`ConsoleSink`]
//!
//! ## Example
//!
//! ```ignore
//! use depwatch_hooks::use_track_dependency_changes;
//! use depwatch_reactive::{Scope, use_effect_with_deps};
//!
//! let scope = Scope::new();
//! scope.cycle(|| {
//!     let deps = use_track_dependency_changes(vec![query.clone(), page.to_string()]);
//!     use_effect_with_deps(deps, |deps| run_search(deps)).ok();
//! })?;
//! ```
//!
//! With the default options a changed entry is logged as a `tracing` debug
//! event on the `depwatch` target:
//!
//! ```text
//! Dependency 2 changed:
//! "1"
//!
//! "2"
//! ```

#![warn(missing_docs)]

pub mod console;
pub mod error;
pub mod hook;
pub mod identity;
pub mod options;
pub mod sink;
pub mod tracker;

pub use console::ConsoleMethod;
pub use error::ConfigError;
pub use hook::{use_track_dependency_changes, use_track_dependency_changes_with};
pub use identity::ByRef;
pub use options::{LogLevel, TrackerOptions, TrackerSettings};
pub use sink::{ConsoleSink, DiagnosticEntry, DiagnosticSink, MemorySink, TracingSink};
pub use tracker::{DependencyChange, DependencyTracker, diff_dependencies};
