//! Dependency tracking hook: use_track_dependency_changes
//!
//! Wraps a dependency list so that every render which changes it logs the
//! positions that changed.

use std::fmt;

use depwatch_reactive::{HookError, use_effect_with_deps, use_ref};

use crate::options::TrackerOptions;
use crate::tracker::DependencyTracker;

/// Logs which entries of `deps` changed since the previous render.
///
/// Call it inside a component render and pass the result wherever the list
/// itself would go. The list is returned unchanged.
///
/// The comparison runs as a passive effect keyed on `deps`, so it happens
/// after the render commits and only on renders whose list differs from the
/// previous one. The first render is silent.
///
/// Output goes to `tracing` at debug level. Use
/// [`use_track_dependency_changes_with`] to pick a label, level or sink.
///
/// # Example
///
/// ```ignore
/// use depwatch_hooks::use_track_dependency_changes;
/// use depwatch_reactive::use_effect_with_deps;
///
/// fn profile_card(user_id: u64, filter: &str) {
///     let deps = use_track_dependency_changes(vec![user_id.to_string(), filter.to_string()]);
///     use_effect_with_deps(deps, |deps| {
///         // fetch profile ...
///     })
///     .ok();
/// }
/// ```
///
/// # Note
///
/// Outside a render, or when hook order changed between renders, nothing is
/// tracked: a warning is logged and `deps` is returned as-is.
pub fn use_track_dependency_changes<T>(deps: Vec<T>) -> Vec<T>
where
	T: PartialEq + Clone + fmt::Debug + 'static,
{
	use_track_dependency_changes_with(deps, TrackerOptions::default())
}

/// Same as [`use_track_dependency_changes`] with explicit options.
///
/// `options` is only read on the first render of the scope; later renders
/// keep the tracker created then.
///
/// # Example
///
/// ```ignore
/// use depwatch_hooks::{LogLevel, TrackerOptions, use_track_dependency_changes_with};
///
/// let deps = use_track_dependency_changes_with(
///     vec![page, page_size],
///     TrackerOptions::default().with_label("Pagination").with_level(LogLevel::Info),
/// );
/// ```
pub fn use_track_dependency_changes_with<T>(deps: Vec<T>, options: TrackerOptions) -> Vec<T>
where
	T: PartialEq + Clone + fmt::Debug + 'static,
{
	if let Err(error) = schedule_tracking(&deps, options) {
		tracing::warn!(
			target: crate::sink::TRACING_TARGET,
			%error,
			"dependency tracking skipped"
		);
	}
	deps
}

fn schedule_tracking<T>(deps: &[T], options: TrackerOptions) -> Result<(), HookError>
where
	T: PartialEq + Clone + fmt::Debug + 'static,
{
	let tracker = use_ref(move || DependencyTracker::with_options(options))?;

	use_effect_with_deps(deps.to_vec(), move |deps: &Vec<T>| {
		tracker.current_mut().record(deps);
	})
}
