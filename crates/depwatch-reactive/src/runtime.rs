//! Hook Runtime
//!
//! This module provides the thread-local runtime that knows which component
//! [`Scope`] is currently rendering.
//!
//! ## Architecture
//!
//! 1. **Scope Stack**: The scope on top of the stack receives hook calls
//! 2. **Nested Renders**: Rendering a child scope inside a parent's render pushes
//!    the child and restores the parent afterwards
//! 3. **Thread Locality**: Each thread owns its own runtime, as in a single-threaded UI
//!
//! ## Example
//!
//! ```ignore
//! use depwatch_reactive::runtime::with_runtime;
//!
//! let depth = with_runtime(|rt| rt.depth());
//! assert_eq!(depth, 0);
//! ```

use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::HookError;
use crate::scope::Scope;

/// Unique identifier for component scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
	/// Create a new unique ScopeId
	pub fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for ScopeId {
	fn default() -> Self {
		Self::new()
	}
}

/// Thread-local hook runtime
///
/// Tracks the stack of scopes that are currently rendering.
pub struct Runtime {
	/// Scopes currently rendering, innermost last
	scope_stack: RefCell<Vec<Scope>>,
}

impl Runtime {
	/// Create a new Runtime instance
	pub fn new() -> Self {
		Self {
			scope_stack: RefCell::new(Vec::new()),
		}
	}

	/// Get the scope that is currently rendering
	pub fn current_scope(&self) -> Option<Scope> {
		self.scope_stack.borrow().last().cloned()
	}

	/// Push a scope onto the stack
	///
	/// This should be called when starting to render a scope.
	pub(crate) fn push_scope(&self, scope: Scope) {
		self.scope_stack.borrow_mut().push(scope);
	}

	/// Pop a scope from the stack
	///
	/// This should be called when the render of a scope finishes.
	pub(crate) fn pop_scope(&self) -> Option<Scope> {
		self.scope_stack.borrow_mut().pop()
	}

	/// Number of scopes currently rendering
	pub fn depth(&self) -> usize {
		self.scope_stack.borrow().len()
	}
}

impl Default for Runtime {
	fn default() -> Self {
		Self::new()
	}
}

// Thread-local runtime instance
//
// In WASM, there is only one thread, so this effectively provides a global runtime.
// On non-WASM platforms, each thread gets its own runtime instance.
thread_local! {
	static RUNTIME: Runtime = Runtime::new();
}

/// Get a reference to the thread's runtime
///
/// # Example
///
/// ```ignore
/// use depwatch_reactive::runtime::with_runtime;
///
/// let rendering = with_runtime(|rt| rt.current_scope().is_some());
/// ```
pub fn with_runtime<F, R>(f: F) -> R
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.with(f)
}

/// Try to access the runtime (safe version for Drop implementations)
///
/// Returns None if the thread-local storage has been destroyed.
pub(crate) fn try_with_runtime<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.try_with(f).ok()
}

/// Resolve the scope a hook call belongs to.
pub(crate) fn current_scope(hook: &'static str) -> Result<Scope, HookError> {
	with_runtime(|rt| rt.current_scope()).ok_or(HookError::NoActiveScope { hook })
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_scope_id_uniqueness() {
		let id1 = ScopeId::new();
		let id2 = ScopeId::new();
		let id3 = ScopeId::new();

		assert_ne!(id1, id2);
		assert_ne!(id2, id3);
		assert_ne!(id1, id3);
	}

	#[test]
	#[serial]
	fn test_runtime_scope_stack() {
		let runtime = Runtime::new();
		assert!(runtime.current_scope().is_none());

		let outer = Scope::new();
		let inner = Scope::new();

		runtime.push_scope(outer.clone());
		assert_eq!(runtime.current_scope().map(|s| s.id()), Some(outer.id()));

		runtime.push_scope(inner.clone());
		assert_eq!(runtime.current_scope().map(|s| s.id()), Some(inner.id()));
		assert_eq!(runtime.depth(), 2);

		runtime.pop_scope();
		assert_eq!(runtime.current_scope().map(|s| s.id()), Some(outer.id()));

		runtime.pop_scope();
		assert!(runtime.current_scope().is_none());
	}

	#[test]
	#[serial]
	fn test_current_scope_outside_render() {
		let err = current_scope("use_ref").unwrap_err();
		assert_eq!(err, HookError::NoActiveScope { hook: "use_ref" });
	}
}
