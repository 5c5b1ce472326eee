//! Scope - Component Instance State
//!
//! A `Scope` is one mounted component instance. It owns the hook slots that
//! persist between renders and the queue of passive effects requested by the
//! latest render.
//!
//! ## Lifecycle
//!
//! 1. [`Scope::render`] makes the scope current and runs the component body.
//!    Hooks claim slots in call order.
//! 2. [`Scope::commit`] runs the effects queued by that render, in order.
//! 3. [`Scope::teardown`] drops every slot; the next render starts fresh,
//!    as if the instance had been recreated.
//!
//! ## Example
//!
//! ```ignore
//! use depwatch_reactive::{Scope, use_ref};
//!
//! let scope = Scope::new();
//! let renders = scope.cycle(|| {
//!     let count = use_ref(|| 0).unwrap();
//!     count.update(|n| *n += 1);
//!     count.get()
//! })?;
//! assert_eq!(renders, 1);
//! ```

use core::any::Any;
use core::cell::{Cell, RefCell};
use core::fmt;

extern crate alloc;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::error::HookError;
use crate::runtime::{ScopeId, try_with_runtime, with_runtime};

/// Type alias for queued effect functions
pub(crate) type EffectFn = Box<dyn FnOnce() + 'static>;

struct ScopeInner {
	id: ScopeId,
	/// Persistent hook state, indexed by call order
	slots: RefCell<Vec<Box<dyn Any>>>,
	/// Position of the next hook call in the current render
	cursor: Cell<usize>,
	/// Effects requested by the latest render, run on commit
	pending: RefCell<Vec<EffectFn>>,
	rendering: Cell<bool>,
}

/// A component instance in the hook runtime
///
/// Cloning a `Scope` shares the same instance. Scopes are single-threaded.
#[derive(Clone)]
pub struct Scope {
	inner: Rc<ScopeInner>,
}

impl Scope {
	/// Create a new, never-rendered scope
	pub fn new() -> Self {
		Self {
			inner: Rc::new(ScopeInner {
				id: ScopeId::new(),
				slots: RefCell::new(Vec::new()),
				cursor: Cell::new(0),
				pending: RefCell::new(Vec::new()),
				rendering: Cell::new(false),
			}),
		}
	}

	/// Unique identifier of this instance
	pub fn id(&self) -> ScopeId {
		self.inner.id
	}

	/// Run the render phase of this scope
	///
	/// The scope becomes the target of hook calls made by `f`. Effects requested
	/// during `f` are queued until [`commit`](Self::commit).
	///
	/// # Errors
	///
	/// Returns [`HookError::RenderInProgress`] if this scope is already rendering.
	pub fn render<F, R>(&self, f: F) -> Result<R, HookError>
	where
		F: FnOnce() -> R,
	{
		if self.inner.rendering.get() {
			return Err(HookError::RenderInProgress);
		}

		self.inner.cursor.set(0);
		self.inner.rendering.set(true);
		with_runtime(|rt| rt.push_scope(self.clone()));
		let _guard = RenderGuard { scope: self };

		Ok(f())
	}

	/// Run all effects queued by the latest render
	///
	/// Returns the number of effects that ran.
	///
	/// # Errors
	///
	/// Returns [`HookError::RenderInProgress`] when called from inside a render.
	pub fn commit(&self) -> Result<usize, HookError> {
		if self.inner.rendering.get() {
			return Err(HookError::RenderInProgress);
		}

		// Take the queue first so effects can read hook state freely
		let effects = core::mem::take(&mut *self.inner.pending.borrow_mut());
		let count = effects.len();
		for effect in effects {
			effect();
		}

		tracing::trace!(scope = ?self.inner.id, effects = count, "scope committed");
		Ok(count)
	}

	/// Render and commit in one step
	pub fn cycle<F, R>(&self, f: F) -> Result<R, HookError>
	where
		F: FnOnce() -> R,
	{
		let output = self.render(f)?;
		self.commit()?;
		Ok(output)
	}

	/// Drop all hook state and pending effects
	///
	/// # Errors
	///
	/// Returns [`HookError::RenderInProgress`] when called from inside a render.
	pub fn teardown(&self) -> Result<(), HookError> {
		if self.inner.rendering.get() {
			return Err(HookError::RenderInProgress);
		}

		self.inner.slots.borrow_mut().clear();
		self.inner.pending.borrow_mut().clear();
		self.inner.cursor.set(0);
		tracing::trace!(scope = ?self.inner.id, "scope torn down");
		Ok(())
	}

	/// Number of hook slots held by this scope
	pub fn hook_count(&self) -> usize {
		self.inner.slots.borrow().len()
	}

	/// Number of effects waiting for the next commit
	pub fn pending_effects(&self) -> usize {
		self.inner.pending.borrow().len()
	}

	/// Whether the render phase is running
	pub fn is_rendering(&self) -> bool {
		self.inner.rendering.get()
	}

	/// Claim the position of the next hook call
	pub(crate) fn next_hook_index(&self) -> usize {
		let index = self.inner.cursor.get();
		self.inner.cursor.set(index + 1);
		index
	}

	/// Read the slot stored at `index`, if a previous render created one
	pub(crate) fn slot<S>(&self, index: usize, hook: &'static str) -> Result<Option<S>, HookError>
	where
		S: Clone + 'static,
	{
		let slots = self.inner.slots.borrow();
		match slots.get(index) {
			Some(slot) => slot
				.downcast_ref::<S>()
				.cloned()
				.map(Some)
				.ok_or(HookError::HookTypeMismatch { hook, index }),
			None => Ok(None),
		}
	}

	/// Store the state for a hook called for the first time
	pub(crate) fn push_slot<S>(&self, slot: S)
	where
		S: 'static,
	{
		self.inner.slots.borrow_mut().push(Box::new(slot));
	}

	/// Queue an effect for the next commit
	pub(crate) fn queue_effect(&self, effect: EffectFn) {
		self.inner.pending.borrow_mut().push(effect);
	}
}

impl Default for Scope {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Scope")
			.field("id", &self.inner.id)
			.field("hooks", &self.hook_count())
			.field("pending_effects", &self.pending_effects())
			.field("rendering", &self.inner.rendering.get())
			.finish()
	}
}

/// Restores the runtime scope stack when a render ends, including on panic
struct RenderGuard<'a> {
	scope: &'a Scope,
}

impl Drop for RenderGuard<'_> {
	fn drop(&mut self) {
		let _ = try_with_runtime(|rt| rt.pop_scope());
		self.scope.inner.rendering.set(false);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_render_sets_current_scope() {
		let scope = Scope::new();
		let seen = scope
			.render(|| with_runtime(|rt| rt.current_scope().map(|s| s.id())))
			.unwrap();

		assert_eq!(seen, Some(scope.id()));
		assert!(with_runtime(|rt| rt.current_scope()).is_none());
		assert!(!scope.is_rendering());
	}

	#[test]
	#[serial]
	fn test_nested_render_restores_parent() {
		let parent = Scope::new();
		let child = Scope::new();

		let (inner, after) = parent
			.render(|| {
				let inner = child
					.render(|| with_runtime(|rt| rt.current_scope().map(|s| s.id())))
					.unwrap();
				let after = with_runtime(|rt| rt.current_scope().map(|s| s.id()));
				(inner, after)
			})
			.unwrap();

		assert_eq!(inner, Some(child.id()));
		assert_eq!(after, Some(parent.id()));
	}

	#[test]
	#[serial]
	fn test_reentrant_render_is_rejected() {
		let scope = Scope::new();
		let result = scope.render(|| scope.render(|| ())).unwrap();
		assert_eq!(result, Err(HookError::RenderInProgress));
	}

	#[test]
	#[serial]
	fn test_commit_inside_render_is_rejected() {
		let scope = Scope::new();
		let result = scope.render(|| scope.commit()).unwrap();
		assert_eq!(result, Err(HookError::RenderInProgress));
	}

	#[test]
	#[serial]
	fn test_teardown_inside_render_is_rejected() {
		let scope = Scope::new();
		let result = scope.render(|| scope.teardown()).unwrap();
		assert_eq!(result, Err(HookError::RenderInProgress));
	}

	#[test]
	#[serial]
	fn test_commit_runs_queued_effects_in_order() {
		let scope = Scope::new();
		let log = Rc::new(RefCell::new(Vec::new()));

		for n in 0..3 {
			let log = Rc::clone(&log);
			scope.queue_effect(Box::new(move || log.borrow_mut().push(n)));
		}
		assert_eq!(scope.pending_effects(), 3);

		assert_eq!(scope.commit(), Ok(3));
		assert_eq!(*log.borrow(), vec![0, 1, 2]);
		assert_eq!(scope.pending_effects(), 0);
		assert_eq!(scope.commit(), Ok(0));
	}

	#[test]
	#[serial]
	fn test_slot_type_mismatch() {
		let scope = Scope::new();
		scope.push_slot(Rc::new(RefCell::new(1_u32)));

		let same = scope.slot::<Rc<RefCell<u32>>>(0, "use_ref").unwrap();
		assert!(same.is_some());

		let other = scope.slot::<Rc<RefCell<String>>>(0, "use_ref");
		assert_eq!(
			other.unwrap_err(),
			HookError::HookTypeMismatch {
				hook: "use_ref",
				index: 0
			}
		);

		assert!(scope.slot::<Rc<RefCell<u32>>>(1, "use_ref").unwrap().is_none());
	}

	#[test]
	#[serial]
	fn test_teardown_clears_state() {
		let scope = Scope::new();
		scope.push_slot(0_u8);
		scope.queue_effect(Box::new(|| {}));

		scope.teardown().unwrap();

		assert_eq!(scope.hook_count(), 0);
		assert_eq!(scope.pending_effects(), 0);
	}

	#[test]
	#[serial]
	fn test_panicking_render_releases_scope() {
		let scope = Scope::new();
		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			let _ = scope.render::<_, ()>(|| panic!("render failed"));
		}));

		assert!(result.is_err());
		assert!(!scope.is_rendering());
		assert!(with_runtime(|rt| rt.current_scope()).is_none());
	}
}
