//! Ref hook: use_ref
//!
//! A mutable slot that survives re-renders without triggering them.

use core::cell::{self, RefCell};
use core::fmt;

extern crate alloc;
use alloc::rc::Rc;

use crate::error::HookError;
use crate::runtime::current_scope;

const HOOK: &str = "use_ref";

/// A mutable reference cell owned by a component scope
///
/// This is the equivalent of the object returned by React's `useRef`.
/// Every render of the same scope receives a handle to the same cell.
pub struct Ref<T: 'static> {
	inner: Rc<RefCell<T>>,
}

impl<T: 'static> Ref<T> {
	/// Create a standalone ref that is not attached to any scope
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(RefCell::new(value)),
		}
	}

	/// Borrow the current value
	///
	/// # Panics
	///
	/// Panics if the value is currently mutably borrowed.
	pub fn current(&self) -> cell::Ref<'_, T> {
		self.inner.borrow()
	}

	/// Mutably borrow the current value
	///
	/// # Panics
	///
	/// Panics if the value is currently borrowed.
	pub fn current_mut(&self) -> cell::RefMut<'_, T> {
		self.inner.borrow_mut()
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.borrow().clone()
	}

	/// Overwrite the current value
	pub fn set(&self, value: T) {
		*self.inner.borrow_mut() = value;
	}

	/// Overwrite the current value, returning the old one
	pub fn replace(&self, value: T) -> T {
		self.inner.replace(value)
	}

	/// Update the value in place
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.inner.borrow_mut());
	}

	/// Read the value through a closure
	pub fn with<F, R>(&self, f: F) -> R
	where
		F: FnOnce(&T) -> R,
	{
		f(&self.inner.borrow())
	}

	/// Whether two handles point at the same cell
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<T: 'static> Clone for Ref<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Ref<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.inner.try_borrow() {
			Ok(value) => f.debug_tuple("Ref").field(&*value).finish(),
			Err(_) => f.write_str("Ref(<borrowed>)"),
		}
	}
}

/// Returns a mutable ref that persists for the lifetime of the scope.
///
/// This is the React-like equivalent of `useRef`. `init` runs only on the
/// first render of the scope (or the first render after a teardown). Later
/// renders receive the same cell without calling `init`.
///
/// # Errors
///
/// * [`HookError::NoActiveScope`] - called outside [`Scope::render`](crate::Scope::render)
/// * [`HookError::HookTypeMismatch`] - a different hook or value type occupied this
///   position in an earlier render
///
/// # Example
///
/// ```ignore
/// use depwatch_reactive::{Scope, use_ref};
///
/// let scope = Scope::new();
/// for _ in 0..3 {
///     scope.cycle(|| {
///         let renders = use_ref(|| 0_u32)?;
///         renders.update(|n| *n += 1);
///         Ok::<_, HookError>(())
///     })??;
/// }
/// ```
pub fn use_ref<T, F>(init: F) -> Result<Ref<T>, HookError>
where
	T: 'static,
	F: FnOnce() -> T,
{
	let scope = current_scope(HOOK)?;
	let index = scope.next_hook_index();

	if let Some(existing) = scope.slot::<Ref<T>>(index, HOOK)? {
		return Ok(existing);
	}

	let created = Ref::new(init());
	scope.push_slot(created.clone());
	Ok(created)
}
