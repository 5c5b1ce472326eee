//! Reference-identity dependencies.
//!
//! Dependencies normally compare with `PartialEq`. Wrapping a value in
//! [`ByRef`] compares by allocation instead, so a freshly allocated value is
//! reported as changed even when its contents are equal to the previous one.
//! This is the behavior to reach for when hunting reference churn.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A shared value that compares by pointer identity
///
/// # Example
///
/// ```
/// use depwatch_hooks::ByRef;
///
/// let a = ByRef::new(vec![1, 2]);
/// let b = ByRef::new(vec![1, 2]);
///
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
pub struct ByRef<T: ?Sized>(Rc<T>);

impl<T> ByRef<T> {
	/// Allocate `value` and wrap it
	pub fn new(value: T) -> Self {
		Self(Rc::new(value))
	}
}

impl<T: ?Sized> ByRef<T> {
	/// Borrow the shared allocation
	pub fn as_rc(&self) -> &Rc<T> {
		&self.0
	}
}

impl<T: ?Sized> Clone for ByRef<T> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<T: ?Sized> PartialEq for ByRef<T> {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl<T: ?Sized> Eq for ByRef<T> {}

impl<T: ?Sized> Deref for ByRef<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.0
	}
}

impl<T: ?Sized> From<Rc<T>> for ByRef<T> {
	fn from(rc: Rc<T>) -> Self {
		Self(rc)
	}
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ByRef<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}
