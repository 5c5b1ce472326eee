//! Effect hook: use_effect_with_deps
//!
//! A passive effect keyed on an explicit dependency value, run after the
//! render that requested it is committed.

use core::cell::RefCell;

extern crate alloc;
use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::error::HookError;
use crate::runtime::current_scope;

const HOOK: &str = "use_effect_with_deps";

/// Dependencies recorded by the last render that scheduled the effect
struct EffectState<D> {
	deps: Option<Rc<D>>,
}

type EffectSlot<D> = Rc<RefCell<EffectState<D>>>;

/// Runs a side effect after commit whenever `deps` changes.
///
/// This is the React-like equivalent of `useEffect(f, deps)`. The effect is
/// queued on the first render of the scope and on every later render whose
/// `deps` compare unequal (`PartialEq`) to the deps of the last scheduled run.
/// Queued effects run in call order during [`Scope::commit`](crate::Scope::commit)
/// and receive the deps recorded by the latest render.
///
/// # Errors
///
/// * [`HookError::NoActiveScope`] - called outside a render
/// * [`HookError::HookTypeMismatch`] - hook order or deps type changed between renders
///
/// # Example
///
/// ```ignore
/// use depwatch_reactive::{Scope, use_effect_with_deps};
///
/// let scope = Scope::new();
/// let user_id = 7;
///
/// scope.cycle(|| {
///     use_effect_with_deps(user_id, |id| {
///         tracing::info!(user_id = *id, "loading profile");
///     })
/// })??;
/// ```
pub fn use_effect_with_deps<D, F>(deps: D, f: F) -> Result<(), HookError>
where
	D: PartialEq + 'static,
	F: FnOnce(&D) + 'static,
{
	let scope = current_scope(HOOK)?;
	let index = scope.next_hook_index();

	let state = match scope.slot::<EffectSlot<D>>(index, HOOK)? {
		Some(state) => state,
		None => {
			let state: EffectSlot<D> = Rc::new(RefCell::new(EffectState { deps: None }));
			scope.push_slot(Rc::clone(&state));
			state
		}
	};

	if state.borrow().deps.as_deref() == Some(&deps) {
		return Ok(());
	}

	state.borrow_mut().deps = Some(Rc::new(deps));
	scope.queue_effect(Box::new(move || {
		// No borrow may outlive this statement: `f` can render the scope again
		let deps = state.borrow().deps.clone();
		if let Some(deps) = deps {
			f(&deps);
		}
	}));
	Ok(())
}
