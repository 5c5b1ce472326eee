//! Errors raised by the hook runtime.

/// Error type for hook misuse
///
/// Hooks only work while a [`Scope`](crate::Scope) is rendering, and each
/// call site must keep the same position across renders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
	/// A hook was called while no scope was rendering
	#[error("{hook} called outside of a component render")]
	NoActiveScope {
		/// Name of the hook
		hook: &'static str,
	},

	/// The hook slot at this position was created by a different hook
	#[error("{hook} at hook index {index} does not match the hook stored there by a previous render")]
	HookTypeMismatch {
		/// Name of the hook
		hook: &'static str,
		/// Position of the hook within the render
		index: usize,
	},

	/// The scope is already rendering
	#[error("scope is already rendering")]
	RenderInProgress,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_messages() {
		let err = HookError::NoActiveScope { hook: "use_ref" };
		assert_eq!(err.to_string(), "use_ref called outside of a component render");

		let err = HookError::HookTypeMismatch {
			hook: "use_effect_with_deps",
			index: 2,
		};
		assert!(err.to_string().contains("hook index 2"));
	}
}
