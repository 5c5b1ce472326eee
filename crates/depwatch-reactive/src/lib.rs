//! depwatch-reactive - Minimal Hook Runtime
//!
//! The host side of the dependency tracking hooks: a component instance
//! ([`Scope`]), hook slots that persist between renders, and passive effects
//! that run after a render commits.
//!
//! ## Architecture
//!
//! - [`runtime`]: Thread-local stack of rendering scopes
//! - [`scope`]: Component instance state, render/commit/teardown
//! - [`hooks`]: `use_ref` and `use_effect_with_deps`
//! - [`error`]: Hook misuse errors
//!
//! ## Example
//!
//! ```ignore
//! use depwatch_reactive::{HookError, Scope, use_effect_with_deps, use_ref};
//!
//! let scope = Scope::new();
//!
//! scope.cycle(|| -> Result<(), HookError> {
//!     let renders = use_ref(|| 0_u32)?;
//!     renders.update(|n| *n += 1);
//!     use_effect_with_deps(renders.get(), |n| tracing::debug!(renders = *n, "committed"))?;
//!     Ok(())
//! })??;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod hooks;
pub mod runtime;
pub mod scope;

pub use error::HookError;
pub use hooks::{Ref, use_effect_with_deps, use_ref};
pub use runtime::{Runtime, ScopeId, with_runtime};
pub use scope::Scope;
