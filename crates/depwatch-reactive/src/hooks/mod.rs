//! React-like hooks
//!
//! Hooks attach state to the [`Scope`](crate::Scope) that is rendering.
//! They must be called unconditionally and in the same order on every render.

mod effect;
mod reference;

pub use effect::use_effect_with_deps;
pub use reference::{Ref, use_ref};
