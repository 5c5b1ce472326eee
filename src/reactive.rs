//! Hook runtime
//!
//! This module provides access to depwatch-reactive, the component scope and
//! hook primitives that `use_track_dependency_changes` is built on.

pub use depwatch_reactive::*;
