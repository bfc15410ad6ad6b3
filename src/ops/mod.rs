//! The incremental update engine.
//!
//! Each mutation is planned against the post-mutation arrangement, computed
//! analytically from argument order before any container is touched. Every
//! fallible value comparison happens during planning; the commit is pure
//! container mutation and cannot fail.

pub mod classify;
pub mod erase;
pub mod set_value;
