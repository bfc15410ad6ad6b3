//! Ordered function map with an incrementally maintained set of local maxima.
//!
//! [`MaximaMap`] stores a partially-defined function from a totally ordered
//! argument type `A` to a value type `V`, and keeps as a derived view the set
//! of points that are local maxima under argument order: points whose value
//! is not less than the value of each currently-defined adjacent neighbour.
//!
//! # Key properties
//!
//! - **Incremental**: an update re-evaluates at most the written point and
//!   its two argument-adjacent neighbours, never the whole domain
//! - **Fallible ordering**: value comparisons go through [`TryOrd`] and may
//!   fail; infallibly ordered types work unchanged via a blanket impl
//! - **All-or-nothing updates**: a failed comparison returns before the first
//!   mutation, leaving the points and the maxima view untouched
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! Values are never asked for equality: two values are *equivalent* when
//! neither orders below the other, and overwriting a value with an equivalent
//! one is a no-op.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod iter;
pub mod order;

mod error;
mod map;
mod maxima;
mod ops;
mod plan;
mod store;

#[cfg(test)]
mod tests;

pub use error::InvalidArg;
pub use map::MaximaMap;
pub use order::TryOrd;
