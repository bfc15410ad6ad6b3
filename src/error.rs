//! Error types.

use thiserror::Error;

/// Error returned by [`MaximaMap::value_at`](crate::MaximaMap::value_at)
/// when the queried argument has no defined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument value")]
pub struct InvalidArg;
