//! Errors raised while building a [`Tree`](crate::Tree).

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while creating nodes.
///
/// Duplicate cities, missing cities and empty trees are not errors. Those
/// operations simply report that nothing happened.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The owned copy of a city name could not be allocated.
    #[error("failed to allocate {len} bytes for a city name")]
    Allocation {
        /// Length in bytes of the city name that was being copied
        len: usize,
        /// The allocator's report
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    /// Check if this error is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. })
    }
}
