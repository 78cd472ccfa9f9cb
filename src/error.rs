//! Library-wide error types.

use thiserror::Error;

/// Failure attaching a peripheral to a [`crate::Bus`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum AttachError {
    /// The requested `[lo, hi]` range overlaps a range already attached.
    /// The peripheral is not attached and the bus is left unchanged.
    #[error("address range [{lo:#06x}, {hi:#06x}] overlaps an existing peripheral")]
    Overlap { lo: u16, hi: u16 },

    /// `lo > hi`, which cannot describe a non-empty closed interval.
    #[error("invalid range: lo ({lo:#06x}) > hi ({hi:#06x})")]
    InvalidRange { lo: u16, hi: u16 },
}
