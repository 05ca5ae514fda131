//! Domain-level errors.
//!
//! Storage failures arrive through the [`MemoryRegion`](crate::domain::MemoryRegion)
//! port's error type and are wrapped, never discarded.

use crate::domain::value_objects::SlotConfigError;
use core::fmt;

/// Errors returned by wear-leveled reads and writes.
#[derive(Debug)]
#[non_exhaustive]
pub enum WearLevelError<E> {
    /// The slot configuration cannot be driven safely.
    InvalidConfig(SlotConfigError),

    /// Caller buffer length does not match the configured payload length.
    PayloadLength {
        /// Configured payload length.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },

    /// Storage error from the underlying MemoryRegion implementation.
    Storage(E),
}

impl<E> From<SlotConfigError> for WearLevelError<E> {
    fn from(err: SlotConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl<E: fmt::Display> fmt::Display for WearLevelError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "Invalid slot configuration: {}", e),
            Self::PayloadLength { expected, actual } => write!(
                f,
                "Payload buffer is {} bytes but the region holds {}",
                actual, expected
            ),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for WearLevelError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for WearLevelError<E> {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::InvalidConfig(e) => defmt::write!(f, "InvalidConfig({})", e),
            Self::PayloadLength { expected, actual } => defmt::write!(
                f,
                "PayloadLength(expected={}, actual={})",
                expected,
                actual
            ),
            Self::Storage(e) => defmt::write!(f, "Storage({})", e),
        }
    }
}
