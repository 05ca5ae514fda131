//! Adapter-level errors.

/// Errors from the in-memory [`RamRegion`](crate::adapters::RamRegion).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamRegionError {
    /// Access runs past the end of the region.
    OutOfBounds {
        /// First byte of the access.
        address: u16,
        /// Length of the access.
        len: usize,
        /// Capacity of the region.
        capacity: usize,
    },
}

impl core::fmt::Display for RamRegionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds {
                address,
                len,
                capacity,
            } => write!(
                f,
                "Access of {} bytes at 0x{:04x} exceeds capacity of {} bytes",
                len, address, capacity
            ),
        }
    }
}

impl core::error::Error for RamRegionError {}

/// Direction of a failed device access.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Reading from the device.
    Read,
    /// Writing to the device.
    Write,
}

impl core::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors from the `embedded-storage` adapter.
///
/// Keeps the device's own error alongside where the access was aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceError<E> {
    /// Access direction.
    pub kind: AccessKind,
    /// Device offset of the access (region offset already applied).
    pub offset: u32,
    /// Error reported by the device.
    pub source: E,
}

impl<E: core::fmt::Debug> core::fmt::Display for DeviceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Device {} at offset 0x{:x} failed: {:?}",
            self.kind, self.offset, self.source
        )
    }
}

impl<E: core::fmt::Debug> core::error::Error for DeviceError<E> {}

/// Region offset too large for the 16-bit region address space to fit after it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetOutOfRange {
    /// Requested device offset of region address 0.
    pub offset: u32,
    /// Largest accepted offset.
    pub max: u32,
}

impl core::fmt::Display for OffsetOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Region offset 0x{:x} exceeds maximum 0x{:x}",
            self.offset, self.max
        )
    }
}

impl core::error::Error for OffsetOutOfRange {}
