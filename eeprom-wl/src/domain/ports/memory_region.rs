//! MemoryRegion port - Secondary (driven) port for byte-level EEPROM I/O.
//!
//! This port defines what the wear-leveling logic needs from the storage
//! medium. Adapters implement this trait to connect the domain to real
//! devices (EEPROM drivers, `embedded-storage` implementations, image files).

/// Port for byte-addressable non-volatile storage.
///
/// This is a **secondary (driven) port** in hexagonal architecture terms.
/// The locators and the orchestrator depend on this abstraction; the
/// adapter layer provides concrete implementations.
///
/// ```text
/// ┌─────────────────────┐
/// │   Domain Layer      │
/// │  (slot locators)    │
/// └──────────┬──────────┘
///            │ depends on
///            ▼
/// ┌─────────────────────┐
/// │  MemoryRegion Port  │  ◄── This trait
/// └──────────┬──────────┘
///            │ implemented by
///            ▼
/// ┌─────────────────────┐
/// │  Adapter Layer      │
/// │ (RamRegion, ...)    │
/// └─────────────────────┘
/// ```
///
/// # Contract
///
/// - Cells that have not been written since erase read back as
///   [`SENTINEL`](crate::domain::SENTINEL).
/// - Both operations are synchronous and complete before returning.
/// - A single `write` call must land on the medium as a whole; torn writes
///   are not detected by this crate.
pub trait MemoryRegion {
    /// The error type for storage operations.
    type Error: core::fmt::Debug;

    /// Read `buf.len()` bytes starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails (e.g. bus error, out of bounds).
    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` starting at `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (e.g. write protected, out of bounds).
    fn write(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error>;
}

impl<M: MemoryRegion + ?Sized> MemoryRegion for &mut M {
    type Error = M::Error;

    #[inline]
    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }

    #[inline]
    fn write(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}
