//! Adapter for `embedded-storage` byte-addressable devices.
//!
//! Wraps any type implementing [`embedded_storage::Storage`] (EEPROM drivers,
//! emulated EEPROM on MCU flash, FRAM) and exposes it as a
//! [`MemoryRegion`].
//!
//! # Example
//!
//! ```ignore
//! use at24cx::At24Cx;
//! use eeprom_wl::adapters::{EmbeddedStorageRegion, WearLeveler};
//! use eeprom_wl::domain::SlotConfig;
//!
//! let eeprom = At24Cx::new(i2c, address_pins, delay);
//! let region = EmbeddedStorageRegion::new(eeprom);
//! let mut leveler = WearLeveler::new(region);
//!
//! leveler.write(&SlotConfig::counter_rotation(0, 16, 8), &settings)?;
//! ```

use crate::adapters::error::{AccessKind, DeviceError, OffsetOutOfRange};
use crate::domain::MemoryRegion;
use embedded_storage::{ReadStorage, Storage};

/// Adapter that wraps an `embedded-storage` device as a [`MemoryRegion`].
///
/// Region address 0 maps to device offset `offset`, so a wear-leveled area
/// can be placed anywhere on a device larger than 64 KiB. The offset never
/// exceeds [`MAX_OFFSET`](Self::MAX_OFFSET), so every region address maps to
/// a valid `u32` device offset.
pub struct EmbeddedStorageRegion<S> {
    storage: S,
    offset: u32,
}

impl<S> EmbeddedStorageRegion<S> {
    /// Largest offset that leaves room for the whole 16-bit region address space.
    pub const MAX_OFFSET: u32 = u32::MAX - u16::MAX as u32;

    /// Wrap a device, mapping region address 0 to device offset 0.
    pub fn new(storage: S) -> Self {
        Self { storage, offset: 0 }
    }

    /// Wrap a device, mapping region address 0 to device offset `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`OffsetOutOfRange`] if `offset` is above
    /// [`MAX_OFFSET`](Self::MAX_OFFSET).
    pub fn with_offset(storage: S, offset: u32) -> Result<Self, OffsetOutOfRange> {
        if offset > Self::MAX_OFFSET {
            return Err(OffsetOutOfRange {
                offset,
                max: Self::MAX_OFFSET,
            });
        }
        Ok(Self { storage, offset })
    }

    /// Device offset of region address 0.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Get a reference to the underlying device.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the adapter and return the underlying device.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Convert a region address to a device offset.
    #[inline]
    fn device_offset(&self, address: u16) -> u32 {
        self.offset + address as u32
    }
}

impl<S> MemoryRegion for EmbeddedStorageRegion<S>
where
    S: Storage,
    S::Error: core::fmt::Debug,
{
    type Error = DeviceError<<S as ReadStorage>::Error>;

    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        let offset = self.device_offset(address);
        self.storage.read(offset, buf).map_err(|source| DeviceError {
            kind: AccessKind::Read,
            offset,
            source,
        })
    }

    fn write(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error> {
        let offset = self.device_offset(address);
        self.storage.write(offset, data).map_err(|source| DeviceError {
            kind: AccessKind::Write,
            offset,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SENTINEL;

    /// Mock byte-addressable EEPROM for testing
    struct MockEeprom {
        data: [u8; 256],
    }

    impl MockEeprom {
        fn new() -> Self {
            Self {
                data: [SENTINEL; 256],
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct MockEepromError;

    impl ReadStorage for MockEeprom {
        type Error = MockEepromError;

        fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            let start = offset as usize;
            let end = start + bytes.len();
            if end > self.data.len() {
                return Err(MockEepromError);
            }
            bytes.copy_from_slice(&self.data[start..end]);
            Ok(())
        }

        fn capacity(&self) -> usize {
            self.data.len()
        }
    }

    impl Storage for MockEeprom {
        fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            let start = offset as usize;
            let end = start + bytes.len();
            if end > self.data.len() {
                return Err(MockEepromError);
            }
            self.data[start..end].copy_from_slice(bytes);
            Ok(())
        }
    }

    #[test]
    fn test_read_write_roundtrip() {
        let mut region = EmbeddedStorageRegion::new(MockEeprom::new());

        region.write(4, &[9, 8, 7]).unwrap();

        let mut buf = [0u8; 4];
        region.read(3, &mut buf).unwrap();
        assert_eq!(buf, [SENTINEL, 9, 8, 7]);
    }

    #[test]
    fn test_offset_is_applied() {
        let mut region = EmbeddedStorageRegion::with_offset(MockEeprom::new(), 0x80).unwrap();
        assert_eq!(region.offset(), 0x80);

        region.write(1, &[42]).unwrap();
        assert_eq!(region.storage().data[0x81], 42);
    }

    #[test]
    fn test_errors_carry_location() {
        let mut region = EmbeddedStorageRegion::with_offset(MockEeprom::new(), 0xF0).unwrap();

        let err = region.write(0x20, &[1]).unwrap_err();
        assert_eq!(err.kind, AccessKind::Write);
        assert_eq!(err.offset, 0x110);
        assert_eq!(err.source, MockEepromError);

        let mut buf = [0u8; 1];
        let err = region.read(0x20, &mut buf).unwrap_err();
        assert_eq!(err.kind, AccessKind::Read);
    }

    #[test]
    fn test_offset_must_leave_room_for_region() {
        let max = EmbeddedStorageRegion::<MockEeprom>::MAX_OFFSET;

        let region = EmbeddedStorageRegion::with_offset(MockEeprom::new(), max).unwrap();
        assert_eq!(region.device_offset(u16::MAX), u32::MAX);

        let err = EmbeddedStorageRegion::with_offset(MockEeprom::new(), max + 1)
            .err()
            .unwrap();
        assert_eq!(err, OffsetOutOfRange { offset: max + 1, max });

        assert!(EmbeddedStorageRegion::with_offset(MockEeprom::new(), u32::MAX).is_err());
    }
}
