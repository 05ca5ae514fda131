//! Mode orchestrator - routes reads and writes according to the slot mode.
//!
//! [`WearLevelingMode::None`] passes payloads straight through to the base
//! address. [`WearLevelingMode::CounterRotation`] runs the locators, stamps
//! the next counter and writes the whole record in one call.
//!
//! The storage capability is always passed in explicitly: either per call
//! through [`write`]/[`read`], or once at construction through
//! [`WearLeveler::new`]. Several regions and backends can therefore coexist
//! without shared global state.

use crate::domain::{
    find_read_slot, find_write_slot, MemoryRegion, ReadSlot, Record, SlotConfig,
    WearLevelError, WearLevelingMode, WriteSlot,
};

/// Check a configuration and a caller buffer before touching the medium.
fn check<E>(config: &SlotConfig, len: usize) -> Result<(), WearLevelError<E>> {
    config.validate()?;

    if len != config.payload_length() {
        return Err(WearLevelError::PayloadLength {
            expected: config.payload_length(),
            actual: len,
        });
    }

    Ok(())
}

/// Write `payload` to the region described by `config`.
///
/// In counter-rotation mode this probes every slot counter up to the write
/// target, then writes `[counter][payload]` as one record.
///
/// # Errors
///
/// - [`WearLevelError::InvalidConfig`] if `config` fails validation
/// - [`WearLevelError::PayloadLength`] if `payload` is not exactly
///   `payload_length` bytes
/// - [`WearLevelError::Storage`] if probing or writing the medium fails
///
/// # Examples
///
/// ```
/// use eeprom_wl::adapters::{read, write, RamRegion};
/// use eeprom_wl::domain::SlotConfig;
///
/// let mut eeprom = RamRegion::<128>::new();
/// let config = SlotConfig::counter_rotation(0, 4, 8);
///
/// write(&mut eeprom, &config, b"boot").unwrap();
/// write(&mut eeprom, &config, b"run!").unwrap();
///
/// let mut buf = [0u8; 4];
/// read(&mut eeprom, &config, &mut buf).unwrap();
/// assert_eq!(&buf, b"run!");
/// ```
pub fn write<M: MemoryRegion + ?Sized>(
    region: &mut M,
    config: &SlotConfig,
    payload: &[u8],
) -> Result<(), WearLevelError<M::Error>> {
    check::<M::Error>(config, payload.len())?;

    match config.mode() {
        WearLevelingMode::None => region
            .write(config.base_address().value(), payload)
            .map_err(WearLevelError::Storage),
        WearLevelingMode::CounterRotation => {
            let slot = find_write_slot(region, config).map_err(WearLevelError::Storage)?;
            let record = Record::new(slot.stamp(), payload)?;

            debug!(
                "writing {} byte record to slot {} at {} with counter {}",
                record.len(),
                slot.index,
                slot.address.value(),
                record.counter()
            );

            region
                .write(slot.address.value(), record.as_bytes())
                .map_err(WearLevelError::Storage)
        }
    }
}

/// Read the current payload of the region described by `config` into `buf`.
///
/// # Errors
///
/// - [`WearLevelError::InvalidConfig`] if `config` fails validation
/// - [`WearLevelError::PayloadLength`] if `buf` is not exactly
///   `payload_length` bytes
/// - [`WearLevelError::Storage`] if probing or reading the medium fails
pub fn read<M: MemoryRegion + ?Sized>(
    region: &mut M,
    config: &SlotConfig,
    buf: &mut [u8],
) -> Result<(), WearLevelError<M::Error>> {
    check::<M::Error>(config, buf.len())?;

    let address = match config.mode() {
        WearLevelingMode::None => config.base_address(),
        WearLevelingMode::CounterRotation => {
            let slot = find_read_slot(region, config).map_err(WearLevelError::Storage)?;
            trace!("reading slot {} at {}", slot.index, slot.address.value());
            slot.address.payload()
        }
    };

    region
        .read(address.value(), buf)
        .map_err(WearLevelError::Storage)
}

/// Wear-leveled access to one storage backend.
///
/// Owns the backend so that callers do not have to thread it through every
/// call. The leveler itself keeps no slot state: every operation re-scans
/// the medium.
///
/// # Examples
///
/// ```
/// use eeprom_wl::adapters::{RamRegion, WearLeveler};
/// use eeprom_wl::domain::SlotConfig;
///
/// const SETTINGS: SlotConfig = SlotConfig::counter_rotation(0x00, 9, 10);
/// const CALIBRATION: SlotConfig = SlotConfig::pass_through(0x80, 4);
///
/// let mut leveler = WearLeveler::new(RamRegion::<256>::new());
/// leveler.write(&SETTINGS, b"ABCDEFGHI").unwrap();
/// leveler.write(&CALIBRATION, &[1, 2, 3, 4]).unwrap();
///
/// let mut settings = [0u8; 9];
/// leveler.read(&SETTINGS, &mut settings).unwrap();
/// assert_eq!(&settings, b"ABCDEFGHI");
/// ```
#[derive(Debug)]
pub struct WearLeveler<M> {
    region: M,
}

impl<M> WearLeveler<M> {
    /// Create a leveler driving the given backend.
    pub const fn new(region: M) -> Self {
        Self { region }
    }

    /// Get a reference to the underlying backend.
    pub fn region(&self) -> &M {
        &self.region
    }

    /// Get a mutable reference to the underlying backend.
    pub fn region_mut(&mut self) -> &mut M {
        &mut self.region
    }

    /// Consume the leveler and return the underlying backend.
    pub fn into_inner(self) -> M {
        self.region
    }
}

impl<M: MemoryRegion> WearLeveler<M> {
    /// Write `payload` to the region described by `config`.
    ///
    /// See [`write`] for details.
    pub fn write(
        &mut self,
        config: &SlotConfig,
        payload: &[u8],
    ) -> Result<(), WearLevelError<M::Error>> {
        write(&mut self.region, config, payload)
    }

    /// Read the current payload of the region described by `config`.
    ///
    /// See [`read`] for details.
    pub fn read(
        &mut self,
        config: &SlotConfig,
        buf: &mut [u8],
    ) -> Result<(), WearLevelError<M::Error>> {
        read(&mut self.region, config, buf)
    }

    /// Read the current payload into a freshly allocated vector.
    #[cfg(feature = "alloc")]
    pub fn read_to_vec(
        &mut self,
        config: &SlotConfig,
    ) -> Result<alloc::vec::Vec<u8>, WearLevelError<M::Error>> {
        let mut buf = alloc::vec![0u8; config.payload_length()];
        self.read(config, &mut buf)?;
        Ok(buf)
    }

    /// Report where the next write to a rotating region would land.
    ///
    /// Does not modify the medium.
    pub fn locate_write_slot(
        &mut self,
        config: &SlotConfig,
    ) -> Result<WriteSlot, WearLevelError<M::Error>> {
        config.validate()?;
        find_write_slot(&mut self.region, config).map_err(WearLevelError::Storage)
    }

    /// Report which slot a read from a rotating region would return.
    ///
    /// Does not modify the medium.
    pub fn locate_read_slot(
        &mut self,
        config: &SlotConfig,
    ) -> Result<ReadSlot, WearLevelError<M::Error>> {
        config.validate()?;
        find_read_slot(&mut self.region, config).map_err(WearLevelError::Storage)
    }
}
