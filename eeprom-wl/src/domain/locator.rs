//! Slot locators - pick the slot to write next and the slot to read from.
//!
//! Both locators make a single pass over the ring, probing only the one-byte
//! counter of each slot. Nothing is cached between calls, so a ring modified
//! behind our back (power loss, external tool) is always scanned afresh.
//!
//! # Ring states
//!
//! ```text
//! counters        write target        read source
//! FF FF FF FF     slot 0, from FF     slot 0 (base)
//! 00 01 FF FF     slot 2, from 01     slot 1
//! 00 01 02 03     slot 0, from 03     slot 0 (base)     <- full, unwrapped
//! 04 05 02 03     slot 2, from 05     slot 1
//! ```
//!
//! The full-and-unwrapped row is resolved by the end-of-scan fallback: the
//! write wraps to slot 0 continuing from the last counter read, and the read
//! reports slot 0 even though slot `n-1` holds the newest data. That read
//! answer is kept as is for compatibility with rings already in the field.
//!
//! Counters are compared as plain bytes, not modulo the 255-value cycle. Once
//! a ring's counters roll over from 254 to 0, the slot holding 0 looks older
//! than its neighbours to the write scan and is picked again on every write.
//! The read scan stops at that same slot and reports the one before it, so
//! from then on reads return the record written just before rollover rather
//! than the newest one.

use crate::domain::ports::MemoryRegion;
use crate::domain::value_objects::{increment, is_erased, SlotAddress, SlotConfig, SENTINEL};

/// Why a locator settled on a slot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChoice {
    /// An erased counter ended the scan.
    Erased,
    /// A counter lower than the highest seen so far ended the scan.
    Wrapped,
    /// The scan ran off the end of the ring.
    Fallback,
}

/// Counter byte of one slot, as observed by a scan.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotProbe {
    /// Position in the ring.
    pub index: u8,
    /// Address of the slot's counter byte.
    pub address: SlotAddress,
    /// Raw counter byte ([`SENTINEL`] when erased).
    pub counter: u8,
}

impl SlotProbe {
    /// Check whether the slot has never been written since erase.
    #[inline]
    pub const fn is_erased(&self) -> bool {
        is_erased(self.counter)
    }
}

/// Iterator over the counter bytes of a ring, slot 0 first.
///
/// Each step performs one single-byte read. The iterator ends after the
/// first storage error.
pub struct SlotScan<'a, M: ?Sized> {
    region: &'a mut M,
    config: &'a SlotConfig,
    next: u16,
}

impl<M: MemoryRegion + ?Sized> Iterator for SlotScan<'_, M> {
    type Item = Result<SlotProbe, M::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot_count = self.config.slot_count() as u16;
        if self.next >= slot_count {
            return None;
        }

        let index = self.next as u8;
        let address = self.config.slot_address(index);
        let mut counter = [SENTINEL];

        match self.region.read(address.value(), &mut counter) {
            Ok(()) => {
                self.next += 1;
                Some(Ok(SlotProbe {
                    index,
                    address,
                    counter: counter[0],
                }))
            }
            Err(e) => {
                self.next = slot_count;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.config.slot_count() as u16).saturating_sub(self.next) as usize;
        (0, Some(remaining))
    }
}

/// Scan the counter bytes of the ring described by `config`.
///
/// # Examples
///
/// ```
/// use eeprom_wl::adapters::RamRegion;
/// use eeprom_wl::domain::{scan, SlotConfig};
///
/// let mut region = RamRegion::<64>::new();
/// let config = SlotConfig::counter_rotation(0, 3, 4);
///
/// let erased = scan(&mut region, &config)
///     .filter_map(Result::ok)
///     .filter(|probe| probe.is_erased())
///     .count();
/// assert_eq!(erased, 4);
/// ```
pub fn scan<'a, M: MemoryRegion + ?Sized>(
    region: &'a mut M,
    config: &'a SlotConfig,
) -> SlotScan<'a, M> {
    SlotScan {
        region,
        config,
        next: 0,
    }
}

/// Where the next record goes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSlot {
    /// Position of the target slot in the ring.
    pub index: u8,
    /// Address of the target slot's counter byte.
    pub address: SlotAddress,
    /// Counter the rotation continues from. The stamped value is one past it.
    pub continue_from: u8,
    /// Which branch of the scan picked the slot.
    pub choice: SlotChoice,
}

impl WriteSlot {
    /// Counter value to stamp on the target slot.
    #[inline]
    pub const fn stamp(&self) -> u8 {
        increment(self.continue_from)
    }
}

/// Where the newest record lives.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSlot {
    /// Position of the slot in the ring.
    pub index: u8,
    /// Address of the slot's counter byte.
    pub address: SlotAddress,
    /// Which branch of the scan picked the slot.
    pub choice: SlotChoice,
}

/// Find the slot to overwrite next and the counter the rotation continues from.
///
/// Walks the ring tracking the highest counter seen and the counter of the
/// preceding slot:
///
/// - an erased slot is taken, continuing from its predecessor's counter
///   (or from [`SENTINEL`] for slot 0, which stamps `0`);
/// - a slot whose counter drops below the highest seen is the oldest entry
///   and is taken, continuing from the highest counter seen;
/// - if neither happens, slot 0 is taken, continuing from the last counter
///   read.
///
/// # Errors
///
/// Propagates the first storage error hit while probing counters.
pub fn find_write_slot<M: MemoryRegion + ?Sized>(
    region: &mut M,
    config: &SlotConfig,
) -> Result<WriteSlot, M::Error> {
    let mut highest_seen = 0u8;
    let mut previous_counter = SENTINEL;

    for probe in scan(region, config) {
        let probe = probe?;

        if probe.is_erased() {
            trace!(
                "write slot {} at {}: erased, continuing from {}",
                probe.index,
                probe.address.value(),
                previous_counter
            );
            return Ok(WriteSlot {
                index: probe.index,
                address: probe.address,
                continue_from: previous_counter,
                choice: SlotChoice::Erased,
            });
        }

        if probe.counter < highest_seen {
            trace!(
                "write slot {} at {}: counter {} below {}, reusing",
                probe.index,
                probe.address.value(),
                probe.counter,
                highest_seen
            );
            return Ok(WriteSlot {
                index: probe.index,
                address: probe.address,
                continue_from: highest_seen,
                choice: SlotChoice::Wrapped,
            });
        }

        highest_seen = probe.counter;
        previous_counter = probe.counter;
    }

    debug!(
        "write scan found no gap in {} slots, wrapping to slot 0 from {}",
        config.slot_count(),
        previous_counter
    );
    Ok(WriteSlot {
        index: 0,
        address: config.base_address(),
        continue_from: previous_counter,
        choice: SlotChoice::Fallback,
    })
}

/// Find the slot holding the most recently written record.
///
/// Walks the ring remembering the last slot whose counter did not drop.
/// The scan stops at the first erased slot or the first counter below the
/// highest seen, and reports the slot before it. A scan that runs off the end
/// reports slot 0.
///
/// # Errors
///
/// Propagates the first storage error hit while probing counters.
pub fn find_read_slot<M: MemoryRegion + ?Sized>(
    region: &mut M,
    config: &SlotConfig,
) -> Result<ReadSlot, M::Error> {
    let mut highest_seen = 0u8;
    let mut previous_index = 0u8;
    let mut previous_address = config.base_address();

    for probe in scan(region, config) {
        let probe = probe?;

        if probe.is_erased() || probe.counter < highest_seen {
            let choice = if probe.is_erased() {
                SlotChoice::Erased
            } else {
                SlotChoice::Wrapped
            };
            trace!(
                "read slot {} at {}: scan stopped at slot {}",
                previous_index,
                previous_address.value(),
                probe.index
            );
            return Ok(ReadSlot {
                index: previous_index,
                address: previous_address,
                choice,
            });
        }

        highest_seen = probe.counter;
        previous_index = probe.index;
        previous_address = probe.address;
    }

    debug!(
        "read scan found no gap in {} slots, reporting slot 0",
        config.slot_count()
    );
    Ok(ReadSlot {
        index: 0,
        address: config.base_address(),
        choice: SlotChoice::Fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RamRegion;

    const PAYLOAD_LENGTH: u8 = 9;
    const SLOTS: u8 = 10;

    fn config() -> SlotConfig {
        SlotConfig::counter_rotation(0, PAYLOAD_LENGTH, SLOTS)
    }

    /// Region whose slot counters are set to `counters`, remaining slots erased.
    fn region_with_counters(counters: &[u8]) -> RamRegion<128> {
        let mut region = RamRegion::new();
        let config = config();
        for (i, &c) in counters.iter().enumerate() {
            let addr = config.slot_address(i as u8).value();
            region.write(addr, &[c]).unwrap();
        }
        region
    }

    #[test]
    fn test_write_slot_on_erased_ring() {
        let mut region = region_with_counters(&[]);
        let slot = find_write_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 0);
        assert_eq!(slot.address.value(), 0);
        assert_eq!(slot.continue_from, SENTINEL);
        assert_eq!(slot.stamp(), 0);
        assert_eq!(slot.choice, SlotChoice::Erased);
    }

    #[test]
    fn test_write_slot_after_partial_fill() {
        let mut region = region_with_counters(&[0, 1, 2]);
        let slot = find_write_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 3);
        assert_eq!(slot.address.value(), 30);
        assert_eq!(slot.stamp(), 3);
    }

    #[test]
    fn test_write_slot_full_ring_falls_back_to_slot_zero() {
        let mut region = region_with_counters(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let slot = find_write_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 0);
        assert_eq!(slot.continue_from, 9);
        assert_eq!(slot.stamp(), 10);
        assert_eq!(slot.choice, SlotChoice::Fallback);
    }

    #[test]
    fn test_write_slot_after_wrap() {
        let mut region = region_with_counters(&[10, 11, 2, 3, 4, 5, 6, 7, 8, 9]);
        let slot = find_write_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 2);
        assert_eq!(slot.continue_from, 11);
        assert_eq!(slot.stamp(), 12);
        assert_eq!(slot.choice, SlotChoice::Wrapped);
    }

    #[test]
    fn test_write_slot_across_counter_rollover() {
        // 254 is the last counter before the cycle restarts at 0.
        let mut region = region_with_counters(&[0, 251, 252, 253, 254, 245, 246, 247, 248, 249]);
        let slot = find_write_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 5);
        assert_eq!(slot.continue_from, 254);
        assert_eq!(slot.stamp(), 0);
    }

    #[test]
    fn test_read_slot_on_erased_ring() {
        let mut region = region_with_counters(&[]);
        let slot = find_read_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 0);
        assert_eq!(slot.address.value(), 0);
        assert_eq!(slot.choice, SlotChoice::Erased);
    }

    #[test]
    fn test_read_slot_after_partial_fill() {
        let mut region = region_with_counters(&[0, 1, 2]);
        let slot = find_read_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 2);
        assert_eq!(slot.address.value(), 20);
    }

    #[test]
    fn test_read_slot_after_wrap() {
        let mut region = region_with_counters(&[10, 11, 2, 3, 4, 5, 6, 7, 8, 9]);
        let slot = find_read_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 1);
        assert_eq!(slot.address.value(), 10);
        assert_eq!(slot.choice, SlotChoice::Wrapped);
    }

    #[test]
    fn test_read_slot_full_unwrapped_ring_reports_base() {
        // Slot 9 holds the newest record here, yet the fallback reports slot 0.
        let mut region = region_with_counters(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let slot = find_read_slot(&mut region, &config()).unwrap();

        assert_eq!(slot.index, 0);
        assert_eq!(slot.address, config().base_address());
        assert_eq!(slot.choice, SlotChoice::Fallback);
    }

    #[test]
    fn test_read_slot_with_equal_counters_advances() {
        // Equal counters are not a drop, so the scan keeps walking.
        let mut region = region_with_counters(&[4, 4, 4]);
        let slot = find_read_slot(&mut region, &config()).unwrap();
        assert_eq!(slot.index, 2);
    }

    #[test]
    fn test_scan_yields_every_counter() {
        let mut region = region_with_counters(&[0, 1]);
        let config = config();
        let probes: Vec<_> = scan(&mut region, &config).map(Result::unwrap).collect();

        assert_eq!(probes.len(), SLOTS as usize);
        assert_eq!(probes[1].counter, 1);
        assert_eq!(probes[1].address.value(), 10);
        assert!(probes[2].is_erased());
    }

    #[test]
    fn test_scan_stops_after_error() {
        // Slot 3 starts past the end of a 25-byte device.
        let mut region = RamRegion::<25>::new();
        let config = SlotConfig::counter_rotation(0, 9, 5);
        let results: Vec<_> = scan(&mut region, &config).collect();

        assert_eq!(results.len(), 4);
        assert!(results[..3].iter().all(Result::is_ok));
        assert!(results[3].is_err());
    }

    #[test]
    fn test_locators_propagate_storage_error() {
        let mut region = RamRegion::<8>::new();
        let config = SlotConfig::counter_rotation(16, 3, 2);

        assert!(find_write_slot(&mut region, &config).is_err());
        assert!(find_read_slot(&mut region, &config).is_err());
    }
}
