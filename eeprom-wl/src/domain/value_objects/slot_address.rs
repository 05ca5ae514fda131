//! Type-safe EEPROM byte address value object.

use core::fmt;

/// A byte address in the EEPROM address space.
///
/// Keeps slot addresses apart from slot indices, counters and payload
/// lengths, which are all small integers as well.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotAddress(u16);

impl SlotAddress {
    /// Create a new address.
    ///
    /// # Examples
    ///
    /// ```
    /// use eeprom_wl::domain::SlotAddress;
    ///
    /// let addr = SlotAddress::new(0x40);
    /// assert_eq!(addr.value(), 0x40);
    /// ```
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the underlying u16 value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Address of the payload inside a rotation slot (one past the counter byte).
    #[inline]
    pub const fn payload(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

impl From<u16> for SlotAddress {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<SlotAddress> for u16 {
    fn from(addr: SlotAddress) -> Self {
        addr.value()
    }
}
