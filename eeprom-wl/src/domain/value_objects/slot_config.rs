//! Slot ring configuration value object.

use super::SlotAddress;

/// Largest payload a single record may carry, in bytes.
pub const MAX_PAYLOAD_LENGTH: usize = 150;

/// Largest on-medium record: one counter byte plus the payload.
pub const MAX_RECORD_LENGTH: usize = MAX_PAYLOAD_LENGTH + 1;

/// Size of the addressable EEPROM space (16-bit addresses).
pub const ADDRESS_SPACE: u32 = 1 << 16;

/// How a configured region is written.
///
/// The discriminants match the numeric mode codes used by existing
/// firmware configurations.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WearLevelingMode {
    /// No wear leveling: the payload lives at a fixed address.
    None = 0,
    /// Writes rotate across a ring of counter-stamped slots.
    CounterRotation = 1,
}

impl WearLevelingMode {
    /// Check whether this mode rotates writes across slots.
    #[inline]
    pub const fn is_rotating(&self) -> bool {
        matches!(self, WearLevelingMode::CounterRotation)
    }
}

impl TryFrom<u8> for WearLevelingMode {
    type Error = SlotConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WearLevelingMode::None),
            1 => Ok(WearLevelingMode::CounterRotation),
            other => Err(SlotConfigError::UnknownMode(other)),
        }
    }
}

impl From<WearLevelingMode> for u8 {
    fn from(mode: WearLevelingMode) -> Self {
        mode as u8
    }
}

/// Configuration of one wear-leveled region.
///
/// In [`WearLevelingMode::CounterRotation`] the region is a ring of
/// `slot_count` records laid out contiguously from `base_address`:
///
/// ```text
/// base_address
/// │
/// ▼
/// ┌───┬─────────────┬───┬─────────────┬─────┬───┬─────────────┐
/// │ c │ payload     │ c │ payload     │ ... │ c │ payload     │
/// └───┴─────────────┴───┴─────────────┴─────┴───┴─────────────┘
///  slot 0            slot 1                  slot n-1
/// ```
///
/// In [`WearLevelingMode::None`] the region is just `payload_length` bytes at
/// `base_address` and `slot_count` is ignored.
///
/// Non-overlap with other regions on the same device is the caller's
/// responsibility.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotConfig {
    base_address: u16,
    mode: WearLevelingMode,
    payload_length: u8,
    slot_count: u8,
}

impl SlotConfig {
    /// Create a configuration from raw parts.
    ///
    /// Values are not checked here; see [`SlotConfig::validate`].
    pub const fn new(
        base_address: u16,
        mode: WearLevelingMode,
        payload_length: u8,
        slot_count: u8,
    ) -> Self {
        Self {
            base_address,
            mode,
            payload_length,
            slot_count,
        }
    }

    /// Ring of `slot_count` counter-stamped slots starting at `base_address`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eeprom_wl::domain::SlotConfig;
    ///
    /// let config = SlotConfig::counter_rotation(0, 9, 10);
    /// assert_eq!(config.record_length(), 10);
    /// assert_eq!(config.region_len(), 100);
    /// ```
    pub const fn counter_rotation(base_address: u16, payload_length: u8, slot_count: u8) -> Self {
        Self::new(
            base_address,
            WearLevelingMode::CounterRotation,
            payload_length,
            slot_count,
        )
    }

    /// Fixed location without wear leveling.
    pub const fn pass_through(base_address: u16, payload_length: u8) -> Self {
        Self::new(base_address, WearLevelingMode::None, payload_length, 1)
    }

    /// Start address of the region.
    #[inline]
    pub const fn base_address(&self) -> SlotAddress {
        SlotAddress::new(self.base_address)
    }

    /// Wear leveling mode.
    #[inline]
    pub const fn mode(&self) -> WearLevelingMode {
        self.mode
    }

    /// Payload length in bytes.
    #[inline]
    pub const fn payload_length(&self) -> usize {
        self.payload_length as usize
    }

    /// Number of slots in the ring.
    #[inline]
    pub const fn slot_count(&self) -> u8 {
        self.slot_count
    }

    /// Size of one rotation slot: counter byte plus payload.
    #[inline]
    pub const fn record_length(&self) -> usize {
        self.payload_length as usize + 1
    }

    /// Number of bytes the region occupies on the medium.
    pub const fn region_len(&self) -> usize {
        match self.mode {
            WearLevelingMode::None => self.payload_length as usize,
            WearLevelingMode::CounterRotation => self.slot_count as usize * self.record_length(),
        }
    }

    /// One past the last byte of the region, in the 32-bit domain so that a
    /// region ending exactly at the top of the address space is representable.
    #[inline]
    pub const fn end_address(&self) -> u32 {
        self.base_address as u32 + self.region_len() as u32
    }

    /// Address of the slot at `index`.
    ///
    /// Only meaningful for `index < slot_count` on a validated configuration.
    #[inline]
    pub const fn slot_address(&self, index: u8) -> SlotAddress {
        let offset = index as u32 * self.record_length() as u32;
        SlotAddress::new((self.base_address as u32 + offset) as u16)
    }

    /// Check that the configuration describes a region the crate can drive.
    ///
    /// # Errors
    ///
    /// - [`SlotConfigError::PayloadTooLong`] if the payload exceeds
    ///   [`MAX_PAYLOAD_LENGTH`]
    /// - [`SlotConfigError::ZeroSlots`] for a rotating ring without slots
    /// - [`SlotConfigError::RegionOverflow`] if the region runs past the
    ///   16-bit address space
    pub const fn validate(&self) -> Result<(), SlotConfigError> {
        if self.payload_length as usize > MAX_PAYLOAD_LENGTH {
            return Err(SlotConfigError::PayloadTooLong {
                length: self.payload_length as usize,
                max: MAX_PAYLOAD_LENGTH,
            });
        }

        if self.mode.is_rotating() && self.slot_count == 0 {
            return Err(SlotConfigError::ZeroSlots);
        }

        let end = self.end_address();
        if end > ADDRESS_SPACE {
            return Err(SlotConfigError::RegionOverflow { end });
        }

        Ok(())
    }
}

/// Errors reported by [`SlotConfig::validate`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotConfigError {
    /// A rotating ring needs at least one slot.
    ZeroSlots,
    /// Payload does not fit a record.
    PayloadTooLong {
        /// Configured payload length.
        length: usize,
        /// Largest supported payload length.
        max: usize,
    },
    /// Region extends past the 16-bit address space.
    RegionOverflow {
        /// One past the last byte the region would occupy.
        end: u32,
    },
    /// Numeric mode code that names no [`WearLevelingMode`].
    UnknownMode(u8),
}

impl core::fmt::Display for SlotConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSlots => write!(f, "Slot count cannot be zero"),
            Self::PayloadTooLong { length, max } => {
                write!(f, "Payload length {} exceeds maximum of {}", length, max)
            }
            Self::RegionOverflow { end } => {
                write!(f, "Region end 0x{:x} is outside the 16-bit address space", end)
            }
            Self::UnknownMode(code) => write!(f, "Unknown wear leveling mode {}", code),
        }
    }
}

impl core::error::Error for SlotConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_rotation_geometry() {
        let config = SlotConfig::counter_rotation(0, 9, 10);
        assert_eq!(config.record_length(), 10);
        assert_eq!(config.region_len(), 100);
        assert_eq!(config.end_address(), 100);
        assert_eq!(config.slot_address(0).value(), 0);
        assert_eq!(config.slot_address(3).value(), 30);
        assert_eq!(config.slot_address(9).value(), 90);
    }

    #[test]
    fn test_slot_address_with_offset_base() {
        let config = SlotConfig::counter_rotation(0x100, 4, 8);
        assert_eq!(config.slot_address(1).value(), 0x105);
        assert_eq!(config.end_address(), 0x100 + 40);
    }

    #[test]
    fn test_pass_through_geometry() {
        let config = SlotConfig::pass_through(16, 9);
        assert_eq!(config.mode(), WearLevelingMode::None);
        assert_eq!(config.region_len(), 9);
        assert_eq!(config.end_address(), 25);
    }

    #[test]
    fn test_validate_accepts_limits() {
        assert!(SlotConfig::counter_rotation(0, 150, 1).validate().is_ok());
        assert!(SlotConfig::counter_rotation(0, 0, 255).validate().is_ok());

        // Ends exactly at the top of the address space.
        let config = SlotConfig::counter_rotation(0xFFF6, 9, 1);
        assert_eq!(config.end_address(), ADDRESS_SPACE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_payload() {
        let err = SlotConfig::counter_rotation(0, 151, 4).validate().unwrap_err();
        assert_eq!(err, SlotConfigError::PayloadTooLong { length: 151, max: 150 });
    }

    #[test]
    fn test_validate_rejects_zero_slots() {
        let err = SlotConfig::counter_rotation(0, 9, 0).validate().unwrap_err();
        assert_eq!(err, SlotConfigError::ZeroSlots);

        // Pass through ignores the slot count.
        assert!(SlotConfig::new(0, WearLevelingMode::None, 9, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let err = SlotConfig::counter_rotation(0xFFF0, 9, 2).validate().unwrap_err();
        assert_eq!(err, SlotConfigError::RegionOverflow { end: 0xFFF0 + 20 });
    }

    #[test]
    fn test_mode_codes() {
        assert_eq!(WearLevelingMode::try_from(0), Ok(WearLevelingMode::None));
        assert_eq!(WearLevelingMode::try_from(1), Ok(WearLevelingMode::CounterRotation));
        assert_eq!(
            WearLevelingMode::try_from(7),
            Err(SlotConfigError::UnknownMode(7))
        );
        assert_eq!(u8::from(WearLevelingMode::CounterRotation), 1);
    }

    #[test]
    fn test_error_display() {
        let msg = format!("{}", SlotConfigError::PayloadTooLong { length: 200, max: 150 });
        assert!(msg.contains("200"));
        assert!(msg.contains("150"));
    }
}
