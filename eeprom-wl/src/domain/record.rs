//! Stack-resident on-medium record.

use crate::domain::value_objects::{SlotConfigError, MAX_PAYLOAD_LENGTH, MAX_RECORD_LENGTH};

/// One rotation slot as written to the medium: `[counter][payload]`.
///
/// Backed by a fixed `MAX_RECORD_LENGTH` array so composing a record never
/// allocates.
#[derive(Clone)]
pub struct Record {
    bytes: [u8; MAX_RECORD_LENGTH],
    len: usize,
}

impl Record {
    /// Compose a record from a counter and a payload.
    ///
    /// # Errors
    ///
    /// Returns [`SlotConfigError::PayloadTooLong`] if `payload` is longer than
    /// [`MAX_PAYLOAD_LENGTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use eeprom_wl::domain::Record;
    ///
    /// let record = Record::new(3, b"abc").unwrap();
    /// assert_eq!(record.as_bytes(), &[3, b'a', b'b', b'c']);
    /// ```
    pub fn new(counter: u8, payload: &[u8]) -> Result<Self, SlotConfigError> {
        if payload.len() > MAX_PAYLOAD_LENGTH {
            return Err(SlotConfigError::PayloadTooLong {
                length: payload.len(),
                max: MAX_PAYLOAD_LENGTH,
            });
        }

        let mut bytes = [0u8; MAX_RECORD_LENGTH];
        bytes[0] = counter;
        bytes[1..=payload.len()].copy_from_slice(payload);

        Ok(Self {
            bytes,
            len: payload.len() + 1,
        })
    }

    /// The rotation counter byte.
    #[inline]
    pub fn counter(&self) -> u8 {
        self.bytes[0]
    }

    /// The payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..self.len]
    }

    /// The full record as written to the medium.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Record length in bytes (counter included).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// A record always holds at least its counter byte.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl core::fmt::Debug for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Record")
            .field("counter", &self.counter())
            .field("payload", &self.payload())
            .finish()
    }
}
