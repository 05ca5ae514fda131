//! In-memory EEPROM simulation (const generic sizing).

use crate::adapters::error::RamRegionError;
use crate::domain::{MemoryRegion, SENTINEL};

/// Fixed-size, stack-allocated byte store that behaves like an erased EEPROM.
///
/// Cells start at [`SENTINEL`] and keep a per-cell write count so wear
/// distribution can be inspected. Accesses past `N` bytes are rejected with
/// [`RamRegionError::OutOfBounds`] instead of panicking.
///
/// # Type Parameters
///
/// - `N`: Capacity in bytes
///
/// # Examples
///
/// ```
/// use eeprom_wl::adapters::RamRegion;
/// use eeprom_wl::domain::MemoryRegion;
///
/// let mut eeprom = RamRegion::<1024>::new();
/// eeprom.write(0x10, &[1, 2, 3]).unwrap();
///
/// let mut buf = [0u8; 4];
/// eeprom.read(0x10, &mut buf).unwrap();
/// assert_eq!(buf, [1, 2, 3, 0xFF]);
/// assert_eq!(eeprom.wear(0x10), 1);
/// ```
#[derive(Clone)]
pub struct RamRegion<const N: usize> {
    cells: [u8; N],
    wear: [u32; N],
}

impl<const N: usize> RamRegion<N> {
    /// Create an erased region.
    pub const fn new() -> Self {
        Self {
            cells: [SENTINEL; N],
            wear: [0; N],
        }
    }

    /// Capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Reset every cell to [`SENTINEL`]. Wear counts are kept.
    pub fn erase(&mut self) {
        self.cells = [SENTINEL; N];
    }

    /// Raw view of the whole region.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Raw mutable view, for staging arbitrary medium states.
    ///
    /// Writes through this view bypass wear accounting.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Number of times the cell at `address` has been written.
    ///
    /// Returns 0 for addresses past the end of the region.
    pub fn wear(&self, address: u16) -> u32 {
        self.wear.get(address as usize).copied().unwrap_or(0)
    }

    /// Highest write count of any cell in `range`.
    pub fn max_wear(&self, range: core::ops::Range<usize>) -> u32 {
        let end = range.end.min(N);
        let start = range.start.min(end);
        self.wear[start..end].iter().copied().max().unwrap_or(0)
    }

    fn span(address: u16, len: usize) -> Result<core::ops::Range<usize>, RamRegionError> {
        let start = address as usize;
        let end = start + len;
        if end > N {
            return Err(RamRegionError::OutOfBounds {
                address,
                len,
                capacity: N,
            });
        }
        Ok(start..end)
    }
}

impl<const N: usize> Default for RamRegion<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for RamRegion<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RamRegion").field("capacity", &N).finish()
    }
}

impl<const N: usize> MemoryRegion for RamRegion<N> {
    type Error = RamRegionError;

    fn read(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Self::Error> {
        let span = Self::span(address, buf.len())?;
        buf.copy_from_slice(&self.cells[span]);
        Ok(())
    }

    fn write(&mut self, address: u16, data: &[u8]) -> Result<(), Self::Error> {
        let span = Self::span(address, data.len())?;
        self.cells[span.clone()].copy_from_slice(data);
        for count in &mut self.wear[span] {
            *count = count.saturating_add(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_region_is_erased() {
        let region = RamRegion::<64>::new();
        assert_eq!(region.capacity(), 64);
        assert!(region.as_bytes().iter().all(|&b| b == SENTINEL));
    }

    #[test]
    fn test_write_then_read() {
        let mut region = RamRegion::<16>::new();
        region.write(0, b"ABCDEFGH\0").unwrap();

        let mut buf = [0u8; 9];
        region.read(0, &mut buf).unwrap();
        assert_eq!(&buf, b"ABCDEFGH\0");
        assert_eq!(region.as_bytes()[9], SENTINEL);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut region = RamRegion::<16>::new();

        assert_eq!(
            region.write(15, &[1, 2]),
            Err(RamRegionError::OutOfBounds {
                address: 15,
                len: 2,
                capacity: 16
            })
        );

        let mut buf = [0u8; 1];
        assert!(region.read(16, &mut buf).is_err());
        assert!(region.read(15, &mut buf).is_ok());
    }

    #[test]
    fn test_wear_accounting() {
        let mut region = RamRegion::<8>::new();
        region.write(2, &[0, 0]).unwrap();
        region.write(3, &[0]).unwrap();

        assert_eq!(region.wear(2), 1);
        assert_eq!(region.wear(3), 2);
        assert_eq!(region.wear(100), 0);
        assert_eq!(region.max_wear(0..8), 2);
        assert_eq!(region.max_wear(4..100), 0);
    }

    #[test]
    fn test_erase_keeps_wear() {
        let mut region = RamRegion::<4>::new();
        region.write(0, &[1, 2, 3, 4]).unwrap();
        region.erase();

        assert!(region.as_bytes().iter().all(|&b| b == SENTINEL));
        assert_eq!(region.wear(0), 1);
    }
}
