//! Counter-rotation wear leveling for byte-addressable non-volatile memory.
//!
//! EEPROM cells survive a bounded number of write cycles. Instead of always
//! rewriting one fixed address, this crate rotates writes across a ring of
//! equally sized slots so each cell is rewritten roughly `1/slot_count` as
//! often.
//!
//! # Architecture
//!
//! The crate is organized into two layers:
//!
//! ## Domain Layer (`domain`)
//! Slot selection with no infrastructure dependencies:
//! - **Value Objects**: `SlotAddress`, `SlotConfig`, counter arithmetic
//! - **Services**: `find_write_slot`, `find_read_slot`
//! - **Ports**: `MemoryRegion` interface
//!
//! ## Adapter Layer (`adapters`)
//! - **`WearLeveler`** and the `read`/`write` functions: mode orchestration
//! - **`RamRegion`**: Erased EEPROM simulation (no_std compatible)
//! - **`EmbeddedStorageRegion`**: Any `embedded_storage::Storage` device
//! - **`FileRegion`**: EEPROM image file (requires `std`)
//!
//! # On-medium layout
//!
//! Each rotation slot is `[counter: 1 byte][payload: payload_length bytes]`,
//! slots laid out back to back from the base address. Erased counters read
//! `0xFF`; stamped counters cycle through `0..=254`. Pass-through regions
//! hold just the payload.
//!
//! # Quick Start
//!
//! ```
//! use eeprom_wl::{RamRegion, SlotConfig, WearLeveler};
//!
//! const CONFIG: SlotConfig = SlotConfig::counter_rotation(0, 9, 10);
//!
//! let mut leveler = WearLeveler::new(RamRegion::<128>::new());
//!
//! for _ in 0..12 {
//!     leveler.write(&CONFIG, b"ABCDEFGHI").unwrap();
//! }
//!
//! // The ring wrapped once: slots 0 and 1 were reused with counters 10 and 11.
//! assert_eq!(leveler.region().as_bytes()[0], 0x0a);
//! assert_eq!(leveler.region().as_bytes()[10], 0x0b);
//!
//! let mut buf = [0u8; 9];
//! leveler.read(&CONFIG, &mut buf).unwrap();
//! assert_eq!(&buf, b"ABCDEFGHI");
//! ```
//!
//! # Guarantees and limits
//!
//! - No slot state is cached; every call re-scans the ring.
//! - Storage errors are returned, never dropped.
//! - No checksums: a corrupted counter byte is taken at face value.
//! - Torn writes are not detected; the backend must write a record in one go.
//! - Callers sharing a region across threads must serialize access.
//!
//! # Features
//!
//! - `embedded-storage`: Enable `EmbeddedStorageRegion`
//! - `alloc`: Enable `WearLeveler::read_to_vec`
//! - `std`: Enable `FileRegion` (implies `alloc`)
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod adapters;
pub mod domain;

// Re-export commonly used types for convenience
pub use domain::{
    find_read_slot, find_write_slot, increment, MemoryRegion, ReadSlot, SlotAddress, SlotChoice,
    SlotConfig, SlotConfigError, WearLevelError, WearLevelingMode, WriteSlot,
    MAX_PAYLOAD_LENGTH, SENTINEL,
};

pub use adapters::{read, write, RamRegion, RamRegionError, WearLeveler};

#[cfg(feature = "embedded-storage")]
pub use adapters::{EmbeddedStorageRegion, OffsetOutOfRange};

#[cfg(feature = "std")]
pub use adapters::FileRegion;

#[cfg(feature = "embedded-storage")]
pub use embedded_storage;
