//! Domain layer - Slot selection logic with zero infrastructure dependencies.
//!
//! This is the core of the hexagonal architecture. The domain layer contains:
//! - **Value Objects**: `SlotAddress`, `SlotConfig`, rotation counter arithmetic
//! - **Records**: the stack-resident `[counter][payload]` buffer
//! - **Domain Services**: the write-slot and read-slot locators
//! - **Ports**: the `MemoryRegion` interface to the storage medium
//! - **Domain Errors**: `WearLevelError`
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Value Objects & Record    │  │
//!     │  │  - SlotConfig, counter     │  │
//!     │  └────────────────────────────┘  │
//!     │              ▲                   │
//!     │              │                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Locators                │  │
//!     │  │    - find_write_slot       │  │
//!     │  │    - find_read_slot        │  │
//!     │  └────────────────────────────┘  │
//!     │              │                   │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - MemoryRegion          │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - RamRegion                     │
//!     │  - EmbeddedStorageRegion         │
//!     │  - FileRegion                    │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use eeprom_wl::adapters::RamRegion;
//! use eeprom_wl::domain::{find_write_slot, SlotConfig};
//!
//! let mut region = RamRegion::<128>::new();
//! let config = SlotConfig::counter_rotation(0, 9, 10);
//!
//! let slot = find_write_slot(&mut region, &config).unwrap();
//! assert_eq!(slot.index, 0);
//! assert_eq!(slot.stamp(), 0);
//! ```

pub mod error;
pub mod ports;
pub mod value_objects;

mod locator;
mod record;

// Re-export commonly used types
pub use error::WearLevelError;
pub use locator::{
    find_read_slot, find_write_slot, scan, ReadSlot, SlotChoice, SlotProbe, SlotScan, WriteSlot,
};
pub use ports::MemoryRegion;
pub use record::Record;
pub use value_objects::{
    increment, is_erased, SlotAddress, SlotConfig, SlotConfigError, WearLevelingMode,
    ADDRESS_SPACE, COUNTER_CYCLE, MAX_PAYLOAD_LENGTH, MAX_RECORD_LENGTH, SENTINEL,
};
