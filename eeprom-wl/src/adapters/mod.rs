//! Adapter layer - Concrete implementations connecting domain to infrastructure.
//!
//! This layer contains the orchestrator that drives the domain logic, and
//! the backends implementing the domain's [`MemoryRegion`](crate::domain::MemoryRegion) port.
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      WearLeveler / write / read  │  ◄── orchestrator
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ uses
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - slot locators                 │
//!     │  - MemoryRegion (port)           │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implemented by
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Backends                    │  ◄── This module
//!     │  - RamRegion                     │
//!     │  - EmbeddedStorageRegion         │
//!     │  - FileRegion                    │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`WearLeveler`**: Mode orchestrator owning one backend
//! - **`RamRegion`**: Stack-allocated erased EEPROM simulation
//! - **`EmbeddedStorageRegion`**: Adapts `embedded_storage::Storage` (requires `embedded-storage`)
//! - **`FileRegion`**: EEPROM image file on the host (requires `std`)

mod error;
mod ram_region;
mod wear_leveler;

#[cfg(feature = "embedded-storage")]
mod embedded_storage_region;

#[cfg(feature = "std")]
mod file_region;

pub use error::{AccessKind, DeviceError, OffsetOutOfRange, RamRegionError};
pub use ram_region::RamRegion;
pub use wear_leveler::{read, write, WearLeveler};

#[cfg(feature = "embedded-storage")]
pub use embedded_storage_region::EmbeddedStorageRegion;

#[cfg(feature = "std")]
pub use file_region::FileRegion;
