//! Ports define the interfaces between the domain and the outside world.
//!
//! This module contains the **secondary (driven) port** the domain depends
//! on for access to the storage medium.

mod memory_region;

pub use memory_region::MemoryRegion;
