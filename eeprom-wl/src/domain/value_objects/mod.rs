//! Value objects for the domain layer.
//!
//! Immutable data types describing where and how records live on the
//! medium: addresses, ring geometry and the rotation counter.

mod counter;
mod slot_address;
mod slot_config;

pub use counter::{increment, is_erased, COUNTER_CYCLE, SENTINEL};
pub use slot_address::SlotAddress;
pub use slot_config::{
    SlotConfig, SlotConfigError, WearLevelingMode, ADDRESS_SPACE, MAX_PAYLOAD_LENGTH,
    MAX_RECORD_LENGTH,
};
