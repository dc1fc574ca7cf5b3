//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod slot;

pub use config::Config;
pub use slot::{FileSlotStore, MemorySlotStore, SlotStore};
