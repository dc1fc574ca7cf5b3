//! Application layer - The entry store and its mutation outcomes

pub mod entry_store;
pub mod outcome;

pub use entry_store::EntryStore;
pub use outcome::{Outcome, Rejection};
