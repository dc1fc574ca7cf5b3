//! Domain layer - Diary entries and their tags

pub mod descriptor;
pub mod entry;

pub use descriptor::Descriptor;
pub use entry::{Conditions, DiaryEntry, EntryId};
