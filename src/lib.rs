//! food-diary - Terminal food diary
//!
//! Records what was eaten, how it felt and which reactions followed, in a
//! JSON slot on local disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
