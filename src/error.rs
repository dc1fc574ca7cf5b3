//! Error types for food-diary

use thiserror::Error;

/// Main error type for food-diary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("No entry matches id: {0}")]
    EntryNotFound(String),

    #[error("Id prefix '{prefix}' matches {count} entries")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Unknown {kind}: {name}")]
    UnknownDescriptor {
        kind: &'static str,
        name: String,
        valid: Vec<String>,
    },

    #[error("Invalid slot key: '{0}'")]
    InvalidSlotKey(String),

    #[error("Cannot determine diary location: no home directory found")]
    StoreLocation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::EntryNotFound(_) => 2,
            DiaryError::AmbiguousId { .. } => 3,
            DiaryError::UnknownDescriptor { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::EntryNotFound(id) => {
                format!(
                    "No entry matches id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'food-diary list' to see entry ids\n\
                    • Ids may be shortened to any unique prefix",
                    id
                )
            }
            DiaryError::AmbiguousId { prefix, count } => {
                format!(
                    "Id prefix '{}' matches {} entries\n\n\
                    Type more characters of the id to pick one entry.",
                    prefix, count
                )
            }
            DiaryError::UnknownDescriptor { kind, name, valid } => {
                format!(
                    "Unknown {}: '{}'\n\n\
                    Valid values: {}\n\
                    Names are case-insensitive.",
                    kind,
                    name,
                    valid.join(", ")
                )
            }
            DiaryError::StoreLocation => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pass --dir <PATH> to choose a diary directory\n\
                    • Set FOOD_DIARY_HOME environment variable to your diary path",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
