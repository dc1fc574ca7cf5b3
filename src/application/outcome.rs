//! Result of a store mutation

use crate::domain::EntryId;
use std::fmt;

/// Why a mutation was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    EmptyFood,
    MissingFeeling,
    UnknownId(EntryId),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyFood => write!(f, "food must not be empty"),
            Rejection::MissingFeeling => write!(f, "a feeling is required"),
            Rejection::UnknownId(id) => write!(f, "no entry with id {}", id),
        }
    }
}

/// A mutation either applied (and persisted) or was rejected without
/// touching memory or the durable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let applied: Outcome<u8> = Outcome::Applied(7);
        assert!(applied.is_applied());
        assert!(applied.rejection().is_none());
        assert_eq!(applied.applied(), Some(7));

        let rejected: Outcome<u8> = Outcome::Rejected(Rejection::EmptyFood);
        assert!(!rejected.is_applied());
        assert_eq!(rejected.rejection(), Some(&Rejection::EmptyFood));
        assert_eq!(rejected.applied(), None);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::MissingFeeling.to_string(), "a feeling is required");
        assert_eq!(
            Rejection::UnknownId(EntryId::from("abc")).to_string(),
            "no entry with id abc"
        );
    }
}
