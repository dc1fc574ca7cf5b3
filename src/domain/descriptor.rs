//! Feeling and reaction tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, emoji-labelled tag for a feeling or a physical reaction.
///
/// Two descriptors denote the same tag when their names are equal; the
/// emoji is presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub emoji: String,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Descriptor {
            name: name.into(),
            emoji: emoji.into(),
        }
    }

    /// Same tag as `other` (compared by name)
    pub fn same_tag(&self, other: &Descriptor) -> bool {
        self.name == other.name
    }

    /// Whether a tag with this name is present in `list`
    pub fn is_in(&self, list: &[Descriptor]) -> bool {
        list.iter().any(|item| item.same_tag(self))
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Stored emoji may carry stray whitespace
        write!(f, "{} {}", self.emoji.trim(), self.name)
    }
}

/// Drop descriptors whose name already appeared earlier in the list.
pub fn dedup_by_name(list: Vec<Descriptor>) -> Vec<Descriptor> {
    let mut unique: Vec<Descriptor> = Vec::with_capacity(list.len());
    for item in list {
        if !item.is_in(&unique) {
            unique.push(item);
        }
    }
    unique
}

/// Case-insensitive lookup by name
pub fn find_by_name<'a>(list: &'a [Descriptor], name: &str) -> Option<&'a Descriptor> {
    let wanted = name.trim();
    list.iter().find(|item| item.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tag_ignores_emoji() {
        let a = Descriptor::new("Bad", "😢");
        let b = Descriptor::new("Bad", " 😢");
        assert!(a.same_tag(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_in() {
        let list = vec![Descriptor::new("Gas", "💨"), Descriptor::new("Rash", "😳")];
        assert!(Descriptor::new("Rash", "?").is_in(&list));
        assert!(!Descriptor::new("Fever", "🥵").is_in(&list));
        assert!(!Descriptor::new("Gas", "💨").is_in(&[]));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let list = vec![
            Descriptor::new("Gas", "💨"),
            Descriptor::new("Rash", "😳"),
            Descriptor::new("Gas", "other"),
        ];
        let unique = dedup_by_name(list);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].emoji, "💨");
        assert_eq!(unique[1].name, "Rash");
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let list = vec![Descriptor::new("Heart Burn", "❤️‍🔥")];
        assert!(find_by_name(&list, "heart burn").is_some());
        assert!(find_by_name(&list, " HEART BURN ").is_some());
        assert!(find_by_name(&list, "heartburn").is_none());
    }

    #[test]
    fn test_display_trims_emoji() {
        assert_eq!(Descriptor::new("Bad", " 😢").to_string(), "😢 Bad");
    }
}
