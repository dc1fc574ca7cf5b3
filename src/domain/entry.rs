//! Diary entries and their reaction sets

use crate::domain::descriptor::{dedup_by_name, Descriptor};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub(crate) fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters used when listing entries
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

/// Ordered reactions with no two sharing a name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Descriptor>>", into = "Vec<Descriptor>")]
pub struct Conditions(Vec<Descriptor>);

impl Conditions {
    pub fn new() -> Self {
        Conditions(Vec::new())
    }

    /// Add the reaction unless one with the same name is present.
    /// Returns whether it was added.
    pub fn insert(&mut self, reaction: Descriptor) -> bool {
        if reaction.is_in(&self.0) {
            return false;
        }
        self.0.push(reaction);
        true
    }

    /// Remove the reaction with this name if present, otherwise append it.
    pub fn toggle(&mut self, reaction: Descriptor) {
        if reaction.is_in(&self.0) {
            self.0.retain(|item| !item.same_tag(&reaction));
        } else {
            self.0.push(reaction);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Descriptor] {
        &self.0
    }

    /// Reactions ordered by name, for display
    pub fn sorted_by_name(&self) -> Vec<&Descriptor> {
        let mut sorted: Vec<&Descriptor> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

impl From<Vec<Descriptor>> for Conditions {
    fn from(list: Vec<Descriptor>) -> Self {
        Conditions(dedup_by_name(list))
    }
}

impl From<Option<Vec<Descriptor>>> for Conditions {
    fn from(list: Option<Vec<Descriptor>>) -> Self {
        list.map(Conditions::from).unwrap_or_default()
    }
}

impl From<Conditions> for Vec<Descriptor> {
    fn from(conditions: Conditions) -> Self {
        conditions.0
    }
}

impl FromIterator<Descriptor> for Conditions {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        Conditions::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Conditions {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One diary record linking a food to a feeling and reactions.
///
/// `id` and `date` are fixed at creation; only the entry store builds
/// entries or changes the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    id: EntryId,
    #[serde(with = "iso_millis")]
    date: DateTime<Utc>,
    #[serde(default)]
    food: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feeling: Option<Descriptor>,
    #[serde(default)]
    conditions: Conditions,
}

impl DiaryEntry {
    pub(crate) fn create(
        id: EntryId,
        food: String,
        feeling: Descriptor,
        conditions: Conditions,
    ) -> Self {
        DiaryEntry {
            id,
            // Stored timestamps carry millisecond precision
            date: Utc::now().trunc_subsecs(3),
            food,
            feeling: Some(feeling),
            conditions,
        }
    }

    pub(crate) fn revise(
        &mut self,
        food: String,
        feeling: Option<Descriptor>,
        conditions: Conditions,
    ) {
        self.food = food;
        self.feeling = feeling;
        self.conditions = conditions;
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn food(&self) -> &str {
        &self.food
    }

    pub fn feeling(&self) -> Option<&Descriptor> {
        self.feeling.as_ref()
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

/// ISO-8601 timestamps in the `2026-10-14T08:15:00.000Z` shape
mod iso_millis {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
