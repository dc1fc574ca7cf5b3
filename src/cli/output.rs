//! Output formatting utilities

use crate::domain::{Descriptor, DiaryEntry};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format entries (already in display order) for the terminal
pub fn format_entry_list<Tz>(entries: &[&DiaryEntry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry, tz));
        output.push('\n');
    }
    output
}

/// One entry: date, short id and food, then the feeling and reactions
pub fn format_entry<Tz>(entry: &DiaryEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let feeling = entry
        .feeling()
        .map(Descriptor::to_string)
        .unwrap_or_else(|| "-".to_string());

    let reactions = if entry.conditions().is_empty() {
        "No reaction".to_string()
    } else {
        entry
            .conditions()
            .sorted_by_name()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{}  {}  {}\n    made me feel: {}\n    and gave me:  {}\n",
        format_date(&entry.date().with_timezone(tz)),
        entry.id().short(),
        entry.food(),
        feeling,
        reactions
    )
}

/// Format a descriptor catalog, one per line
pub fn format_descriptor_list(list: &[Descriptor]) -> String {
    if list.is_empty() {
        return "None configured".to_string();
    }

    let mut output = String::new();
    for item in list {
        output.push_str(&format!("{}\n", item));
    }
    output
}

fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}
