//! Configuration management

use crate::domain::descriptor::{dedup_by_name, find_by_name};
use crate::domain::Descriptor;
use crate::error::{DiaryError, Result};
use crate::infrastructure::slot::validate_key;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_SLOT: &str = "diary";
pub const HOME_ENV: &str = "FOOD_DIARY_HOME";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the durable slot holding the entries
    pub slot: String,
    pub feelings: Vec<Descriptor>,
    pub reactions: Vec<Descriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slot: DEFAULT_SLOT.to_string(),
            feelings: default_feelings(),
            reactions: default_reactions(),
        }
    }
}

impl Config {
    /// Load config from config.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(DiaryError::Io(e)),
        };

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_key(&config.slot).map_err(|_| {
            DiaryError::Config(format!(
                "Invalid slot key '{}' in config.toml: use letters, digits, '-' or '_'",
                config.slot
            ))
        })?;
        config.feelings = dedup_by_name(config.feelings);
        config.reactions = dedup_by_name(config.reactions);
        Ok(config)
    }

    /// Look up a configured feeling by name (case-insensitive)
    pub fn feeling(&self, name: &str) -> Result<Descriptor> {
        lookup("feeling", &self.feelings, name)
    }

    /// Look up a configured reaction by name (case-insensitive)
    pub fn reaction(&self, name: &str) -> Result<Descriptor> {
        lookup("reaction", &self.reactions, name)
    }
}

fn lookup(kind: &'static str, list: &[Descriptor], name: &str) -> Result<Descriptor> {
    find_by_name(list, name)
        .cloned()
        .ok_or_else(|| DiaryError::UnknownDescriptor {
            kind,
            name: name.to_string(),
            valid: list.iter().map(|d| d.name.clone()).collect(),
        })
}

fn default_feelings() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Good", "😄"),
        Descriptor::new("Neutral", "😐"),
        Descriptor::new("Bad", "😢"),
    ]
}

fn default_reactions() -> Vec<Descriptor> {
    let mut reactions = vec![
        Descriptor::new("Bloated", "🫃"),
        Descriptor::new("Constipated", "😬"),
        Descriptor::new("Diarrhea", "💩"),
        Descriptor::new("Gas", "💨"),
        Descriptor::new("Belching", "😮‍💨"),
        Descriptor::new("Joint Pain", "🦵"),
        Descriptor::new("Nausea", "🤢"),
        Descriptor::new("Vomiting", "🤮"),
        Descriptor::new("Rash", "😳"),
        Descriptor::new("Chills", "🥶"),
        Descriptor::new("Fever", "🥵"),
        Descriptor::new("Heart Burn", "❤️‍🔥"),
    ];
    reactions.sort_by(|a, b| a.name.cmp(&b.name));
    reactions
}

/// Resolve the diary home directory.
/// Explicit path first, then FOOD_DIARY_HOME, then the platform data dir.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    ProjectDirs::from("", "", "food-diary")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(DiaryError::StoreLocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.slot, "diary");
        let feelings: Vec<&str> = config.feelings.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(feelings, vec!["Good", "Neutral", "Bad"]);
        assert_eq!(config.reactions.len(), 12);
        assert_eq!(config.reactions[0].name, "Belching");
        assert_eq!(config.reactions[11].name, "Vomiting");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.toml"),
            r#"
slot = "meals"

[[feelings]]
name = "Great"
emoji = "🤩"

[[reactions]]
name = "Hiccups"
emoji = "😵"
"#,
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(
            loaded,
            Config {
                slot: "meals".to_string(),
                feelings: vec![Descriptor::new("Great", "🤩")],
                reactions: vec![Descriptor::new("Hiccups", "😵")],
            }
        );
    }

    #[test]
    fn test_invalid_slot_key_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        for slot in ["../outside", "", "a b"] {
            fs::write(
                temp.path().join("config.toml"),
                format!("slot = \"{}\"\n", slot),
            )
            .unwrap();

            match Config::load_from_dir(temp.path()) {
                Err(DiaryError::Config(msg)) => {
                    assert!(msg.contains("Invalid slot key"));
                    assert!(msg.contains("config.toml"));
                }
                other => panic!("Expected Config error for {:?}, got {:?}", slot, other),
            }
        }
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), "slot = \"meals\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.slot, "meals");
        assert_eq!(loaded.feelings, default_feelings());
    }

    #[test]
    fn test_duplicate_catalog_names_collapse() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.toml"),
            r#"
[[feelings]]
name = "Good"
emoji = "😄"

[[feelings]]
name = "Good"
emoji = "🙂"
"#,
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.feelings, vec![Descriptor::new("Good", "😄")]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), "slot = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(DiaryError::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup() {
        let config = Config::default();
        assert_eq!(config.feeling("good").unwrap().name, "Good");
        assert_eq!(config.reaction("joint pain").unwrap().emoji, "🦵");

        match config.feeling("Great") {
            Err(DiaryError::UnknownDescriptor { kind, valid, .. }) => {
                assert_eq!(kind, "feeling");
                assert_eq!(valid.len(), 3);
            }
            other => panic!("Expected UnknownDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_home_prefers_explicit_path() {
        let home = resolve_home(Some(Path::new("/tmp/diary"))).unwrap();
        assert_eq!(home, PathBuf::from("/tmp/diary"));
    }
}
