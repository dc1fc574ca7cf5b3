use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("food-diary").unwrap();
    cmd.env_remove("FOOD_DIARY_HOME");
    cmd.env_remove("FOOD_DIARY_LOG");
    cmd
}

/// Command pointed at a diary directory
#[allow(dead_code)]
pub fn diary_at(dir: &Path) -> Command {
    let mut cmd = diary_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}

/// Parsed contents of the default slot
#[allow(dead_code)]
pub fn read_slot(dir: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(dir.join("diary.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}
