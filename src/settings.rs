use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpendError};
use crate::generator::{GeneratorConfig, DEFAULT_MAX_DAILY, DEFAULT_USERS, DEFAULT_YEAR};
use crate::models::SpendProfile;

pub const DEFAULT_OUTPUT: &str = "synthetic_credit_card_transactions.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: String,
    pub users: u32,
    pub year: i32,
    pub profile: SpendProfile,
    pub max_daily_transactions: u32,
    pub seed: Option<u64>,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            users: DEFAULT_USERS,
            year: DEFAULT_YEAR,
            profile: SpendProfile::Tiered,
            max_daily_transactions: DEFAULT_MAX_DAILY,
            seed: None,
            preview_rows: 5,
        }
    }
}

impl Settings {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            users: self.users,
            year: self.year,
            profile: self.profile,
            max_daily_transactions: self.max_daily_transactions,
            seed: self.seed,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendsim")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| SpendError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
